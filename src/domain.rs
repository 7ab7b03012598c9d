use derive_more::{Deref, Display};

pub const WILDCARD_PREFIX: &str = "*.";
pub const STORE_LINE_PREFIX: &str = "DOMAIN-SUFFIX,";

/// A domain that matches itself and all of its subdomains.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, Display)]
pub struct DomainSuffix(String);

impl DomainSuffix {
    /// Strips the `*.` prefix from a wildcard pattern. Anything after the
    /// prefix is taken as is.
    pub fn from_wildcard(pattern: &str) -> Option<Self> {
        pattern
            .strip_prefix(WILDCARD_PREFIX)
            .map(|suffix| Self(suffix.to_string()))
    }

    /// Parses a `DOMAIN-SUFFIX,<suffix>` store line. Only the first comma
    /// separates the suffix, so a suffix holding a comma comes back whole.
    pub fn from_store_line(line: &str) -> Option<Self> {
        line.trim()
            .strip_prefix(STORE_LINE_PREFIX)
            .map(|suffix| Self(suffix.to_string()))
    }

    /// Whether the suffix survives a write and re-read of the list: no line
    /// terminators and no surrounding whitespace, which the reader trims.
    pub fn reads_back(&self) -> bool {
        !self.0.contains(['\n', '\r']) && self.0.trim() == self.0
    }

    pub fn to_store_line(&self) -> String {
        format!("{STORE_LINE_PREFIX}{}", self.0)
    }
}
