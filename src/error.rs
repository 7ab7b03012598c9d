use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Fatal failures of a sync run. Soft conditions (missing profile, missing
/// store file, nothing new) are logged and never surface as a `SyncError`.
#[derive(Debug)]
pub enum SyncError {
    Network {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    Parse {
        url: String,
        source: serde_json::Error,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SyncError {
    pub fn network(
        url: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Network {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn parse(url: &str, source: serde_json::Error) -> Self {
        Self::Parse {
            url: url.to_string(),
            source,
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Display for SyncError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { url, source } => {
                f.write_fmt(format_args!("Error fetching {url}: {source}"))
            }
            Self::Parse { url, source } => {
                f.write_fmt(format_args!("Error parsing JSON from {url}: {source}"))
            }
            Self::Io { path, source } => {
                f.write_fmt(format_args!("Error accessing {}: {source}", path.display()))
            }
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network { source, .. } => Some(source.as_ref()),
            Self::Parse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_includes_context() {
        let err = SyncError::io(
            Path::new("customize/Proxy-Domain.list"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "Error accessing customize/Proxy-Domain.list: denied"
        );
        assert!(err.source().is_some());

        let err = SyncError::parse(
            "https://example.com/raw/a.json",
            serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        );
        assert!(err
            .to_string()
            .starts_with("Error parsing JSON from https://example.com/raw/a.json: "));
    }
}
