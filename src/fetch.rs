use std::borrow::Cow;
use std::io::Read;
use std::time::Duration;

use serde_json::Value;

use crate::error::SyncError;

pub const DEFAULT_SOURCE: &str =
    "https://gist.github.com/cloud-native-yang/1d4db297fd0146b850f51e33143a4fa5";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const RAW_URL_PREFIX: &str = "https://gist.githubusercontent.com/cloud-native-yang/";
const RAW_URL_SUFFIX: &str = "/raw/ZeroOmega.json";

/// Anything that can hand back the remote configuration document.
pub trait ConfigSource {
    fn fetch(&self) -> Result<Value, SyncError>;
}

pub struct GistSource {
    pub locator: String,
    pub timeout: Duration,
}

impl GistSource {
    pub fn new(locator: impl Into<String>, timeout: Duration) -> Self {
        Self {
            locator: locator.into(),
            timeout,
        }
    }
}

impl ConfigSource for GistSource {
    fn fetch(&self) -> Result<Value, SyncError> {
        fetch_config(&resolve_raw_url(&self.locator), self.timeout)
    }
}

/// Turns a gist page URL into its raw-content address. URLs that already
/// point at raw content are returned unchanged.
pub fn resolve_raw_url(locator: &str) -> Cow<str> {
    if locator.contains("/raw/") {
        return Cow::Borrowed(locator);
    }

    let id = locator
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    Cow::Owned(format!("{RAW_URL_PREFIX}{id}{RAW_URL_SUFFIX}"))
}

pub fn fetch_config(url: &str, timeout: Duration) -> Result<Value, SyncError> {
    log::info!("Fetching content from: {url}");

    let response = ureq::get(url)
        .timeout(timeout)
        .call()
        .map_err(|e| SyncError::network(url, e))?;

    parse_config(url, response.into_reader())
}

/// Parses the body as it arrives. Bytes that aren't valid UTF-8 JSON are a
/// parse error; a broken read of the body is a network error.
pub fn parse_config(url: &str, body: impl Read) -> Result<Value, SyncError> {
    serde_json::from_reader(body).map_err(|e| {
        if e.is_io() {
            SyncError::network(url, e)
        } else {
            SyncError::parse(url, e)
        }
    })
}
