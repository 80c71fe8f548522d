use crate::lookup::metadata::{self, WordMetadata};

const BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Dictionary lookup capability. Implementations degrade to empty metadata
/// on any failure; the drill must never abort because the network did.
pub trait WordLookup {
    fn fetch(&self, word: &str) -> WordMetadata;
}

/// Blocking client for api.dictionaryapi.dev. A slow lookup stalls the UI
/// (single-threaded by design), so requests carry a hard timeout.
pub struct DictApiClient {
    base_url: String,
}

impl DictApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
        }
    }
}

impl Default for DictApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WordLookup for DictApiClient {
    fn fetch(&self, word: &str) -> WordMetadata {
        let url = format!("{}/{}", self.base_url, word);
        fetch_body(&url)
            .and_then(|body| metadata::parse_body(word, &body))
            .unwrap_or_else(|| WordMetadata::empty(word))
    }
}

#[cfg(feature = "network")]
fn fetch_body(url: &str) -> Option<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .ok()?;
    let response = client.get(url).send().ok()?;
    if response.status().is_success() {
        response.text().ok()
    } else {
        None
    }
}

#[cfg(not(feature = "network"))]
fn fetch_body(_url: &str) -> Option<String> {
    None
}
