use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_LANGUAGE: &str = "Spanish";
/// Population split used by the tally pipeline.
pub const DEFAULT_TALLY_THRESHOLD: u64 = 10_000_000;
/// Minimum population (exclusive) for the large-countries pipeline.
pub const DEFAULT_LARGE_THRESHOLD: u64 = 5_000_000;

/// Run settings shared by every pipeline. The CLI maps its flags onto this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    /// Language used by the language pipeline (`/lang/{language}`).
    pub language: String,
    pub tally_threshold: u64,
    pub large_threshold: u64,
    /// Total request timeout. `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            language: DEFAULT_LANGUAGE.into(),
            tally_threshold: DEFAULT_TALLY_THRESHOLD,
            large_threshold: DEFAULT_LARGE_THRESHOLD,
            timeout: None,
        }
    }
}
