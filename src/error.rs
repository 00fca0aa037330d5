use thiserror::Error;

/// Everything that can go wrong while fetching one JSON document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not the expected JSON.
    #[error("could not parse response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Status code for HTTP failures, `None` for the other categories.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Terminal destination for fetch failures. Reporting never recovers or retries.
pub trait ErrorSink: Sync {
    fn report(&self, error: &FetchError);
}

/// Default sink: logs the failure through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogErrorSink;

impl ErrorSink for LogErrorSink {
    fn report(&self, error: &FetchError) {
        log::error!("API error: {error}");
    }
}
