//! Blocking client for the **REST Countries API (v3.1)**.
//!
//! Every call performs exactly one GET request and parses the body as JSON.
//! There is no pagination, no retry, and no caching: a failure is reported once
//! and the caller decides what to do with it.
//!
//! ### Notes
//! - `/all` must be queried with a `fields` list; [`Client::url`] always adds one.
//! - The language in `/lang/{language}` is percent-encoded as a path segment.
//! - The HTTP layer sits behind the [`Transport`] trait so tests can answer
//!   requests without a network.
//!
//! Typical usage:
//! ```no_run
//! # use countries_rs::{Client, Country, Endpoint, Field};
//! let client = Client::default();
//! let url = client.url(&Endpoint::All, &[Field::Cca2, Field::Population]);
//! let countries: Vec<Country> = client.try_fetch_json(&url)?;
//! # Ok::<(), countries_rs::FetchError>(())
//! ```

use crate::config::Settings;
use crate::error::{ErrorSink, FetchError, LogErrorSink};
use crate::models::{Endpoint, Field};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Status line and body of one HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues a single GET request. Implementations must be shareable across the
/// pipeline threads.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<RawResponse, FetchError>;
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let http = HttpClient::builder()
            .timeout(timeout) // `None` overrides the blocking client's 30s default
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("countries_rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        let response = self.http.get(url).send()?;
        let status = response.status();
        let body = response.bytes()?;
        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body: body.to_vec(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Client<X = HttpTransport> {
    pub base_url: String,
    transport: X,
}

impl Default for Client {
    fn default() -> Self {
        let transport = HttpTransport::new(None).expect("reqwest client build");
        Self {
            base_url: crate::config::DEFAULT_BASE_URL.into(),
            transport,
        }
    }
}

impl Client {
    /// HTTP client configured from `settings` (base URL and timeout).
    pub fn new(settings: &Settings) -> Result<Self, FetchError> {
        Ok(Self {
            base_url: settings.base_url.clone(),
            transport: HttpTransport::new(settings.timeout)?,
        })
    }
}

// Allow -, _, . unescaped in the language segment
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc_segment(segment: &str) -> String {
    percent_encoding::utf8_percent_encode(segment.trim(), SAFE).to_string()
}

/// Build the request URL for `endpoint` under `base_url`, restricted to `fields`.
///
/// ```
/// # use countries_rs::api::request_url;
/// # use countries_rs::{Endpoint, Field};
/// assert_eq!(
///     request_url(
///         "https://restcountries.com/v3.1",
///         &Endpoint::Language("Spanish".into()),
///         &[Field::Name, Field::UnMember],
///     ),
///     "https://restcountries.com/v3.1/lang/Spanish?fields=name,unMember",
/// );
/// ```
pub fn request_url(base_url: &str, endpoint: &Endpoint, fields: &[Field]) -> String {
    let base = base_url.trim_end_matches('/');
    let path = match endpoint {
        Endpoint::All => "all".to_string(),
        Endpoint::Language(language) => format!("lang/{}", enc_segment(language)),
    };
    let fields = fields
        .iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(",");
    format!("{base}/{path}?fields={fields}")
}

impl<X: Transport> Client<X> {
    /// Client that sends its requests through `transport`.
    pub fn with_transport(base_url: impl Into<String>, transport: X) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn transport(&self) -> &X {
        &self.transport
    }

    /// Build the request URL for `endpoint` on this client's base URL.
    pub fn url(&self, endpoint: &Endpoint, fields: &[Field]) -> String {
        request_url(&self.base_url, endpoint, fields)
    }

    /// Fetch `url` once and decode the body as `T`.
    ///
    /// ### Errors
    /// - [`FetchError::Network`] when no response arrives
    /// - [`FetchError::Http`] for a non-2xx status (code and status text kept)
    /// - [`FetchError::Parse`] when the body is not the expected JSON
    pub fn try_fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        log::info!("GET {url}");
        let response = self.transport.get(url)?;
        if !response.is_success() {
            return Err(FetchError::Http {
                status: response.status,
                status_text: response.status_text,
            });
        }
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Callback form of [`Client::try_fetch_json`].
    ///
    /// On success `on_success` sees the decoded value (and may reorder it) before
    /// it is returned. On failure the error goes to `on_failure`, or to
    /// [`LogErrorSink`] when none is given, and `None` is returned. The error is
    /// never propagated past this call.
    pub fn fetch_json<T, F>(
        &self,
        url: &str,
        on_success: F,
        on_failure: Option<&dyn ErrorSink>,
    ) -> Option<T>
    where
        T: DeserializeOwned,
        F: FnOnce(&mut T),
    {
        match self.try_fetch_json::<T>(url) {
            Ok(mut value) => {
                on_success(&mut value);
                Some(value)
            }
            Err(err) => {
                let sink: &dyn ErrorSink = on_failure.unwrap_or(&LogErrorSink);
                sink.report(&err);
                None
            }
        }
    }
}
