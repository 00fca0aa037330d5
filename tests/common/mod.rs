//! Test doubles shared by the integration tests.
#![allow(dead_code)]

use countries_rs::{Country, ErrorSink, FetchError, RawResponse, Transport};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const BASE: &str = "http://countries.test/v3.1";

/// Answers every request with the same status and body, and records the URLs asked for.
pub struct FakeTransport {
    pub status: u16,
    pub status_text: String,
    pub body: String,
    pub requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::with_status(200, "OK", body)
    }

    pub fn json(countries: &[Country]) -> Self {
        Self::ok(serde_json::to_string(countries).unwrap())
    }

    pub fn with_status(status: u16, status_text: &str, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        Ok(RawResponse {
            status: self.status,
            status_text: self.status_text.clone(),
            body: self.body.as_bytes().to_vec(),
        })
    }
}

/// Routes requests by URL substring; unmatched URLs get a 404.
pub struct RoutedTransport {
    pub routes: Vec<(&'static str, u16, String)>,
}

impl Transport for RoutedTransport {
    fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        let (status, body) = self
            .routes
            .iter()
            .find(|(needle, _, _)| url.contains(needle))
            .map(|(_, s, b)| (*s, b.clone()))
            .unwrap_or((404, String::new()));
        Ok(RawResponse {
            status,
            status_text: if status == 200 { "OK".into() } else { "Not Found".into() },
            body: body.into_bytes(),
        })
    }
}

#[derive(Default)]
pub struct CountingErrors {
    count: AtomicUsize,
    pub messages: Mutex<Vec<String>>,
}

impl CountingErrors {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl ErrorSink for CountingErrors {
    fn report(&self, error: &FetchError) {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.messages.lock().unwrap().push(error.to_string());
    }
}

pub fn country(name: &str, population: u64) -> Country {
    Country::named(name).with_population(population)
}
