//! countries_rs
//!
//! A small Rust library for fetching public country data from the
//! [REST Countries](https://restcountries.com) API and rendering grouped,
//! filtered, and sorted summaries of it. Pairs with the `countries` CLI.
//!
//! ### Features
//! - One-shot JSON fetch helper with an explicit error taxonomy and pluggable error sinks
//! - Generic collection helpers (count-by, group-by, partition) with first-seen key order
//! - Four independent pipelines (population tally, large countries, language view, UN membership)
//! - Output to an in-memory result box, an HTML page, JSON, or streaming plain text
//!
//! ### Example
//! ```no_run
//! use countries_rs::{Client, LogErrorSink, Pipeline, ResultBox, Settings};
//!
//! let settings = Settings::default();
//! let client = Client::new(&settings)?;
//! let results = ResultBox::new();
//! let summary = countries_rs::run_all(&client, &settings, &Pipeline::ALL, &results, &LogErrorSink);
//! println!("{} pipelines completed", summary.completed.len());
//! countries_rs::storage::save_html(&results.fragments(), "Countries", "countries.html")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod collation;
pub mod collect;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod pipelines;
pub mod render;
pub mod storage;

pub use api::{Client, HttpTransport, RawResponse, Transport};
pub use config::Settings;
pub use error::{ErrorSink, FetchError, LogErrorSink};
pub use models::{Country, CountryName, Endpoint, Field};
pub use pipelines::{Pipeline, RunSummary, run_all};
pub use render::{Element, Fragment, ResultBox, ResultSink, TextSink};
