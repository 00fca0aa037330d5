//! The four fetch → transform → render pipelines and a runner that starts them together.
//!
//! Pipelines are independent: each performs one request and, only when it
//! succeeds, appends its result(s) to the sink. A failed fetch is reported to
//! the error sink and produces no output. Nothing is shared between pipelines
//! except the append-only sink.

pub mod language;
pub mod large;
pub mod membership;
pub mod tally;

use crate::api::{Client, Transport};
use crate::config::Settings;
use crate::error::ErrorSink;
use crate::models::{Endpoint, Field};
use crate::render::ResultSink;
use std::fmt;
use std::thread;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipeline {
    /// Count countries above / below the tally threshold.
    Tally,
    /// List countries above the large-country threshold.
    Large,
    /// Group one language's countries by subregion, then split by UN membership.
    Language,
    /// List UN members and non-members.
    Membership,
}

impl Pipeline {
    pub const ALL: [Pipeline; 4] = [
        Pipeline::Tally,
        Pipeline::Large,
        Pipeline::Language,
        Pipeline::Membership,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pipeline::Tally => "tally",
            Pipeline::Large => "large",
            Pipeline::Language => "language",
            Pipeline::Membership => "membership",
        }
    }

    /// Endpoint and field list this pipeline requests.
    pub fn request(&self, lang: &str) -> (Endpoint, &'static [Field]) {
        match self {
            Pipeline::Tally => (Endpoint::All, &tally::FIELDS),
            Pipeline::Large => (Endpoint::All, &large::FIELDS),
            Pipeline::Language => (Endpoint::Language(lang.to_string()), &language::FIELDS),
            Pipeline::Membership => (Endpoint::All, &membership::FIELDS),
        }
    }

    /// Run this pipeline once. Returns `false` when its fetch failed.
    pub fn run<X: Transport>(
        &self,
        client: &Client<X>,
        settings: &Settings,
        sink: &dyn ResultSink,
        errors: &dyn ErrorSink,
    ) -> bool {
        match self {
            Pipeline::Tally => tally::run(client, settings, sink, errors),
            Pipeline::Large => large::run(client, settings, sink, errors),
            Pipeline::Language => language::run(client, settings, sink, errors),
            Pipeline::Membership => membership::run(client, settings, sink, errors),
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which pipelines produced output and which did not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub completed: Vec<Pipeline>,
    pub failed: Vec<Pipeline>,
}

/// Run `pipelines` concurrently, one thread each, and wait for all of them.
///
/// Results reach `sink` in completion order. A pipeline that panics is
/// logged and counted as failed; the others are unaffected.
pub fn run_all<X: Transport>(
    client: &Client<X>,
    settings: &Settings,
    pipelines: &[Pipeline],
    sink: &dyn ResultSink,
    errors: &dyn ErrorSink,
) -> RunSummary {
    let outcomes: Vec<(Pipeline, bool)> = thread::scope(|s| {
        let handles: Vec<_> = pipelines
            .iter()
            .map(|&p| (p, s.spawn(move || p.run(client, settings, sink, errors))))
            .collect();
        handles
            .into_iter()
            .map(|(p, h)| {
                let ok = h.join().unwrap_or_else(|_| {
                    log::warn!("pipeline {p} panicked");
                    false
                });
                (p, ok)
            })
            .collect()
    });

    let mut summary = RunSummary::default();
    for (p, ok) in outcomes {
        if ok {
            summary.completed.push(p);
        } else {
            summary.failed.push(p);
        }
    }
    summary
}
