//! Population tally: how many countries are above / below a threshold.

use crate::api::{Client, Transport};
use crate::collect::count_by;
use crate::config::Settings;
use crate::error::ErrorSink;
use crate::format::describe_count;
use crate::models::{Country, Endpoint, Field};
use crate::render::{Fragment, ResultSink};

pub const FIELDS: [Field; 2] = [Field::Cca2, Field::Population];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Class {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationTally {
    pub above: usize,
    pub below: usize,
    pub total: usize,
}

/// Split by `population > threshold`; equal or unknown counts as below.
pub fn tally_population(countries: &[Country], threshold: u64) -> PopulationTally {
    let tally = count_by(countries, |c| {
        if c.population_above(threshold) {
            Class::Above
        } else {
            Class::Below
        }
    });
    PopulationTally {
        above: tally.get(&Class::Above),
        below: tally.get(&Class::Below),
        total: countries.len(),
    }
}

pub fn summary_text(t: &PopulationTally, threshold: u64) -> String {
    format!(
        "Found {} countries with a population above {}, and {} countries with less from a total of {} countries.",
        t.above,
        describe_count(threshold),
        t.below,
        t.total
    )
}

pub fn run<X: Transport>(
    client: &Client<X>,
    settings: &Settings,
    sink: &dyn ResultSink,
    errors: &dyn ErrorSink,
) -> bool {
    let url = client.url(&Endpoint::All, &FIELDS);
    let threshold = settings.tally_threshold;
    client
        .fetch_json(
            &url,
            |countries: &mut Vec<Country>| {
                let t = tally_population(countries, threshold);
                log::debug!("tally: {} above, {} below", t.above, t.below);
                sink.add_result(Fragment::Markup(summary_text(&t, threshold)));
            },
            Some(errors),
        )
        .is_some()
}
