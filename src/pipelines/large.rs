//! Countries above a population threshold, names in default sort order.

use crate::api::{Client, Transport};
use crate::collation::sort_default;
use crate::config::Settings;
use crate::error::ErrorSink;
use crate::format::describe_count;
use crate::models::{Country, Endpoint, Field};
use crate::render::{Fragment, ResultSink, html_escape};

pub const FIELDS: [Field; 2] = [Field::Name, Field::Population];

/// Names of countries with `population > threshold`, sorted by code unit.
pub fn names_above(countries: &[Country], threshold: u64) -> Vec<String> {
    let mut names: Vec<String> = countries
        .iter()
        .filter(|c| c.population_above(threshold))
        .map(|c| c.common_name().to_string())
        .collect();
    sort_default(&mut names);
    names
}

pub fn render(names: &[String], threshold: u64) -> Fragment {
    let body = names
        .iter()
        .map(|n| html_escape(n))
        .collect::<Vec<_>>()
        .join("<br>");
    Fragment::Markup(format!(
        "<h2>{} countries with a population larger than {}:</h2><div>{body}</div>",
        names.len(),
        describe_count(threshold)
    ))
}

pub fn run<X: Transport>(
    client: &Client<X>,
    settings: &Settings,
    sink: &dyn ResultSink,
    errors: &dyn ErrorSink,
) -> bool {
    let url = client.url(&Endpoint::All, &FIELDS);
    let threshold = settings.large_threshold;
    client
        .fetch_json(
            &url,
            |countries: &mut Vec<Country>| {
                let names = names_above(countries, threshold);
                log::debug!("large: {} of {} retained", names.len(), countries.len());
                sink.add_result(render(&names, threshold));
            },
            Some(errors),
        )
        .is_some()
}
