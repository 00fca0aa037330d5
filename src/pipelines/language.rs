//! Countries speaking one language, grouped by subregion and split by UN membership.

use crate::api::{Client, Transport};
use crate::collation::locale_cmp;
use crate::collect::{Groups, group_by, partition};
use crate::config::Settings;
use crate::error::ErrorSink;
use crate::models::{Country, Endpoint, Field};
use crate::render::{Element, Fragment, ResultSink};

pub const FIELDS: [Field; 4] = [
    Field::Name,
    Field::Population,
    Field::Subregion,
    Field::UnMember,
];

/// Heading used for the bucket of records without a subregion.
pub const NO_SUBREGION: &str = "No subregion";

/// Sort in place by common name, locale-aware.
pub fn sort_by_name(countries: &mut [Country]) {
    countries.sort_by(|a, b| locale_cmp(a.common_name(), b.common_name()));
}

/// Bucket by subregion. Buckets appear in first-seen order; missing subregions share one bucket.
pub fn group_by_subregion(countries: &[Country]) -> Groups<Option<String>, &Country> {
    group_by(countries, |c| c.subregion.clone())
}

/// `(members, non_members)`, each in input order.
pub fn partition_by_membership(countries: &[Country]) -> (Vec<&Country>, Vec<&Country>) {
    partition(countries, |c| c.is_un_member())
}

fn names(countries: &[&Country]) -> Vec<String> {
    countries
        .iter()
        .map(|c| c.common_name().to_string())
        .collect()
}

pub fn render_regions(language: &str, groups: &Groups<Option<String>, &Country>) -> Fragment {
    let mut children = vec![Element::heading(
        2,
        format!("{language}-speaking countries by region"),
    )];
    for (region, members) in groups.iter() {
        children.push(Element::block(vec![
            Element::heading(3, region.as_deref().unwrap_or(NO_SUBREGION)),
            Element::list(names(members)),
        ]));
    }
    Element::block(children).into()
}

pub fn render_membership(language: &str, members: &[&Country], non_members: &[&Country]) -> Fragment {
    Element::block(vec![
        Element::heading(2, format!("{language}-speaking UN members")),
        Element::list(names(members)),
        Element::heading(2, format!("{language}-speaking countries not UN members")),
        Element::list(names(non_members)),
    ])
    .into()
}

pub fn run<X: Transport>(
    client: &Client<X>,
    settings: &Settings,
    sink: &dyn ResultSink,
    errors: &dyn ErrorSink,
) -> bool {
    let language = settings.language.as_str();
    let url = client.url(&Endpoint::Language(language.to_string()), &FIELDS);
    client
        .fetch_json(
            &url,
            |countries: &mut Vec<Country>| {
                sort_by_name(countries);

                let groups = group_by_subregion(countries);
                log::debug!("language: {} countries in {} subregions", countries.len(), groups.len());
                let regions = render_regions(language, &groups);

                let (members, non_members) = partition_by_membership(countries);
                let membership = render_membership(language, &members, &non_members);
                // both views go in as one batch so they stay adjacent
                sink.add_results(vec![regions, membership]);
            },
            Some(errors),
        )
        .is_some()
}
