//! UN members and non-members, each listed alphabetically.

use crate::api::{Client, Transport};
use crate::collation::locale_cmp;
use crate::config::Settings;
use crate::error::ErrorSink;
use crate::models::{Country, Endpoint, Field};
use crate::render::{Fragment, ResultSink, html_escape};

pub const FIELDS: [Field; 2] = [Field::Name, Field::UnMember];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Membership<'a> {
    pub members: Vec<&'a Country>,
    pub non_members: Vec<&'a Country>,
    pub total: usize,
}

/// One pass decides membership; each list is then sorted by name on its own,
/// so encounter order never leaks into display order.
pub fn classify(countries: &[Country]) -> Membership<'_> {
    let mut out = Membership {
        total: countries.len(),
        ..Membership::default()
    };
    for country in countries {
        if country.is_un_member() {
            out.members.push(country);
        } else {
            out.non_members.push(country);
        }
    }
    out.members
        .sort_by(|a, b| locale_cmp(a.common_name(), b.common_name()));
    out.non_members
        .sort_by(|a, b| locale_cmp(a.common_name(), b.common_name()));
    out
}

fn joined(countries: &[&Country]) -> String {
    countries
        .iter()
        .map(|c| html_escape(c.common_name()))
        .collect::<Vec<_>>()
        .join("<br>")
}

pub fn render(m: &Membership<'_>) -> Fragment {
    let mut res = format!(
        "<h2>{} countries out of {} are UN members:</h2><div>{}</div>",
        m.members.len(),
        m.total,
        joined(&m.members)
    );
    res.push_str(&format!(
        "<h2>{} Non-members:</h2><div>{}</div>",
        m.non_members.len(),
        joined(&m.non_members)
    ));
    Fragment::Markup(res)
}

pub fn run<X: Transport>(
    client: &Client<X>,
    _settings: &Settings,
    sink: &dyn ResultSink,
    errors: &dyn ErrorSink,
) -> bool {
    let url = client.url(&Endpoint::All, &FIELDS);
    client
        .fetch_json(
            &url,
            |countries: &mut Vec<Country>| {
                let m = classify(countries);
                log::debug!("membership: {} members, {} non-members", m.members.len(), m.non_members.len());
                sink.add_result(render(&m));
            },
            Some(errors),
        )
        .is_some()
}
