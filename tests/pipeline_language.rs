mod common;

use common::{BASE, CountingErrors, FakeTransport};
use countries_rs::pipelines::language::{
    NO_SUBREGION, group_by_subregion, partition_by_membership, render_membership,
    render_regions, sort_by_name,
};
use countries_rs::{Client, Country, Element, Fragment, Pipeline, ResultBox, Settings};

fn spanish(name: &str, subregion: Option<&str>, un_member: bool) -> Country {
    let c = Country::named(name).with_population(1).with_un_member(un_member);
    match subregion {
        Some(s) => c.with_subregion(s),
        None => c,
    }
}

fn names(list: &[&Country]) -> Vec<String> {
    list.iter().map(|c| c.common_name().to_string()).collect()
}

#[test]
fn groups_keep_first_seen_order() {
    let countries = vec![
        spanish("Argentina", Some("South America"), true),
        spanish("Bolivia", Some("South America"), true),
        spanish("Cuba", Some("Caribbean"), true),
    ];
    let groups = group_by_subregion(&countries);
    assert_eq!(groups.len(), 2);
    let keys: Vec<_> = groups.keys().cloned().collect();
    assert_eq!(
        keys,
        vec![Some("South America".to_string()), Some("Caribbean".to_string())]
    );
    assert_eq!(
        names(groups.get(&Some("South America".into())).unwrap()),
        vec!["Argentina", "Bolivia"]
    );
}

#[test]
fn missing_subregion_forms_its_own_group() {
    let countries = vec![
        spanish("Western Sahara", None, false),
        spanish("Spain", Some("Southern Europe"), true),
        spanish("Somewhere", None, false),
    ];
    let groups = group_by_subregion(&countries);
    assert_eq!(groups.len(), 2);
    assert_eq!(names(groups.get(&None).unwrap()), vec!["Western Sahara", "Somewhere"]);

    let Fragment::Element(Element::Block { children }) = render_regions("Spanish", &groups) else {
        panic!("expected a block");
    };
    assert_eq!(children[0], Element::heading(2, "Spanish-speaking countries by region"));
    assert_eq!(
        children[1],
        Element::block(vec![
            Element::heading(3, NO_SUBREGION),
            Element::list(["Western Sahara", "Somewhere"]),
        ])
    );
}

#[test]
fn partition_splits_three_and_two_preserving_order() {
    let countries: Vec<Country> = [true, false, true, true, false]
        .iter()
        .enumerate()
        .map(|(i, &m)| spanish(&format!("C{i}"), Some("X"), m))
        .collect();
    let (members, non_members) = partition_by_membership(&countries);
    assert_eq!(names(&members), vec!["C0", "C2", "C3"]);
    assert_eq!(names(&non_members), vec!["C1", "C4"]);
}

#[test]
fn sort_is_locale_aware() {
    let mut countries = vec![
        spanish("Perú", Some("South America"), true),
        spanish("Panamá", Some("Central America"), true),
        spanish("Paraguay", Some("South America"), true),
        spanish("El Salvador", Some("Central America"), true),
        spanish("Ecuador", Some("South America"), true),
    ];
    sort_by_name(&mut countries);
    let got: Vec<_> = countries.iter().map(Country::common_name).collect();
    assert_eq!(got, vec!["Ecuador", "El Salvador", "Panamá", "Paraguay", "Perú"]);
}

#[test]
fn membership_view_has_two_headed_lists() {
    let countries = vec![spanish("Chile", Some("South America"), true), spanish("Puerto Rico", Some("Caribbean"), false)];
    let (m, n) = partition_by_membership(&countries);
    assert_eq!(
        render_membership("Spanish", &m, &n),
        Fragment::Element(Element::block(vec![
            Element::heading(2, "Spanish-speaking UN members"),
            Element::list(["Chile"]),
            Element::heading(2, "Spanish-speaking countries not UN members"),
            Element::list(["Puerto Rico"]),
        ]))
    );
}

#[test]
fn pipeline_sorts_before_grouping_and_appends_two_results() {
    let body = vec![
        spanish("Uruguay", Some("South America"), true),
        spanish("Cuba", Some("Caribbean"), true),
        spanish("Argentina", Some("South America"), true),
        spanish("Puerto Rico", Some("Caribbean"), false),
    ];
    let client = Client::with_transport(BASE, FakeTransport::json(&body));
    let results = ResultBox::new();
    let errors = CountingErrors::default();
    let settings = Settings {
        language: "Spanish".into(),
        ..Settings::default()
    };

    assert!(Pipeline::Language.run(&client, &settings, &results, &errors));
    assert_eq!(
        client.transport().requests(),
        vec![format!("{BASE}/lang/Spanish?fields=name,population,subregion,unMember")]
    );

    let fragments = results.into_fragments();
    assert_eq!(fragments.len(), 2);
    // After sorting, Argentina comes first, so South America is the first bucket.
    assert_eq!(
        fragments[0],
        Fragment::Element(Element::block(vec![
            Element::heading(2, "Spanish-speaking countries by region"),
            Element::block(vec![
                Element::heading(3, "South America"),
                Element::list(["Argentina", "Uruguay"]),
            ]),
            Element::block(vec![
                Element::heading(3, "Caribbean"),
                Element::list(["Cuba", "Puerto Rico"]),
            ]),
        ]))
    );
    assert_eq!(
        fragments[1],
        Fragment::Element(Element::block(vec![
            Element::heading(2, "Spanish-speaking UN members"),
            Element::list(["Argentina", "Cuba", "Uruguay"]),
            Element::heading(2, "Spanish-speaking countries not UN members"),
            Element::list(["Puerto Rico"]),
        ]))
    );
}
