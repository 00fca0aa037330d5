//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use countries_rs::{Client, Country, Endpoint, Field, Pipeline, ResultBox, Settings, run_all};
use countries_rs::LogErrorSink;

#[test]
fn fetch_all_codes_and_population() {
    let cli = Client::default();
    let url = cli.url(&Endpoint::All, &[Field::Cca2, Field::Population]);
    let countries: Vec<Country> = cli.try_fetch_json(&url).unwrap();
    assert!(countries.len() > 200);
    assert!(countries.iter().all(|c| c.cca2.as_deref().is_some_and(|s| s.len() == 2)));
}

#[test]
fn fetch_spanish_speaking() {
    let cli = Client::default();
    let url = cli.url(
        &Endpoint::Language("Spanish".into()),
        &[Field::Name, Field::Subregion, Field::UnMember],
    );
    let countries: Vec<Country> = cli.try_fetch_json(&url).unwrap();
    assert!(countries.iter().any(|c| c.common_name() == "Spain"));
}

#[test]
fn all_pipelines_complete() {
    let settings = Settings::default();
    let cli = Client::new(&settings).unwrap();
    let results = ResultBox::new();
    let summary = run_all(&cli, &settings, &Pipeline::ALL, &results, &LogErrorSink);
    assert!(summary.failed.is_empty(), "{summary:?}");
    // the language pipeline appends two results
    assert_eq!(results.len(), 5);
}
