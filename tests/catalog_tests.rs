use radar_rs::api::{ChartEngineConfig, FeatureCatalog};
use radar_rs::core::SCORE_MAX;

#[test]
fn standard_catalog_has_three_groups_and_seventeen_features() {
    let catalog = FeatureCatalog::standard();

    assert_eq!(
        catalog.group_names().collect::<Vec<_>>(),
        ["Schulfächer", "Selbstkompetenz", "Sozialkompetenz"]
    );
    assert_eq!(catalog.features().count(), 17);
    assert_eq!(catalog.group("Schulfächer").expect("group").len(), 6);
    assert_eq!(catalog.group("Selbstkompetenz").expect("group").len(), 6);
    assert_eq!(catalog.group("Sozialkompetenz").expect("group").len(), 5);
}

#[test]
fn feature_order_is_catalog_order() {
    let catalog = FeatureCatalog::standard();
    let features: Vec<_> = catalog.features().collect();

    assert_eq!(features[0], "Deutsch");
    assert_eq!(features[1], "Mathematik");
    assert_eq!(features[16], "Kommunikation");
    assert!(catalog.contains("Pünktlichkeit"));
    assert!(!catalog.contains("Latein"));
}

#[test]
fn default_state_selects_the_whole_group_at_maximum() {
    let catalog = FeatureCatalog::standard();
    let state = catalog.default_state("Sozialkompetenz").expect("state");

    assert_eq!(state.len(), 5);
    assert_eq!(state.axes()[0], "Angemessene Umgangsformen");
    assert!(state.scores().iter().all(|score| *score == SCORE_MAX));

    assert!(catalog.default_state("Unbekannt").is_err());
}

#[test]
fn custom_groups_reject_duplicates_and_empties() {
    let mut catalog = FeatureCatalog::new();
    catalog
        .add_group("Sprachen", vec!["Deutsch".to_owned(), "Französisch".to_owned()])
        .expect("add group");

    assert!(catalog.add_group("Sprachen", vec!["Englisch".to_owned()]).is_err());
    assert!(catalog.add_group("Leer", Vec::new()).is_err());
}

#[test]
fn catalog_round_trips_through_json() {
    let catalog = FeatureCatalog::standard();
    let json = serde_json::to_string(&catalog).expect("serialize");
    let parsed: FeatureCatalog = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, catalog);
}

#[test]
fn engine_config_round_trips_through_json() {
    let config = ChartEngineConfig::standard();
    let json = serde_json::to_string(&config).expect("serialize");
    let parsed: ChartEngineConfig = serde_json::from_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn engine_config_defaults_are_filled_in_when_missing() {
    let json = r#"{"viewport":{"width":800,"height":800},"max_radius_px":250.0}"#;
    let config: ChartEngineConfig = serde_json::from_str(json).expect("parse");

    assert_eq!(config.label_offset_score, 12.0);
    assert_eq!(config.style.ring_step, 0.5);
    config.validate().expect("valid config");
}
