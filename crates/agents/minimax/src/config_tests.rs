use super::*;

#[test]
fn defaults_are_valid() {
    let config = SearchConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.search_depth, 3);
    assert!(config.iterative);
    assert_eq!(config.method, SearchMethod::Minimax);
    assert_eq!(config.timeout_ms, 10.0);
}

#[test]
fn parses_a_full_toml_document() {
    let config = SearchConfig::from_toml_str(
        r#"
        search_depth = 5
        strategy = "mobility-diff"
        iterative = false
        method = "alphabeta"
        timeout_ms = 25.0
        "#,
    )
    .expect("valid config");
    assert_eq!(config.search_depth, 5);
    assert_eq!(config.strategy, Strategy::MobilityDiff);
    assert!(!config.iterative);
    assert_eq!(config.method, SearchMethod::Alphabeta);
    assert_eq!(config.timeout_ms, 25.0);
}

#[test]
fn partial_toml_falls_back_to_defaults() {
    let config = SearchConfig::from_toml_str("method = \"alphabeta\"").expect("valid config");
    assert_eq!(config.method, SearchMethod::Alphabeta);
    assert_eq!(config.search_depth, 3);
}

#[test]
fn rejects_zero_depth() {
    let err = SearchConfig::from_toml_str("search_depth = 0").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidDepth(0)));
}

#[test]
fn rejects_non_positive_timeout() {
    let err = SearchConfig::from_toml_str("timeout_ms = -4.0").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout(_)));

    let err = SearchConfig::from_toml_str("timeout_ms = 0.0").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTimeout(_)));
}

#[test]
fn rejects_unknown_method_name() {
    let err = SearchConfig::from_toml_str("method = \"montecarlo\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn rejects_unknown_fields() {
    let err = SearchConfig::from_toml_str("search_deepth = 4").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
