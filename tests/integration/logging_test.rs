//! Tests for logging bootstrap and configuration loading.

use studiohub::{AppConfig, LoggingConfig, init_logging};

#[test]
fn test_init_logging_is_repeatable() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: "pretty".to_string(),
    };
    let _ = init_logging(&config);
    assert!(!init_logging(&config));
}

#[test]
fn test_config_drives_service() {
    let config = AppConfig::from_toml_str("[tree]\nmax_depth = 3\n").unwrap();
    let svc = studiohub::AssetTreeService::new(config.tree);

    let nodes = crate::helpers::folder_chain(3);
    assert!(!svc.can_nest_under(&nodes, Some("f2")).unwrap().valid);
    assert!(svc.can_nest_under(&nodes, Some("f1")).unwrap().valid);
}
