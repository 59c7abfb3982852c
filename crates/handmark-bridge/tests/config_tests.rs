use handmark_bridge::{BridgeConfig, BridgeError};
use handmark_infer::{InferError, ModelComplexity};
use log::LevelFilter;
use std::fs;

#[test]
fn test_bridge_config_defaults() {
    let config = BridgeConfig::default();
    assert_eq!(config.backend, "replay");
    assert_eq!(config.session.max_num_hands, 2);
    assert!(config.log.dir.is_none());
}

#[test]
fn test_bridge_config_from_json() {
    let config = BridgeConfig::from_json(
        r#"{
            "backend": "replay",
            "session": { "static_image_mode": true, "max_num_hands": 1, "model_complexity": 1 },
            "log": { "level": "warn" }
        }"#,
    )
    .unwrap();

    assert!(config.session.static_image_mode);
    assert_eq!(config.session.max_num_hands, 1);
    assert_eq!(config.session.model_complexity, Some(ModelComplexity::Full));
    assert_eq!(config.log.level, LevelFilter::Warn);
}

#[test]
fn test_bridge_config_empty_object_is_default() {
    assert_eq!(BridgeConfig::from_json("{}").unwrap(), BridgeConfig::default());
}

#[test]
fn test_bridge_config_invalid_session() {
    let err = BridgeConfig::from_json(r#"{ "session": { "min_tracking_confidence": 7 } }"#).unwrap_err();
    assert!(matches!(err, BridgeError::Infer(InferError::InvalidConfig(_))));
}

#[test]
fn test_bridge_config_malformed_json() {
    let err = BridgeConfig::from_json("{ backend: replay }").unwrap_err();
    assert!(matches!(err, BridgeError::Config(_)));
}

#[test]
fn test_bridge_config_from_file() {
    let dir = std::env::temp_dir().join(format!("handmark-config-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bridge.json");
    fs::write(&path, r#"{ "session": { "max_num_hands": 4 } }"#).unwrap();

    let config = BridgeConfig::from_file(&path).unwrap();
    assert_eq!(config.session.max_num_hands, 4);

    let missing = BridgeConfig::from_file(dir.join("missing.json")).unwrap_err();
    assert!(missing.to_string().contains("missing.json"));

    fs::remove_dir_all(&dir).ok();
}
