use super::{backend_url_from, Config, ConfigError, LoggerKind, Timeline};
use crate::waste_category::Category;
use std::io::Write;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

fn write_temp_config(contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("eco_sort_config_test_{suffix}.toml"));
    let mut file = std::fs::File::create(&path).expect("create config");
    file.write_all(contents.as_bytes()).expect("write config");
    path
}

#[test]
fn default_timeline_matches_the_conveyor_offsets() {
    let timeline = Timeline::default();

    assert_eq!(timeline.travel_after(), Duration::from_millis(300));
    assert_eq!(timeline.classify_after(), Duration::from_millis(2300));
    assert_eq!(timeline.approach_after(), Duration::from_millis(800));
    assert_eq!(timeline.drop_after(), Duration::from_millis(1000));
    assert_eq!(timeline.highlight_for(), Duration::from_millis(600));
    assert_eq!(timeline.settle_after(), Duration::from_millis(800));
}

#[test]
fn default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.backend_url, "http://127.0.0.1:8000");
    assert_eq!(config.fallback_category, None);
}

#[test]
fn file_values_override_defaults() {
    let path = write_temp_config(
        r#"
classify_url = "http://localhost:9999/api/classify"
fallback_category = "glass"
logger = "console"

[timeline]
drop_after_ms = 50
"#,
    );

    let config = Config::load(Some(path.as_path())).expect("load config");
    std::fs::remove_file(&path).expect("cleanup");

    assert_eq!(config.classify_url, "http://localhost:9999/api/classify");
    assert_eq!(config.fallback_category, Some(Category::Glass));
    assert_eq!(config.logger, LoggerKind::Console);
    assert_eq!(config.timeline.drop_after_ms, 50);
    assert_eq!(config.timeline.travel_after_ms, 300);
}

#[test]
fn classification_must_start_after_travel() {
    let path = write_temp_config(
        r#"
[timeline]
travel_after_ms = 500
classify_after_ms = 400
"#,
    );

    let result = Config::load(Some(path.as_path()));
    std::fs::remove_file(&path).expect("cleanup");

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn logger_timezone_uses_configured_offset() {
    let config = Config {
        logger_utc_offset_hours: -7,
        ..Config::default()
    };
    assert_eq!(config.logger_timezone().local_minus_utc(), -7 * 3600);
}

#[test]
fn backend_url_accepts_either_variable_name() {
    let legacy = |name: &str| {
        (name == "NEXT_PUBLIC_BACKEND_URL").then(|| "http://legacy:8000".to_string())
    };
    assert_eq!(backend_url_from(legacy).as_deref(), Some("http://legacy:8000"));

    let both = |name: &str| match name {
        "BACKEND_URL" => Some("http://current:8000".to_string()),
        _ => Some("http://legacy:8000".to_string()),
    };
    assert_eq!(backend_url_from(both).as_deref(), Some("http://current:8000"));

    assert_eq!(backend_url_from(|_| None), None);
}
