use crate::waste_category::Category;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerKind {
    Tracing,
    Console,
}

/// Millisecond offsets of the item timeline. `travel_after_ms` and
/// `classify_after_ms` count from submission, the rest from the previous step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timeline {
    pub travel_after_ms: u64,
    pub classify_after_ms: u64,
    pub approach_after_ms: u64,
    pub drop_after_ms: u64,
    pub highlight_for_ms: u64,
    pub settle_after_ms: u64,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            travel_after_ms: 300,
            classify_after_ms: 2300,
            approach_after_ms: 800,
            drop_after_ms: 1000,
            highlight_for_ms: 600,
            settle_after_ms: 800,
        }
    }
}

impl Timeline {
    pub fn travel_after(&self) -> Duration {
        Duration::from_millis(self.travel_after_ms)
    }

    pub fn classify_after(&self) -> Duration {
        Duration::from_millis(self.classify_after_ms)
    }

    pub fn approach_after(&self) -> Duration {
        Duration::from_millis(self.approach_after_ms)
    }

    pub fn drop_after(&self) -> Duration {
        Duration::from_millis(self.drop_after_ms)
    }

    pub fn highlight_for(&self) -> Duration {
        Duration::from_millis(self.highlight_for_ms)
    }

    pub fn settle_after(&self) -> Duration {
        Duration::from_millis(self.settle_after_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timeline: Timeline,
    pub classify_url: String,
    pub backend_url: String,
    pub relay_bind: String,
    pub relay_body_limit_bytes: usize,
    pub fallback_category: Option<Category>,
    pub logger: LoggerKind,
    pub logger_utc_offset_hours: i32,
    pub display_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeline: Timeline::default(),
            classify_url: "http://127.0.0.1:3000/api/classify".to_string(),
            backend_url: "http://127.0.0.1:8000".to_string(),
            relay_bind: "127.0.0.1:3000".to_string(),
            relay_body_limit_bytes: 10 * 1024 * 1024,
            fallback_category: None,
            logger: LoggerKind::Tracing,
            logger_utc_offset_hours: 0,
            display_width: 48,
        }
    }
}

/// `BACKEND_URL` wins over the older `NEXT_PUBLIC_BACKEND_URL` when both are set.
fn backend_url_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    BACKEND_URL_VARS.iter().find_map(|name| lookup(name))
}

const BACKEND_URL_VARS: [&str; 2] = ["BACKEND_URL", "NEXT_PUBLIC_BACKEND_URL"];

impl Config {
    /// Layers, lowest first: defaults, the config file, `ECO_SORT__*` variables, then
    /// `BACKEND_URL` or `NEXT_PUBLIC_BACKEND_URL`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let builder = config::Config::builder();
        let builder = match path {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(config::File::with_name("eco_sort").required(false)),
        };
        let settings = builder
            .add_source(
                config::Environment::with_prefix("ECO_SORT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Config = settings.try_deserialize()?;

        if let Some(backend_url) = backend_url_from(|name| std::env::var(name).ok()) {
            config.backend_url = backend_url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeline.classify_after_ms <= self.timeline.travel_after_ms {
            return Err(ConfigError::Invalid(format!(
                "timeline.classify_after_ms ({}) must be greater than timeline.travel_after_ms ({})",
                self.timeline.classify_after_ms, self.timeline.travel_after_ms
            )));
        }
        if self.display_width < 16 {
            return Err(ConfigError::Invalid(format!(
                "display_width must be at least 16, got {}",
                self.display_width
            )));
        }
        if self.logger_utc_offset_hours.abs() > 23 {
            return Err(ConfigError::Invalid(format!(
                "logger_utc_offset_hours out of range: {}",
                self.logger_utc_offset_hours
            )));
        }
        Ok(())
    }

    pub fn logger_timezone(&self) -> chrono::FixedOffset {
        chrono::FixedOffset::east_opt(self.logger_utc_offset_hours * 3600)
            .unwrap_or_else(|| chrono::Offset::fix(&chrono::Utc))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
