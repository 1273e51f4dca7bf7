use std::time::Duration;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Default log level (RUST_LOG overrides) |
/// | LOG_JSON | true in production | JSON log output |
/// | LOG_DIR | (unset) | Directory for rotating log files |
/// | STATUS_UPDATE_DELAY_MS | 500 | Latency of the simulated order service |
/// | DEFAULT_TABLE_NUMBER | 1 | Table preselected for a new draft |
///
/// # Example
///
/// ```ignore
/// LOG_LEVEL=debug STATUS_UPDATE_DELAY_MS=0 cargo run -p pos-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Delay applied by the simulated order service to every call (milliseconds)
    pub status_update_delay_ms: u64,
    /// Table number a fresh draft starts with
    pub default_table_number: i32,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".into());
        let is_production = environment == "production";

        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(is_production),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            status_update_delay_ms: lookup("STATUS_UPDATE_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            default_table_number: lookup("DEFAULT_TABLE_NUMBER")
                .and_then(|v| v.parse::<i32>().ok())
                .filter(|n| *n >= 1)
                .unwrap_or(1),
            environment,
        }
    }

    pub fn status_update_delay(&self) -> Duration {
        Duration::from_millis(self.status_update_delay_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.is_development());
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert_eq!(config.log_dir, None);
        assert_eq!(config.status_update_delay(), Duration::from_millis(500));
        assert_eq!(config.default_table_number, 1);
    }

    #[test]
    fn test_production_defaults_to_json_logs() {
        let config = config_from(&[("ENVIRONMENT", "production")]);
        assert!(config.is_production());
        assert!(config.log_json);

        let config = config_from(&[("ENVIRONMENT", "production"), ("LOG_JSON", "false")]);
        assert!(!config.log_json);
    }

    #[test]
    fn test_overrides_and_invalid_values() {
        let config = config_from(&[
            ("STATUS_UPDATE_DELAY_MS", "0"),
            ("DEFAULT_TABLE_NUMBER", "0"),
            ("LOG_DIR", "  "),
        ]);
        assert_eq!(config.status_update_delay_ms, 0);
        // table numbers start at 1
        assert_eq!(config.default_table_number, 1);
        assert_eq!(config.log_dir, None);

        let config = config_from(&[("STATUS_UPDATE_DELAY_MS", "soon"), ("DEFAULT_TABLE_NUMBER", "7")]);
        assert_eq!(config.status_update_delay_ms, 500);
        assert_eq!(config.default_table_number, 7);
    }
}
