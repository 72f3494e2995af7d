//! Application configuration loaded from environment variables.

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Front end configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `STUDENTS_API_URL`: base URL of the student records API (default: `"http://localhost:3000"`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or blank values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            api_url: get("STUDENTS_API_URL", DEFAULT_API_URL),
            log_level: get("RUST_LOG", DEFAULT_LOG_LEVEL),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = Config::from_lookup(|key| match key {
            "STUDENTS_API_URL" => Some("http://school.local:8080/api".to_string()),
            "RUST_LOG" => Some("debug".to_string()),
            _ => None,
        });
        assert_eq!(config.api_url, "http://school.local:8080/api");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, Config::default());
    }
}
