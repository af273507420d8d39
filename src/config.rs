use serde::{Deserialize, Serialize};

/// How timestamps are written to and read from element text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// RFC 3339 in UTC, e.g. `2024-05-01T12:30:15Z`. (Default)
    /// Reading also accepts offsets, naive date-times and bare dates.
    #[default]
    Rfc3339,
    /// A chrono `strftime` pattern used for both reading and writing.
    /// Values without an offset are read as UTC.
    Custom(String),
}

/// Settings for a [`DocumentAccessor`](crate::DocumentAccessor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessorConfig {
    pub time_format: TimeFormat,
    /// Register the document's namespace prefixes when the accessor is opened.
    pub register_namespaces: bool,
}

impl Default for AccessorConfig {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::default(),
            register_namespaces: true,
        }
    }
}

impl AccessorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    pub fn with_namespace_registration(mut self, enabled: bool) -> Self {
        self.register_namespaces = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AccessorConfig::new();
        assert_eq!(config.time_format, TimeFormat::Rfc3339);
        assert!(config.register_namespaces);
    }

    #[test]
    fn test_builder() {
        let config = AccessorConfig::new()
            .with_time_format(TimeFormat::Custom("%Y".into()))
            .with_namespace_registration(false);
        assert_eq!(config.time_format, TimeFormat::Custom("%Y".into()));
        assert!(!config.register_namespaces);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: AccessorConfig =
            serde_json::from_str(r#"{ "time_format": { "custom": "%d.%m.%Y" } }"#).unwrap();
        assert_eq!(config.time_format, TimeFormat::Custom("%d.%m.%Y".into()));
        assert!(config.register_namespaces);

        let config: AccessorConfig =
            serde_json::from_str(r#"{ "time_format": "rfc3339", "register_namespaces": false }"#)
                .unwrap();
        assert_eq!(config.time_format, TimeFormat::Rfc3339);
        assert!(!config.register_namespaces);
    }
}
