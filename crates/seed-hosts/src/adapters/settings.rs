use std::collections::BTreeMap;

use crate::domain::SettingValue;
use crate::ports::SettingsSource;

// ============================================================================
// MapSettings - In-memory settings for testing/embedding
// ============================================================================

/// In-memory settings keyed by full dotted name.
///
/// Useful for tests and for hosts that already parsed their own
/// configuration. For files, use `TomlSettings`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSettings {
    values: BTreeMap<String, SettingValue>,
}

impl MapSettings {
    /// Create with no keys set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a list-valued key.
    #[must_use]
    pub fn with_list<I, S>(mut self, key: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.values
            .insert(key.to_string(), SettingValue::List(items));
        self
    }

    /// Set a scalar key.
    #[must_use]
    pub fn with_str(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values
            .insert(key.to_string(), SettingValue::Str(value.into()));
        self
    }
}

impl SettingsSource for MapSettings {
    fn get(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).cloned()
    }
}

// ============================================================================
// TomlSettings - File-based settings (requires "config" feature)
// ============================================================================

#[cfg(feature = "config")]
mod toml_settings {
    use super::*;
    use crate::domain::ConfigError;
    use std::fs;
    use std::path::Path;
    use toml::{Table, Value};

    /// TOML-based settings.
    ///
    /// A dotted key such as `discovery.seed_hosts` is found either as a
    /// quoted literal key or as a path through nested tables.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [discovery]
    /// seed_hosts = [
    ///     "67.81.244.10",
    ///     "67.81.244.11:9305",
    /// ]
    ///
    /// [discovery.seed_resolver]
    /// timeout = "5s"
    /// max_concurrent_resolvers = 10
    ///
    /// [transport]
    /// port = "9300-9400"
    /// ```
    #[derive(Debug, Clone)]
    pub struct TomlSettings {
        table: Table,
    }

    impl TomlSettings {
        /// Load settings from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if file cannot be read or parsed.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

            Self::parse(&content)
        }

        /// Parse settings from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let table: Table =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
            Ok(Self { table })
        }

        fn find(&self, key: &str) -> Option<&Value> {
            if let Some(value) = self.table.get(key) {
                return Some(value);
            }
            let mut parts = key.split('.');
            let first = parts.next()?;
            parts.try_fold(self.table.get(first)?, |value, part| {
                value.as_table()?.get(part)
            })
        }
    }

    /// Scalars keep their text form; arrays of scalars become lists of text.
    /// Tables and arrays holding non-scalars are kept as `Invalid` so the
    /// reader rejects them instead of treating the key as unset.
    fn to_setting_value(value: &Value) -> SettingValue {
        match value {
            Value::Array(items) => items
                .iter()
                .map(scalar_text)
                .collect::<Option<Vec<_>>>()
                .map_or_else(|| SettingValue::Invalid(value.to_string()), SettingValue::List),
            Value::Table(_) => SettingValue::Invalid(value.to_string()),
            scalar => scalar_text(scalar)
                .map_or_else(|| SettingValue::Invalid(value.to_string()), SettingValue::Str),
        }
    }

    fn scalar_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Boolean(b) => Some(b.to_string()),
            Value::Datetime(d) => Some(d.to_string()),
            Value::Array(_) | Value::Table(_) => None,
        }
    }

    impl SettingsSource for TomlSettings {
        fn get(&self, key: &str) -> Option<SettingValue> {
            self.find(key).map(to_setting_value)
        }
    }
}

#[cfg(feature = "config")]
pub use toml_settings::TomlSettings;
