use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::ConfigError,
    ledger::{is_valid_date_format, DEFAULT_DATE_FORMAT},
    utils,
};

const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Keys accepted by [`Config::set`], in display order.
pub const CONFIG_KEYS: &[&str] = &[
    "currency_symbol",
    "date_format",
    "max_amount",
    "allowed_categories",
    "plain_mode",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub date_format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_categories: Option<Vec<String>>,
    pub plain_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            date_format: DEFAULT_DATE_FORMAT.into(),
            max_amount: None,
            allowed_categories: None,
            plain_mode: false,
        }
    }
}

impl Config {
    /// Updates a single setting from its textual form.
    ///
    /// `none` clears the optional settings; `allowed_categories` takes a
    /// comma-separated list.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };
        match key {
            "currency_symbol" => self.currency_symbol = value.to_string(),
            "date_format" => {
                if value.trim().is_empty() {
                    return Err(invalid("format must not be empty"));
                }
                if !is_valid_date_format(value) {
                    return Err(invalid("invalid strftime format"));
                }
                self.date_format = value.to_string();
            }
            "max_amount" => {
                self.max_amount = if is_none(value) {
                    None
                } else {
                    let parsed: f64 = value
                        .trim()
                        .parse()
                        .map_err(|_| invalid("expected a number"))?;
                    if !parsed.is_finite() || parsed <= 0.0 {
                        return Err(invalid("maximum must be a positive number"));
                    }
                    Some(parsed)
                };
            }
            "allowed_categories" => {
                self.allowed_categories = if is_none(value) {
                    None
                } else {
                    let categories: Vec<String> = value
                        .split(',')
                        .map(str::trim)
                        .filter(|entry| !entry.is_empty())
                        .map(str::to_string)
                        .collect();
                    if categories.is_empty() {
                        return Err(invalid("expected at least one category"));
                    }
                    Some(categories)
                };
            }
            "plain_mode" => {
                self.plain_mode = match value.trim().to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => return Err(invalid("expected on/off")),
                };
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Current settings as `(key, value)` pairs.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency_symbol", self.currency_symbol.clone()),
            ("date_format", self.date_format.clone()),
            (
                "max_amount",
                self.max_amount
                    .map(|max| format!("{max:.2}"))
                    .unwrap_or_else(|| "none".into()),
            ),
            (
                "allowed_categories",
                self.allowed_categories
                    .as_ref()
                    .map(|list| list.join(","))
                    .unwrap_or_else(|| "none".into()),
            ),
            ("plain_mode", self.plain_mode.to_string()),
        ]
    }
}

fn is_none(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("none")
}

/// Loads and stores [`Config`] as JSON under the application directory.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(utils::app_data_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let base = base.into();
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let mut config: Config = serde_json::from_str(&data)?;
            if !is_valid_date_format(&config.date_format) {
                tracing::warn!(
                    format = %config.date_format,
                    "stored date format is invalid; using default"
                );
                config.date_format = DEFAULT_DATE_FORMAT.to_string();
            }
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_then_load_restores_settings() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().join("nested")).unwrap();
        let mut config = Config::default();
        config.set("max_amount", "1000").unwrap();
        config.set("allowed_categories", "food, travel,bills").unwrap();
        config.set("plain_mode", "on").unwrap();
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.max_amount, Some(1000.0));
        assert_eq!(
            loaded.allowed_categories,
            Some(vec!["food".to_string(), "travel".into(), "bills".into()])
        );
        assert!(loaded.plain_mode);
        assert!(!tmp_path(manager.path()).exists());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path()).unwrap();
        fs::write(manager.path(), r#"{ "currency_symbol": "€" }"#).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn set_rejects_bad_input() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("colour", "red"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(config.set("max_amount", "-5").is_err());
        assert!(config.set("max_amount", "lots").is_err());
        assert!(config.set("plain_mode", "maybe").is_err());
        assert!(config.set("allowed_categories", " , ").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn set_rejects_unrenderable_date_format() {
        let mut config = Config::default();
        let err = config.set("date_format", "%Q").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "date_format"));
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        config.set("date_format", "%Y-%m-%d").unwrap();
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn stored_invalid_date_format_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path()).unwrap();
        fs::write(manager.path(), r#"{"date_format":"%Q","currency_symbol":"EUR "}"#).unwrap();

        let config = manager.load().unwrap();
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(config.currency_symbol, "EUR ");
    }

    #[test]
    fn none_clears_optional_settings() {
        let mut config = Config::default();
        config.set("max_amount", "20").unwrap();
        config.set("max_amount", "none").unwrap();
        assert_eq!(config.max_amount, None);
    }
}
