use crate::domain::error::CallerIdError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const MIN_TIMEOUT_MS: u64 = 1000;
pub const MAX_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// When true, numbers in the contact directory also go through full
    /// resolution instead of short-circuiting to the contact record.
    #[serde(default)]
    pub lookup_known_contacts: bool,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_enable_emoji")]
    pub enable_emoji: bool,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub contacts: ContactsConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    pub max_entries: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContactsConfig {
    #[serde(default = "default_marker_suffix")]
    pub marker_suffix: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LookupConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            lookup_known_contacts: false,
            theme: default_theme(),
            enable_emoji: true,
            cache: CacheConfig::default(),
            contacts: ContactsConfig::default(),
            lookup: LookupConfig::default(),
            logging: Logging::default(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            max_entries: None,
        }
    }
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            marker_suffix: default_marker_suffix(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Lookup timeout, clamped into the recognized range.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(clamp_timeout_ms(self.timeout_ms))
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache.ttl_secs)
    }

    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup.delay_ms)
    }

    /// Clamp `timeout_ms` into range. Returns the rejected value if it was
    /// out of range.
    pub fn clamp_timeout(&mut self) -> Option<u64> {
        let clamped = clamp_timeout_ms(self.timeout_ms);
        if clamped == self.timeout_ms {
            return None;
        }
        let rejected = self.timeout_ms;
        self.timeout_ms = clamped;
        Some(rejected)
    }

    /// Clamp out-of-range values, warning about each one. Call after the
    /// tracing subscriber is installed.
    pub fn normalize(mut self) -> Self {
        if let Some(rejected) = self.clamp_timeout() {
            tracing::warn!(
                timeout_ms = rejected,
                clamped = self.timeout_ms,
                "timeout_ms outside {}..={} ms, clamping",
                MIN_TIMEOUT_MS,
                MAX_TIMEOUT_MS
            );
        }
        self
    }
}

pub fn clamp_timeout_ms(timeout_ms: u64) -> u64 {
    timeout_ms.clamp(MIN_TIMEOUT_MS, MAX_TIMEOUT_MS)
}

// Defaults
fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
fn default_theme() -> String {
    "classic".to_string()
}
fn default_enable_emoji() -> bool {
    true
}
fn default_ttl_secs() -> u64 {
    24 * 60 * 60
}
fn default_marker_suffix() -> String {
    crate::infrastructure::contacts::DEFAULT_MARKER_SUFFIX.to_string()
}
fn default_delay_ms() -> u64 {
    2000
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("callerid").join("config.toml"))
}

pub fn load_config() -> Result<Config, CallerIdError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load config from a path. A missing file yields defaults; an unparsable
/// file yields defaults with a warning on stderr.
pub fn load_config_from(path: &Path) -> Result<Config, CallerIdError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    match parse_config(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file: {}. Using defaults.",
                e
            );
            Ok(Config::default())
        }
    }
}

/// Parse config text. Values are not range-checked here, see `Config::normalize`.
pub fn parse_config(content: &str) -> Result<Config, CallerIdError> {
    Ok(toml::from_str::<Config>(content)?)
}

pub fn generate_config_sample() -> Result<(), CallerIdError> {
    let path = get_config_path()
        .ok_or_else(|| CallerIdError::Config("Cannot determine config directory".to_string()))?;

    if write_config_sample(&path)? {
        println!("Generated config file at: {}", path.display());
    } else {
        eprintln!("Config file already exists at: {}", path.display());
    }
    Ok(())
}

/// Write the default config to `path`. Returns false without touching the
/// file if it already exists.
pub fn write_config_sample(path: &Path) -> Result<bool, CallerIdError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_content = toml::to_string_pretty(&Config::default())
        .map_err(|e| CallerIdError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| CallerIdError::Config(format!("Failed to write config file: {}", e)))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.timeout(), Duration::from_millis(5000));
        assert!(!config.lookup_known_contacts);
        assert_eq!(config.cache_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.contacts.marker_suffix, "1234");
        assert_eq!(config.logging.level, "WARN");
    }

    #[test]
    fn out_of_range_timeout_is_clamped() {
        let normalized = |text: &str| parse_config(text).unwrap().normalize().timeout_ms;
        assert_eq!(normalized("timeout_ms = 200"), 1000);
        assert_eq!(normalized("timeout_ms = 60000"), 10_000);
        assert_eq!(normalized("timeout_ms = 3000"), 3000);
    }

    #[test]
    fn parsing_keeps_raw_timeout_until_normalized() {
        let mut config = parse_config("timeout_ms = 200").unwrap();
        assert_eq!(config.timeout_ms, 200);
        // effective timeout is still in range
        assert_eq!(config.timeout(), Duration::from_millis(1000));

        assert_eq!(config.clamp_timeout(), Some(200));
        assert_eq!(config.timeout_ms, 1000);
        assert_eq!(config.clamp_timeout(), None);
    }

    #[test]
    fn nested_sections_parse() {
        let config = parse_config(
            r#"
lookup_known_contacts = true
theme = "night"

[cache]
ttl_secs = 60
max_entries = 500

[contacts]
marker_suffix = "9999"

[lookup]
delay_ms = 100

[logging]
enable = false
level = "DEBUG"
"#,
        )
        .unwrap();

        assert!(config.lookup_known_contacts);
        assert_eq!(config.theme, "night");
        assert_eq!(config.cache.max_entries, Some(500));
        assert_eq!(config.cache_ttl(), Duration::from_secs(60));
        assert_eq!(config.contacts.marker_suffix, "9999");
        assert_eq!(config.lookup_delay(), Duration::from_millis(100));
        assert!(!config.logging.enable);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(matches!(
            parse_config("timeout_ms = \"soon\""),
            Err(CallerIdError::Toml(_))
        ));
    }
}
