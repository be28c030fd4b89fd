//! Application configuration: TOML-based, platform-aware paths.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{McduError, Result};
use crate::led::{
    Brightness, BrightnessError, BrightnessInput, LedName, UnknownLed, parse_brightness,
};

/// Header comment prepended to saved config files.
const CONFIG_HEADER: &str =
    "# mcdu-led configuration: changes made outside the app may be overwritten.\n\n";

/// Log filters accepted by `log_level`.
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// A configured brightness, written either as a TOML integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Level {
    Number(i64),
    Text(String),
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Number(n) => write!(f, "{n}"),
            Level::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

impl BrightnessInput for Level {
    fn to_brightness(&self) -> std::result::Result<Brightness, BrightnessError> {
        match self {
            Level::Number(n) => n.to_brightness(),
            Level::Text(s) => s.to_brightness(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is not set. Default: "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Per-LED levels applied by `mcdu-led apply`.
    /// Example in TOML: `[levels]` / `BACKLIGHT = 128` / `FAIL = "0"`
    #[serde(default)]
    pub levels: BTreeMap<String, Level>,
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: default_log_level(),
            levels: BTreeMap::new(),
        }
    }
}

/// Validation errors that [`Config::validate`] can return.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A `levels` key is not an LED on the panel.
    UnknownLed(String),
    /// A `levels` value is not a valid brightness.
    InvalidLevel { led: String, reason: String },
    /// The `log_level` field is not a known filter.
    InvalidLogLevel(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownLed(name) => write!(f, "Unknown LED in levels: {name}"),
            ValidationError::InvalidLevel { led, reason } => {
                write!(f, "Invalid levels[{led}]: {reason}")
            }
            ValidationError::InvalidLogLevel(level) => write!(
                f,
                "Invalid log_level: {level} (expected one of {})",
                LOG_LEVELS.join(", ")
            ),
        }
    }
}

impl Config {
    /// Platform-specific config directory.
    pub fn dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mcdu-led"))
    }

    /// Full path to config file.
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|d| d.join("config.toml"))
    }

    /// `custom` if given, else the default config file.
    pub fn resolve_path(custom: Option<&Path>) -> Option<PathBuf> {
        custom.map(Path::to_path_buf).or_else(Self::path)
    }

    /// Read `path`. A missing file yields defaults silently; an unreadable or
    /// unparseable file yields defaults plus a warning for the caller to log.
    pub fn load_from(path: &Path) -> (Self, Vec<String>) {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return (Self::default(), vec![]);
            }
            Err(e) => {
                let warning = format!(
                    "cannot read config ({}), using defaults: {e}",
                    path.display()
                );
                return (Self::default(), vec![warning]);
            }
        };
        match toml::from_str(&contents) {
            Ok(config) => (config, vec![]),
            Err(e) => {
                let warning = format!(
                    "config parse error ({}), using defaults: {e}",
                    path.display()
                );
                (Self::default(), vec![warning])
            }
        }
    }

    /// Write the config to `path` with a header comment. The file is written
    /// next to the target and renamed over it, so readers never see a partial file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let body = toml::to_string_pretty(self)
            .map_err(|e| McduError::Config(format!("cannot serialize config: {e}")))?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, format!("{CONFIG_HEADER}{body}"))?;
        if let Err(e) = std::fs::rename(&tmp, path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }

    /// Store a preset level for `led`, replacing any entry for the same LED
    /// whatever its spelling. The key is stored in canonical form.
    pub fn set_level(&mut self, led: &str, brightness: &str) -> Result<LedName> {
        let name: LedName = led
            .parse()
            .map_err(|e: UnknownLed| McduError::Config(e.to_string()))?;
        let value = parse_brightness(brightness)
            .map_err(|e| McduError::Config(format!("levels[{name}]: {e}")))?;
        self.remove_level(name);
        self.levels
            .insert(name.as_str().to_string(), Level::Number(value.value().into()));
        Ok(name)
    }

    /// Drop every preset entry for `led`. Returns whether anything was removed.
    pub fn remove_level(&mut self, led: LedName) -> bool {
        let before = self.levels.len();
        self.levels
            .retain(|key, _| key.parse::<LedName>().ok() != Some(led));
        self.levels.len() != before
    }

    /// Validate the entire config, collecting all errors.
    pub fn validate(&self) -> std::result::Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !LOG_LEVELS
            .iter()
            .any(|l| l.eq_ignore_ascii_case(self.log_level.trim()))
        {
            errors.push(ValidationError::InvalidLogLevel(self.log_level.clone()));
        }

        for (led, level) in &self.levels {
            if led.parse::<LedName>().is_err() {
                errors.push(ValidationError::UnknownLed(led.clone()));
            }
            if let Err(e) = level.to_brightness() {
                errors.push(ValidationError::InvalidLevel {
                    led: led.clone(),
                    reason: e.to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
