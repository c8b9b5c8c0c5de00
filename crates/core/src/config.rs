use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// One chat assistant the user relays to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Identifier used in turn headers (uppercased there)
    pub id: String,
    /// Display name on the send buttons
    pub name: String,
    /// Accent color, `#RRGGBB`
    pub button_color: String,
}

impl ModelDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, button_color: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), button_color: button_color.into() }
    }

    /// Parse `button_color` into RGB components
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.button_color)
    }
}

/// Parse a `#RRGGBB` color
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

fn default_models() -> Vec<ModelDescriptor> {
    vec![
        ModelDescriptor::new("chatgpt", "ChatGPT", "#10A37F"),
        ModelDescriptor::new("claude", "Claude", "#FF6B35"),
        ModelDescriptor::new("gemini", "Gemini", "#4285F4"),
    ]
}

/// How turn content may appear in log files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentLogging {
    /// Never log prompt or response text
    #[default]
    None,
    /// Log up to `truncate_length` characters
    Truncate,
    /// Log the full text
    Full,
}

impl ContentLogging {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentLogging::None => "none",
            ContentLogging::Truncate => "truncate",
            ContentLogging::Full => "full",
        }
    }
}

impl std::fmt::Display for ContentLogging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `[logging.privacy]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacySettings {
    pub log_content: ContentLogging,
    pub truncate_length: usize,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self { log_content: ContentLogging::default(), truncate_length: 80 }
    }
}

/// `[logging.file]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingSettings {
    pub enabled: bool,
    /// Directory for daily log files
    pub dir: PathBuf,
    pub level: String,
}

impl Default for FileLoggingSettings {
    fn default() -> Self {
        Self { enabled: true, dir: PathBuf::from("logs"), level: "info".to_string() }
    }
}

/// `[logging]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Stderr level (stderr is silent while the TUI runs)
    pub level: String,
    /// Stderr format: pretty, json or compact
    pub format: String,
    pub file: FileLoggingSettings,
    pub privacy: PrivacySettings,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
            file: FileLoggingSettings::default(),
            privacy: PrivacySettings::default(),
        }
    }
}

/// Application settings
///
/// Every top-level key is optional; missing keys keep their defaults and
/// unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Assistants, in button order. Their ids also form the send-to-all roster.
    pub models: Vec<ModelDescriptor>,

    /// Default directory offered for exports
    pub vault_path: Option<PathBuf>,

    pub auto_save: bool,

    pub dark_mode: bool,

    pub logging: LoggingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            models: default_models(),
            vault_path: None,
            auto_save: true,
            dark_mode: false,
            logging: LoggingSettings::default(),
        }
    }
}

/// On-disk settings formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Toml,
    Json,
}

impl SettingsFormat {
    /// `.json` files are JSON, everything else is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SettingsFormat::Json,
            _ => SettingsFormat::Toml,
        }
    }
}

impl Settings {
    /// Load settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(toml_str).map_err(ConfigError::from).map_err(Error::from)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON string
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json_str)
            .map_err(|e| ConfigError::JsonParse(e.to_string()))
            .map_err(Error::from)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file, picking the format from its extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match SettingsFormat::from_path(path) {
            SettingsFormat::Toml => Self::from_toml_str(&content),
            SettingsFormat::Json => Self::from_json_str(&content),
        }
    }

    /// Load settings, falling back to defaults
    ///
    /// A missing file is silent. An unreadable or invalid one yields defaults
    /// plus the error, which the caller logs once its subscriber is up.
    pub fn load_or_default(path: &Path) -> (Self, Option<Error>) {
        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::from_file(path) {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// The configured model list
    pub fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    /// Model ids targeted by send-to-all
    pub fn roster(&self) -> Vec<String> {
        self.models.iter().map(|m| m.id.clone()).collect()
    }

    /// Validate the settings
    fn validate(&self) -> Result<()> {
        if self.models.is_empty() {
            return Err(ConfigError::NoModels.into());
        }

        let mut seen = HashSet::new();
        for model in &self.models {
            if model.id.trim().is_empty() {
                return Err(ConfigError::EmptyModelId.into());
            }
            if !seen.insert(model.id.to_lowercase()) {
                return Err(ConfigError::DuplicateModel(model.id.clone()).into());
            }
            if model.rgb().is_none() {
                return Err(ConfigError::InvalidColor { model: model.id.clone(), color: model.button_color.clone() }.into());
            }
        }

        Ok(())
    }

    /// Get example settings (as a string)
    pub fn example() -> &'static str {
        r##"# LLM Relay Hub settings
# Every key is optional; missing keys fall back to the values shown here.

# Directory offered when exporting a session (optional)
# vault_path = "/home/me/notes/relay"

auto_save = true
dark_mode = false

# Assistants in button order. F1..F8 send to them, and their ids form the
# send-to-all roster.
[[models]]
id = "chatgpt"
name = "ChatGPT"
button_color = "#10A37F"

[[models]]
id = "claude"
name = "Claude"
button_color = "#FF6B35"

[[models]]
id = "gemini"
name = "Gemini"
button_color = "#4285F4"

[logging]
level = "warn"
format = "pretty"

[logging.file]
enabled = true
dir = "logs"
level = "info"

[logging.privacy]
# none, truncate or full
log_content = "none"
truncate_length = 80
"##
    }
}

/// Configuration-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No models configured
    #[error("at least one model must be configured")]
    NoModels,

    /// Model with a blank id
    #[error("model id cannot be empty")]
    EmptyModelId,

    /// Two models share an id
    #[error("duplicate model id: {0}")]
    DuplicateModel(String),

    /// Unparseable button color
    #[error("invalid button color '{color}' for model '{model}'")]
    InvalidColor { model: String, color: String },

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(String),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::TomlParse(err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}
