use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main editor configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EditorConfig {
    /// Success toast shown after confirming
    #[serde(default)]
    pub notification: NotificationConfig,
    /// Rendering options
    #[serde(default)]
    pub view: ViewConfig,
    /// Clipboard backend options
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Configuration for the confirmation toast
#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    /// Text shown in the success alert
    #[serde(default = "default_notification_message")]
    pub message: String,
    /// Auto-dismiss interval in milliseconds
    #[serde(default = "default_auto_hide_ms")]
    pub auto_hide_ms: u64,
}

impl NotificationConfig {
    pub fn auto_hide(&self) -> Duration {
        Duration::from_millis(self.auto_hide_ms)
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            message: default_notification_message(),
            auto_hide_ms: default_auto_hide_ms(),
        }
    }
}

/// Configuration for the HTML view
#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    /// Page heading
    #[serde(default = "default_title")]
    pub title: String,
    /// Placeholder shown in the empty textarea
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Show how many non-blank lines were skipped by the parser
    #[serde(default)]
    pub report_malformed_lines: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            placeholder: default_placeholder(),
            report_malformed_lines: false,
        }
    }
}

/// Configuration for clipboard access
#[derive(Debug, Deserialize, Clone)]
pub struct ClipboardConfig {
    /// When false, Paste always reports the clipboard as unavailable
    #[serde(default = "default_clipboard_enabled")]
    pub enabled: bool,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: default_clipboard_enabled(),
        }
    }
}

// Default value functions
fn default_notification_message() -> String {
    "Ingredients added successfully".to_string()
}

fn default_auto_hide_ms() -> u64 {
    3000
}

fn default_title() -> String {
    "Create New Recipe".to_string()
}

fn default_placeholder() -> String {
    "Enter ingredients (Quantity Unit Ingredient)".to_string()
}

fn default_clipboard_enabled() -> bool {
    true
}

impl EditorConfig {
    /// Load configuration from file and environment variables
    ///
    /// See [`load_config`] for the source priority.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with INGREDIENT_EDITOR__ prefix
/// 2. ingredient-editor.toml file in current directory
/// 3. Default values
///
/// Environment variable format: INGREDIENT_EDITOR__NOTIFICATION__AUTO_HIDE_MS
pub fn load_config() -> Result<EditorConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("ingredient-editor").required(false))
        .add_source(
            Environment::with_prefix("INGREDIENT_EDITOR")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use std::env;

    fn from_toml(toml: &str) -> EditorConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_notification_message(), "Ingredients added successfully");
        assert_eq!(default_auto_hide_ms(), 3000);
        assert_eq!(default_title(), "Create New Recipe");
        assert!(default_clipboard_enabled());
    }

    #[test]
    fn test_notification_auto_hide_duration() {
        let notification = NotificationConfig::default();
        assert_eq!(notification.auto_hide(), Duration::from_secs(3));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = from_toml("");
        assert_eq!(config.notification.auto_hide_ms, 3000);
        assert_eq!(
            config.view.placeholder,
            "Enter ingredients (Quantity Unit Ingredient)"
        );
        assert!(!config.view.report_malformed_lines);
        assert!(config.clipboard.enabled);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = from_toml(
            r#"
            [notification]
            auto_hide_ms = 5000

            [view]
            report_malformed_lines = true
            "#,
        );
        assert_eq!(config.notification.auto_hide_ms, 5000);
        assert_eq!(config.notification.message, "Ingredients added successfully");
        assert!(config.view.report_malformed_lines);
        assert_eq!(config.view.title, "Create New Recipe");
    }

    #[test]
    fn test_load_config_without_file() {
        // Clear any environment variables that might interfere
        let keys_to_clear: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("INGREDIENT_EDITOR__"))
            .map(|(k, _)| k)
            .collect();

        for key in keys_to_clear {
            env::remove_var(&key);
        }

        // Every field has a default, so a missing file is fine
        let config = load_config().unwrap();
        assert_eq!(config.notification.auto_hide_ms, 3000);
    }
}
