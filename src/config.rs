// src/config.rs

//! Configuration for buffers created by a composing application.
//!
//! The structs deserialize from JSON. Every section carries
//! `#[serde(default)]`, so a file only needs the keys it overrides.

use crate::color::Color;
use anyhow::{Context, Result};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV_VAR: &str = "CONSOLE_BUFFER_CONFIG";

/// Process-wide configuration, loaded on first use.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub colors: ColorConfig,
}

/// Buffer dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Number of columns when the terminal size is not used.
    pub columns: u16,
    /// Number of rows when the terminal size is not used.
    pub rows: u16,
    /// Size the buffer to the attached terminal when it can be queried.
    pub use_terminal_size: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            columns: 80,
            rows: 24,
            use_terminal_size: true,
        }
    }
}

/// The buffer's current colors, substituted wherever a cell says `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ColorConfig {
    pub foreground: Color,
    pub background: Color,
}

impl Config {
    /// Reads a JSON config file.
    ///
    /// # Errors
    /// Fails if the file cannot be read or is not valid config JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads the file named by `CONSOLE_BUFFER_CONFIG`, falling back to
    /// defaults if the variable is unset or the file is unusable.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Config::default();
        };
        Config::load(Path::new(&path)).unwrap_or_else(|e| {
            warn!("{:#}. Using default configuration.", e);
            Config::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;
    use std::io::Write;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "appearance": { "columns": 40 } }"#).unwrap();
        assert_eq!(config.appearance.columns, 40);
        assert_eq!(config.appearance.rows, 24);
        assert!(config.appearance.use_terminal_size);
        assert_eq!(config.colors.foreground, Color::Default);
    }

    #[test]
    fn colors_deserialize() {
        let config: Config = serde_json::from_str(
            r#"{ "colors": { "foreground": { "Named": "Yellow" }, "background": "Default" } }"#,
        )
        .unwrap();
        assert_eq!(config.colors.foreground, Color::Named(NamedColor::Yellow));
        assert_eq!(config.colors.background, Color::Default);
    }

    #[test]
    fn load_reads_file_and_reports_missing() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("console-buffer-config-{}.json", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "appearance": {{ "rows": 7 }} }}"#).unwrap();
        drop(file);

        let config = Config::load(&path).unwrap();
        assert_eq!(config.appearance.rows, 7);
        std::fs::remove_file(&path).unwrap();

        assert!(Config::load(&path).is_err());
    }
}
