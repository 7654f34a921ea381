pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_VALUES_PATH: &str = "./public/json/values.json";
pub const DEFAULT_PLACEHOLDER: &str = "N/A";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(name = "base-value-editor")]
#[command(about = "Interactively confirm or fill in baseValue for every record of a JSON list")]
pub struct CliConfig {
    #[arg(long, help = "JSON file to edit in place [default: ./public/json/values.json]")]
    pub path: Option<String>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Text shown for a missing objectName or objectID [default: N/A]")]
    pub placeholder: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// 最終使用的設定：預設值 ← TOML 檔 ← 命令列參數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub path: String,
    pub placeholder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            path: DEFAULT_VALUES_PATH.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl Settings {
    pub fn merge_toml(mut self, file: TomlConfig) -> Self {
        if let Some(path) = file.editor.path {
            self.path = path;
        }
        if let Some(placeholder) = file.editor.placeholder {
            self.placeholder = placeholder;
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(config_path) = &cli.config {
            let file = TomlConfig::from_file(config_path)?;
            file.validate()?;
            tracing::debug!("Loaded configuration from {}", config_path);
            settings = settings.merge_toml(file);
        }

        if let Some(path) = &cli.path {
            settings.path = path.clone();
        }
        if let Some(placeholder) = &cli.placeholder {
            settings.placeholder = placeholder.clone();
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("path", &self.path)?;
        validate_non_empty_string("placeholder", &self.placeholder)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn values_path(&self) -> &str {
        &self.path
    }

    fn placeholder(&self) -> &str {
        &self.placeholder
    }
}
