use anyhow::{Context, Result};
use dlpmask_engine::{CustomInfoType, InfoTypePattern, MaskingPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DlpmaskConfig {
    /// Built-in info types to detect, in registration order
    #[serde(default = "default_info_types")]
    pub info_types: Vec<String>,

    /// Extra regex info types, registered after the built-ins
    #[serde(default)]
    pub custom_info_types: Vec<CustomInfoType>,

    #[serde(default)]
    pub masking: MaskingPolicy,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for DlpmaskConfig {
    fn default() -> Self {
        Self {
            info_types: default_info_types(),
            custom_info_types: Vec::new(),
            masking: MaskingPolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl DlpmaskConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = shellexpand::tilde(&path.as_ref().to_string_lossy()).to_string();
        let path = Path::new(&path);
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            toml::from_str(&contents)
                .with_context(|| format!("Invalid TOML in {}", path.display()))?
        } else {
            // Default to YAML
            serde_yaml::from_str(&contents)
                .with_context(|| format!("Invalid YAML in {}", path.display()))?
        };

        Ok(config)
    }

    /// Merge environment variables into config (env vars take precedence)
    pub fn merge_env(&mut self) -> Result<()> {
        self.merge_env_from(|key| std::env::var(key).ok())
    }

    /// Merge values from `lookup`; a malformed number is an error, not a silent skip
    pub fn merge_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(val) = lookup("DLPMASK_INFO_TYPES") {
            self.info_types = val
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(val) = lookup("DLPMASK_MASKING_CHARACTER") {
            self.masking.masking_character = val;
        }

        if let Some(val) = lookup("DLPMASK_NUMBER_TO_MASK") {
            self.masking.number_to_mask = val
                .parse::<i32>()
                .with_context(|| format!("Invalid DLPMASK_NUMBER_TO_MASK '{}'", val))?;
        }

        if let Some(val) = lookup("DLPMASK_LOG_LEVEL") {
            self.logging.level = val;
        }

        Ok(())
    }

    /// Compile the configured info types, built-ins first
    pub fn build_patterns(&self) -> Result<Vec<InfoTypePattern>> {
        let builtins = self.info_types.iter().map(|name| {
            InfoTypePattern::builtin(name).with_context(|| format!("Invalid info type '{}'", name))
        });

        let custom = self.custom_info_types.iter().map(|custom| {
            InfoTypePattern::try_from(custom)
                .with_context(|| format!("Invalid custom info type '{}'", custom.name))
        });

        builtins.chain(custom).collect()
    }
}

fn default_info_types() -> Vec<String> {
    vec!["US_SOCIAL_SECURITY_NUMBER".to_string()]
}

fn default_log_level() -> String {
    "info".to_string()
}
