use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::discovery::DiscoveryConfig;
use super::errors::ConfigError;
use super::interfaces::InterfaceSection;
use super::logging::LoggingConfig;
use crate::{DomainError, NetworkPair};

/// Template used by the redirect report when the config does not set one.
pub const DEFAULT_REDIRECT_TEMPLATE: &str = "rdr on wan0 proto tcp to {wan} -> {lan}";

/// Main configuration structure for the split horizon rewriter
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Line template for the redirect report, with `{wan}` and `{lan}` fields
    #[serde(default)]
    pub redirect: Option<String>,

    /// TTL put on synthetic answers
    #[serde(default = "default_answer_ttl")]
    pub answer_ttl: u32,

    /// Shortest prefix a configured network may have
    #[serde(default = "default_min_prefix_len")]
    pub min_prefix_len: u8,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Interface address discovery
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Interface name → WAN/LAN network pairs
    #[serde(default)]
    pub interfaces: BTreeMap<String, InterfaceSection>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redirect: None,
            answer_ttl: default_answer_ttl(),
            min_prefix_len: default_min_prefix_len(),
            logging: LoggingConfig::default(),
            discovery: DiscoveryConfig::default(),
            interfaces: BTreeMap::new(),
        }
    }
}

fn default_answer_ttl() -> u32 {
    3600
}

fn default_min_prefix_len() -> u8 {
    16
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. split-horizon.toml in current directory
    /// 3. /etc/split-horizon/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(path) = overrides.ifconfig_path {
            self.discovery.ifconfig_path = path;
        }
    }

    /// Validate configuration
    ///
    /// Every configured pair must parse as IPv4 networks of equal prefix
    /// length, no wider than `min_prefix_len`. The redirect template may
    /// only use `{wan}` and `{lan}`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.answer_ttl == 0 {
            return Err(ConfigError::Validation(
                "answer_ttl cannot be 0".to_string(),
            ));
        }

        if self.min_prefix_len > 32 {
            return Err(ConfigError::Validation(format!(
                "min_prefix_len must be at most 32, got {}",
                self.min_prefix_len
            )));
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(ConfigError::Validation(format!(
                "unknown log format '{}'",
                self.logging.format
            )));
        }

        self.network_pairs()?;

        if let Some(template) = &self.redirect {
            validate_template(template)?;
        }

        Ok(())
    }

    /// All WAN/LAN pairs, in interface then WAN order.
    ///
    /// Errors name the interface they were found on.
    pub fn network_pairs(&self) -> Result<Vec<NetworkPair>, ConfigError> {
        let mut pairs = Vec::new();
        for (interface, section) in &self.interfaces {
            let parsed = self.section_pairs(interface, section).map_err(|e| {
                ConfigError::Validation(format!("interface '{}': {}", interface, e))
            })?;
            pairs.extend(parsed);
        }
        Ok(pairs)
    }

    /// Same pairs as [`Config::network_pairs`], keeping the underlying
    /// domain error.
    pub fn view_pairs(&self) -> Result<Vec<NetworkPair>, DomainError> {
        let mut pairs = Vec::new();
        for (interface, section) in &self.interfaces {
            pairs.extend(self.section_pairs(interface, section)?);
        }
        Ok(pairs)
    }

    fn section_pairs(
        &self,
        interface: &str,
        section: &InterfaceSection,
    ) -> Result<Vec<NetworkPair>, DomainError> {
        let Some(views) = section.views()? else {
            return Ok(Vec::new());
        };

        views
            .into_iter()
            .map(|(wan, lan)| {
                let pair = NetworkPair::parse(interface, wan, lan)?;
                if pair.wan().prefix() < self.min_prefix_len {
                    return Err(DomainError::NetworkTooLarge {
                        network: pair.wan().to_string(),
                        min_prefix: self.min_prefix_len,
                    });
                }
                Ok(pair)
            })
            .collect()
    }

    pub fn redirect_template(&self) -> &str {
        self.redirect.as_deref().unwrap_or(DEFAULT_REDIRECT_TEMPLATE)
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("split-horizon.toml").exists() {
            Some("split-horizon.toml".to_string())
        } else if std::path::Path::new("/etc/split-horizon/config.toml").exists() {
            Some("/etc/split-horizon/config.toml".to_string())
        } else {
            None
        }
    }
}

fn validate_template(template: &str) -> Result<(), ConfigError> {
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            return Err(ConfigError::Validation(format!(
                "unterminated field in redirect template '{}'",
                template
            )));
        };
        let field = &after[..end];
        if field != "wan" && field != "lan" {
            return Err(ConfigError::Validation(format!(
                "unknown field '{{{}}}' in redirect template",
                field
            )));
        }
        rest = &after[end + 1..];
    }
    Ok(())
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub ifconfig_path: Option<String>,
}
