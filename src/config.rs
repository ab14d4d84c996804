use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::domain::{Bump, Format};
use crate::error::{NextTagError, Result};

/// File name searched in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "nexttag.toml";

/// File name searched in the user configuration directory.
pub const USER_CONFIG_FILE: &str = ".nexttag.toml";

/// Represents the complete configuration for next-tag.
///
/// Holds the bump and format directives fed to the version engine, the git
/// settings used when tagging, and logging options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub bump: Bump,

    #[serde(default)]
    pub format: Format,

    /// Replaces the prefix detected on the current tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Git settings used when the computed tag is created or pushed.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(default)]
    pub create: bool,

    #[serde(default)]
    pub push: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            remote: default_remote(),
            token: None,
            create: false,
            push: false,
        }
    }
}

/// Output format of log records.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Text => f.write_str("text"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = NextTagError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(NextTagError::config(format!(
                "invalid output '{}', expected text or json",
                other
            ))),
        }
    }
}

/// Logging options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub format: LogFormat,
}

/// Values given on the command line or through the environment.
///
/// `None` (or `false` for switches) leaves the loaded value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub bump: Option<Bump>,
    pub format: Option<Format>,
    pub prefix: Option<String>,
    pub remote: Option<String>,
    pub token: Option<String>,
    pub create: bool,
    pub push: bool,
    pub verbose: bool,
    pub log_format: Option<LogFormat>,
}

impl Config {
    /// Layer command-line and environment values over this configuration
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(bump) = overrides.bump {
            self.bump = bump;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if overrides.prefix.is_some() {
            self.prefix = overrides.prefix;
        }
        if let Some(remote) = overrides.remote {
            self.git.remote = remote;
        }
        if overrides.token.is_some() {
            self.git.token = overrides.token;
        }
        self.git.create |= overrides.create;
        self.git.push |= overrides.push;
        self.logging.verbose |= overrides.verbose;
        if let Some(log_format) = overrides.log_format {
            self.logging.format = log_format;
        }
        self
    }

    /// Whether the computed tag is written to the repository.
    ///
    /// Pushing needs the tag locally, so `push` implies `create`.
    pub fn creates_tag(&self) -> bool {
        self.git.create || self.git.push
    }

    /// Copy of the configuration safe to display, with secrets masked
    pub fn masked(&self) -> Self {
        let mut masked = self.clone();
        masked.git.token = masked
            .git
            .token
            .as_ref()
            .map(|token| "-".repeat(token.chars().count()));
        masked
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| NextTagError::config(format!("cannot serialize configuration: {}", e)))
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nexttag.toml` in current directory
/// 3. `.nexttag.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        Path::new(path).to_path_buf()
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        Path::new(LOCAL_CONFIG_FILE).to_path_buf()
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");

    let config_str = fs::read_to_string(&path).map_err(|e| {
        NextTagError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;

    parse_config(&config_str)
}

/// Parses configuration from a TOML string
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| NextTagError::config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bump, Bump::Patch);
        assert_eq!(config.format, Format::Auto);
        assert_eq!(config.git.remote, "origin");
        assert!(!config.creates_tag());
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r#"
format = "majorminor"

[git]
push = true
"#,
        )
        .unwrap();

        assert_eq!(config.bump, Bump::Patch);
        assert_eq!(config.format, Format::MajorMinor);
        assert_eq!(config.git.remote, "origin");
        assert!(config.creates_tag());
    }

    #[test]
    fn test_parse_rejects_unknown_bump() {
        let err = parse_config(r#"bump = "huge""#).unwrap_err();
        assert!(matches!(err, NextTagError::Config(_)));
    }

    #[test]
    fn test_apply_overrides() {
        let config = Config::default().apply(ConfigOverrides {
            bump: Some(Bump::Major),
            prefix: Some("release-".to_string()),
            push: true,
            log_format: Some(LogFormat::Json),
            ..ConfigOverrides::default()
        });

        assert_eq!(config.bump, Bump::Major);
        assert_eq!(config.format, Format::Auto);
        assert_eq!(config.prefix.as_deref(), Some("release-"));
        assert!(config.git.push);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_apply_keeps_file_values_without_overrides() {
        let file = parse_config("bump = \"minor\"\n[git]\nremote = \"upstream\"\n").unwrap();
        let config = file.clone().apply(ConfigOverrides::default());
        assert_eq!(config, file);
    }

    #[test]
    fn test_masked_hides_token() {
        let mut config = Config::default();
        config.git.token = Some("secret".to_string());

        let shown = config.masked().to_toml().unwrap();
        assert!(shown.contains("------"));
        assert!(!shown.contains("secret"));
        assert_eq!(config.git.token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("yaml".parse::<LogFormat>().is_err());
    }
}
