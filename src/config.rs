use crate::cli::Cli;
use crate::namespace::DEFAULT_ALIAS;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Tag extracted when none is configured
pub const DEFAULT_TAG: &str = "name";

const CONFIG_NAMES: [&str; 4] = [
    "kml-extract.toml",
    "kml-extract.json",
    ".kml-extract.toml",
    ".kml-extract.json",
];

static NCNAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn ncname_regex() -> &'static Regex {
    NCNAME_REGEX.get_or_init(|| {
        Regex::new(r"^[\p{L}_][\p{L}\p{N}._-]*$").expect("Failed to compile NCName regex")
    })
}

/// Trait for abstracting environment variable access
pub trait EnvProvider {
    fn get(&self, key: &str) -> Option<String>;
}

/// System environment variable provider for production use
pub struct SystemEnvProvider;

impl EnvProvider for SystemEnvProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Missing required configuration field: {field}")]
    MissingField { field: String },

    #[error("Configuration validation error: {0}")]
    Validation(String),

    #[error("Unsupported configuration file format: {0}")]
    UnsupportedFormat(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Layered configuration as read from files, the environment and the CLI.
/// Unset fields fall through to the next layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    /// KML file to read
    pub input: Option<PathBuf>,
    /// Tag path to extract
    pub tag: Option<String>,
    /// Text file to write
    pub output: Option<PathBuf>,
    /// Prefix bound to the document namespace
    pub namespace_alias: Option<String>,
}

/// Immutable settings for one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub input_path: PathBuf,
    pub tag_path: String,
    pub output_path: PathBuf,
    pub namespace_alias: String,
}

impl ExtractConfig {
    pub fn new(
        input_path: impl Into<PathBuf>,
        tag_path: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input_path: input_path.into(),
            tag_path: tag_path.into(),
            output_path: output_path.into(),
            namespace_alias: DEFAULT_ALIAS.to_string(),
        }
    }

    pub fn with_namespace_alias(mut self, alias: impl Into<String>) -> Self {
        self.namespace_alias = alias.into();
        self
    }
}

/// Configuration manager for loading and merging configurations
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration with precedence: defaults -> file -> environment -> CLI
    pub fn load_config(cli: &Cli) -> Result<ExtractConfig> {
        Self::load_config_with(cli, &SystemEnvProvider)
    }

    /// Same as [`ConfigManager::load_config`] with a custom environment provider
    pub fn load_config_with(cli: &Cli, env: &impl EnvProvider) -> Result<ExtractConfig> {
        let mut config = Config::default();

        if let Some(config_path) = &cli.config {
            let file_config = Self::load_from_file(config_path)?;
            config = Self::merge_configs(config, file_config);
        } else if let Some(found_config) = Self::find_config_file()? {
            config = Self::merge_configs(config, found_config);
        }

        config = Self::apply_environment_overrides_with(env, config);
        config = Self::merge_with_cli(config, cli);

        Self::into_extract_config(config)
    }

    /// Load configuration from a file (TOML or JSON)
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Io(e),
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => {
                // Try to parse as TOML first, then JSON
                if let Ok(config) = toml::from_str::<Config>(&content) {
                    Ok(config)
                } else {
                    Ok(serde_json::from_str(&content)?)
                }
            }
        }
    }

    /// Find configuration file in standard locations
    pub fn find_config_file() -> Result<Option<Config>> {
        for name in &CONFIG_NAMES {
            let path = PathBuf::from(name);
            if path.exists() {
                return Ok(Some(Self::load_from_file(&path)?));
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let app_config_dir = config_dir.join("kml-extract");
            for name in &CONFIG_NAMES {
                let path = app_config_dir.join(name);
                if path.exists() {
                    return Ok(Some(Self::load_from_file(&path)?));
                }
            }
        }

        Ok(None)
    }

    /// Apply `KML_EXTRACT_*` environment overrides
    pub fn apply_environment_overrides_with(env: &impl EnvProvider, mut config: Config) -> Config {
        if let Some(input) = env.get("KML_EXTRACT_INPUT") {
            config.input = Some(PathBuf::from(input));
        }
        if let Some(tag) = env.get("KML_EXTRACT_TAG") {
            config.tag = Some(tag);
        }
        if let Some(output) = env.get("KML_EXTRACT_OUTPUT") {
            config.output = Some(PathBuf::from(output));
        }
        if let Some(alias) = env.get("KML_EXTRACT_NAMESPACE_ALIAS") {
            config.namespace_alias = Some(alias);
        }
        config
    }

    /// Merge CLI arguments with configuration (CLI takes precedence)
    pub fn merge_with_cli(config: Config, cli: &Cli) -> Config {
        Self::merge_configs(
            config,
            Config {
                input: cli.input.clone(),
                tag: cli.tag.clone(),
                output: cli.output.clone(),
                namespace_alias: cli.namespace_alias.clone(),
            },
        )
    }

    /// Merge two configurations (second takes precedence for set values)
    pub fn merge_configs(base: Config, override_config: Config) -> Config {
        Config {
            input: override_config.input.or(base.input),
            tag: override_config.tag.or(base.tag),
            output: override_config.output.or(base.output),
            namespace_alias: override_config.namespace_alias.or(base.namespace_alias),
        }
    }

    /// Validate configuration values
    pub fn validate_config(config: &Config) -> Result<()> {
        if config.input.is_none() {
            return Err(ConfigError::MissingField {
                field: "input".to_string(),
            });
        }
        if config.output.is_none() {
            return Err(ConfigError::MissingField {
                field: "output".to_string(),
            });
        }

        if let Some(tag) = &config.tag
            && tag.trim().is_empty()
        {
            return Err(ConfigError::Validation("Tag must not be empty".to_string()));
        }

        if let Some(alias) = &config.namespace_alias
            && !ncname_regex().is_match(alias)
        {
            return Err(ConfigError::Validation(format!(
                "Invalid namespace alias: {}",
                alias
            )));
        }

        Ok(())
    }

    /// Validate and fill in defaults
    pub fn into_extract_config(config: Config) -> Result<ExtractConfig> {
        Self::validate_config(&config)?;

        let missing = |field: &str| ConfigError::MissingField {
            field: field.to_string(),
        };

        Ok(ExtractConfig {
            input_path: config.input.ok_or_else(|| missing("input"))?,
            tag_path: config.tag.unwrap_or_else(|| DEFAULT_TAG.to_string()),
            output_path: config.output.ok_or_else(|| missing("output"))?,
            namespace_alias: config
                .namespace_alias
                .unwrap_or_else(|| DEFAULT_ALIAS.to_string()),
        })
    }
}
