use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use phonesift_core::domain::OutputOrder;
use phonesift_core::rules::{validate_columns, BatchSize, DEFAULT_COLUMNS};
use phonesift_core::CoreError;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonesift";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_OUTPUT_PREFIX: &str = "contatos_consolidados";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub input_path: Option<PathBuf>,
    pub output_prefix: PathBuf,
    pub batch_size: BatchSize,
    pub columns: Vec<usize>,
    pub order: OutputOrder,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            output_prefix: PathBuf::from(DEFAULT_OUTPUT_PREFIX),
            batch_size: BatchSize::default(),
            columns: DEFAULT_COLUMNS.to_vec(),
            order: OutputOrder::default(),
        }
    }
}

/// Values given on the command line; each one replaces the file setting.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input_path: Option<PathBuf>,
    pub output_prefix: Option<PathBuf>,
    pub batch_size: Option<usize>,
    pub columns: Option<Vec<usize>>,
    pub order: Option<OutputOrder>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid {field} path: must not be empty")]
    EmptyPath { field: &'static str },
    #[error("invalid batch_size value: {0}")]
    InvalidBatchSize(usize),
    #[error("invalid columns: {0}")]
    InvalidColumns(#[source] CoreError),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    input: Option<PathBuf>,
    output_prefix: Option<PathBuf>,
    batch_size: Option<usize>,
    columns: Option<Vec<usize>>,
    order: Option<OutputOrder>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    load_with(config_path, Overrides::default())
}

pub fn load_with(config_path: Option<PathBuf>, overrides: Overrides) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => Some(path),
        Err(ConfigError::MissingHomeDir) if !required => None,
        Err(ConfigError::InvalidConfigPath(_)) if !required => None,
        Err(err) => return Err(err),
    };
    let parsed = match path {
        Some(path) => load_at_path(&path, required)?.unwrap_or_default(),
        None => ConfigFile::default(),
    };
    merge_config(parsed, overrides)
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<ConfigFile>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(parsed))
}

fn merge_config(parsed: ConfigFile, overrides: Overrides) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(input) = overrides.input_path.or(parsed.input) {
        config.input_path = Some(non_empty_path(input, "input")?);
    }

    if let Some(prefix) = overrides.output_prefix.or(parsed.output_prefix) {
        config.output_prefix = non_empty_path(prefix, "output_prefix")?;
    }

    if let Some(size) = overrides.batch_size.or(parsed.batch_size) {
        config.batch_size =
            BatchSize::new(size).map_err(|_| ConfigError::InvalidBatchSize(size))?;
    }

    if let Some(columns) = overrides.columns.or(parsed.columns) {
        config.columns = validate_columns(&columns).map_err(ConfigError::InvalidColumns)?;
    }

    if let Some(order) = overrides.order.or(parsed.order) {
        config.order = order;
    }

    Ok(config)
}

fn non_empty_path(path: PathBuf, field: &'static str) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyPath { field });
    }
    Ok(path)
}
