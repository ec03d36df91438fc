use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "fitness.toml";
pub const ENV_PREFIX: &str = "FITNESS_";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Account sheet, created with the fixed schema when missing.
    pub users_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            users_file: PathBuf::from("data/users.csv"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub calories_file: PathBuf,
    pub exercise_file: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            calories_file: PathBuf::from("data/calories.csv"),
            exercise_file: PathBuf::from("data/exercise.csv"),
        }
    }
}

/// Forest hyperparameters and the knobs around a single prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub n_trees: usize,
    pub max_depth: usize,
    pub max_features: usize,
    pub test_size: f64,
    /// Seed of the train/test split.
    pub seed: u64,
    /// Seed of the forest itself; unset means a fresh forest every request.
    pub forest_seed: Option<u64>,
    /// Half-width, in kilocalories, of the similar-results window.
    pub window: f64,
    pub similar_samples: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            n_trees: 1000,
            max_depth: 6,
            max_features: 3,
            test_size: 0.2,
            seed: 1,
            forest_seed: None,
            window: 10.0,
            similar_samples: 5,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub data: DataConfig,
    pub model: ModelConfig,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Figment(#[from] figment::Error),

    #[error("server port must be greater than 0")]
    InvalidPort,

    #[error("model.{0} must be greater than 0")]
    ZeroParameter(&'static str),

    #[error("model.test_size must lie strictly between 0 and 1, got {0}")]
    InvalidTestSize(f64),

    #[error("model.window must not be negative, got {0}")]
    NegativeWindow(f64),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then `fitness.toml` if present, then `FITNESS_*` variables
    /// (`FITNESS_SERVER_PORT=9000`, `FITNESS_MODEL_N_TREES=200`, ...).
    pub fn load() -> Result<AppConfig, ConfigError> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).map(section_key))
            .extract()?;

        Self::validate(&config)?;
        Ok(config)
    }

    pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        let model = &config.model;
        if model.n_trees == 0 {
            return Err(ConfigError::ZeroParameter("n_trees"));
        }
        if model.max_depth == 0 {
            return Err(ConfigError::ZeroParameter("max_depth"));
        }
        if model.max_features == 0 {
            return Err(ConfigError::ZeroParameter("max_features"));
        }
        if !(model.test_size > 0.0 && model.test_size < 1.0) {
            return Err(ConfigError::InvalidTestSize(model.test_size));
        }
        if !(model.window >= 0.0) {
            return Err(ConfigError::NegativeWindow(model.window));
        }

        Ok(())
    }
}

/// `SERVER_PORT` -> `server.port`, `MODEL_N_TREES` -> `model.n_trees`.
/// Only the first underscore separates the section so field names keep theirs.
fn section_key(key: &figment::value::UncasedStr) -> figment::value::Uncased<'_> {
    let lowered = key.as_str().to_ascii_lowercase();
    match lowered.split_once('_') {
        Some((section, field)) => format!("{section}.{field}").into(),
        None => lowered.into(),
    }
}
