//! Process-wide defaults loaded once from a YAML file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::core::{GenerationParameters, LlmError, LogStore};

pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_SAVE_DIR: &str = "logs";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    pub openai: OpenAiDefaults,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory for completion logs; created on startup if missing
    pub save_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from(DEFAULT_SAVE_DIR),
        }
    }
}

/// Generation defaults used when a call does not override them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpenAiDefaults {
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LlmError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LlmError::Config {
            message: format!("Failed to read config at {}", path.display()),
            source: Box::new(e),
        })?;

        Self::from_yaml_str(&content).map_err(|e| match e {
            LlmError::Config { source, .. } => LlmError::Config {
                message: format!("Invalid config YAML at {}", path.display()),
                source,
            },
            other => other,
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, LlmError> {
        serde_yaml::from_str(content).map_err(|e| LlmError::Config {
            message: "Invalid config YAML".to_string(),
            source: Box::new(e),
        })
    }

    /// Create the log directory (and parents) if it does not exist yet.
    pub fn prepare_save_dir(&self) -> Result<LogStore, LlmError> {
        let dir = &self.project.save_dir;
        fs::create_dir_all(dir).map_err(|e| LlmError::Config {
            message: format!("Failed to create save directory at {}", dir.display()),
            source: Box::new(e),
        })?;
        Ok(LogStore::new(dir.clone()))
    }

    pub fn default_parameters(&self) -> GenerationParameters {
        GenerationParameters {
            model: self.openai.model.clone(),
            temperature: self.openai.temperature,
            max_tokens: self.openai.max_tokens,
        }
    }
}
