//! On-disk record of successful completions.
//!
//! Each record is `{dir}/llm_{unix_seconds}.json`, pretty-printed. Two
//! records written within the same second share a name and the later one
//! replaces the earlier.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use super::{error::LlmError, types::CompletionResult};

#[derive(Debug, Clone)]
pub struct LogStore {
    dir: PathBuf,
}

impl LogStore {
    /// Use `dir` as the log directory. The directory is not created here; see
    /// [`Config::prepare_save_dir`](crate::Config::prepare_save_dir).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, timestamp: i64) -> PathBuf {
        self.dir.join(format!("llm_{timestamp}.json"))
    }

    /// Write `result` under the current unix timestamp.
    pub async fn persist(&self, result: &CompletionResult) -> Result<PathBuf, LlmError> {
        self.persist_at(result, Utc::now().timestamp()).await
    }

    pub async fn persist_at(
        &self,
        result: &CompletionResult,
        timestamp: i64,
    ) -> Result<PathBuf, LlmError> {
        let path = self.path_for(timestamp);

        let body = serde_json::to_vec_pretty(result).map_err(|e| LlmError::LogPersistence {
            path: path.clone(),
            source: e.into(),
        })?;

        tokio::fs::write(&path, body)
            .await
            .map_err(|source| LlmError::LogPersistence {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), "Wrote completion log");
        Ok(path)
    }
}
