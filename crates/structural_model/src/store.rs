//! Reading and writing the intermediate analysis artifact.

use crate::model::StructuralModel;
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where `analyze` writes and `generate` reads the model unless told otherwise
pub const DEFAULT_MODEL_PATH: &str = "migration-tools/analysis_result.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("analysis result not found at {0}; run the analyze command first")]
    Missing(PathBuf),

    #[error("failed to read analysis result {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("analysis result {path} is not a valid structural model: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize structural model: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write analysis result {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Write the model as pretty-printed JSON, creating parent directories as needed
pub fn save_model(model: &StructuralModel, path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StoreError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json_text = serde_json::to_string_pretty(model)?;
    fs::write(path, json_text).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Structural model saved to {}", path.display());
    Ok(())
}

/// Read a model previously written by [`save_model`]
pub fn load_model(path: &Path) -> Result<StructuralModel, StoreError> {
    if !path.is_file() {
        return Err(StoreError::Missing(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let model: StructuralModel =
        serde_json::from_str(&text).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "Loaded structural model from {} ({} routes, {} tables)",
        path.display(),
        model.routes.len(),
        model.schema_tables.len()
    );
    Ok(model)
}
