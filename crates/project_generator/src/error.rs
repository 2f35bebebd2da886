use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid Go module name {0:?}: it must be non-empty and contain no whitespace")]
    InvalidModuleName(String),

    #[error("failed to prepare output directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to clean output directory {path}: {source}")]
    CleanDir { path: PathBuf, source: io::Error },

    #[error("failed to write {path}: {source}")]
    WriteFile { path: PathBuf, source: io::Error },

    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}
