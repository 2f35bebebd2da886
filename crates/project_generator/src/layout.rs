use std::fs;
use std::path::Path;

use crate::error::GenerateError;

/// Directory skeleton of the target project, independent of the model
pub const PROJECT_DIRS: [&str; 11] = [
    "cmd/server",
    "internal/config",
    "internal/database",
    "internal/models",
    "internal/middleware",
    "internal/handlers",
    "internal/routes",
    "internal/services",
    "internal/utils",
    "pkg/logger",
    "migrations",
];

pub fn create_layout(output_dir: &Path) -> Result<(), GenerateError> {
    for dir in PROJECT_DIRS {
        let path = output_dir.join(dir);
        fs::create_dir_all(&path).map_err(|source| GenerateError::CreateDir { path, source })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_layout_is_created_and_idempotent() {
        let td = TempDir::new().unwrap();
        create_layout(td.path()).unwrap();
        create_layout(td.path()).unwrap();

        for dir in PROJECT_DIRS {
            assert!(td.path().join(dir).is_dir(), "{dir} missing");
        }
    }
}
