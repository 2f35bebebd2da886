//! Location of the shared `config.toml` read by the analyzer and the generator.

use std::path::PathBuf;

/// Places searched for `config.toml` when no explicit path is given
pub const POSSIBLE_PATHS: [&str; 3] = [
    "config/config.toml",       // From project root
    "../config/config.toml",    // From crates subdirectory
    "../../config/config.toml", // From deeper nested directories
];

/// First existing `config.toml` among [`POSSIBLE_PATHS`], relative to the working directory
pub fn locate_config_file() -> Option<PathBuf> {
    POSSIBLE_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}
