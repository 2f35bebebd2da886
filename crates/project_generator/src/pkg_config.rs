use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use structural_model::locate_config_file;

pub const DEFAULT_MODULE_NAME: &str = "github.com/yourusername/cctv-backend";
pub const DEFAULT_OUTPUT_DIR: &str = "backend-go";

/// Target project settings (`[generator]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub output_dir: String,
    /// Go module path written to go.mod and used in every internal import
    pub module_name: String,
    /// Remove an existing output directory before writing
    pub clean_output: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            module_name: DEFAULT_MODULE_NAME.to_string(),
            clean_output: false,
        }
    }
}

/// Load the generator settings from `explicit`, or from the default locations.
/// No config file at all means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<GeneratorConfig, ConfigError> {
    let path = match explicit {
        Some(path) if path.exists() => path.to_path_buf(),
        Some(path) => {
            return Err(ConfigError::NotFound(format!(
                "config file {} does not exist",
                path.display()
            )));
        }
        None => match locate_config_file() {
            Some(path) => path,
            None => return Ok(GeneratorConfig::default()),
        },
    };

    let settings = Config::builder()
        .add_source(File::from(path.as_path()))
        .build()?;

    match settings.get::<GeneratorConfig>("generator") {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(_)) => Ok(GeneratorConfig::default()),
        Err(e) => Err(e),
    }
}
