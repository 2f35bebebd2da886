use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use structural_model::locate_config_file;

/// Source tree layout and rule settings for the analyzer (`[analyzer]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Route declaration files, relative to the source root
    pub routes_dir: String,
    pub controllers_dir: String,
    pub middleware_dir: String,
    pub services_dir: String,
    pub migrations_dir: String,
    /// Single schema setup file scanned in addition to the migrations
    pub schema_setup_file: String,
    /// Dependency manifest, relative to the source root
    pub manifest_file: String,
    /// Extensions (without dot) of route/controller/middleware/service files
    pub source_extensions: Vec<String>,
    /// Extensions of migration files
    pub migration_extensions: Vec<String>,
    /// Removed from the end of a route file name when deriving its controller
    pub route_suffix: String,
    /// Appended to derive the owning controller name
    pub controller_suffix: String,
    /// Additional route regexes tried after the built-in ones.
    /// Group 1 = method, group 2 = path, optional group 3 = handler.
    pub extra_route_patterns: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            routes_dir: "routes".to_string(),
            controllers_dir: "controllers".to_string(),
            middleware_dir: "middleware".to_string(),
            services_dir: "services".to_string(),
            migrations_dir: "database/migrations".to_string(),
            schema_setup_file: "database/setup.js".to_string(),
            manifest_file: "package.json".to_string(),
            source_extensions: vec!["js".to_string()],
            migration_extensions: vec!["js".to_string(), "sql".to_string()],
            route_suffix: "Routes".to_string(),
            controller_suffix: "Controller".to_string(),
            extra_route_patterns: Vec::new(),
        }
    }
}

/// Load the analyzer settings from `explicit`, or from the default locations
pub fn load_config(explicit: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
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
            None => return Ok(AnalyzerConfig::default()),
        },
    };

    let settings = Config::builder()
        .add_source(File::from(path.as_path()))
        .build()?;

    match settings.get::<AnalyzerConfig>("analyzer") {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(_)) => Ok(AnalyzerConfig::default()),
        Err(e) => Err(e),
    }
}
