//! Backend analyzer
//!
//! Recovers a [`StructuralModel`] from a Node.js backend source tree using
//! regex rules instead of a parser. Every category is best effort: a missing
//! directory gives an empty result and an unreadable file is skipped, so
//! [`BackendAnalyzer::analyze`] never fails.

pub mod dependencies;
pub mod exports;
pub mod middleware;
pub mod pkg_config;
pub mod routes;
pub mod scan;
pub mod schema;

use log::{info, warn};
use std::path::{Path, PathBuf};
use structural_model::StructuralModel;

pub use pkg_config::AnalyzerConfig;

pub struct BackendAnalyzer {
    root: PathBuf,
    config: AnalyzerConfig,
}

impl BackendAnalyzer {
    pub fn new(root: impl AsRef<Path>, config: AnalyzerConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
        }
    }

    /// Run every category once, in model order
    pub fn analyze(&self) -> StructuralModel {
        info!("Analyzing backend structure at {}", self.root.display());
        if !self.root.is_dir() {
            warn!(
                "Source root {} does not exist, every category will be empty",
                self.root.display()
            );
        }

        let routes = routes::extract_routes(&self.root, &self.config);
        let controllers = exports::extract_controllers(&self.root, &self.config);
        let middleware = middleware::extract_middleware(&self.root, &self.config);
        let services = exports::extract_services(&self.root, &self.config);
        let schema_tables = schema::extract_schema_tables(&self.root, &self.config);
        let dependencies =
            dependencies::extract_dependencies(&self.root.join(&self.config.manifest_file));

        StructuralModel {
            routes,
            controllers,
            middleware,
            services,
            schema_tables,
            dependencies,
        }
    }
}

/// Analyze `root` with the default layout
pub fn analyze_backend(root: &Path) -> StructuralModel {
    BackendAnalyzer::new(root, AnalyzerConfig::default()).analyze()
}
