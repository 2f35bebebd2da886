//! Go/Fiber project generator
//!
//! Turns a [`StructuralModel`] into the skeleton of a Go service. Rendering is
//! a pure function of the model and the module name ([`render_project`]);
//! [`GoProjectGenerator::generate`] renders everything first and only then
//! touches the output directory.

pub mod artifact;
pub mod config_contract;
pub mod core_schema;
pub mod error;
pub mod inventory;
pub mod layout;
pub mod pkg_config;
pub mod records;
pub mod templates;
pub mod wiring;

use log::{debug, info, warn};
use minijinja::context;
use std::fs;
use std::path::{Path, PathBuf};
use structural_model::StructuralModel;

pub use artifact::{Artifact, ModelInput};
pub use error::GenerateError;
pub use pkg_config::GeneratorConfig;

use records::EntityCategory;
use templates::Templates;

const NO_INPUTS: &[ModelInput] = &[];
const ROUTES_INPUTS: &[ModelInput] = &[ModelInput::Routes];
const SERVICES_INPUTS: &[ModelInput] = &[ModelInput::Services];
const SCHEMA_INPUTS: &[ModelInput] = &[ModelInput::SchemaTables];
const INVENTORY_INPUTS: &[ModelInput] = &[
    ModelInput::Routes,
    ModelInput::Controllers,
    ModelInput::Middleware,
    ModelInput::Dependencies,
];

/// Reject module names Go would not accept in `go.mod`
pub fn validate_module_name(module_name: &str) -> Result<(), GenerateError> {
    if module_name.is_empty() || module_name.chars().any(char::is_whitespace) {
        return Err(GenerateError::InvalidModuleName(module_name.to_string()));
    }
    Ok(())
}

/// Render every artifact of the target project without writing anything
pub fn render_project(
    model: &StructuralModel,
    module_name: &str,
) -> Result<Vec<Artifact>, GenerateError> {
    validate_module_name(module_name)?;
    let templates = Templates::new()?;
    let groups = config_contract::group_views();
    let pending = wiring::pending_groups(model);
    let mut artifacts = Vec::new();

    let fixed = |name: &str| templates.render(name, context! { module_name => module_name });

    artifacts.push(Artifact::new("go.mod", fixed("go.mod.txt")?, NO_INPUTS));
    artifacts.push(Artifact::new("cmd/server/main.go", fixed("main.go.txt")?, NO_INPUTS));
    artifacts.push(Artifact::new(
        "internal/config/config.go",
        templates.render("config.go.txt", context! { groups => &groups })?,
        NO_INPUTS,
    ));
    artifacts.push(Artifact::new(
        ".env.example",
        templates.render("env.example.txt", context! { groups => &groups })?,
        NO_INPUTS,
    ));
    artifacts.push(Artifact::new(
        "internal/database/database.go",
        templates.render(
            "database.go.txt",
            context! { tables => core_schema::table_views("\t\t") },
        )?,
        NO_INPUTS,
    ));
    artifacts.push(Artifact::new(
        "migrations/0001_core_schema.sql",
        templates.render(
            "core_schema.sql.txt",
            context! { tables => core_schema::table_views("") },
        )?,
        NO_INPUTS,
    ));

    for category in [EntityCategory::Account, EntityCategory::Camera] {
        if !category.is_emitted(model) {
            debug!("No {:?} table discovered, skipping {}", category, category.model_file());
            continue;
        }
        let inputs = match category {
            EntityCategory::Account => NO_INPUTS,
            EntityCategory::Camera => SCHEMA_INPUTS,
        };
        artifacts.push(Artifact::new(
            category.model_file(),
            fixed(category.template())?,
            inputs,
        ));
    }

    artifacts.push(Artifact::new(
        "internal/middleware/auth.go",
        fixed("auth_middleware.go.txt")?,
        NO_INPUTS,
    ));
    artifacts.push(Artifact::new(
        "internal/handlers/auth.go",
        fixed("auth_handler.go.txt")?,
        NO_INPUTS,
    ));
    artifacts.push(Artifact::new(
        "internal/routes/routes.go",
        templates.render(
            "routes.go.txt",
            context! { module_name => module_name, pending => &pending },
        )?,
        ROUTES_INPUTS,
    ));
    artifacts.push(Artifact::new(
        "internal/services/services.go",
        templates.render(
            "services.go.txt",
            context! { services => inventory::service_views(model) },
        )?,
        SERVICES_INPUTS,
    ));
    artifacts.push(Artifact::new("pkg/logger/logger.go", fixed("logger.go.txt")?, NO_INPUTS));
    artifacts.push(Artifact::new("Dockerfile", fixed("Dockerfile.txt")?, NO_INPUTS));
    artifacts.push(Artifact::new("Makefile", fixed("Makefile.txt")?, NO_INPUTS));
    artifacts.push(Artifact::new(
        "MIGRATION.md",
        templates.render(
            "migration.md.txt",
            context! {
                route_total => model.routes.len(),
                pending_total => wiring::pending_count(&pending),
                method_counts => inventory::method_counts(model),
                controllers => inventory::controller_views(model),
                middleware => inventory::middleware_views(model),
                dependencies => inventory::dependency_views(model),
            },
        )?,
        INVENTORY_INPUTS,
    ));

    Ok(artifacts)
}

/// One file written by [`GoProjectGenerator::generate`]
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub inputs: &'static [ModelInput],
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub files: Vec<GeneratedFile>,
    /// Discovered routes left for manual porting in the extension point
    pub pending_routes: usize,
}

pub struct GoProjectGenerator {
    module_name: String,
    output_dir: PathBuf,
    clean_output: bool,
}

impl GoProjectGenerator {
    pub fn new(module_name: impl Into<String>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            module_name: module_name.into(),
            output_dir: output_dir.as_ref().to_path_buf(),
            clean_output: false,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            module_name: config.module_name.clone(),
            output_dir: PathBuf::from(&config.output_dir),
            clean_output: config.clean_output,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn generate(&self, model: &StructuralModel) -> Result<GenerationReport, GenerateError> {
        info!(
            "Generating Go project {} into {}",
            self.module_name,
            self.output_dir.display()
        );
        let artifacts = render_project(model, &self.module_name)?;

        if self.clean_output {
            self.clean()?;
        }
        layout::create_layout(&self.output_dir)?;

        let mut files = Vec::with_capacity(artifacts.len());
        for artifact in &artifacts {
            let path = self.output_dir.join(&artifact.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&path, &artifact.contents).map_err(|source| GenerateError::WriteFile {
                path: path.clone(),
                source,
            })?;
            debug!("Wrote {}", path.display());
            files.push(GeneratedFile {
                path,
                inputs: artifact.inputs,
            });
        }

        let pending_routes = wiring::pending_count(&wiring::pending_groups(model));
        info!(
            "Generated {} files, {} routes left for manual porting",
            files.len(),
            pending_routes
        );
        Ok(GenerationReport {
            output_dir: self.output_dir.clone(),
            files,
            pending_routes,
        })
    }

    fn clean(&self) -> Result<(), GenerateError> {
        if !self.output_dir.exists() {
            return Ok(());
        }
        if self.output_dir.file_name().is_none() {
            warn!(
                "Refusing to clean {}, writing over it instead",
                self.output_dir.display()
            );
            return Ok(());
        }
        info!("Removing existing output {}", self.output_dir.display());
        fs::remove_dir_all(&self.output_dir).map_err(|source| GenerateError::CleanDir {
            path: self.output_dir.clone(),
            source,
        })
    }
}
