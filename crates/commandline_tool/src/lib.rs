pub mod report;

use anyhow::{Context, Result};
use backend_analy::BackendAnalyzer;
use clap::{Parser, Subcommand};
use log::info;
use project_generator::{GenerationReport, GoProjectGenerator};
use std::path::{Path, PathBuf};
use structural_model::{DEFAULT_MODEL_PATH, StructuralModel, load_model, save_model};

#[derive(Parser, Debug)]
#[command(name = "backend-migrate")]
#[command(version = "0.1")]
#[command(about = "Migrate a Node.js/Fastify backend to a Go/Fiber skeleton", long_about = None)]
pub struct Cli {
    /// Show debug logs on the console
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    /// Config file (default: config/config.toml, searched upwards two levels)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract the structural model of a backend and save it as JSON
    Analyze {
        /// Backend source root
        #[arg(long, value_name = "DIR", default_value = "./backend")]
        backend_dir: PathBuf,

        /// Where to write the analysis result
        #[arg(long, short, value_name = "FILE", default_value = DEFAULT_MODEL_PATH)]
        output: PathBuf,
    },

    /// Generate the Go project from a saved analysis result
    Generate {
        /// Go module name (overrides the config file)
        #[arg(value_name = "MODULE")]
        module: Option<String>,

        /// Analysis result written by `analyze`
        #[arg(long, value_name = "FILE", default_value = DEFAULT_MODEL_PATH)]
        analysis: PathBuf,

        /// Output directory (overrides the config file)
        #[arg(long, short, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Analyze `backend_dir` and save the model to `output`
pub fn run_analyze(
    backend_dir: &Path,
    output: &Path,
    config: Option<&Path>,
) -> Result<StructuralModel> {
    let analyzer_config = backend_analy::pkg_config::load_config(config)
        .context("failed to load analyzer configuration")?;

    let model = BackendAnalyzer::new(backend_dir, analyzer_config).analyze();
    save_model(&model, output)?;
    info!(
        "Analysis of {} saved to {}",
        backend_dir.display(),
        output.display()
    );
    Ok(model)
}

/// Load the model from `analysis` and generate the Go project.
/// Nothing is written when the analysis result cannot be loaded.
pub fn run_generate(
    module: Option<&str>,
    analysis: &Path,
    output_dir: Option<&Path>,
    config: Option<&Path>,
) -> Result<GenerationReport> {
    let mut generator_config = project_generator::pkg_config::load_config(config)
        .context("failed to load generator configuration")?;
    if let Some(module) = module {
        generator_config.module_name = module.to_string();
    }
    if let Some(dir) = output_dir {
        generator_config.output_dir = dir.to_string_lossy().into_owned();
    }

    let model = load_model(analysis)?;
    let generator = GoProjectGenerator::from_config(&generator_config);
    let report = generator
        .generate(&model)
        .with_context(|| format!("failed to generate {}", generator.output_dir().display()))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::try_parse_from(["backend-migrate", "analyze"]).unwrap();
        assert!(!cli.debug);
        match cli.command {
            Commands::Analyze {
                backend_dir,
                output,
            } => {
                assert_eq!(backend_dir, PathBuf::from("./backend"));
                assert_eq!(output, PathBuf::from(DEFAULT_MODEL_PATH));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_generate_with_module_and_global_flags() {
        let cli = Cli::try_parse_from([
            "backend-migrate",
            "generate",
            "github.com/acme/cctv",
            "--output-dir",
            "out",
            "-d",
            "--config",
            "custom.toml",
        ])
        .unwrap();

        assert!(cli.debug);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        match cli.command {
            Commands::Generate {
                module,
                analysis,
                output_dir,
            } => {
                assert_eq!(module.as_deref(), Some("github.com/acme/cctv"));
                assert_eq!(analysis, PathBuf::from(DEFAULT_MODEL_PATH));
                assert_eq!(output_dir, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["backend-migrate", "translate"]).is_err());
    }
}
