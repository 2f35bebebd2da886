//! Controller and service extraction: exported symbol names per module file.

use crate::pkg_config::AnalyzerConfig;
use crate::scan::{category_files, file_stem, read_source, relative_location};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use structural_model::{Controller, Service};

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("Invalid export regex"))
        .collect()
}

static CONTROLLER_EXPORTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"export\s+async\s+function\s+(\w+)",
        r"export\s+const\s+(\w+)\s*=\s*async",
        r"export\s+function\s+(\w+)",
    ])
});

static SERVICE_EXPORTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"export\s+(?:async\s+)?function\s+(\w+)",
        r"export\s+const\s+(\w+)\s*=",
        r"export\s+class\s+(\w+)",
    ])
});

/// Which set of export rules applies to a module file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportCategory {
    Controller,
    Service,
}

impl ExportCategory {
    pub fn rules(&self) -> &'static [Regex] {
        match self {
            ExportCategory::Controller => &CONTROLLER_EXPORTS,
            ExportCategory::Service => &SERVICE_EXPORTS,
        }
    }
}

/// Union of the names captured by every rule. Async and plain functions are not told apart.
pub fn exported_symbols(text: &str, rules: &[Regex]) -> BTreeSet<String> {
    rules
        .iter()
        .flat_map(|rule| rule.captures_iter(text))
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().to_string())
        .collect()
}

/// (name, location, exported symbols) for every readable file of a category directory
fn scan_modules(
    root: &Path,
    dir: &str,
    config: &AnalyzerConfig,
    category: ExportCategory,
) -> Vec<(String, String, BTreeSet<String>)> {
    let mut modules = Vec::new();
    for file in category_files(&root.join(dir), &config.source_extensions) {
        let Some(text) = read_source(&file) else {
            continue;
        };
        let symbols = exported_symbols(&text, category.rules());
        debug!("{}: {} exported symbols", file.display(), symbols.len());
        modules.push((file_stem(&file), relative_location(root, &file), symbols));
    }
    modules
}

pub fn extract_controllers(root: &Path, config: &AnalyzerConfig) -> Vec<Controller> {
    let controllers: Vec<Controller> = scan_modules(
        root,
        &config.controllers_dir,
        config,
        ExportCategory::Controller,
    )
    .into_iter()
    .map(|(name, source_location, exported_functions)| Controller {
        name,
        source_location,
        exported_functions,
    })
    .collect();

    info!("Found {} controllers", controllers.len());
    controllers
}

pub fn extract_services(root: &Path, config: &AnalyzerConfig) -> Vec<Service> {
    let services: Vec<Service> =
        scan_modules(root, &config.services_dir, config, ExportCategory::Service)
            .into_iter()
            .map(|(name, source_location, exported_functions)| Service {
                name,
                source_location,
                exported_functions,
            })
            .collect();

    info!("Found {} services", services.len());
    services
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controller_async_and_const_exports() {
        let text = r#"
export async function login(request, reply) {}
export const logout = async (request, reply) => {};
"#;
        let symbols = exported_symbols(text, ExportCategory::Controller.rules());
        let expected: BTreeSet<String> =
            ["login", "logout"].iter().map(|s| s.to_string()).collect();
        assert_eq!(symbols, expected);
    }

    #[test]
    fn test_symbol_matched_by_two_rules_appears_once() {
        let text = "export function getStatus() {}\nexport const getStatus = 1;\n";
        let symbols = exported_symbols(text, ExportCategory::Service.rules());
        assert_eq!(symbols.len(), 1);
        assert!(symbols.contains("getStatus"));
    }

    #[test]
    fn test_controller_rules_ignore_non_async_const() {
        let text = "export const TIMEOUT = 5000;\nexport function list() {}\n";
        let symbols = exported_symbols(text, ExportCategory::Controller.rules());
        assert_eq!(symbols.len(), 1);
        assert!(symbols.contains("list"));
    }

    #[test]
    fn test_service_rules_include_classes_and_constants() {
        let text = "export class MediaMtxService {}\nexport const DEFAULT_PORT = 9997;\nexport async function syncPaths() {}\n";
        let symbols = exported_symbols(text, ExportCategory::Service.rules());
        assert!(symbols.contains("MediaMtxService"));
        assert!(symbols.contains("DEFAULT_PORT"));
        assert!(symbols.contains("syncPaths"));
    }
}
