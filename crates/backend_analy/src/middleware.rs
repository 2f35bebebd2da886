use crate::pkg_config::AnalyzerConfig;
use crate::scan::{category_files, file_stem, read_source, relative_location};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use structural_model::Middleware;

static DOC_BLOCK_FIRST_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*\*\s*\n\s*\*\s*(.+?)\n").expect("Invalid doc comment regex"));

/// First line of the first `/** ... */` block, or an empty string
pub fn leading_description(text: &str) -> String {
    DOC_BLOCK_FIRST_LINE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|line| line.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Exactly one entry per middleware file
pub fn extract_middleware(root: &Path, config: &AnalyzerConfig) -> Vec<Middleware> {
    let mut middleware = Vec::new();

    for file in category_files(&root.join(&config.middleware_dir), &config.source_extensions) {
        let Some(text) = read_source(&file) else {
            continue;
        };
        middleware.push(Middleware {
            name: file_stem(&file),
            source_location: relative_location(root, &file),
            description: leading_description(&text),
        });
    }

    info!("Found {} middleware", middleware.len());
    middleware
}
