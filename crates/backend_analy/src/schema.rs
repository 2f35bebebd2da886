use crate::pkg_config::AnalyzerConfig;
use crate::scan::{category_files, read_source};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

static CREATE_TABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)CREATE\s+TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?[`"]?(\w+)"#)
        .expect("Invalid create table regex")
});

/// Table names defined by `CREATE TABLE` statements in `text`
pub fn table_names(text: &str) -> Vec<String> {
    CREATE_TABLE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().to_string())
        .collect()
}

/// Migration files followed by the setup file, when present
fn schema_sources(root: &Path, config: &AnalyzerConfig) -> Vec<PathBuf> {
    let mut sources = category_files(
        &root.join(&config.migrations_dir),
        &config.migration_extensions,
    );
    let setup = root.join(&config.schema_setup_file);
    if setup.is_file() {
        sources.push(setup);
    }
    sources
}

/// De-duplicated table names across every schema source
pub fn extract_schema_tables(root: &Path, config: &AnalyzerConfig) -> BTreeSet<String> {
    let mut tables = BTreeSet::new();

    for file in schema_sources(root, config) {
        let Some(text) = read_source(&file) else {
            continue;
        };
        let found = table_names(&text);
        debug!("{}: {} table definitions", file.display(), found.len());
        tables.extend(found);
    }

    info!("Found {} database tables", tables.len());
    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_variants() {
        let text = r#"
db.exec(`
  CREATE TABLE IF NOT EXISTS users (id INTEGER PRIMARY KEY);
  create table areas (id INTEGER);
  Create Table If Not Exists "audit_logs" (id INTEGER);
`);
"#;
        assert_eq!(table_names(text), vec!["users", "areas", "audit_logs"]);
    }

    #[test]
    fn test_other_statements_are_ignored() {
        let text = "CREATE INDEX idx_cameras_area ON cameras(area_id);\nDROP TABLE old_cameras;\n";
        assert!(table_names(text).is_empty());
    }
}
