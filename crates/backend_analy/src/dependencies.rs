use log::{info, warn};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::scan::read_source;

/// Runtime `dependencies` block of a package manifest.
///
/// A missing manifest, invalid JSON, or a missing block all give an empty map.
/// Entries whose version is not a string are skipped.
pub fn extract_dependencies(manifest: &Path) -> BTreeMap<String, String> {
    if !manifest.is_file() {
        info!("No manifest at {}, no dependencies recorded", manifest.display());
        return BTreeMap::new();
    }
    let Some(text) = read_source(manifest) else {
        return BTreeMap::new();
    };
    let deps = parse_dependencies(&text, manifest);
    info!("Found {} dependencies", deps.len());
    deps
}

fn parse_dependencies(text: &str, manifest: &Path) -> BTreeMap<String, String> {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            warn!("Skipping malformed manifest {}: {}", manifest.display(), e);
            return BTreeMap::new();
        }
    };

    let Some(block) = value.get("dependencies").and_then(Value::as_object) else {
        return BTreeMap::new();
    };

    block
        .iter()
        .filter_map(|(name, version)| match version.as_str() {
            Some(version) => Some((name.clone(), version.to_string())),
            None => {
                warn!("Dependency {} has a non-string version, skipping", name);
                None
            }
        })
        .collect()
}
