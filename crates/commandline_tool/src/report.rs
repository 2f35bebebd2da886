//! Human-readable summaries printed after each command.

use project_generator::GenerationReport;
use std::fmt::Write;
use std::path::Path;
use structural_model::StructuralModel;

const RULE: &str = "============================================================";
/// How many controllers/services are listed before "... and N more"
const LISTED: usize = 5;
const KEY_DEPENDENCIES: [&str; 5] = [
    "fastify",
    "better-sqlite3",
    "bcrypt",
    "jsonwebtoken",
    "axios",
];

fn list_symbols<'a>(out: &mut String, entries: impl ExactSizeIterator<Item = (&'a str, usize)>) {
    let total = entries.len();
    for (name, functions) in entries.take(LISTED) {
        let _ = writeln!(out, "   - {name} ({functions} functions)");
    }
    if total > LISTED {
        let _ = writeln!(out, "   ... and {} more", total - LISTED);
    }
}

pub fn analysis_summary(model: &StructuralModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}\n📊 BACKEND ANALYSIS SUMMARY\n{RULE}");

    let _ = writeln!(out, "\n📍 Routes: {}", model.routes.len());
    for (method, count) in model.routes_by_method() {
        let _ = writeln!(out, "   {method}: {count}");
    }

    let _ = writeln!(out, "\n🎮 Controllers: {}", model.controllers.len());
    list_symbols(
        &mut out,
        model
            .controllers
            .iter()
            .map(|c| (c.name.as_str(), c.exported_functions.len())),
    );

    let _ = writeln!(out, "\n🛡️  Middleware: {}", model.middleware.len());
    for middleware in &model.middleware {
        let _ = writeln!(out, "   - {}", middleware.name);
    }

    let _ = writeln!(out, "\n⚙️  Services: {}", model.services.len());
    list_symbols(
        &mut out,
        model
            .services
            .iter()
            .map(|s| (s.name.as_str(), s.exported_functions.len())),
    );

    let _ = writeln!(out, "\n🗄️  Database Tables: {}", model.schema_tables.len());
    for table in &model.schema_tables {
        let _ = writeln!(out, "   - {table}");
    }

    let _ = writeln!(out, "\n📦 Key Dependencies:");
    for name in KEY_DEPENDENCIES {
        if let Some(version) = model.dependencies.get(name) {
            let _ = writeln!(out, "   - {name}: {version}");
        }
    }

    let _ = writeln!(out, "\n{RULE}");
    out
}

pub fn generation_summary(report: &GenerationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "✅ Go project generated successfully!");
    let _ = writeln!(out, "📁 Output directory: {}", report.output_dir.display());
    let _ = writeln!(out);

    for file in &report.files {
        let rel = file
            .path
            .strip_prefix(&report.output_dir)
            .unwrap_or(&file.path);
        if file.inputs.is_empty() {
            let _ = writeln!(out, "  ✓ {}", rel.display());
        } else {
            let inputs: Vec<String> = file.inputs.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "  ✓ {} (from {})", rel.display(), inputs.join(", "));
        }
    }
    if report.pending_routes > 0 {
        let _ = writeln!(
            out,
            "\n⚠️  {} routes still need a Go handler, see internal/routes/routes.go",
            report.pending_routes
        );
    }

    let dir = display_dir(&report.output_dir);
    let _ = writeln!(out, "\n{RULE}\n📝 NEXT STEPS:\n{RULE}");
    let _ = writeln!(out, "1. cd {dir}");
    let _ = writeln!(out, "2. go mod tidy");
    let _ = writeln!(out, "3. cp .env.example .env and adjust the values");
    let _ = writeln!(out, "4. go run cmd/server/main.go");
    let _ = writeln!(out, "\nOr using Docker:");
    let _ = writeln!(out, "1. cd {dir}");
    let _ = writeln!(out, "2. make docker-build");
    let _ = writeln!(out, "3. make docker-run");
    let _ = writeln!(out, "{RULE}");
    out
}

fn display_dir(dir: &Path) -> String {
    let shown = dir.display().to_string();
    if shown.is_empty() {
        ".".to_string()
    } else {
        shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use project_generator::{GeneratedFile, ModelInput};
    use std::path::PathBuf;
    use structural_model::{Controller, HttpMethod, Route};

    fn controller(name: &str, functions: &[&str]) -> Controller {
        Controller {
            name: name.to_string(),
            source_location: format!("controllers/{name}.js"),
            exported_functions: functions.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_analysis_summary_truncates_controllers() {
        let mut model = StructuralModel::default();
        model.controllers = (0..7)
            .map(|i| controller(&format!("c{i}Controller"), &["list"]))
            .collect();
        model.routes = vec![Route {
            method: HttpMethod::Get,
            path: "/areas".to_string(),
            handler_symbol: "AreaController.list".to_string(),
            middleware_refs: Vec::new(),
            owner_controller: "AreaController".to_string(),
        }];
        model.dependencies.insert("fastify".to_string(), "^4.24.3".to_string());
        model.dependencies.insert("pino".to_string(), "^8.0.0".to_string());

        let summary = analysis_summary(&model);
        assert!(summary.contains("📍 Routes: 1\n   GET: 1\n"));
        assert!(summary.contains("   - c4Controller (1 functions)\n   ... and 2 more\n"));
        assert!(!summary.contains("c5Controller"));
        assert!(summary.contains("   - fastify: ^4.24.3\n"));
        assert!(!summary.contains("pino"));
    }

    #[test]
    fn test_generation_summary_lists_inputs() {
        let out = PathBuf::from("backend-go");
        let report = GenerationReport {
            output_dir: out.clone(),
            files: vec![
                GeneratedFile {
                    path: out.join("go.mod"),
                    inputs: &[],
                },
                GeneratedFile {
                    path: out.join("internal/routes/routes.go"),
                    inputs: &[ModelInput::Routes],
                },
            ],
            pending_routes: 2,
        };

        let summary = generation_summary(&report);
        assert!(summary.contains("  ✓ go.mod\n"));
        assert!(summary.contains("  ✓ internal/routes/routes.go (from routes)\n"));
        assert!(summary.contains("2 routes still need a Go handler"));
        assert!(summary.contains("1. cd backend-go\n"));
    }
}
