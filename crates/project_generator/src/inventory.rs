use serde::Serialize;
use structural_model::{HttpMethod, StructuralModel};

/// Go replacement for well-known Node.js packages
const GO_EQUIVALENTS: [(&str, &str); 9] = [
    ("fastify", "github.com/gofiber/fiber/v2"),
    ("@fastify/cors", "github.com/gofiber/fiber/v2/middleware/cors"),
    ("better-sqlite3", "github.com/mattn/go-sqlite3"),
    ("bcrypt", "golang.org/x/crypto/bcrypt"),
    ("bcryptjs", "golang.org/x/crypto/bcrypt"),
    ("jsonwebtoken", "github.com/golang-jwt/jwt/v5"),
    ("dotenv", "github.com/joho/godotenv"),
    ("uuid", "github.com/google/uuid"),
    ("axios", "net/http"),
];

pub const MANUAL_REVIEW: &str = "manual review";

pub fn go_equivalent(package: &str) -> &'static str {
    GO_EQUIVALENTS
        .iter()
        .find(|(name, _)| *name == package)
        .map(|(_, go)| *go)
        .unwrap_or(MANUAL_REVIEW)
}

#[derive(Debug, Serialize)]
pub struct MethodCount {
    pub method: HttpMethod,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SymbolsView {
    pub name: String,
    pub file: String,
    pub functions: String,
}

#[derive(Debug, Serialize)]
pub struct MiddlewareView {
    pub name: String,
    pub file: String,
    /// `": description"`, or empty
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct DependencyView {
    pub name: String,
    pub version: String,
    pub replacement: &'static str,
}

/// Keep a value inside one Markdown table cell
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn join_functions<'a>(functions: impl Iterator<Item = &'a String>) -> String {
    let names: Vec<&str> = functions.map(String::as_str).collect();
    if names.is_empty() {
        "no exported functions".to_string()
    } else {
        names.join(", ")
    }
}

pub fn method_counts(model: &StructuralModel) -> Vec<MethodCount> {
    model
        .routes_by_method()
        .into_iter()
        .map(|(method, count)| MethodCount { method, count })
        .collect()
}

pub fn controller_views(model: &StructuralModel) -> Vec<SymbolsView> {
    model
        .controllers
        .iter()
        .map(|c| SymbolsView {
            name: c.name.clone(),
            file: c.source_location.clone(),
            functions: join_functions(c.exported_functions.iter()),
        })
        .collect()
}

pub fn service_views(model: &StructuralModel) -> Vec<SymbolsView> {
    model
        .services
        .iter()
        .map(|s| SymbolsView {
            name: s.name.clone(),
            file: s.source_location.clone(),
            functions: join_functions(s.exported_functions.iter()),
        })
        .collect()
}

pub fn middleware_views(model: &StructuralModel) -> Vec<MiddlewareView> {
    model
        .middleware
        .iter()
        .map(|m| MiddlewareView {
            name: m.name.clone(),
            file: m.source_location.clone(),
            detail: if m.description.is_empty() {
                String::new()
            } else {
                format!(": {}", m.description)
            },
        })
        .collect()
}

pub fn dependency_views(model: &StructuralModel) -> Vec<DependencyView> {
    model
        .dependencies
        .iter()
        .map(|(name, version)| DependencyView {
            name: table_cell(name),
            version: table_cell(version),
            replacement: go_equivalent(name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use structural_model::Controller;

    #[test]
    fn test_known_and_unknown_packages() {
        assert_eq!(go_equivalent("fastify"), "github.com/gofiber/fiber/v2");
        assert_eq!(go_equivalent("bcryptjs"), "golang.org/x/crypto/bcrypt");
        assert_eq!(go_equivalent("left-pad"), MANUAL_REVIEW);
    }

    #[test]
    fn test_version_ranges_stay_in_one_cell() {
        let mut model = StructuralModel::default();
        model
            .dependencies
            .insert("react".to_string(), "^16.8.0 || ^17.0.0".to_string());

        let views = dependency_views(&model);
        assert_eq!(views[0].version, "^16.8.0 \\|\\| ^17.0.0");
        assert_eq!(views[0].replacement, MANUAL_REVIEW);
    }

    #[test]
    fn test_controller_functions_are_joined_sorted() {
        let model = StructuralModel {
            controllers: vec![
                Controller {
                    name: "authController".to_string(),
                    source_location: "controllers/authController.js".to_string(),
                    exported_functions: ["logout", "login"].iter().map(|s| s.to_string()).collect(),
                },
                Controller {
                    name: "emptyController".to_string(),
                    source_location: "controllers/emptyController.js".to_string(),
                    exported_functions: Default::default(),
                },
            ],
            ..StructuralModel::default()
        };

        let views = controller_views(&model);
        assert_eq!(views[0].functions, "login, logout");
        assert_eq!(views[1].functions, "no exported functions");
    }
}
