use backend_analy::{AnalyzerConfig, BackendAnalyzer, analyze_backend};
use std::fs;
use std::path::Path;
use structural_model::HttpMethod;
use tempfile::TempDir;

fn write(p: &Path, s: &str) {
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, s).unwrap();
}

fn sample_backend(root: &Path) {
    write(
        &root.join("routes/AreaRoutes.js"),
        "export default async function (fastify) {\n  fastify.get('/areas', AreaController.list)\n}\n",
    );
    write(
        &root.join("routes/cameraRoutes.js"),
        r#"
fastify.get('/cameras', { preHandler: [authenticate] }, CameraController.list)
fastify.post('/cameras', { preHandler: [authenticate, requireAdmin] }, CameraController.create)
"#,
    );
    write(
        &root.join("controllers/authController.js"),
        "export async function login(request, reply) {}\nexport const logout = async (request, reply) => {}\n",
    );
    write(
        &root.join("middleware/auth.js"),
        "/**\n * JWT authentication middleware\n */\nexport async function authenticate() {}\n",
    );
    write(
        &root.join("middleware/rateLimit.js"),
        "export const limiter = {}\n",
    );
    write(
        &root.join("services/streamService.js"),
        "export class StreamService {}\nexport function start() {}\n",
    );
    write(
        &root.join("database/migrations/001_cameras.js"),
        "db.exec(`CREATE TABLE IF NOT EXISTS cameras (id INTEGER PRIMARY KEY)`)\n",
    );
    write(
        &root.join("database/migrations/002_cameras_again.js"),
        "db.exec(`CREATE TABLE IF NOT EXISTS cameras (id INTEGER PRIMARY KEY, name TEXT)`)\n",
    );
    write(
        &root.join("database/setup.js"),
        "db.exec(`CREATE TABLE IF NOT EXISTS users (id INTEGER)`)\n",
    );
    write(
        &root.join("package.json"),
        r#"{"dependencies": {"fastify": "^4.24.3", "bcrypt": "^5.1.1"}}"#,
    );
}

#[test]
fn test_analyze_full_backend() {
    let td = TempDir::new().unwrap();
    sample_backend(td.path());

    let model = analyze_backend(td.path());

    assert_eq!(model.routes.len(), 3);
    let area = &model.routes[0];
    assert_eq!(area.method, HttpMethod::Get);
    assert_eq!(area.path, "/areas");
    assert_eq!(area.handler_symbol, "AreaController.list");
    assert!(area.middleware_refs.is_empty());
    assert_eq!(area.owner_controller, "AreaController");

    // File-scoped middleware: both camera routes get the union of the lists.
    for route in &model.routes[1..] {
        assert_eq!(route.owner_controller, "cameraController");
        assert_eq!(
            route.middleware_refs,
            vec!["authenticate", "authenticate", "requireAdmin"]
        );
    }

    assert_eq!(model.controllers.len(), 1);
    let auth = &model.controllers[0];
    assert_eq!(auth.name, "authController");
    assert_eq!(auth.source_location, "controllers/authController.js");
    assert_eq!(
        auth.exported_functions.iter().cloned().collect::<Vec<_>>(),
        vec!["login", "logout"]
    );

    assert_eq!(model.middleware.len(), 2);
    assert_eq!(model.middleware[0].description, "JWT authentication middleware");
    assert_eq!(model.middleware[1].name, "rateLimit");
    assert_eq!(model.middleware[1].description, "");

    assert_eq!(model.services.len(), 1);
    assert!(model.services[0].exported_functions.contains("StreamService"));
    assert!(model.services[0].exported_functions.contains("start"));

    assert_eq!(model.schema_tables.len(), 2);
    assert!(model.schema_tables.contains("cameras"));
    assert!(model.schema_tables.contains("users"));

    assert_eq!(model.dependencies["fastify"], "^4.24.3");
}

#[test]
fn test_missing_categories_are_empty() {
    let td = TempDir::new().unwrap();
    write(
        &td.path().join("routes/healthRoutes.js"),
        "fastify.get('/health', healthCheck)\n",
    );

    let model = analyze_backend(td.path());

    assert_eq!(model.routes.len(), 1);
    assert!(model.controllers.is_empty());
    assert!(model.middleware.is_empty());
    assert!(model.services.is_empty());
    assert!(model.schema_tables.is_empty());
    assert!(model.dependencies.is_empty());
}

#[test]
fn test_nonexistent_root_yields_empty_model() {
    let td = TempDir::new().unwrap();
    let model = analyze_backend(&td.path().join("no-backend-here"));
    assert!(model.is_empty());
}

#[test]
fn test_unreadable_file_does_not_lose_siblings() {
    let td = TempDir::new().unwrap();
    write(
        &td.path().join("controllers/a.js"),
        "export function first() {}\n",
    );
    fs::create_dir_all(td.path().join("controllers")).unwrap();
    fs::write(td.path().join("controllers/b.js"), [0xff, 0xfe, 0xfd]).unwrap();
    write(
        &td.path().join("controllers/c.js"),
        "export function third() {}\n",
    );

    let model = analyze_backend(td.path());
    let names: Vec<&str> = model.controllers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["a", "c"]);
}

#[test]
fn test_custom_layout_from_config() {
    let td = TempDir::new().unwrap();
    write(
        &td.path().join("src/api/usersRoutes.mjs"),
        "router.get('/users', listUsers)\n",
    );

    let config = AnalyzerConfig {
        routes_dir: "src/api".to_string(),
        source_extensions: vec!["mjs".to_string()],
        ..AnalyzerConfig::default()
    };
    let model = BackendAnalyzer::new(td.path(), config).analyze();

    assert_eq!(model.routes.len(), 1);
    assert_eq!(model.routes[0].owner_controller, "usersController");
}
