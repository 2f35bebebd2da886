use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

/// Every Go project template, compiled into the binary
const TEMPLATES: [(&str, &str); 16] = [
    ("go.mod.txt", include_str!("../templates/go.mod.txt")),
    ("main.go.txt", include_str!("../templates/main.go.txt")),
    ("config.go.txt", include_str!("../templates/config.go.txt")),
    ("env.example.txt", include_str!("../templates/env.example.txt")),
    ("database.go.txt", include_str!("../templates/database.go.txt")),
    ("core_schema.sql.txt", include_str!("../templates/core_schema.sql.txt")),
    ("user.go.txt", include_str!("../templates/user.go.txt")),
    ("camera.go.txt", include_str!("../templates/camera.go.txt")),
    ("auth_middleware.go.txt", include_str!("../templates/auth_middleware.go.txt")),
    ("auth_handler.go.txt", include_str!("../templates/auth_handler.go.txt")),
    ("routes.go.txt", include_str!("../templates/routes.go.txt")),
    ("services.go.txt", include_str!("../templates/services.go.txt")),
    ("logger.go.txt", include_str!("../templates/logger.go.txt")),
    ("Dockerfile.txt", include_str!("../templates/Dockerfile.txt")),
    ("Makefile.txt", include_str!("../templates/Makefile.txt")),
    ("migration.md.txt", include_str!("../templates/migration.md.txt")),
];

pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_all_templates_compile() {
        assert!(Templates::new().is_ok());
    }

    #[test]
    fn test_no_html_escaping() {
        let templates = Templates::new().unwrap();
        let out = templates
            .render("go.mod.txt", context! { module_name => "example.com/a&b<c>" })
            .unwrap();
        assert!(out.starts_with("module example.com/a&b<c>\n"));
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        let templates = Templates::new().unwrap();
        assert!(templates.render("go.mod.txt", context! {}).is_err());
    }
}
