//! Environment contract of the generated `internal/config` package.
//!
//! The same table drives `config.go` and `.env.example`, so the two can never
//! disagree about a variable name or a default.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Str,
    Int,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigOption {
    pub field: &'static str,
    pub env_var: &'static str,
    pub default: &'static str,
    pub kind: OptionKind,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigGroup {
    pub name: &'static str,
    pub options: &'static [ConfigOption],
}

const fn opt(
    field: &'static str,
    env_var: &'static str,
    default: &'static str,
    kind: OptionKind,
) -> ConfigOption {
    ConfigOption {
        field,
        env_var,
        default,
        kind,
    }
}

use OptionKind::{Int, Str};

pub const CONFIG_GROUPS: [ConfigGroup; 5] = [
    ConfigGroup {
        name: "Server",
        options: &[
            opt("Host", "HOST", "0.0.0.0", Str),
            opt("Port", "PORT", "3000", Str),
            opt("Env", "NODE_ENV", "development", Str),
        ],
    },
    ConfigGroup {
        name: "Database",
        options: &[opt("Path", "DATABASE_PATH", "./data/cctv.db", Str)],
    },
    ConfigGroup {
        name: "JWT",
        options: &[
            opt("Secret", "JWT_SECRET", "change-this-secret", Str),
            opt("Expiration", "JWT_EXPIRATION", "1h", Str),
        ],
    },
    ConfigGroup {
        name: "Security",
        options: &[
            opt("AllowedOrigins", "ALLOWED_ORIGINS", "http://localhost:5173", Str),
            opt("APIKeySecret", "API_KEY_SECRET", "", Str),
            opt("CSRFSecret", "CSRF_SECRET", "", Str),
            opt("RateLimitPublic", "RATE_LIMIT_PUBLIC", "100", Int),
            opt("RateLimitAuth", "RATE_LIMIT_AUTH", "30", Int),
            opt("MaxLoginAttempts", "MAX_LOGIN_ATTEMPTS", "5", Int),
            opt("LockoutDurationMins", "LOCKOUT_DURATION_MINUTES", "30", Int),
        ],
    },
    ConfigGroup {
        name: "MediaMTX",
        options: &[
            opt("APIURL", "MEDIAMTX_API_URL", "http://localhost:9997", Str),
            opt(
                "HLSURLInternal",
                "MEDIAMTX_HLS_URL_INTERNAL",
                "http://localhost:8888",
                Str,
            ),
            opt("HLSURLPublic", "PUBLIC_HLS_PATH", "/hls", Str),
        ],
    },
];

impl ConfigOption {
    pub fn go_type(&self) -> &'static str {
        match self.kind {
            Str => "string",
            Int => "int",
        }
    }

    /// Go expression reading the variable with its fallback
    pub fn loader(&self) -> String {
        match self.kind {
            Str => format!("getEnv(\"{}\", \"{}\")", self.env_var, self.default),
            Int => format!("getEnvInt(\"{}\", {})", self.env_var, self.default),
        }
    }
}

/// Template view of one option, with gofmt column padding precomputed
#[derive(Debug, Serialize)]
pub struct OptionView {
    pub field: &'static str,
    pub field_col: String,
    pub key_col: String,
    pub go_type: &'static str,
    pub loader: String,
    pub env_var: &'static str,
    pub default: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GroupView {
    pub name: &'static str,
    pub name_col: String,
    pub struct_name: String,
    pub options: Vec<OptionView>,
}

pub fn group_views() -> Vec<GroupView> {
    let name_width = CONFIG_GROUPS
        .iter()
        .map(|g| g.name.len())
        .max()
        .unwrap_or(0);

    CONFIG_GROUPS
        .iter()
        .map(|group| {
            let field_width = group
                .options
                .iter()
                .map(|o| o.field.len())
                .max()
                .unwrap_or(0);
            GroupView {
                name: group.name,
                name_col: format!("{:<name_width$}", group.name),
                struct_name: format!("{}Config", group.name),
                options: group
                    .options
                    .iter()
                    .map(|option| OptionView {
                        field: option.field,
                        field_col: format!("{:<field_width$}", option.field),
                        key_col: format!(
                            "{:<width$}",
                            format!("{}:", option.field),
                            width = field_width + 1
                        ),
                        go_type: option.go_type(),
                        loader: option.loader(),
                        env_var: option.env_var,
                        default: option.default,
                    })
                    .collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_size_and_unique_env_vars() {
        let all: Vec<&ConfigOption> = CONFIG_GROUPS
            .iter()
            .flat_map(|g| g.options)
            .collect();
        assert_eq!(all.len(), 16);

        let mut vars: Vec<&str> = all.iter().map(|o| o.env_var).collect();
        vars.sort_unstable();
        vars.dedup();
        assert_eq!(vars.len(), 16);
    }

    #[test]
    fn test_loader_expressions() {
        let lockout = CONFIG_GROUPS[3].options[6];
        assert_eq!(lockout.loader(), "getEnvInt(\"LOCKOUT_DURATION_MINUTES\", 30)");
        assert_eq!(lockout.go_type(), "int");

        let api_key = CONFIG_GROUPS[3].options[1];
        assert_eq!(api_key.loader(), "getEnv(\"API_KEY_SECRET\", \"\")");
    }

    #[test]
    fn test_columns_are_padded_per_group() {
        let views = group_views();
        let server = &views[0];
        assert_eq!(server.name_col, "Server  ");
        assert_eq!(server.struct_name, "ServerConfig");
        assert_eq!(server.options[2].field_col, "Env ");
        assert_eq!(server.options[2].key_col, "Env: ");
        assert_eq!(server.options[0].key_col, "Host:");
    }
}
