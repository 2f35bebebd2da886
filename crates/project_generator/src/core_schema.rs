use serde::Serialize;

/// One table of the fixed bootstrap schema
#[derive(Debug, Clone, Copy)]
pub struct CoreTable {
    pub name: &'static str,
    /// Column definitions and table constraints, in statement order
    pub definitions: &'static [&'static str],
}

pub const CORE_TABLES: [CoreTable; 5] = [
    CoreTable {
        name: "users",
        definitions: &[
            "id INTEGER PRIMARY KEY AUTOINCREMENT",
            "username TEXT UNIQUE NOT NULL",
            "password_hash TEXT NOT NULL",
            "role TEXT DEFAULT 'admin'",
            "created_at DATETIME DEFAULT CURRENT_TIMESTAMP",
        ],
    },
    CoreTable {
        name: "areas",
        definitions: &[
            "id INTEGER PRIMARY KEY AUTOINCREMENT",
            "name TEXT UNIQUE NOT NULL",
            "description TEXT",
            "rt TEXT",
            "rw TEXT",
            "kelurahan TEXT",
            "kecamatan TEXT",
            "created_at DATETIME DEFAULT CURRENT_TIMESTAMP",
        ],
    },
    CoreTable {
        name: "cameras",
        definitions: &[
            "id INTEGER PRIMARY KEY AUTOINCREMENT",
            "name TEXT NOT NULL",
            "private_rtsp_url TEXT NOT NULL",
            "description TEXT",
            "location TEXT",
            "group_name TEXT",
            "area_id INTEGER",
            "enabled INTEGER DEFAULT 1",
            "stream_key TEXT",
            "created_at DATETIME DEFAULT CURRENT_TIMESTAMP",
            "updated_at DATETIME DEFAULT CURRENT_TIMESTAMP",
            "FOREIGN KEY (area_id) REFERENCES areas(id) ON DELETE SET NULL",
        ],
    },
    CoreTable {
        name: "audit_logs",
        definitions: &[
            "id INTEGER PRIMARY KEY AUTOINCREMENT",
            "user_id INTEGER",
            "action TEXT NOT NULL",
            "details TEXT",
            "ip_address TEXT",
            "created_at DATETIME DEFAULT CURRENT_TIMESTAMP",
            "FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE SET NULL",
        ],
    },
    CoreTable {
        name: "feedbacks",
        definitions: &[
            "id INTEGER PRIMARY KEY AUTOINCREMENT",
            "name TEXT",
            "email TEXT",
            "message TEXT NOT NULL",
            "status TEXT DEFAULT 'unread'",
            "ip_address TEXT",
            "created_at DATETIME DEFAULT CURRENT_TIMESTAMP",
        ],
    },
];

impl CoreTable {
    /// Idempotent `CREATE TABLE` statement. Definitions are indented one tab
    /// deeper than `indent`, the closing parenthesis sits at `indent`.
    pub fn create_statement(&self, indent: &str) -> String {
        let body = self
            .definitions
            .iter()
            .map(|def| format!("{indent}\t{def}"))
            .collect::<Vec<_>>()
            .join(",\n");
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n{})",
            self.name, body, indent
        )
    }
}

#[derive(Debug, Serialize)]
pub struct TableView {
    pub name: &'static str,
    pub statement: String,
}

pub fn table_views(indent: &str) -> Vec<TableView> {
    CORE_TABLES
        .iter()
        .map(|table| TableView {
            name: table.name,
            statement: table.create_statement(indent),
        })
        .collect()
}
