use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// HTTP verbs the route rules recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    /// Case-insensitive parse of a method token such as `get` or `Post`
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(token.trim()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unsupported HTTP method: {}", s))
    }
}

/// One method + path + handler binding found in a route file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub method: HttpMethod,
    /// URL pattern as written in the source, placeholders included (`/cameras/:id`)
    pub path: String,
    /// Captured handler expression, or `"unknown"` when the rule has no handler group
    #[serde(rename = "handler")]
    pub handler_symbol: String,
    /// Middleware attached to this route. File-scoped: every route of a file
    /// carries the same list.
    #[serde(rename = "middleware", default)]
    pub middleware_refs: Vec<String>,
    /// Derived from the route file name. May name a controller that was never extracted.
    #[serde(rename = "controller")]
    pub owner_controller: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controller {
    pub name: String,
    /// Path relative to the analyzed source root
    #[serde(rename = "file")]
    pub source_location: String,
    #[serde(rename = "functions", default)]
    pub exported_functions: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Middleware {
    pub name: String,
    #[serde(rename = "file")]
    pub source_location: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(rename = "file")]
    pub source_location: String,
    #[serde(rename = "functions", default)]
    pub exported_functions: BTreeSet<String>,
}

/// Everything recovered from a backend source tree.
///
/// Sets are stored as `BTreeSet`/`BTreeMap` so the JSON output is stable;
/// consumers must not attach meaning to their order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralModel {
    pub routes: Vec<Route>,
    pub controllers: Vec<Controller>,
    pub middleware: Vec<Middleware>,
    pub services: Vec<Service>,
    #[serde(rename = "database_tables")]
    pub schema_tables: BTreeSet<String>,
    pub dependencies: BTreeMap<String, String>,
}

impl StructuralModel {
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
            && self.controllers.is_empty()
            && self.middleware.is_empty()
            && self.services.is_empty()
            && self.schema_tables.is_empty()
            && self.dependencies.is_empty()
    }

    /// Number of routes per HTTP method; methods without routes are omitted
    pub fn routes_by_method(&self) -> BTreeMap<HttpMethod, usize> {
        let mut counts = BTreeMap::new();
        for route in &self.routes {
            *counts.entry(route.method).or_insert(0) += 1;
        }
        counts
    }

    /// Method + path pairs registered more than once in the source
    pub fn duplicate_registrations(&self) -> BTreeSet<(HttpMethod, String)> {
        let mut seen = BTreeSet::new();
        let mut duplicates = BTreeSet::new();
        for route in &self.routes {
            let key = (route.method, route.path.clone());
            if !seen.insert(key.clone()) {
                duplicates.insert(key);
            }
        }
        duplicates
    }

    /// Case-insensitive table lookup
    pub fn has_table(&self, name: &str) -> bool {
        self.schema_tables
            .iter()
            .any(|table| table.eq_ignore_ascii_case(name))
    }
}
