//! Route extraction.
//!
//! Each [`RouteRule`] is one routing-framework idiom. Rules are applied
//! independently to the whole file text, so a file may contribute matches
//! from several rules.

use crate::pkg_config::AnalyzerConfig;
use crate::scan::{category_files, file_stem, read_source};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use structural_model::{HttpMethod, Route};

/// Handler recorded when a rule has no handler capture
pub const UNKNOWN_HANDLER: &str = "unknown";

/// Text that must appear in a file before middleware lists are looked for
pub const MIDDLEWARE_MARKER: &str = "preHandler";

static FASTIFY_ROUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"fastify\.(get|post|put|delete|patch)\(['"]([^'"]+)['"].*?(\w+Controller\.\w+|\w+)"#,
    )
    .expect("Invalid fastify route regex")
});

static ROUTER_ROUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"router\.(get|post|put|delete|patch)\(['"]([^'"]+)['"].*?(\w+)"#)
        .expect("Invalid router route regex")
});

static MIDDLEWARE_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"preHandler:\s*\[(.*?)\]").expect("Invalid middleware list regex"));

/// One routing idiom: group 1 = method, group 2 = path, optional group 3 = handler
#[derive(Debug, Clone)]
pub struct RouteRule {
    pub name: String,
    pub pattern: Regex,
}

impl RouteRule {
    pub fn new(name: impl Into<String>, pattern: Regex) -> Self {
        Self {
            name: name.into(),
            pattern,
        }
    }
}

/// Built-in rules followed by any valid configured ones.
/// A configured pattern that does not compile is logged and left out.
pub fn route_rules(config: &AnalyzerConfig) -> Vec<RouteRule> {
    let mut rules = vec![
        RouteRule::new("fastify", FASTIFY_ROUTE.clone()),
        RouteRule::new("router", ROUTER_ROUTE.clone()),
    ];

    for (idx, source) in config.extra_route_patterns.iter().enumerate() {
        match Regex::new(source) {
            Ok(pattern) if pattern.captures_len() >= 3 => {
                rules.push(RouteRule::new(format!("custom-{}", idx + 1), pattern));
            }
            Ok(_) => warn!(
                "Ignoring route pattern {:?}: it needs method and path capture groups",
                source
            ),
            Err(e) => warn!("Ignoring invalid route pattern {:?}: {}", source, e),
        }
    }

    rules
}

/// Controller owning the routes of a file: `AreaRoutes` -> `AreaController`
pub fn owner_controller(stem: &str, route_suffix: &str, controller_suffix: &str) -> String {
    let base = if route_suffix.is_empty() {
        stem
    } else {
        stem.strip_suffix(route_suffix).unwrap_or(stem)
    };
    format!("{}{}", base, controller_suffix)
}

/// Identifiers inside every `preHandler: [...]` list of the file, in order.
///
/// The lists are not tied to the registration they appear in; the caller
/// attaches the whole result to every route of the file.
pub fn middleware_refs(text: &str) -> Vec<String> {
    if !text.contains(MIDDLEWARE_MARKER) {
        return Vec::new();
    }

    MIDDLEWARE_LIST
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .flat_map(|list| list.as_str().split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// All routes declared in one file's text
pub fn extract_routes_from_source(text: &str, controller: &str, rules: &[RouteRule]) -> Vec<Route> {
    let middleware = middleware_refs(text);
    let mut routes = Vec::new();

    for rule in rules {
        for caps in rule.pattern.captures_iter(text) {
            let method_token = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let Some(method) = HttpMethod::parse(method_token) else {
                debug!(
                    "Rule {} matched unsupported method {:?}, ignoring",
                    rule.name, method_token
                );
                continue;
            };
            let Some(path) = caps.get(2) else {
                continue;
            };
            let handler = caps
                .get(3)
                .map(|m| m.as_str().to_string())
                .unwrap_or_else(|| UNKNOWN_HANDLER.to_string());

            routes.push(Route {
                method,
                path: path.as_str().to_string(),
                handler_symbol: handler,
                middleware_refs: middleware.clone(),
                owner_controller: controller.to_string(),
            });
        }
    }

    routes
}

/// Routes from every route file of the source tree
pub fn extract_routes(root: &Path, config: &AnalyzerConfig) -> Vec<Route> {
    let rules = route_rules(config);
    let mut routes = Vec::new();

    for file in category_files(&root.join(&config.routes_dir), &config.source_extensions) {
        let Some(text) = read_source(&file) else {
            continue;
        };
        let controller = owner_controller(
            &file_stem(&file),
            &config.route_suffix,
            &config.controller_suffix,
        );
        let found = extract_routes_from_source(&text, &controller, &rules);
        debug!("{}: {} routes", file.display(), found.len());
        routes.extend(found);
    }

    info!("Found {} routes", routes.len());
    routes
}
