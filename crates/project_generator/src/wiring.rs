//! Route wiring of the generated `internal/routes` package.
//!
//! Only the auth routes are wired to real Go handlers. Every other discovered
//! route is listed inside the extension point block of `routes.go`, grouped
//! by its owner controller.

use serde::Serialize;
use std::collections::BTreeSet;
use structural_model::{HttpMethod, Route, StructuralModel};

/// Routes the generated project serves out of the box, with their full paths
pub const BASELINE_ROUTES: [(HttpMethod, &str); 4] = [
    (HttpMethod::Get, "/health"),
    (HttpMethod::Post, "/api/auth/login"),
    (HttpMethod::Post, "/api/auth/logout"),
    (HttpMethod::Get, "/api/auth/verify"),
];

/// Owner-controller prefix of the routes the generated auth handlers replace
pub const AUTH_CONTROLLER_PREFIX: &str = "auth";

/// True when method and path match a baseline route.
///
/// Route files are usually mounted under a prefix, so a relative path such as
/// `/login` matches a baseline path that ends with it.
pub fn overlaps_baseline(route: &Route) -> bool {
    BASELINE_ROUTES.iter().any(|(method, full)| {
        *method == route.method
            && (route.path == *full
                || (route.path.starts_with('/')
                    && route.path.len() > 1
                    && full.ends_with(route.path.as_str())))
    })
}

/// `auth`, `authController`, `AuthController`, `auth_ctrl`; not `authors`.
pub fn is_auth_controller(name: &str) -> bool {
    let prefix_len = AUTH_CONTROLLER_PREFIX.len();
    let Some(head) = name.get(..prefix_len) else {
        return false;
    };
    head.eq_ignore_ascii_case(AUTH_CONTROLLER_PREFIX)
        && !name[prefix_len..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase())
}

/// True when a baseline Go handler already serves `route`: the route matches
/// a baseline path and belongs to the auth controller.
pub fn is_covered(route: &Route) -> bool {
    is_auth_controller(&route.owner_controller) && overlaps_baseline(route)
}

/// Keep a comment on one line whatever the source text contained
fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe(route: &Route, duplicate: bool) -> String {
    let mut line = format!(
        "{} {} -> {}",
        route.method,
        single_line(&route.path),
        single_line(&route.handler_symbol)
    );
    if !route.middleware_refs.is_empty() {
        let refs: Vec<String> = route
            .middleware_refs
            .iter()
            .map(|r| single_line(r))
            .collect();
        line.push_str(&format!(" [{}]", refs.join(", ")));
    }
    if overlaps_baseline(route) && !is_covered(route) {
        line.push_str(" (path overlaps baseline)");
    }
    if duplicate {
        line.push_str(" (duplicate registration)");
    }
    line
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingGroup {
    pub controller: String,
    pub routes: Vec<String>,
}

/// Routes still to be ported, grouped by owner controller in order of first
/// appearance. A covered route is left out unless it is registered more than
/// once, since the duplicate has to be resolved by hand.
pub fn pending_groups(model: &StructuralModel) -> Vec<PendingGroup> {
    let duplicates: BTreeSet<(HttpMethod, String)> = model.duplicate_registrations();
    let mut groups: Vec<PendingGroup> = Vec::new();

    for route in &model.routes {
        let duplicate = duplicates.contains(&(route.method, route.path.clone()));
        if is_covered(route) && !duplicate {
            continue;
        }
        let line = describe(route, duplicate);
        let controller = single_line(&route.owner_controller);

        match groups.iter_mut().find(|g| g.controller == controller) {
            Some(group) => group.routes.push(line),
            None => groups.push(PendingGroup {
                controller,
                routes: vec![line],
            }),
        }
    }

    groups
}

pub fn pending_count(groups: &[PendingGroup]) -> usize {
    groups.iter().map(|g| g.routes.len()).sum()
}
