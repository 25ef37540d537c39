//! Route table, path resolution and the navigation guard.
//!
//! ARCHITECTURE
//! ============
//! `routes` declares the nested table. `Router` flattens it once into leaf
//! routes with merged metadata and matches incoming paths against them.
//! `guard` decides, per navigation, whether to proceed or send the user to
//! the login page.

pub mod guard;
pub mod routes;

use std::collections::BTreeMap;

use routes::{ROUTES, RouteDef, RouteMeta, View};

pub use guard::{GuardDecision, LOGIN_PATH, NavigationOutcome, guard};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A leaf route with its full path and inherited metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FlatRoute {
    pattern: String,
    segments: Vec<Segment>,
    name: Option<&'static str>,
    matched: Vec<View>,
    meta: RouteMeta,
}

/// Result of matching a path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Normalized path (no query, fragment or trailing slash).
    pub path: String,
    /// The pattern it matched, e.g. `/courses/:id`.
    pub pattern: String,
    pub name: Option<&'static str>,
    /// Views from outermost layout to the page itself.
    pub matched: Vec<View>,
    pub params: BTreeMap<String, String>,
    pub meta: RouteMeta,
}

impl ResolvedRoute {
    /// The page view (innermost match).
    pub fn view(&self) -> Option<View> {
        self.matched.last().copied()
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

/// Matches paths against the flattened route table.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<FlatRoute>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(ROUTES)
    }
}

impl Router {
    pub fn new(table: &'static [RouteDef]) -> Self {
        let mut routes = Vec::new();
        flatten(table, "", RouteMeta::EMPTY, &[], &mut routes);
        Self { routes }
    }

    /// Full patterns of every navigable route, in table order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.pattern.as_str())
    }

    /// Match `path` (query string and fragment ignored). Static segments
    /// compare ASCII case-insensitively; captured params keep the caller's
    /// case. First match in table order wins.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        let normalized = normalize(path);
        let parts: Vec<&str> = split(&normalized).collect();
        self.routes.iter().find_map(|route| {
            let params = match_segments(&route.segments, &parts)?;
            Some(ResolvedRoute {
                path: normalized.clone(),
                pattern: route.pattern.clone(),
                name: route.name,
                matched: route.matched.clone(),
                params,
                meta: route.meta,
            })
        })
    }

    /// Build the concrete path of a named route.
    pub fn path_for(&self, name: &str, params: &BTreeMap<String, String>) -> Option<String> {
        let route = self.routes.iter().find(|r| r.name == Some(name))?;
        let mut out = String::new();
        for segment in &route.segments {
            out.push('/');
            match segment {
                Segment::Static(s) => out.push_str(s),
                Segment::Param(p) => out.push_str(params.get(p)?),
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        Some(out)
    }
}

fn flatten(table: &'static [RouteDef], prefix: &str, parent_meta: RouteMeta, parent_views: &[View], out: &mut Vec<FlatRoute>) {
    for def in table {
        let pattern = join(prefix, def.path);
        let meta = parent_meta.merge(def.meta);
        let mut matched = parent_views.to_vec();
        matched.push(def.view);

        if def.children.is_empty() {
            let segments = split(&pattern)
                .map(|s| match s.strip_prefix(':') {
                    Some(name) => Segment::Param(name.to_owned()),
                    None => Segment::Static(s.to_owned()),
                })
                .collect();
            out.push(FlatRoute { pattern, segments, name: def.name, matched, meta });
        } else {
            flatten(def.children, &pattern, meta, &matched, out);
        }
    }
}

fn join(prefix: &str, path: &str) -> String {
    if path.starts_with('/') || prefix.is_empty() {
        return path.to_owned();
    }
    let base = prefix.trim_end_matches('/');
    match (base.is_empty(), path.is_empty()) {
        (true, true) => "/".to_owned(),
        (false, true) => base.to_owned(),
        _ => format!("{base}/{path}"),
    }
}

fn normalize(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn match_segments(segments: &[Segment], parts: &[&str]) -> Option<BTreeMap<String, String>> {
    if segments.len() != parts.len() {
        return None;
    }
    let mut params = BTreeMap::new();
    for (segment, part) in segments.iter().zip(parts) {
        match segment {
            Segment::Static(s) => {
                if !s.eq_ignore_ascii_case(part) {
                    return None;
                }
            }
            Segment::Param(name) => {
                params.insert(name.clone(), (*part).to_owned());
            }
        }
    }
    Some(params)
}
