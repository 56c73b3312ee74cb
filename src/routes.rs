//! Route Table
//!
//! The declarative path-to-page mapping for the application. The table is
//! built once, never mutated, and is the single source of truth for both the
//! `<Routes>` declared in [`crate::app`] and the href builders used by links.
//!
//! Resolution is first-match over the ordered entries; a path matching no
//! entry resolves to the explicit [`RouteTarget::NotFound`] state rather than
//! being left undefined.

/// Path pattern for the star selection page.
pub const STAR_SELECTION_PATH: &str = "/";

/// Path pattern for the chat page. The `:star_id` segment is forwarded to
/// the page as a parameter.
pub const CHAT_PATH: &str = "/chat/:star_id";

/// Catch-all pattern for unmatched paths.
pub const NOT_FOUND_PATH: &str = "/*any";

/// The page a path resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    StarSelection,
    Chat,
    NotFound,
}

/// A single path-to-page binding.
#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    /// Path pattern. Segments starting with `:` are named placeholders and
    /// match any single non-empty segment.
    pub path: &'static str,
    /// Symbolic name, unique across the table.
    pub name: &'static str,
    pub target: RouteTarget,
    /// Whether placeholder segments are forwarded to the page as parameters.
    pub forward_params: bool,
}

/// The ordered route table.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry {
        path: STAR_SELECTION_PATH,
        name: "star-selection",
        target: RouteTarget::StarSelection,
        forward_params: false,
    },
    RouteEntry {
        path: CHAT_PATH,
        name: "chat",
        target: RouteTarget::Chat,
        forward_params: true,
    },
];

/// Outcome of resolving a concrete path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub target: RouteTarget,
    /// Extracted placeholder values, present only when the matched entry
    /// forwards its parameters.
    pub params: Vec<(&'static str, String)>,
}

/// Resolve a path against the route table, first match wins.
pub fn resolve(path: &str) -> ResolvedRoute {
    // Ignore any query component
    let path = path.split('?').next().unwrap_or(path);

    for entry in ROUTE_TABLE {
        if let Some(params) = match_pattern(entry.path, path) {
            return ResolvedRoute {
                target: entry.target,
                params: if entry.forward_params {
                    params
                } else {
                    Vec::new()
                },
            };
        }
    }

    ResolvedRoute {
        target: RouteTarget::NotFound,
        params: Vec::new(),
    }
}

/// Build the href for a star's chat page from the declared pattern.
pub fn chat_href(star_id: u32) -> String {
    CHAT_PATH.replace(":star_id", &star_id.to_string())
}

fn segments(path: &str) -> Vec<&str> {
    let stripped = path.strip_prefix('/').unwrap_or(path);
    if stripped.is_empty() {
        Vec::new()
    } else {
        stripped.split('/').collect()
    }
}

/// Match a concrete path against a pattern, extracting placeholder values.
///
/// Placeholders require a non-empty segment, so `/chat/` does not match
/// `/chat/:star_id`.
fn match_pattern(pattern: &'static str, path: &str) -> Option<Vec<(&'static str, String)>> {
    let pattern_segments = segments(pattern);
    let path_segments = segments(path);

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (pat, seg) in pattern_segments.into_iter().zip(path_segments) {
        if let Some(name) = pat.strip_prefix(':') {
            if seg.is_empty() {
                return None;
            }
            params.push((name, seg.to_string()));
        } else if pat != seg {
            return None;
        }
    }

    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_root_resolves_to_star_selection() {
        let resolved = resolve("/");
        assert_eq!(resolved.target, RouteTarget::StarSelection);
        assert!(resolved.params.is_empty());
    }

    #[test]
    fn test_chat_path_forwards_star_id() {
        let resolved = resolve("/chat/42");
        assert_eq!(resolved.target, RouteTarget::Chat);
        assert_eq!(resolved.params, vec![("star_id", "42".to_string())]);
    }

    #[test]
    fn test_chat_path_with_missing_id_is_not_found() {
        let resolved = resolve("/chat/");
        assert_eq!(resolved.target, RouteTarget::NotFound);
    }

    #[test]
    fn test_bare_chat_prefix_is_not_found() {
        assert_eq!(resolve("/chat").target, RouteTarget::NotFound);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(resolve("/settings").target, RouteTarget::NotFound);
        assert_eq!(resolve("/chat/42/extra").target, RouteTarget::NotFound);
    }

    #[test]
    fn test_query_component_ignored() {
        let resolved = resolve("/chat/7?from=selection");
        assert_eq!(resolved.target, RouteTarget::Chat);
        assert_eq!(resolved.params, vec![("star_id", "7".to_string())]);
    }

    #[test]
    fn test_chat_href_round_trips_through_table() {
        let resolved = resolve(&chat_href(42));
        assert_eq!(resolved.target, RouteTarget::Chat);
        assert_eq!(resolved.params, vec![("star_id", "42".to_string())]);
    }

    #[test]
    fn test_route_names_are_unique() {
        let names: HashSet<_> = ROUTE_TABLE.iter().map(|entry| entry.name).collect();
        assert_eq!(names.len(), ROUTE_TABLE.len());
    }
}
