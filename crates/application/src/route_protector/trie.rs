use std::collections::HashMap;

/// Splits a request path into its non-empty segments.
///
/// Query strings and fragments are dropped before splitting, so
/// `/admin//users/?tab=1` yields `["admin", "users"]`.
pub(super) fn path_segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end]
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Segment trie mapping route prefixes to rule indexes.
#[derive(Debug, Default)]
pub(super) struct RouteTrie {
    root: RouteNode,
}

#[derive(Debug, Default)]
struct RouteNode {
    children: HashMap<String, RouteNode>,
    rule: Option<usize>,
}

impl RouteTrie {
    /// Registers `rule` at the node for `segments`.
    ///
    /// Returns the index already stored there when the prefix is taken.
    pub(super) fn insert(&mut self, segments: &[&str], rule: usize) -> Result<(), usize> {
        let node = segments.iter().fold(&mut self.root, |node, segment| {
            node.children.entry((*segment).to_owned()).or_default()
        });

        match node.rule {
            Some(existing) => Err(existing),
            None => {
                node.rule = Some(rule);
                Ok(())
            }
        }
    }

    /// Returns the rule registered at the deepest prefix of `segments`.
    ///
    /// A rule on the root prefix only matches the root path itself.
    pub(super) fn longest_match(&self, segments: &[&str]) -> Option<usize> {
        if segments.is_empty() {
            return self.root.rule;
        }

        let mut node = &self.root;
        let mut best = None;
        for segment in segments {
            let Some(child) = node.children.get(*segment) else {
                break;
            };
            if child.rule.is_some() {
                best = child.rule;
            }
            node = child;
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::{RouteTrie, path_segments};

    #[test]
    fn segments_ignore_empty_parts_and_query() {
        assert_eq!(path_segments("/admin//users/?tab=1"), vec!["admin", "users"]);
        assert_eq!(path_segments("/teams#roster"), vec!["teams"]);
        assert!(path_segments("/").is_empty());
    }

    #[test]
    fn deepest_registered_prefix_wins() {
        let mut trie = RouteTrie::default();
        assert!(trie.insert(&["admin"], 0).is_ok());
        assert!(trie.insert(&["admin", "users"], 1).is_ok());

        assert_eq!(trie.longest_match(&["admin", "users", "5"]), Some(1));
        assert_eq!(trie.longest_match(&["admin", "settings"]), Some(0));
        assert_eq!(trie.longest_match(&["adminx"]), None);
    }

    #[test]
    fn duplicate_prefix_reports_existing_rule() {
        let mut trie = RouteTrie::default();
        assert!(trie.insert(&["team"], 3).is_ok());
        assert_eq!(trie.insert(&["team"], 4), Err(3));
    }

    #[test]
    fn root_rule_matches_only_root() {
        let mut trie = RouteTrie::default();
        assert!(trie.insert(&[], 0).is_ok());

        assert_eq!(trie.longest_match(&[]), Some(0));
        assert_eq!(trie.longest_match(&["public"]), None);
    }
}
