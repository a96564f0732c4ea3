//! Route-to-menu resolution

use super::menu::MenuNode;

/// Id of the first top-level node (declaration order) whose subtree holds a node whose
/// path is a string prefix of `current_path`.
///
/// Each top-level branch is searched completely (the node itself, then its
/// descendants) before moving on to the next one. `None` means nothing matched and
/// the caller keeps its previous selection.
pub fn resolve<'a>(current_path: &str, tree: &'a [MenuNode]) -> Option<&'a str> {
    tree.iter()
        .find(|top| top.iter().any(|node| node.prefix_matches(current_path)))
        .map(|top| top.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::menu_config::default_menu;

    fn scenario() -> Vec<MenuNode> {
        vec![
            MenuNode::new("a", "A")
                .with_path("/a")
                .with_children(vec![MenuNode::new("a1", "A1").with_path("/a/x")]),
            MenuNode::new("b", "B").with_path("/b"),
        ]
    }

    #[test]
    fn test_scenario() {
        let tree = scenario();
        assert_eq!(resolve("/a/x/detail", &tree), Some("a"));
        assert_eq!(resolve("/b", &tree), Some("b"));
        assert_eq!(resolve("/c", &tree), None);
    }

    #[test]
    fn test_match_through_child_when_parent_has_no_path() {
        let tree = vec![
            MenuNode::new("container", "C").with_children(vec![MenuNode::new("leaf", "L")
                .with_children(vec![MenuNode::new("deep", "D").with_path("/reports/q1")])]),
            MenuNode::new("reports", "R").with_path("/reports"),
        ];
        // The first branch owns a grandchild match, so it wins over the later top-level hit
        assert_eq!(resolve("/reports/q1/pdf", &tree), Some("container"));
        assert_eq!(resolve("/reports/q2", &tree), Some("reports"));
    }

    #[test]
    fn test_prefix_without_segment_boundary() {
        let tree = vec![MenuNode::new("system", "S").with_path("/system")];
        assert_eq!(resolve("/system-settings-extra", &tree), Some("system"));
    }

    #[test]
    fn test_arbitrary_depth() {
        let mut node = MenuNode::new("n5", "5").with_path("/deep/1/2/3/4/5");
        for depth in (0..5).rev() {
            node = MenuNode::new(format!("n{}", depth), "x").with_children(vec![node]);
        }
        let tree = vec![MenuNode::new("other", "O").with_path("/other"), node];
        assert_eq!(resolve("/deep/1/2/3/4/5/6", &tree), Some("n0"));
    }

    #[test]
    fn test_empty_tree_yields_nothing() {
        assert_eq!(resolve("/anything", &[]), None);
    }

    #[test]
    fn test_default_menu_routes() {
        let tree = default_menu().unwrap();
        let roots = tree.top_level();
        assert_eq!(resolve("/linker/data-assets/local", roots), Some("linker"));
        assert_eq!(resolve("/system/roles", roots), Some("system"));
        assert_eq!(resolve("/help/faq", roots), Some("help"));
        assert_eq!(resolve("/", roots), None);
    }
}
