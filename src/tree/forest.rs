use crate::tree::TreeNode;

/// The ordered sequence of root nodes produced by a successful parse.
///
/// Most inputs have exactly one root, but the format allows several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeForest {
    roots: Vec<TreeNode>,
}

impl TreeForest {
    pub(crate) fn from_roots(roots: Vec<TreeNode>) -> Self {
        TreeForest { roots }
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Total number of entries across all roots.
    pub fn entry_count(&self) -> usize {
        fn count(node: &TreeNode) -> usize {
            1 + node.children().iter().map(count).sum::<usize>()
        }
        self.roots.iter().map(count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_count_covers_nested_children() {
        let mut root = TreeNode::directory("a");
        let mut sub = TreeNode::directory("c");
        sub.push_child(TreeNode::file("d.txt"));
        root.push_child(TreeNode::file("b.txt"));
        root.push_child(sub);

        let forest = TreeForest::from_roots(vec![root]);
        assert_eq!(forest.entry_count(), 4);
    }
}
