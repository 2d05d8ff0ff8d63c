use derive_more::Display;

/// The kind of entry a node describes.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    #[display("directory")]
    Directory,
    #[display("file")]
    File,
}

/// A single entry of a parsed tree.
///
/// The name is stored without the trailing `/` directory marker and never
/// contains path separators; joining names along a root-to-node walk yields
/// the node's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    name: String,
    kind: NodeKind,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn file(name: impl Into<String>) -> Self {
        TreeNode {
            name: name.into(),
            kind: NodeKind::File,
            children: Vec::new(),
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        TreeNode {
            name: name.into(),
            kind: NodeKind::Directory,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Reclassifies an extension-less entry as a directory once the parser
    /// sees a child line under it.
    pub(crate) fn promote_to_directory(&mut self) {
        self.kind = NodeKind::Directory;
    }

    pub(crate) fn push_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_turns_a_file_into_a_directory() {
        let mut node = TreeNode::file("src");
        node.promote_to_directory();
        assert_eq!(node.kind(), NodeKind::Directory);
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut dir = TreeNode::directory("a");
        dir.push_child(TreeNode::file("b.txt"));
        dir.push_child(TreeNode::directory("c"));
        let names: Vec<_> = dir.children().iter().map(TreeNode::name).collect();
        assert_eq!(names, vec!["b.txt", "c"]);
    }

    #[test]
    fn kind_display_matches_entry_kind() {
        assert_eq!(NodeKind::Directory.to_string(), "directory");
        assert_eq!(NodeKind::File.to_string(), "file");
    }
}
