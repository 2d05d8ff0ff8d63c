use std::path::{Path, PathBuf};

use crate::tree::{NodeKind, TreeForest, TreeNode};

/// One path to be created, with the kind it must have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntry {
    pub path: PathBuf,
    pub kind: NodeKind,
}

/// Pre-order flattening of a forest under a base directory.
///
/// Parents always precede their children, so applying the entries in order
/// never hits a missing intermediate directory.
#[derive(Debug, Clone)]
pub struct MaterializePlan {
    base: PathBuf,
    entries: Vec<PlannedEntry>,
}

impl MaterializePlan {
    pub fn from_forest(forest: &TreeForest, base: &Path) -> Self {
        let mut entries = Vec::with_capacity(forest.entry_count());
        for root in forest.roots() {
            push_subtree(root, base, &mut entries);
        }

        MaterializePlan {
            base: base.to_path_buf(),
            entries,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn entries(&self) -> &[PlannedEntry] {
        &self.entries
    }

    pub fn directory_count(&self) -> usize {
        self.count_kind(NodeKind::Directory)
    }

    pub fn file_count(&self) -> usize {
        self.count_kind(NodeKind::File)
    }

    fn count_kind(&self, kind: NodeKind) -> usize {
        self.entries.iter().filter(|entry| entry.kind == kind).count()
    }
}

fn push_subtree(node: &TreeNode, parent: &Path, entries: &mut Vec<PlannedEntry>) {
    let path = parent.join(node.name());
    entries.push(PlannedEntry {
        path: path.clone(),
        kind: node.kind(),
    });
    for child in node.children() {
        push_subtree(child, &path, entries);
    }
}
