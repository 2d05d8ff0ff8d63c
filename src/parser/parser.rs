use std::collections::HashSet;

use snafu::{ResultExt, Snafu, ensure};
use tracing::debug;

use crate::parser::prefix::{self, LinePrefix, UnrecognizedPrefixError};
use crate::tree::{TreeForest, TreeNode};

/// How a line's name classifies before any child line has been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    /// Carries a trailing `/` marker, or already received a child.
    Directory,
    /// Carries an extension-style dot; never accepts children.
    File,
    /// No marker either way: a leaf stays a file, a child promotes it.
    Provisional,
}

fn classify(name: &str) -> EntryKind {
    if name.ends_with('/') {
        EntryKind::Directory
    } else if name.chars().skip(1).any(|c| c == '.') {
        EntryKind::File
    } else {
        EntryKind::Provisional
    }
}

/// An ancestor whose children are still being collected. The stack index of
/// an open node equals its depth.
struct OpenNode {
    node: TreeNode,
    entry_kind: EntryKind,
    seen: HashSet<String>,
}

fn attach(node: TreeNode, parent: Option<&mut OpenNode>, roots: &mut Vec<TreeNode>) {
    match parent {
        Some(open) => open.node.push_child(node),
        None => roots.push(node),
    }
}

fn build_node(name: &str, line: usize) -> Result<(TreeNode, EntryKind), MalformedTreeError> {
    let entry_kind = classify(name);
    let cleaned = name.strip_suffix('/').unwrap_or(name);
    ensure!(!cleaned.is_empty(), EmptyNameSnafu { line });
    ensure!(
        cleaned != "." && cleaned != ".." && !cleaned.contains(['/', '\\']),
        InvalidNameSnafu {
            line,
            name: cleaned
        }
    );

    let node = match entry_kind {
        EntryKind::Directory => TreeNode::directory(cleaned),
        EntryKind::File | EntryKind::Provisional => TreeNode::file(cleaned),
    };
    Ok((node, entry_kind))
}

impl TryFrom<&str> for TreeForest {
    type Error = TreeParseError;

    /// Parses an ASCII tree in a single pass over its lines, maintaining a
    /// stack of open ancestors keyed by depth. Blank lines and `#` comments
    /// are skipped but still advance the reported line numbers.
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let mut roots: Vec<TreeNode> = Vec::new();
        let mut root_seen: HashSet<String> = HashSet::new();
        let mut stack: Vec<OpenNode> = Vec::new();

        for (index, raw_line) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim_end();
            if line.trim().is_empty() {
                continue;
            }
            if line.trim_start().starts_with('#') {
                debug!("Skipping comment on line {line_number}");
                continue;
            }

            let LinePrefix { depth, name } =
                prefix::split_prefix(line).context(UnrecognizedPrefixSnafu { line: line_number })?;
            ensure!(
                depth <= stack.len(),
                DepthJumpSnafu {
                    line: line_number,
                    depth,
                    max_depth: stack.len(),
                }
            );

            while stack.len() > depth {
                if let Some(closed) = stack.pop() {
                    attach(closed.node, stack.last_mut(), &mut roots);
                }
            }

            let (node, entry_kind) = build_node(name, line_number)?;

            let collision = match stack.last_mut() {
                Some(parent) => {
                    ensure!(
                        parent.entry_kind != EntryKind::File,
                        ChildOfFileSnafu {
                            line: line_number,
                            parent: parent.node.name(),
                        }
                    );
                    if parent.entry_kind == EntryKind::Provisional {
                        debug!("Promoting '{}' to a directory", parent.node.name());
                        parent.node.promote_to_directory();
                        parent.entry_kind = EntryKind::Directory;
                    }
                    if parent.seen.insert(node.name().to_string()) {
                        None
                    } else {
                        Some(format!("directory '{}'", parent.node.name()))
                    }
                }
                None => {
                    if root_seen.insert(node.name().to_string()) {
                        None
                    } else {
                        Some(String::from("the top level"))
                    }
                }
            };
            if let Some(parent) = collision {
                return DuplicateEntrySnafu {
                    line: line_number,
                    name: node.name(),
                    parent,
                }
                .fail()
                .map_err(Into::into);
            }

            stack.push(OpenNode {
                node,
                entry_kind,
                seen: HashSet::new(),
            });
        }

        while let Some(closed) = stack.pop() {
            attach(closed.node, stack.last_mut(), &mut roots);
        }
        ensure!(!roots.is_empty(), EmptyInputSnafu);

        let forest = TreeForest::from_roots(roots);
        debug!(
            "Parsed {} entries across {} root(s)",
            forest.entry_count(),
            forest.roots().len()
        );
        Ok(forest)
    }
}

/// Structural violation in the input text.
#[derive(Debug, Snafu)]
pub enum MalformedTreeError {
    #[snafu(display("Unrecognized tree prefix on line {line}"))]
    UnrecognizedPrefix {
        line: usize,
        source: UnrecognizedPrefixError,
    },
    #[snafu(display(
        "Line {line} jumps to depth {depth} but the deepest open entry allows {max_depth}"
    ))]
    DepthJump {
        line: usize,
        depth: usize,
        max_depth: usize,
    },
    #[snafu(display("Line {line} declares a child of '{parent}', which is a file"))]
    ChildOfFile { line: usize, parent: String },
    #[snafu(display("Entry on line {line} has an empty name"))]
    EmptyName { line: usize },
    #[snafu(display("Entry name '{name}' on line {line} is not a valid file name"))]
    InvalidName { line: usize, name: String },
    #[snafu(display("Input contains no tree entries"))]
    EmptyInput,
}

/// Two sibling lines with the same name under one parent.
#[derive(Debug, Snafu)]
#[snafu(display("Duplicate entry '{name}' under {parent} on line {line}"))]
pub struct DuplicateEntryError {
    line: usize,
    name: String,
    parent: String,
}

#[derive(Debug, Snafu)]
pub enum TreeParseError {
    #[snafu(transparent)]
    Malformed { source: MalformedTreeError },
    #[snafu(transparent)]
    Duplicate { source: DuplicateEntryError },
}
