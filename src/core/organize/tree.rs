//! Virtual destination folder tree.

use super::types::PlannedFile;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A folder in the planned destination layout
///
/// Each node owns its children outright. Children iterate in the order they
/// were first created, so previews render the same way every time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Single path segment; empty for the root
    pub name: String,
    /// Files whose destination folder is exactly this node
    pub files: Vec<PlannedFile>,
    pub children: IndexMap<String, FolderNode>,
}

impl FolderNode {
    /// The unnamed root node
    pub fn root() -> Self {
        Self::default()
    }

    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Descend along `segments`, creating folders as needed, and attach `file`
    /// to the last one. With no segments the file lands on this node.
    pub fn insert<'a, I>(&mut self, segments: I, file: PlannedFile)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut node = self;
        for segment in segments {
            node = node
                .children
                .entry(segment.to_string())
                .or_insert_with(|| FolderNode::named(segment));
        }
        node.files.push(file);
    }

    /// Number of folders below this node (this node excluded)
    pub fn count_folders(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.count_folders())
            .sum()
    }

    /// Number of files in this node and every descendant
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .children
                .values()
                .map(FolderNode::file_count)
                .sum::<usize>()
    }

    /// Look up a descendant by path segments
    pub fn get<'a, I>(&self, segments: I) -> Option<&FolderNode>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut node = self;
        for segment in segments {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    /// Depth-first, pre-order visit of every descendant with its depth (1 for
    /// direct children). The node itself is not visited.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&FolderNode, usize),
    {
        self.walk_inner(1, &mut visit);
    }

    fn walk_inner<F>(&self, depth: usize, visit: &mut F)
    where
        F: FnMut(&FolderNode, usize),
    {
        for child in self.children.values() {
            visit(child, depth);
            child.walk_inner(depth + 1, visit);
        }
    }
}
