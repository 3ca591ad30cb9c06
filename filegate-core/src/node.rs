//! File system nodes

use serde::{Deserialize, Serialize};

/// Node kind
///
/// Mounted volumes are surfaced as `Directory` nodes rooted at their mount
/// point, so only two variants exist at the contract boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    File,
    Directory,
}

/// A normalized file, directory, or volume record.
///
/// Every field is populated before the node is handed out: sizes and
/// timestamps the platform cannot report are `0`, never uninitialized.
/// Timestamps are milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSystemNode {
    pub kind: NodeKind,
    /// Display name (last path component).
    pub name: String,
    /// Full native path; unique within one enumeration.
    pub location: String,
    pub size_bytes: u64,
    pub created_at_ms: u64,
    pub modified_at_ms: u64,
    /// Directories report `true` unconditionally; the native check is only
    /// performed for files. Documented contract, not an omission.
    pub is_writable: bool,
}

impl FileSystemNode {
    pub fn file(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::File,
            name: name.into(),
            location: location.into(),
            size_bytes: 0,
            created_at_ms: 0,
            modified_at_ms: 0,
            is_writable: false,
        }
    }

    pub fn directory(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Directory,
            name: name.into(),
            location: location.into(),
            size_bytes: 0,
            created_at_ms: 0,
            modified_at_ms: 0,
            is_writable: true,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// Result of one directory (or volume) enumeration.
///
/// `nodes` are in native discovery order, not sorted. `complete` is `false`
/// when the traversal was cut short by the enumeration deadline; the nodes
/// collected up to that point are still returned. Callers must branch on
/// `complete` before treating a listing as exhaustive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryListing {
    pub nodes: Vec<FileSystemNode>,
    pub complete: bool,
}

impl DirectoryListing {
    pub fn new(nodes: Vec<FileSystemNode>) -> Self {
        Self { nodes, complete: true }
    }

    pub fn partial(nodes: Vec<FileSystemNode>) -> Self {
        Self { nodes, complete: false }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
