//! Enumeration requests

use crate::node::NodeKind;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Selects whether enumeration yields files, directories, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentTypeMask {
    AllEntries,
    FilesOnly,
    DirectoriesOnly,
}

impl ContentTypeMask {
    pub fn includes(&self, kind: NodeKind) -> bool {
        match self {
            ContentTypeMask::AllEntries => true,
            ContentTypeMask::FilesOnly => kind == NodeKind::File,
            ContentTypeMask::DirectoriesOnly => kind == NodeKind::Directory,
        }
    }
}

/// One directory-enumeration request.
///
/// An empty `path` selects root mode: the mounted-volume list is enumerated
/// instead of directory children. `started_at` anchors the wall-clock
/// enumeration deadline; all request state is owned by the call, nothing is
/// shared across requests.
#[derive(Debug, Clone)]
pub struct ReadDirRequest {
    pub path: String,
    pub mask: ContentTypeMask,
    /// Raw `;`-delimited extension list; parsed into a
    /// [`FilterSet`](crate::FilterSet) by the enumerator.
    pub filter_list: String,
    pub started_at: SystemTime,
}

impl ReadDirRequest {
    pub fn new(path: impl Into<String>, mask: ContentTypeMask, filter_list: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mask,
            filter_list: filter_list.into(),
            started_at: SystemTime::now(),
        }
    }

    /// Root-mode request: enumerate mounted volumes.
    pub fn volumes() -> Self {
        Self::new("", ContentTypeMask::AllEntries, "")
    }

    pub fn is_root_mode(&self) -> bool {
        self.path.is_empty()
    }
}
