//! Directory and volume enumeration
//!
//! The one piece of the gateway with real policy: content-type and extension
//! filtering, metadata normalization through the [`MetadataNormalizer`]
//! seam, and a cooperative wall-clock deadline so a huge or slow directory
//! cannot stall the caller indefinitely.

use crate::normalizer::MetadataNormalizer;
use crate::volumes;
use filegate_core::{
    ContentTypeMask, DirectoryListing, FileSystemNode, FilterSet, FsError, FsResult, NodeKind,
    ReadDirRequest,
};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// Wall-clock budget for one enumeration request.
///
/// Checked once per entry visited; an in-flight native call is not
/// interrupted, so a single slow stat can overrun the budget once started.
pub const READ_DIR_TIMEOUT: Duration = Duration::from_secs(10);

/// Walks one directory level (or the volume list) and produces normalized
/// nodes in native discovery order.
///
/// Each call owns its accumulating result; nothing is shared between
/// concurrent requests, so no synchronization is involved.
pub struct DirectoryEnumerator {
    normalizer: Arc<dyn MetadataNormalizer>,
    budget: Duration,
}

impl DirectoryEnumerator {
    pub fn new(normalizer: Arc<dyn MetadataNormalizer>) -> Self {
        Self::with_budget(normalizer, READ_DIR_TIMEOUT)
    }

    /// Override the deadline budget. The production gateway always uses
    /// [`READ_DIR_TIMEOUT`]; this exists for callers that need a tighter
    /// bound and for exercising the cutoff.
    pub fn with_budget(normalizer: Arc<dyn MetadataNormalizer>, budget: Duration) -> Self {
        Self { normalizer, budget }
    }

    pub fn enumerate(&self, request: &ReadDirRequest) -> FsResult<DirectoryListing> {
        if request.is_root_mode() {
            self.enumerate_volumes(request)
        } else {
            self.enumerate_children(request)
        }
    }

    fn deadline_exceeded(&self, request: &ReadDirRequest) -> bool {
        SystemTime::now()
            .duration_since(request.started_at)
            .map(|elapsed| elapsed > self.budget)
            .unwrap_or(false)
    }

    /// Root mode: surface writable mounted volumes as directory nodes.
    fn enumerate_volumes(&self, request: &ReadDirRequest) -> FsResult<DirectoryListing> {
        let volumes = volumes::mounted_volumes()
            .map_err(|err| FsError::Platform(format!("volume listing failed: {err}")))?;

        let mut nodes = Vec::new();
        for volume in volumes {
            if self.deadline_exceeded(request) {
                tracing::warn!(collected = nodes.len(), "volume enumeration hit deadline");
                return Ok(DirectoryListing::partial(nodes));
            }
            // Read-only volumes are deliberately excluded; the gateway only
            // surfaces targets the host could write to.
            if !volume.is_writable {
                continue;
            }
            let mut node = FileSystemNode::directory(volume.name, volume.mount_point);
            // Total capacity, not free space. Volumes carry no timestamps.
            node.size_bytes = volume.capacity_bytes;
            nodes.push(node);
        }

        Ok(DirectoryListing::new(nodes))
    }

    /// Directory mode: immediate children only, no recursion.
    fn enumerate_children(&self, request: &ReadDirRequest) -> FsResult<DirectoryListing> {
        let dir = Path::new(&request.path);
        if !dir.is_dir() {
            return Err(FsError::NotFound(request.path.clone()));
        }

        // Extension filters never apply to a directories-only request.
        let filter = if request.mask == ContentTypeMask::DirectoriesOnly {
            FilterSet::default()
        } else {
            FilterSet::parse(&request.filter_list)
        };

        let mut nodes = Vec::new();
        for entry in fs::read_dir(dir)? {
            if self.deadline_exceeded(request) {
                tracing::warn!(
                    path = %request.path,
                    collected = nodes.len(),
                    "enumeration hit deadline, returning partial listing"
                );
                return Ok(DirectoryListing::partial(nodes));
            }

            // Per-entry failures are absorbed, never fatal to the call.
            let Ok(entry) = entry else { continue };
            let file_name = entry.file_name();
            if is_hidden(&file_name) {
                continue;
            }

            let path = entry.path();
            // Resolved metadata decides the kind; dangling symlinks and
            // special files fall through neither arm and are skipped.
            let Ok(meta) = fs::metadata(&path) else { continue };
            let kind = if meta.is_dir() {
                NodeKind::Directory
            } else if meta.is_file() {
                NodeKind::File
            } else {
                continue;
            };

            if kind == NodeKind::File && !filter.is_empty() {
                let extension = path
                    .extension()
                    .map(|ext| ext.to_string_lossy().into_owned())
                    .unwrap_or_default();
                if !filter.matches(&extension) {
                    continue;
                }
            }

            if !request.mask.includes(kind) {
                continue;
            }

            nodes.push(self.build_node(kind, &file_name, &path));
        }

        Ok(DirectoryListing::new(nodes))
    }

    fn build_node(&self, kind: NodeKind, file_name: &OsStr, path: &Path) -> FileSystemNode {
        let name = file_name.to_string_lossy().into_owned();
        let location = path.to_string_lossy().into_owned();
        let mut node = match kind {
            NodeKind::File => FileSystemNode::file(name, location),
            NodeKind::Directory => FileSystemNode::directory(name, location),
        };

        // A failed stat leaves the safe defaults in place. Directory
        // writability stays `true` by contract; only files are probed.
        if let Some(stat) = self.normalizer.stat(path) {
            node.size_bytes = stat.size_bytes;
            node.created_at_ms = stat.created_at_ms;
            node.modified_at_ms = stat.modified_at_ms;
            if kind == NodeKind::File {
                node.is_writable = stat.is_writable;
            }
        }

        node
    }
}

/// Hidden-entry convention at the listing-source level: dot-prefixed names
/// are never surfaced, matching what the native enumeration APIs skip.
fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::NativeNormalizer;

    fn enumerator() -> DirectoryEnumerator {
        DirectoryEnumerator::new(Arc::new(NativeNormalizer::new()))
    }

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"content").unwrap();
    }

    fn names(listing: &DirectoryListing) -> Vec<String> {
        listing.nodes.iter().map(|n| n.name.clone()).collect()
    }

    #[test]
    fn test_files_only_with_extension_filter() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "a.txt");
        touch(tmp.path(), "b.jpg");
        touch(tmp.path(), "c.png");

        let request = ReadDirRequest::new(
            tmp.path().to_string_lossy(),
            ContentTypeMask::FilesOnly,
            "jpg;png",
        );
        let listing = enumerator().enumerate(&request).unwrap();

        assert!(listing.complete);
        let mut got = names(&listing);
        got.sort();
        assert_eq!(got, vec!["b.jpg", "c.png"]);
        assert!(listing.nodes.iter().all(|n| n.kind == NodeKind::File));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "photo.PNG");

        let request = ReadDirRequest::new(
            tmp.path().to_string_lossy(),
            ContentTypeMask::FilesOnly,
            "png",
        );
        let listing = enumerator().enumerate(&request).unwrap();
        assert_eq!(names(&listing), vec!["photo.PNG"]);
    }

    #[test]
    fn test_directories_only_ignores_filter() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "a.jpg");
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let request = ReadDirRequest::new(
            tmp.path().to_string_lossy(),
            ContentTypeMask::DirectoriesOnly,
            "jpg",
        );
        let listing = enumerator().enumerate(&request).unwrap();

        assert_eq!(names(&listing), vec!["sub"]);
        assert!(listing.nodes[0].is_directory());
        // Directories report writable unconditionally.
        assert!(listing.nodes[0].is_writable);
    }

    #[test]
    fn test_unmatchable_filter_excludes_everything() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "a.txt");

        let request = ReadDirRequest::new(
            tmp.path().to_string_lossy(),
            ContentTypeMask::FilesOnly,
            "zzz",
        );
        let listing = enumerator().enumerate(&request).unwrap();
        assert!(listing.is_empty());
        assert!(listing.complete);
    }

    #[test]
    fn test_empty_directory_is_complete_and_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let request =
            ReadDirRequest::new(tmp.path().to_string_lossy(), ContentTypeMask::AllEntries, "");
        let listing = enumerator().enumerate(&request).unwrap();
        assert!(listing.complete);
        assert!(listing.is_empty());
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let request =
            ReadDirRequest::new("/does/not/exist", ContentTypeMask::AllEntries, "");
        let err = enumerator().enumerate(&request).unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn test_hidden_entries_are_excluded() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "visible.txt");
        touch(tmp.path(), ".hidden");
        fs::create_dir(tmp.path().join(".git")).unwrap();

        let request =
            ReadDirRequest::new(tmp.path().to_string_lossy(), ContentTypeMask::AllEntries, "");
        let listing = enumerator().enumerate(&request).unwrap();
        assert_eq!(names(&listing), vec!["visible.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "real.txt");
        std::os::unix::fs::symlink("/nowhere/at/all", tmp.path().join("broken")).unwrap();

        let request =
            ReadDirRequest::new(tmp.path().to_string_lossy(), ContentTypeMask::AllEntries, "");
        let listing = enumerator().enumerate(&request).unwrap();
        assert_eq!(names(&listing), vec!["real.txt"]);
        assert!(listing.complete);
    }

    #[test]
    fn test_deadline_yields_partial_listing() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "a.txt");
        touch(tmp.path(), "b.txt");
        touch(tmp.path(), "c.txt");

        // Backdate the request start so the very first deadline check trips.
        let mut request =
            ReadDirRequest::new(tmp.path().to_string_lossy(), ContentTypeMask::AllEntries, "");
        request.started_at = SystemTime::now() - Duration::from_secs(60);

        let listing = enumerator().enumerate(&request).unwrap();
        assert!(!listing.complete);
        assert!(listing.len() < 3);
    }

    #[test]
    fn test_enumeration_is_idempotent_as_a_set() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "one.txt");
        touch(tmp.path(), "two.txt");
        fs::create_dir(tmp.path().join("three")).unwrap();

        let run = || {
            let request = ReadDirRequest::new(
                tmp.path().to_string_lossy(),
                ContentTypeMask::AllEntries,
                "",
            );
            let listing = enumerator().enumerate(&request).unwrap();
            assert!(listing.complete);
            let mut sorted = names(&listing);
            sorted.sort();
            sorted
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_metadata_is_populated() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "payload.txt");

        let request =
            ReadDirRequest::new(tmp.path().to_string_lossy(), ContentTypeMask::FilesOnly, "");
        let listing = enumerator().enumerate(&request).unwrap();

        let node = &listing.nodes[0];
        assert_eq!(node.size_bytes, 7);
        assert!(node.modified_at_ms > 0);
        assert!(!node.name.is_empty());
        assert!(!node.location.is_empty());
    }

    #[test]
    fn test_root_mode_surfaces_only_writable_volumes() {
        let listing = enumerator().enumerate(&ReadDirRequest::volumes()).unwrap();
        for node in &listing.nodes {
            assert!(node.is_directory());
            assert!(node.is_writable);
            assert_eq!(node.created_at_ms, 0);
            assert_eq!(node.modified_at_ms, 0);
        }
    }
}
