//! Native metadata normalization

use filegate_core::time::system_time_to_millis;
use std::fs;
use std::path::Path;

/// Normalized metadata of one path, in the canonical cross-platform units.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeStat {
    /// `0` for directories and whenever the platform reports no size.
    pub size_bytes: u64,
    /// Epoch milliseconds, `0` when unavailable.
    pub created_at_ms: u64,
    pub modified_at_ms: u64,
    pub is_writable: bool,
}

/// Per-platform metadata accessor.
///
/// `stat` returns `None` only on total inability to resolve the path. The
/// enumerator treats that as "default the fields and keep going", so a
/// single unreadable entry never aborts a traversal.
pub trait MetadataNormalizer: Send + Sync {
    fn stat(&self, path: &Path) -> Option<NodeStat>;

    /// Native writability probe, independent of `stat`.
    fn is_writable(&self, path: &Path) -> bool;
}

/// Normalizer backed by the local filesystem.
#[derive(Debug, Default)]
pub struct NativeNormalizer;

impl NativeNormalizer {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataNormalizer for NativeNormalizer {
    fn stat(&self, path: &Path) -> Option<NodeStat> {
        // Follows symlinks; a dangling link resolves nothing and yields None.
        let meta = fs::metadata(path).ok()?;

        // Directories carry no meaningful byte size in this model.
        let size_bytes = if meta.is_file() { meta.len() } else { 0 };
        let created_at_ms = meta.created().ok().map(system_time_to_millis).unwrap_or(0);
        let modified_at_ms = meta.modified().ok().map(system_time_to_millis).unwrap_or(0);

        Some(NodeStat {
            size_bytes,
            created_at_ms,
            modified_at_ms,
            is_writable: self.is_writable(path),
        })
    }

    #[cfg(unix)]
    fn is_writable(&self, path: &Path) -> bool {
        use std::ffi::CString;
        use std::os::unix::ffi::OsStrExt;

        let Ok(cpath) = CString::new(path.as_os_str().as_bytes()) else {
            return false;
        };
        unsafe { libc::access(cpath.as_ptr(), libc::W_OK) == 0 }
    }

    #[cfg(not(unix))]
    fn is_writable(&self, path: &Path) -> bool {
        fs::metadata(path)
            .map(|meta| !meta.permissions().readonly())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_stat_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"hello").unwrap();
        drop(file);

        let stat = NativeNormalizer::new().stat(&path).unwrap();
        assert_eq!(stat.size_bytes, 5);
        assert!(stat.modified_at_ms > 0);
        assert!(stat.is_writable);
    }

    #[test]
    fn test_stat_directory_has_zero_size() {
        let dir = tempfile::tempdir().unwrap();
        let stat = NativeNormalizer::new().stat(dir.path()).unwrap();
        assert_eq!(stat.size_bytes, 0);
    }

    #[test]
    fn test_stat_missing_path_is_none() {
        let normalizer = NativeNormalizer::new();
        assert!(normalizer.stat(Path::new("/does/not/exist")).is_none());
        assert!(!normalizer.is_writable(Path::new("/does/not/exist")));
    }
}
