//! Native gateway implementation
//!
//! [`NativeGateway`] binds the enumerator to the thin one-call wrappers
//! around the local filesystem. Wrapper semantics follow the gateway
//! contract: existence guards up front, overwrite removes the destination
//! first, deletion routes through the trash unless asked not to.

use crate::enumerator::DirectoryEnumerator;
use crate::normalizer::{MetadataNormalizer, NativeNormalizer};
use crate::remote;
use filegate_core::{
    operations::{CopyOptions, DeleteOptions, PathTimes},
    DirectoryListing, FileSystemGateway, FsError, FsResult, GatewayCapabilities, ReadDirRequest,
};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use walkdir::WalkDir;

pub struct NativeGateway {
    normalizer: Arc<dyn MetadataNormalizer>,
    enumerator: DirectoryEnumerator,
    capabilities: GatewayCapabilities,
}

impl NativeGateway {
    pub fn new() -> Self {
        let normalizer: Arc<dyn MetadataNormalizer> = Arc::new(NativeNormalizer::new());
        Self {
            enumerator: DirectoryEnumerator::new(Arc::clone(&normalizer)),
            normalizer,
            capabilities: GatewayCapabilities {
                supports_trash: true,
                supports_volumes: true,
                supports_remote_fetch: true,
            },
        }
    }

    fn path_times(&self, path: &str) -> FsResult<PathTimes> {
        let stat = self
            .normalizer
            .stat(Path::new(path))
            .ok_or_else(|| FsError::NotFound(path.to_string()))?;
        Ok(PathTimes {
            created_at_ms: stat.created_at_ms,
            modified_at_ms: stat.modified_at_ms,
        })
    }
}

impl Default for NativeGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemGateway for NativeGateway {
    fn capabilities(&self) -> &GatewayCapabilities {
        &self.capabilities
    }

    fn read_directory(&self, request: &ReadDirRequest) -> FsResult<DirectoryListing> {
        self.enumerator.enumerate(request)
    }

    fn file_exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn directory_exists(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn file_is_writable(&self, path: &str) -> bool {
        let path = Path::new(path);
        path.is_file() && self.normalizer.is_writable(path)
    }

    fn copy_file(&self, source: &str, dest: &str, options: &CopyOptions) -> FsResult<()> {
        let src = Path::new(source);
        if !src.is_file() {
            return Err(FsError::NotAFile(source.to_string()));
        }
        let dst = Path::new(dest);
        if dst.exists() {
            if !options.overwrite {
                return Err(FsError::AlreadyExists(dest.to_string()));
            }
            fs::remove_file(dst)?;
        }
        fs::copy(src, dst)?;
        Ok(())
    }

    fn delete_file(&self, path: &str, options: &DeleteOptions) -> FsResult<()> {
        let target = Path::new(path);
        if !target.is_file() {
            return Err(FsError::NotFound(path.to_string()));
        }
        if options.permanent || !self.capabilities.supports_trash {
            fs::remove_file(target)?;
        } else {
            tracing::debug!(path, "moving file to trash");
            trash::delete(target).map_err(|err| FsError::Platform(err.to_string()))?;
        }
        Ok(())
    }

    fn copy_directory(&self, source: &str, dest: &str, options: &CopyOptions) -> FsResult<()> {
        let src = Path::new(source);
        if !src.is_dir() {
            return Err(FsError::NotADirectory(source.to_string()));
        }
        let dst = Path::new(dest);
        if dst.exists() {
            if !options.overwrite {
                return Err(FsError::AlreadyExists(dest.to_string()));
            }
            fs::remove_dir_all(dst)?;
        }

        for entry in WalkDir::new(src) {
            let entry = entry.map_err(|err| FsError::Platform(err.to_string()))?;
            let relative = entry
                .path()
                .strip_prefix(src)
                .map_err(|_| FsError::InvalidPath(entry.path().display().to_string()))?;
            let target = dst.join(relative);
            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
            } else if entry.file_type().is_file() {
                fs::copy(entry.path(), &target)?;
            }
        }
        Ok(())
    }

    fn move_directory(&self, source: &str, dest: &str) -> FsResult<()> {
        let src = Path::new(source);
        if !src.is_dir() {
            return Err(FsError::NotADirectory(source.to_string()));
        }
        if Path::new(dest).exists() {
            return Err(FsError::AlreadyExists(dest.to_string()));
        }
        fs::rename(src, dest)?;
        Ok(())
    }

    fn delete_directory(&self, path: &str, options: &DeleteOptions) -> FsResult<()> {
        let target = Path::new(path);
        if !target.is_dir() {
            return Err(FsError::NotFound(path.to_string()));
        }
        if options.permanent || !self.capabilities.supports_trash {
            fs::remove_dir_all(target)?;
        } else {
            tracing::debug!(path, "moving directory to trash");
            trash::delete(target).map_err(|err| FsError::Platform(err.to_string()))?;
        }
        Ok(())
    }

    fn directory_is_empty(&self, path: &str) -> FsResult<bool> {
        let target = Path::new(path);
        if !target.is_dir() {
            return Err(FsError::NotADirectory(path.to_string()));
        }
        let mut entries = fs::read_dir(target)?;
        Ok(entries.next().is_none())
    }

    fn file_times(&self, path: &str) -> FsResult<PathTimes> {
        if !self.file_exists(path) {
            return Err(FsError::NotFound(path.to_string()));
        }
        self.path_times(path)
    }

    fn directory_times(&self, path: &str) -> FsResult<PathTimes> {
        if !self.directory_exists(path) {
            return Err(FsError::NotFound(path.to_string()));
        }
        self.path_times(path)
    }

    fn file_size(&self, path: &str) -> FsResult<u64> {
        if !self.file_exists(path) {
            return Err(FsError::NotFound(path.to_string()));
        }
        let stat = self
            .normalizer
            .stat(Path::new(path))
            .ok_or_else(|| FsError::NotFound(path.to_string()))?;
        Ok(stat.size_bytes)
    }

    fn read_text_from_url(&self, url: &str) -> FsResult<String> {
        if !self.capabilities.supports_remote_fetch {
            return Err(FsError::Unsupported("remote fetch".into()));
        }
        remote::read_text(url)
    }

    fn read_binary_from_url(&self, url: &str) -> FsResult<Vec<u8>> {
        if !self.capabilities.supports_remote_fetch {
            return Err(FsError::Unsupported("remote fetch".into()));
        }
        remote::read_binary(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filegate_core::{ContentTypeMask, NodeKind};

    fn gateway() -> NativeGateway {
        NativeGateway::new()
    }

    fn permanent() -> DeleteOptions {
        DeleteOptions { permanent: true }
    }

    #[test]
    fn test_copy_file_guards() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src.txt");
        let dst = tmp.path().join("dst.txt");
        fs::write(&src, b"payload").unwrap();

        let gw = gateway();

        // Missing source refuses.
        let err = gw
            .copy_file(&tmp.path().join("ghost.txt").to_string_lossy(), &dst.to_string_lossy(), &CopyOptions::default())
            .unwrap_err();
        assert!(matches!(err, FsError::NotAFile(_)));

        gw.copy_file(&src.to_string_lossy(), &dst.to_string_lossy(), &CopyOptions::default())
            .unwrap();
        assert_eq!(fs::read(&dst).unwrap(), b"payload");

        // Existing destination refuses without overwrite.
        let err = gw
            .copy_file(&src.to_string_lossy(), &dst.to_string_lossy(), &CopyOptions::default())
            .unwrap_err();
        assert!(matches!(err, FsError::AlreadyExists(_)));

        fs::write(&src, b"updated").unwrap();
        gw.copy_file(&src.to_string_lossy(), &dst.to_string_lossy(), &CopyOptions { overwrite: true })
            .unwrap();
        assert_eq!(fs::read(&dst).unwrap(), b"updated");
    }

    #[test]
    fn test_delete_file_permanent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("doomed.txt");
        fs::write(&path, b"x").unwrap();

        let gw = gateway();
        gw.delete_file(&path.to_string_lossy(), &permanent()).unwrap();
        assert!(!path.exists());

        let err = gw.delete_file(&path.to_string_lossy(), &permanent()).unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn test_copy_directory_recursive() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("tree");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("top.txt"), b"top").unwrap();
        fs::write(src.join("nested/deep.txt"), b"deep").unwrap();

        let dst = tmp.path().join("copy");
        gateway()
            .copy_directory(&src.to_string_lossy(), &dst.to_string_lossy(), &CopyOptions::default())
            .unwrap();

        assert_eq!(fs::read(dst.join("top.txt")).unwrap(), b"top");
        assert_eq!(fs::read(dst.join("nested/deep.txt")).unwrap(), b"deep");
    }

    #[test]
    fn test_move_directory_refuses_existing_destination() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("a");
        let dst = tmp.path().join("b");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dst).unwrap();

        let gw = gateway();
        let err = gw
            .move_directory(&src.to_string_lossy(), &dst.to_string_lossy())
            .unwrap_err();
        assert!(matches!(err, FsError::AlreadyExists(_)));

        let dst2 = tmp.path().join("c");
        gw.move_directory(&src.to_string_lossy(), &dst2.to_string_lossy()).unwrap();
        assert!(!src.exists());
        assert!(dst2.is_dir());
    }

    #[test]
    fn test_directory_is_empty_polarity() {
        let tmp = tempfile::tempdir().unwrap();
        let gw = gateway();

        assert!(gw.directory_is_empty(&tmp.path().to_string_lossy()).unwrap());

        fs::write(tmp.path().join("x.txt"), b"x").unwrap();
        assert!(!gw.directory_is_empty(&tmp.path().to_string_lossy()).unwrap());

        let err = gw
            .directory_is_empty(&tmp.path().join("x.txt").to_string_lossy())
            .unwrap_err();
        assert!(matches!(err, FsError::NotADirectory(_)));
    }

    #[test]
    fn test_single_path_metadata_queries() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("sized.bin");
        fs::write(&path, vec![0u8; 128]).unwrap();

        let gw = gateway();
        assert_eq!(gw.file_size(&path.to_string_lossy()).unwrap(), 128);

        let times = gw.file_times(&path.to_string_lossy()).unwrap();
        assert!(times.modified_at_ms > 0);

        let dir_times = gw.directory_times(&tmp.path().to_string_lossy()).unwrap();
        assert!(dir_times.modified_at_ms > 0);

        assert!(matches!(
            gw.file_size("/does/not/exist"),
            Err(FsError::NotFound(_))
        ));
        assert!(matches!(
            gw.file_times(&tmp.path().to_string_lossy()),
            Err(FsError::NotFound(_))
        ));
    }

    #[test]
    fn test_existence_and_writability() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("here.txt");
        fs::write(&path, b"x").unwrap();

        let gw = gateway();
        assert!(gw.file_exists(&path.to_string_lossy()));
        assert!(!gw.file_exists(&tmp.path().to_string_lossy()));
        assert!(gw.directory_exists(&tmp.path().to_string_lossy()));
        assert!(gw.file_is_writable(&path.to_string_lossy()));
        assert!(!gw.file_is_writable("/does/not/exist"));
    }

    #[test]
    fn test_gateway_enumerates_through_the_contract() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.jpg"), b"x").unwrap();
        fs::write(tmp.path().join("b.txt"), b"x").unwrap();

        let gw = gateway();
        let request = ReadDirRequest::new(
            tmp.path().to_string_lossy(),
            ContentTypeMask::FilesOnly,
            "jpg",
        );
        let listing = gw.read_directory(&request).unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.nodes[0].name, "a.jpg");
        assert_eq!(listing.nodes[0].kind, NodeKind::File);
    }
}
