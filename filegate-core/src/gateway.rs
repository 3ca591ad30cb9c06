//! The file system gateway contract

use crate::{
    error::FsResult,
    node::DirectoryListing,
    operations::{CopyOptions, DeleteOptions, PathTimes},
    request::ReadDirRequest,
};

/// What a gateway implementation can do beyond the baseline operations.
///
/// Platform differences surface here as flags rather than as host-side
/// branching: a host that wants recycle-bin deletion checks
/// `supports_trash` instead of sniffing the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct GatewayCapabilities {
    pub supports_trash: bool,
    pub supports_volumes: bool,
    pub supports_remote_fetch: bool,
}

/// Uniform file system contract the host programs against.
///
/// One implementation per target platform, selected at process startup. All
/// operations are synchronous and run on the caller's thread; the only
/// long-running one, [`read_directory`](Self::read_directory), bounds itself
/// with a cooperative wall-clock deadline and may return a partial listing.
///
/// Every operation except `read_directory` is a thin delegation to the
/// native layer with the guard semantics documented per method.
pub trait FileSystemGateway: Send + Sync {
    fn capabilities(&self) -> &GatewayCapabilities;

    /// Enumerate one directory level, or the mounted-volume list when the
    /// request path is empty. See `DirectoryListing::complete` for the
    /// partial-result contract.
    fn read_directory(&self, request: &ReadDirRequest) -> FsResult<DirectoryListing>;

    fn file_exists(&self, path: &str) -> bool;
    fn directory_exists(&self, path: &str) -> bool;

    /// Native writability probe. `false` for paths that do not exist.
    fn file_is_writable(&self, path: &str) -> bool;

    /// Copy a regular file. The source must exist; an existing destination
    /// is an error unless `options.overwrite` is set, in which case it is
    /// removed first.
    fn copy_file(&self, source: &str, dest: &str, options: &CopyOptions) -> FsResult<()>;

    /// Delete a file, routing through the trash when supported and
    /// `options.permanent` is not set.
    fn delete_file(&self, path: &str, options: &DeleteOptions) -> FsResult<()>;

    /// Recursive directory copy with the same overwrite guard as
    /// [`copy_file`](Self::copy_file).
    fn copy_directory(&self, source: &str, dest: &str, options: &CopyOptions) -> FsResult<()>;

    /// Rename/move a directory. Refuses an existing destination.
    fn move_directory(&self, source: &str, dest: &str) -> FsResult<()>;

    fn delete_directory(&self, path: &str, options: &DeleteOptions) -> FsResult<()>;

    fn directory_is_empty(&self, path: &str) -> FsResult<bool>;

    /// Creation/modification times in epoch milliseconds; `0` per field when
    /// the platform cannot report it.
    fn file_times(&self, path: &str) -> FsResult<PathTimes>;
    fn directory_times(&self, path: &str) -> FsResult<PathTimes>;

    /// Size in bytes; `0` when the platform reports none.
    fn file_size(&self, path: &str) -> FsResult<u64>;

    /// Fetch a remote resource as UTF-8 text.
    fn read_text_from_url(&self, url: &str) -> FsResult<String>;

    /// Fetch a remote resource as raw bytes.
    fn read_binary_from_url(&self, url: &str) -> FsResult<Vec<u8>>;
}
