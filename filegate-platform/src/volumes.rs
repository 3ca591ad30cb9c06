//! Mounted volume listing
//!
//! Root-mode enumeration source: one entry per mounted volume, with total
//! capacity (not free space) and a writability flag. Platforms without a
//! volume concept return an empty list.

use std::io;
use std::path::Path;

/// One mounted volume.
#[derive(Debug, Clone)]
pub struct VolumeInfo {
    /// Display name: the last component of the mount point, or the mount
    /// point itself for the filesystem root.
    pub name: String,
    pub mount_point: String,
    /// Total capacity in bytes, `0` when the platform cannot report it.
    pub capacity_bytes: u64,
    pub is_writable: bool,
}

#[cfg(unix)]
fn statvfs(path: &Path) -> Option<(u64, bool)> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let cpath = CString::new(path.as_os_str().as_bytes()).ok()?;
    let mut vfs: libc::statvfs = unsafe { std::mem::zeroed() };
    if unsafe { libc::statvfs(cpath.as_ptr(), &mut vfs) } != 0 {
        return None;
    }
    let capacity = (vfs.f_blocks as u64).saturating_mul(vfs.f_frsize as u64);
    let read_only = vfs.f_flag & libc::ST_RDONLY != 0;
    Some((capacity, !read_only))
}

#[cfg(unix)]
fn display_name(mount_point: &str) -> String {
    Path::new(mount_point)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| mount_point.to_string())
}

#[cfg(unix)]
fn volume_at(mount_point: &str) -> Option<VolumeInfo> {
    let (capacity_bytes, is_writable) = statvfs(Path::new(mount_point))?;
    Some(VolumeInfo {
        name: display_name(mount_point),
        mount_point: mount_point.to_string(),
        capacity_bytes,
        is_writable,
    })
}

/// List mounted local volumes.
#[cfg(target_os = "linux")]
pub fn mounted_volumes() -> io::Result<Vec<VolumeInfo>> {
    let mounts = std::fs::read_to_string("/proc/self/mounts")?;
    let mut volumes = Vec::new();

    for line in mounts.lines() {
        let mut fields = line.split_whitespace();
        let (Some(device), Some(mount_point)) = (fields.next(), fields.next()) else {
            continue;
        };
        // Block-device mounts only; pseudo filesystems (proc, sysfs, tmpfs)
        // are not enumeration targets.
        if !device.starts_with("/dev/") {
            continue;
        }
        let mount_point = unescape_mount_point(mount_point);
        if let Some(volume) = volume_at(&mount_point) {
            volumes.push(volume);
        }
    }

    Ok(volumes)
}

/// `/proc/self/mounts` escapes space, tab, newline, and backslash octally.
#[cfg(target_os = "linux")]
fn unescape_mount_point(raw: &str) -> String {
    raw.replace("\\040", " ")
        .replace("\\011", "\t")
        .replace("\\012", "\n")
        .replace("\\134", "\\")
}

#[cfg(target_os = "macos")]
pub fn mounted_volumes() -> io::Result<Vec<VolumeInfo>> {
    let mut volumes = Vec::new();

    if let Some(root) = volume_at("/") {
        volumes.push(root);
    }
    for entry in std::fs::read_dir("/Volumes")?.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(volume) = volume_at(&path.to_string_lossy()) {
            volumes.push(volume);
        }
    }

    Ok(volumes)
}

#[cfg(windows)]
pub fn mounted_volumes() -> io::Result<Vec<VolumeInfo>> {
    use windows_sys::Win32::Storage::FileSystem::{
        GetDiskFreeSpaceExW, GetDriveTypeW, DRIVE_FIXED, DRIVE_REMOTE, DRIVE_REMOVABLE,
    };

    let mut volumes = Vec::new();
    for letter in b'A'..=b'Z' {
        let root = format!("{}:\\", letter as char);
        let wide: Vec<u16> = root.encode_utf16().chain(std::iter::once(0)).collect();

        let drive_type = unsafe { GetDriveTypeW(wide.as_ptr()) };
        if !matches!(drive_type, DRIVE_FIXED | DRIVE_REMOVABLE | DRIVE_REMOTE) {
            continue;
        }

        let mut free_to_caller = 0u64;
        let mut total = 0u64;
        let mut total_free = 0u64;
        let ok = unsafe {
            GetDiskFreeSpaceExW(wide.as_ptr(), &mut free_to_caller, &mut total, &mut total_free)
        };
        if ok == 0 {
            continue;
        }

        let is_writable = std::fs::metadata(&root)
            .map(|meta| !meta.permissions().readonly())
            .unwrap_or(false);

        volumes.push(VolumeInfo {
            name: format!("{}:", letter as char),
            mount_point: root,
            capacity_bytes: total,
            is_writable,
        });
    }

    Ok(volumes)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
pub fn mounted_volumes() -> io::Result<Vec<VolumeInfo>> {
    Ok(Vec::new())
}
