// SPDX-License-Identifier: AGPL-3.0-or-later
//! CLI command implementations

use chrono::{DateTime, Utc};
use console::style;
use filegate_core::{
    operations::{CopyOptions, DeleteOptions},
    ContentTypeMask, FileSystemGateway, FsError, FsResult, NodeKind, ReadDirRequest,
};
use filegate_platform::native_gateway;
use tabled::{Table, Tabled};

/// Format epoch milliseconds for display; `0` means "unavailable".
fn format_time(millis: u64) -> String {
    if millis == 0 {
        return "-".to_string();
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_size(size: u64, human: bool) -> String {
    if human {
        bytesize::ByteSize(size).to_string()
    } else {
        size.to_string()
    }
}

fn format_kind(kind: NodeKind) -> String {
    match kind {
        NodeKind::Directory => style("d").cyan().to_string(),
        NodeKind::File => "-".to_string(),
    }
}

#[derive(Tabled)]
struct LsRow {
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Modified")]
    modified: String,
    #[tabled(rename = "W")]
    writable: String,
    #[tabled(rename = "Name")]
    name: String,
}

/// List directory contents through the gateway.
pub fn ls(path: &str, files_only: bool, dirs_only: bool, filter: &str, human: bool) -> FsResult<()> {
    let mask = if files_only {
        ContentTypeMask::FilesOnly
    } else if dirs_only {
        ContentTypeMask::DirectoriesOnly
    } else {
        ContentTypeMask::AllEntries
    };

    let gateway = native_gateway();
    let request = ReadDirRequest::new(path, mask, filter);
    let listing = gateway.read_directory(&request)?;

    if listing.is_empty() {
        println!("(empty)");
    } else {
        let rows: Vec<LsRow> = listing
            .nodes
            .iter()
            .map(|node| LsRow {
                kind: format_kind(node.kind),
                size: format_size(node.size_bytes, human),
                modified: format_time(node.modified_at_ms),
                writable: if node.is_writable { "w" } else { "-" }.to_string(),
                name: node.name.clone(),
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if !listing.complete {
        eprintln!(
            "{} listing cut short by the enumeration deadline; more entries may exist",
            style("warning:").yellow().bold()
        );
    }

    Ok(())
}

/// List writable mounted volumes (root-mode enumeration).
pub fn volumes(human: bool) -> FsResult<()> {
    let gateway = native_gateway();
    let listing = gateway.read_directory(&ReadDirRequest::volumes())?;

    if listing.is_empty() {
        println!("(no writable volumes)");
        return Ok(());
    }

    for node in &listing.nodes {
        println!(
            "{}  {}  {}",
            style(&node.name).cyan(),
            node.location,
            format_size(node.size_bytes, human)
        );
    }
    Ok(())
}

/// Show normalized metadata for one path.
pub fn stat(path: &str, json: bool) -> FsResult<()> {
    let gateway = native_gateway();

    let node = if gateway.file_exists(path) {
        let times = gateway.file_times(path)?;
        let mut node = filegate_core::FileSystemNode::file(last_component(path), path);
        node.size_bytes = gateway.file_size(path)?;
        node.created_at_ms = times.created_at_ms;
        node.modified_at_ms = times.modified_at_ms;
        node.is_writable = gateway.file_is_writable(path);
        node
    } else if gateway.directory_exists(path) {
        let times = gateway.directory_times(path)?;
        let mut node = filegate_core::FileSystemNode::directory(last_component(path), path);
        node.created_at_ms = times.created_at_ms;
        node.modified_at_ms = times.modified_at_ms;
        node
    } else {
        return Err(FsError::NotFound(path.to_string()));
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&node).map_err(|e| FsError::Platform(e.to_string()))?);
    } else {
        println!("{:>10}: {}", "name", node.name);
        println!("{:>10}: {}", "location", node.location);
        println!("{:>10}: {:?}", "kind", node.kind);
        println!("{:>10}: {}", "size", node.size_bytes);
        println!("{:>10}: {}", "created", format_time(node.created_at_ms));
        println!("{:>10}: {}", "modified", format_time(node.modified_at_ms));
        println!("{:>10}: {}", "writable", node.is_writable);
    }
    Ok(())
}

/// Copy a file or directory.
pub fn cp(source: &str, dest: &str, force: bool) -> FsResult<()> {
    let gateway = native_gateway();
    let options = CopyOptions { overwrite: force };

    if gateway.directory_exists(source) {
        gateway.copy_directory(source, dest, &options)
    } else {
        gateway.copy_file(source, dest, &options)
    }
}

/// Move a directory.
pub fn mv(source: &str, dest: &str) -> FsResult<()> {
    native_gateway().move_directory(source, dest)
}

/// Remove files or directories, through the trash unless `--permanent`.
pub fn rm(paths: &[String], permanent: bool) -> FsResult<()> {
    let gateway = native_gateway();
    let options = DeleteOptions { permanent };

    for path in paths {
        if gateway.directory_exists(path) {
            gateway.delete_directory(path, &options)?;
        } else {
            gateway.delete_file(path, &options)?;
        }
    }
    Ok(())
}

/// Fetch a remote resource.
pub fn fetch(url: &str, binary: bool) -> FsResult<()> {
    let gateway = native_gateway();

    if binary {
        let bytes = gateway.read_binary_from_url(url)?;
        println!("{} bytes", bytes.len());
    } else {
        print!("{}", gateway.read_text_from_url(url)?);
    }
    Ok(())
}

fn last_component(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_zero_is_dash() {
        assert_eq!(format_time(0), "-");
        assert!(format_time(1_700_000_000_500).starts_with("2023-11-14"));
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(1024, false), "1024");
        assert!(format_size(1024, true).contains("1"));
    }

    #[test]
    fn test_last_component() {
        assert_eq!(last_component("/a/b/c.txt"), "c.txt");
        assert_eq!(last_component("/"), "/");
    }
}
