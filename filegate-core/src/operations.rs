//! Operation options

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CopyOptions {
    /// Replace an existing destination instead of failing.
    pub overwrite: bool,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DeleteOptions {
    /// Bypass the trash/recycle bin even when the gateway supports it.
    pub permanent: bool,
}

/// Creation/modification times of one path, epoch milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathTimes {
    pub created_at_ms: u64,
    pub modified_at_ms: u64,
}
