//! Filegate native platform layer
//!
//! Implements the [`FileSystemGateway`](filegate_core::FileSystemGateway)
//! contract against the local operating system: directory and volume
//! enumeration with metadata normalization, plus the thin one-call wrappers
//! (copy, move, delete, existence and writability checks, remote reads).
//!
//! The host obtains a gateway once at startup via [`native_gateway`] and
//! never branches on platform afterwards; platform differences are expressed
//! through [`GatewayCapabilities`](filegate_core::GatewayCapabilities) and
//! the [`MetadataNormalizer`] seam.

pub mod enumerator;
pub mod gateway;
pub mod normalizer;
pub mod remote;
pub mod volumes;

pub use enumerator::{DirectoryEnumerator, READ_DIR_TIMEOUT};
pub use gateway::NativeGateway;
pub use normalizer::{MetadataNormalizer, NativeNormalizer, NodeStat};
pub use volumes::VolumeInfo;

/// Build the gateway implementation for the current platform.
pub fn native_gateway() -> NativeGateway {
    NativeGateway::new()
}
