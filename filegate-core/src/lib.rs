//! Filegate Core
//!
//! Platform-independent types and the gateway contract for the filegate
//! filesystem abstraction layer.

pub mod error;
pub mod filter;
pub mod gateway;
pub mod node;
pub mod operations;
pub mod request;
pub mod time;

pub use error::{FsError, FsResult};
pub use filter::FilterSet;
pub use gateway::{FileSystemGateway, GatewayCapabilities};
pub use node::{DirectoryListing, FileSystemNode, NodeKind};
pub use request::{ContentTypeMask, ReadDirRequest};
