//! Upload flow: content sources and the service that turns them into items.

pub mod service;
pub mod source;

pub use service::UploadService;
pub use source::{ContentSource, LocalFile, MemoryFile};
