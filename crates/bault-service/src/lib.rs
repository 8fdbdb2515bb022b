//! # bault-service
//!
//! The dashboard controller. [`Dashboard`] owns the item store together with
//! the explicit view state a file-manager front end needs (current folder,
//! active filter, search and sort, selection, drag pointer) and exposes the
//! user-level flows: upload, create folder, rename, move, delete, bulk
//! actions, and preview.
//!
//! Everything runs on one logical thread of control; the only suspension
//! point is reading upload content, which completes before any item is
//! inserted.

pub mod bulk;
pub mod dashboard;
pub mod drag;
pub mod explorer;
pub mod preview;
pub mod seed;
pub mod selection;
pub mod upload;
pub mod usage;

pub use bulk::{BulkFailure, BulkReport, BulkSummary};
pub use dashboard::Dashboard;
pub use drag::DragState;
pub use explorer::ExplorerState;
pub use preview::{Preview, PreviewService, TextPreview, UnavailableReason};
pub use selection::Selection;
pub use upload::{ContentSource, LocalFile, MemoryFile, UploadService};
pub use usage::StorageUsage;
