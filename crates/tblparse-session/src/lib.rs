//! # tblparse-session
//!
//! Upload pipeline and displayed state for tblparse.
//!
//! This crate provides:
//! - Sheet readers decoding uploaded bytes into sheets
//! - The upload pipeline (read, detect, analyze, extract)
//! - Immutable snapshots replaced atomically per upload
//!
//! ## Architecture
//!
//! This is Layer 2 in the architecture - it depends on tblparse-core
//! and tblparse-detector and owns the only mutable state in the system.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod reader;
pub mod snapshot;
pub mod workspace;

// Re-export commonly used types
pub use reader::{JsonSheetReader, SheetFile, SheetReader};
pub use snapshot::{Snapshot, UploadId};
pub use workspace::{UploadOutcome, Workspace};
