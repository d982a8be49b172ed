//! # tblparse-core
//!
//! Core types for tblparse.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other tblparse crates. It provides:
//!
//! - Cell values and A1 cell addresses
//! - The sparse [`Sheet`] grid produced by sheet readers
//! - Table block types ([`TableBlock`], [`RowDescriptor`], [`BlockStructure`])
//! - Configuration loaded from YAML
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other tblparse crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod block;
pub mod cell;
pub mod config;
pub mod error;
pub mod sheet;

// Re-export commonly used types
pub use address::{
    decode_cell, decode_col, encode_cell, encode_col, CellRef, EXCEL_MAX_COLS,
    EXCEL_MAX_ROWS,
};
pub use block::{BlockStructure, RowDescriptor, TableBlock};
pub use cell::CellValue;
pub use config::{DetectionSettings, LoggingSettings, TblparseConfig};
pub use error::{Error, Result};
pub use sheet::Sheet;
