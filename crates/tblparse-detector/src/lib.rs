//! # tblparse-detector
//!
//! Table block detection engine for tblparse.
//!
//! This crate provides:
//! - Block detection (maximal runs of populated rows)
//! - Block structure analysis (title row heuristics)
//! - Cell range extraction for display
//! - Assembly of detected blocks into display views
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends only on tblparse-core
//! and is a pure function of the sheet it is given.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assembler;
pub mod detection;
pub mod extract;
pub mod structure;

// Re-export commonly used types
pub use assembler::{BlockAssembler, BlockView};
pub use detection::{detect_table_blocks, detect_table_blocks_json, BlockDetector};
pub use extract::extract_block_data;
pub use structure::{analyze_block_structure, is_numeric_label, StructureAnalyzer};
