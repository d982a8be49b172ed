//! tblparse command-line library
//!
//! This library holds the argument types, output rendering and schema export
//! behind the `tblparse` binary. The binary itself is in main.rs.

pub mod cli;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use cli::{Cli, Command, OutputFormat};
pub use render::render_text;
pub use schema::snapshot_schema;
