//! Plain-text rendering of snapshots.

use std::fmt::Write;

use tblparse_session::Snapshot;

/// Render a snapshot as plain text, one section per block.
///
/// Each section starts with the block title (or "Block N") and its row range,
/// followed by the body rows with cells separated by `" | "`.
pub fn render_text(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    if let Some(name) = snapshot.file_name.as_deref() {
        let _ = writeln!(out, "{}: {} block(s)", name, snapshot.block_count());
    }

    if snapshot.is_empty() {
        out.push_str("No table blocks found\n");
        return out;
    }

    for (index, view) in snapshot.blocks.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n{} (rows {}-{})",
            view.display_title(index),
            view.block.start_row,
            view.block.end_row
        );
        for row in view.body_rows() {
            let _ = writeln!(out, "  {}", row.join(" | ").trim_end());
        }
    }

    out
}
