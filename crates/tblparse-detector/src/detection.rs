//! Table block detection over sheet grids.

use serde_json::Value;
use tracing::{debug, warn};

use tblparse_core::{DetectionSettings, Result, RowDescriptor, Sheet, TableBlock};

/// Detector that partitions a sheet into table blocks.
///
/// A block is a maximal run of populated rows. Runs separated by fewer than
/// `min_gap_rows` empty rows are merged into one block. Only populated rows get
/// descriptors, so work follows the number of present cells rather than the
/// block's row span.
#[derive(Debug, Clone, Default)]
pub struct BlockDetector {
    settings: DetectionSettings,
}

impl BlockDetector {
    /// Create a detector with default settings (one empty row separates blocks).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom settings.
    pub fn with_settings(settings: DetectionSettings) -> Self {
        Self { settings }
    }

    /// Detector settings.
    pub fn settings(&self) -> &DetectionSettings {
        &self.settings
    }

    /// Detect table blocks, ordered by start row.
    pub fn detect(&self, sheet: &Sheet) -> Vec<TableBlock> {
        let populated = self.describe_populated_rows(sheet);
        let min_gap = self.settings.min_gap_rows.max(1);

        let mut blocks = Vec::new();
        let mut run: Vec<RowDescriptor> = Vec::new();

        for descriptor in populated {
            if let Some(last) = run.last() {
                let gap = descriptor.row.saturating_sub(last.row).saturating_sub(1);
                if gap >= min_gap {
                    self.close_run(std::mem::take(&mut run), &mut blocks);
                }
            }
            run.push(descriptor);
        }
        self.close_run(run, &mut blocks);

        debug!(
            cells = sheet.cell_count(),
            blocks = blocks.len(),
            "detected table blocks"
        );
        blocks
    }

    /// Build descriptors for rows holding at least one populated cell.
    fn describe_populated_rows(&self, sheet: &Sheet) -> Vec<RowDescriptor> {
        let mut descriptors: Vec<RowDescriptor> = Vec::new();
        let mut current: Option<(u32, Option<String>, usize)> = None;

        for (cell, value) in sheet.cells() {
            if value.is_blank() {
                continue;
            }

            match current.as_mut() {
                Some((row, label, count)) if *row == cell.row => {
                    *count += 1;
                    if cell.col == self.settings.label_column {
                        *label = Some(value.display());
                    }
                }
                _ => {
                    if let Some((row, label, count)) = current.take() {
                        descriptors.push(RowDescriptor::new(row.saturating_add(1), label, count));
                    }
                    let label = (cell.col == self.settings.label_column).then(|| value.display());
                    current = Some((cell.row, label, 1));
                }
            }
        }

        if let Some((row, label, count)) = current {
            descriptors.push(RowDescriptor::new(row.saturating_add(1), label, count));
        }
        descriptors
    }

    /// Turn a run of populated rows into a block.
    fn close_run(&self, rows: Vec<RowDescriptor>, blocks: &mut Vec<TableBlock>) {
        let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
            return;
        };
        let (start_row, end_row) = (first.row, last.row);

        if end_row.saturating_sub(start_row).saturating_add(1) < self.settings.min_block_rows {
            debug!(start_row, end_row, "skipping block below minimum height");
            return;
        }

        match TableBlock::new(start_row, end_row, rows) {
            Ok(block) => blocks.push(block),
            Err(e) => warn!(start_row, end_row, "discarding invalid block: {}", e),
        }
    }
}

/// Detect table blocks with default settings.
///
/// # Example
/// ```
/// use tblparse_core::Sheet;
/// use tblparse_detector::detect_table_blocks;
///
/// let sheet = Sheet::from_text_rows(&[&["a"], &["b"], &[], &["c"]]);
/// let blocks = detect_table_blocks(&sheet);
/// assert_eq!(blocks.len(), 2);
/// assert_eq!((blocks[1].start_row, blocks[1].end_row), (4, 4));
/// ```
pub fn detect_table_blocks(sheet: &Sheet) -> Vec<TableBlock> {
    BlockDetector::new().detect(sheet)
}

/// Detect table blocks directly from an address-keyed cell map.
///
/// Fails with `Error::MalformedSheet` if the value is not a cell map (for
/// example `null`), instead of producing any block.
pub fn detect_table_blocks_json(value: &Value) -> Result<Vec<TableBlock>> {
    let sheet = Sheet::from_json(value)?;
    Ok(detect_table_blocks(&sheet))
}
