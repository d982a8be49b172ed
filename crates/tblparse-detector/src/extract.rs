//! Cell range extraction for detected blocks.

use tblparse_core::{CellValue, Sheet, TableBlock};

/// Extract a block's cells as a dense grid of display strings.
///
/// Covers rows `start_row..=end_row` (1-based, read from 0-based sheet row
/// `row - 1`) and columns `0..max_column_count`. Absent cells become `""`.
///
/// # Example
/// ```
/// use tblparse_core::{CellRef, RowDescriptor, Sheet, TableBlock};
/// use tblparse_detector::extract_block_data;
///
/// let mut sheet = Sheet::new();
/// sheet.set(CellRef::new(1, 0), 10_i64);
/// let block = TableBlock::new(2, 3, vec![RowDescriptor::new(2, None, 2)]).unwrap();
///
/// assert_eq!(
///     extract_block_data(&sheet, &block),
///     vec![vec!["10".to_string(), String::new()], vec![String::new(), String::new()]]
/// );
/// ```
pub fn extract_block_data(sheet: &Sheet, block: &TableBlock) -> Vec<Vec<String>> {
    let width = u32::try_from(block.max_column_count).unwrap_or(u32::MAX);

    (block.start_row..=block.end_row)
        .map(|row| {
            (0..width)
                .map(|col| {
                    row.checked_sub(1)
                        .and_then(|sheet_row| sheet.value(sheet_row, col))
                        .map(CellValue::display)
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect()
}
