//! Property-based tests for block detection.
//!
//! Uses proptest to generate random sheets and verify detector invariants.

use proptest::prelude::*;

use tblparse_core::{CellValue, DetectionSettings, Sheet};
use tblparse_detector::{
    analyze_block_structure, detect_table_blocks, extract_block_data, BlockDetector,
};

/// Generate a random cell value, including blank text.
fn cell_value() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        "[A-Za-z ]{0,8}".prop_map(CellValue::Text),
        (-1000i64..1000).prop_map(|n| CellValue::Number(n as f64)),
        any::<bool>().prop_map(CellValue::Bool),
        Just(CellValue::text("")),
    ]
}

/// Generate a random sheet with sparse rows and columns.
fn sheet() -> impl Strategy<Value = Sheet> {
    prop::collection::vec(
        prop::collection::vec(prop::option::weighted(0.4, cell_value()), 0..6),
        0..40,
    )
    .prop_map(Sheet::from_rows)
}

/// Generate valid detection settings.
fn settings() -> impl Strategy<Value = DetectionSettings> {
    (1u32..4, 1u32..4, 0u32..3).prop_map(|(min_gap_rows, min_block_rows, label_column)| {
        DetectionSettings {
            min_gap_rows,
            min_block_rows,
            label_column,
        }
    })
}

proptest! {
    /// Blocks never overlap and are sorted by start row.
    #[test]
    fn blocks_are_sorted_and_disjoint(sheet in sheet(), settings in settings()) {
        let blocks = BlockDetector::with_settings(settings).detect(&sheet);

        for pair in blocks.windows(2) {
            prop_assert!(pair[0].end_row < pair[1].start_row,
                "{:?} overlaps or precedes {:?}", pair[0], pair[1]);
        }
    }

    /// Every block satisfies its own invariants.
    #[test]
    fn blocks_are_well_formed(sheet in sheet(), settings in settings()) {
        let blocks = BlockDetector::with_settings(settings).detect(&sheet);

        for block in &blocks {
            prop_assert!(block.start_row >= 1);
            prop_assert!(block.start_row <= block.end_row);
            for row in &block.rows {
                prop_assert!(block.contains_row(row.row));
                prop_assert!(row.column_count > 0, "row {} has no populated cells", row.row);
            }
            let widest = block.rows.iter().map(|r| r.column_count).max().unwrap_or(0);
            prop_assert_eq!(block.max_column_count, widest);
            prop_assert!(block.validate().is_ok());
        }
    }

    /// Block edges are always populated rows.
    #[test]
    fn block_edges_are_populated(sheet in sheet()) {
        let blocks = detect_table_blocks(&sheet);

        for block in &blocks {
            let first = block.rows.first().map(|r| r.column_count).unwrap_or(0);
            let last = block.rows.last().map(|r| r.column_count).unwrap_or(0);
            prop_assert!(first > 0);
            prop_assert!(last > 0);
        }
    }

    /// With default settings every populated row lands in exactly one block.
    #[test]
    fn default_detection_covers_populated_rows(sheet in sheet()) {
        let blocks = detect_table_blocks(&sheet);

        for row in sheet.populated_rows() {
            let covering = blocks.iter().filter(|b| b.contains_row(row + 1)).count();
            prop_assert_eq!(covering, 1, "row {} covered {} times", row + 1, covering);
        }
        for block in &blocks {
            prop_assert!(block.rows.iter().all(|r| r.column_count > 0));
        }
    }

    /// Detection is idempotent.
    #[test]
    fn detection_is_idempotent(sheet in sheet(), settings in settings()) {
        let detector = BlockDetector::with_settings(settings);
        prop_assert_eq!(detector.detect(&sheet), detector.detect(&sheet));
    }

    /// Structure analysis is idempotent and the title row belongs to the block.
    #[test]
    fn analysis_is_idempotent(sheet in sheet()) {
        for block in detect_table_blocks(&sheet) {
            let first = analyze_block_structure(&block);
            let second = analyze_block_structure(&block);
            prop_assert_eq!(&first, &second);

            if let Some(title) = &first.title_row {
                prop_assert_eq!(Some(title), block.rows.first());
                prop_assert!(title.label_value.is_some());
                prop_assert_eq!(first.body_rows.len() + 1, block.rows.len());
            } else {
                prop_assert_eq!(&first.body_rows, &block.rows);
            }
        }
    }

    /// Extracted data is dense over the block's range.
    #[test]
    fn extraction_is_dense(sheet in sheet()) {
        for block in detect_table_blocks(&sheet) {
            let data = extract_block_data(&sheet, &block);
            prop_assert_eq!(data.len() as u32, block.row_count());
            for row in &data {
                prop_assert_eq!(row.len(), block.max_column_count);
            }
        }
    }
}

#[cfg(test)]
mod additional_tests {
    use super::*;

    #[test]
    fn test_empty_sheet() {
        assert!(detect_table_blocks(&Sheet::new()).is_empty());
    }

    #[test]
    fn test_sheet_of_blank_text() {
        let sheet = Sheet::from_rows(vec![vec![Some(CellValue::text(" "))]; 5]);
        assert!(detect_table_blocks(&sheet).is_empty());
    }
}
