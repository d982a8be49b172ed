//! Table block types produced by detection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One row within a table block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RowDescriptor {
    /// Row index (1-based, spreadsheet convention)
    pub row: u32,
    /// Display text of the row's label cell, if populated
    pub label_value: Option<String>,
    /// Number of populated cells in the row
    pub column_count: usize,
}

impl RowDescriptor {
    /// Create a new row descriptor.
    pub fn new(row: u32, label_value: Option<String>, column_count: usize) -> Self {
        Self {
            row,
            label_value,
            column_count,
        }
    }

    /// Check if the row has no populated cells.
    pub fn is_empty(&self) -> bool {
        self.column_count == 0
    }
}

/// Contiguous run of rows forming one logical table.
///
/// Row bounds are 1-based and inclusive. A block only carries metadata; cell
/// values are re-read from the sheet by range when needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TableBlock {
    /// First row (1-based)
    pub start_row: u32,
    /// Last row (1-based, inclusive)
    pub end_row: u32,
    /// Widest row in the block, by populated cell count
    pub max_column_count: usize,
    /// Row descriptors, ascending by row
    pub rows: Vec<RowDescriptor>,
}

impl TableBlock {
    /// Create a block, deriving `max_column_count` from the rows.
    ///
    /// Fails with [`Error::InvalidBlock`] if the bounds are inverted or zero,
    /// or if any row lies outside them or is out of order.
    pub fn new(start_row: u32, end_row: u32, rows: Vec<RowDescriptor>) -> Result<Self> {
        let max_column_count = rows.iter().map(|r| r.column_count).max().unwrap_or(0);
        let block = Self {
            start_row,
            end_row,
            max_column_count,
            rows,
        };
        block.validate()?;
        Ok(block)
    }

    /// Check the block invariants.
    pub fn validate(&self) -> Result<()> {
        let invalid = || Error::InvalidBlock {
            start_row: self.start_row,
            end_row: self.end_row,
        };

        if self.start_row == 0 || self.start_row > self.end_row {
            return Err(invalid());
        }

        let mut previous: Option<u32> = None;
        for descriptor in &self.rows {
            if !self.contains_row(descriptor.row) || previous.is_some_and(|p| p >= descriptor.row)
            {
                return Err(invalid());
            }
            previous = Some(descriptor.row);
        }

        let widest = self.rows.iter().map(|r| r.column_count).max().unwrap_or(0);
        if widest != self.max_column_count {
            return Err(invalid());
        }

        Ok(())
    }

    /// Number of rows spanned by the block.
    pub fn row_count(&self) -> u32 {
        self.end_row.saturating_sub(self.start_row) + 1
    }

    /// Check if a 1-based row lies within the block.
    pub fn contains_row(&self, row: u32) -> bool {
        row >= self.start_row && row <= self.end_row
    }

    /// Check if two blocks share any row.
    pub fn overlaps(&self, other: &TableBlock) -> bool {
        self.start_row <= other.end_row && other.start_row <= self.end_row
    }

    /// First row descriptor, if any.
    pub fn first_row(&self) -> Option<&RowDescriptor> {
        self.rows.first()
    }
}

/// Derived structural metadata for a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockStructure {
    /// Row identified as the block's title, if any
    pub title_row: Option<RowDescriptor>,
    /// Remaining rows after the title (all rows when untitled)
    pub body_rows: Vec<RowDescriptor>,
}

impl BlockStructure {
    /// Title text, if a title row was identified.
    pub fn title(&self) -> Option<&str> {
        self.title_row
            .as_ref()
            .and_then(|row| row.label_value.as_deref())
    }

    /// Check if a title row was identified.
    pub fn has_title(&self) -> bool {
        self.title_row.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(row: u32, label: Option<&str>, count: usize) -> RowDescriptor {
        RowDescriptor::new(row, label.map(str::to_string), count)
    }

    #[test]
    fn test_block_new_derives_max_column_count() {
        let block = TableBlock::new(
            2,
            4,
            vec![row(2, Some("a"), 1), row(3, None, 3), row(4, None, 2)],
        )
        .unwrap();

        assert_eq!(block.max_column_count, 3);
        assert_eq!(block.row_count(), 3);
    }

    #[test]
    fn test_block_without_rows_has_zero_width() {
        let block = TableBlock::new(1, 1, vec![]).unwrap();
        assert_eq!(block.max_column_count, 0);
        assert!(block.first_row().is_none());
    }

    #[test]
    fn test_block_rejects_inverted_bounds() {
        let result = TableBlock::new(5, 3, vec![]);
        assert!(matches!(
            result,
            Err(Error::InvalidBlock {
                start_row: 5,
                end_row: 3
            })
        ));
    }

    #[test]
    fn test_block_rejects_zero_start() {
        assert!(TableBlock::new(0, 3, vec![]).is_err());
    }

    #[test]
    fn test_block_rejects_row_outside_range() {
        let result = TableBlock::new(2, 3, vec![row(4, None, 1)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_block_rejects_unordered_rows() {
        let result = TableBlock::new(1, 3, vec![row(2, None, 1), row(1, None, 1)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_detects_stale_max_column_count() {
        let mut block = TableBlock::new(1, 1, vec![row(1, None, 2)]).unwrap();
        block.max_column_count = 5;
        assert!(block.validate().is_err());
    }

    #[test]
    fn test_block_overlaps() {
        let a = TableBlock::new(1, 3, vec![]).unwrap();
        let b = TableBlock::new(3, 6, vec![]).unwrap();
        let c = TableBlock::new(5, 8, vec![]).unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_block_serializes_camel_case() {
        let block = TableBlock::new(1, 1, vec![row(1, Some("Revenue"), 1)]).unwrap();
        let json = serde_json::to_value(&block).unwrap();

        assert_eq!(json["startRow"], 1);
        assert_eq!(json["endRow"], 1);
        assert_eq!(json["maxColumnCount"], 1);
        assert_eq!(json["rows"][0]["labelValue"], "Revenue");
        assert_eq!(json["rows"][0]["columnCount"], 1);
    }

    #[test]
    fn test_structure_title() {
        let titled = BlockStructure {
            title_row: Some(row(1, Some("Revenue"), 1)),
            body_rows: vec![],
        };
        assert_eq!(titled.title(), Some("Revenue"));
        assert!(titled.has_title());

        let untitled = BlockStructure {
            title_row: None,
            body_rows: vec![row(1, None, 2)],
        };
        assert_eq!(untitled.title(), None);
        assert!(!untitled.has_title());
    }
}
