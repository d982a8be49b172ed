//! Block structure analysis (title row detection).

use lazy_static::lazy_static;
use regex::Regex;

use tblparse_core::{BlockStructure, RowDescriptor, TableBlock};

lazy_static! {
    /// Plain, thousands-separated, decimal, exponent and percent forms.
    static ref NUMERIC_LABEL: Regex = Regex::new(
        r"^[+-]?(?:(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?%?$"
    )
    .unwrap();
}

/// Check if a label reads as a number rather than a caption.
pub fn is_numeric_label(label: &str) -> bool {
    NUMERIC_LABEL.is_match(label.trim())
}

/// Analyzer deriving title rows from a block's row descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructureAnalyzer;

impl StructureAnalyzer {
    /// Create a new structure analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Analyze a block.
    ///
    /// The first row is the title when it has a non-numeric label, the block
    /// has more rows below it, and either the title stands alone in a wider
    /// block or every later row's label is absent or numeric.
    pub fn analyze(&self, block: &TableBlock) -> BlockStructure {
        match self.detect_title_row(block) {
            Some(title) => BlockStructure {
                title_row: Some(title.clone()),
                body_rows: block.rows[1..].to_vec(),
            },
            None => BlockStructure {
                title_row: None,
                body_rows: block.rows.clone(),
            },
        }
    }

    fn detect_title_row<'a>(&self, block: &'a TableBlock) -> Option<&'a RowDescriptor> {
        let (first, rest) = block.rows.split_first()?;
        if rest.is_empty() {
            return None;
        }

        let label = first.label_value.as_deref()?;
        if label.trim().is_empty() || is_numeric_label(label) {
            return None;
        }

        // Strategy 1: lone caption above a wider table
        if first.column_count == 1 && block.max_column_count > 1 {
            return Some(first);
        }

        // Strategy 2: no later row carries a text label
        let rest_unlabeled = rest.iter().all(|row| {
            row.label_value
                .as_deref()
                .map_or(true, is_numeric_label)
        });
        if rest_unlabeled {
            return Some(first);
        }

        None
    }
}

/// Analyze a block with the default analyzer.
pub fn analyze_block_structure(block: &TableBlock) -> BlockStructure {
    StructureAnalyzer::new().analyze(block)
}
