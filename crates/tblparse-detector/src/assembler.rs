//! Block view assembler.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use tblparse_core::{DetectionSettings, Sheet, TableBlock};

use crate::detection::BlockDetector;
use crate::extract::extract_block_data;
use crate::structure::StructureAnalyzer;

/// A detected block together with its title and display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BlockView {
    /// The detected block
    pub block: TableBlock,
    /// Title text, when a title row was identified
    pub title: Option<String>,
    /// Dense cell text covering the block's rows and columns
    pub data: Vec<Vec<String>>,
}

impl BlockView {
    /// Title to show for the block at `index` (0-based), falling back to "Block N".
    pub fn display_title(&self, index: usize) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => format!("Block {}", index + 1),
        }
    }

    /// Data rows to show under the title (the title row itself is dropped).
    pub fn body_rows(&self) -> &[Vec<String>] {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => self.data.get(1..).unwrap_or_default(),
            _ => &self.data,
        }
    }
}

/// Assembler running detection, structure analysis and extraction in order.
#[derive(Debug, Clone, Default)]
pub struct BlockAssembler {
    detector: BlockDetector,
    analyzer: StructureAnalyzer,
}

impl BlockAssembler {
    /// Create a new assembler with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assembler with custom detection settings.
    pub fn with_settings(settings: DetectionSettings) -> Self {
        Self {
            detector: BlockDetector::with_settings(settings),
            analyzer: StructureAnalyzer::new(),
        }
    }

    /// Detect blocks in a sheet and build a view for each one.
    pub fn assemble(&self, sheet: &Sheet) -> Vec<BlockView> {
        self.detector
            .detect(sheet)
            .into_iter()
            .map(|block| {
                let structure = self.analyzer.analyze(&block);
                let data = extract_block_data(sheet, &block);
                BlockView {
                    title: structure.title().map(str::to_string),
                    block,
                    data,
                }
            })
            .collect()
    }
}
