//! Sparse sheet grid produced by sheet readers.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::{decode_cell, encode_cell, CellRef, CellValue, Error, Result};

/// Sparse 2-D grid of cell values.
///
/// Cells are addressed by 0-indexed [`CellRef`]s and stored row-major, so
/// iteration visits rows top to bottom and columns left to right. A cell that
/// was never set is absent, which is distinct from a present empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    cells: BTreeMap<CellRef, CellValue>,
}

impl Sheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sheet from dense rows, where `None` marks an absent cell.
    pub fn from_rows(rows: Vec<Vec<Option<CellValue>>>) -> Self {
        let mut sheet = Self::new();
        for (row_idx, row) in rows.into_iter().enumerate() {
            for (col_idx, value) in row.into_iter().enumerate() {
                if let Some(value) = value {
                    sheet.set(CellRef::new(row_idx as u32, col_idx as u32), value);
                }
            }
        }
        sheet
    }

    /// Build a sheet from rows of text, treating `""` as an absent cell.
    ///
    /// Convenient for fixtures where every present cell is text.
    pub fn from_text_rows(rows: &[&[&str]]) -> Self {
        Self::from_rows(
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|text| (!text.is_empty()).then(|| CellValue::text(*text)))
                        .collect()
                })
                .collect(),
        )
    }

    /// Parse an address-keyed cell map (`{"A1": {"v": 10}, "!ref": "A1:A1"}`).
    ///
    /// Keys starting with `!` are sheet metadata and skipped. A cell is either
    /// an object carrying its raw value under `v` or a bare scalar; `null`
    /// values and objects without `v` are treated as absent.
    pub fn from_json(value: &Value) -> Result<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::MalformedSheet(format!(
                    "expected an object of cells, found {}",
                    json_kind(other)
                )))
            }
        };

        let mut sheet = Self::new();
        for (key, raw) in map {
            if key.starts_with('!') {
                continue;
            }
            let cell = decode_cell(key)?;
            if let Some(value) = parse_raw_value(key, raw)? {
                sheet.set(cell, value);
            }
        }
        Ok(sheet)
    }

    /// Serialize the sheet back into an address-keyed cell map.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (cell, value) in &self.cells {
            let raw = serde_json::to_value(value).unwrap_or(Value::Null);
            let mut entry = Map::new();
            entry.insert("v".to_string(), raw);
            map.insert(encode_cell(*cell), Value::Object(entry));
        }
        Value::Object(map)
    }

    /// Set a cell value, replacing any previous value.
    pub fn set(&mut self, cell: CellRef, value: impl Into<CellValue>) {
        self.cells.insert(cell, value.into());
    }

    /// Get the value at a cell, or `None` if the cell is absent.
    pub fn get(&self, cell: CellRef) -> Option<&CellValue> {
        self.cells.get(&cell)
    }

    /// Get the value at (row, col), both 0-indexed.
    pub fn value(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.get(CellRef::new(row, col))
    }

    /// Check if the cell at (row, col) holds a non-blank value.
    pub fn is_populated(&self, row: u32, col: u32) -> bool {
        self.value(row, col).is_some_and(|v| !v.is_blank())
    }

    /// Number of present cells (including blank text cells).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the sheet has no present cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Last row (0-indexed) holding any present cell.
    pub fn last_row(&self) -> Option<u32> {
        self.cells.keys().next_back().map(|cell| cell.row)
    }

    /// Present cells of one row (0-indexed), ordered by column.
    pub fn row_cells(&self, row: u32) -> impl Iterator<Item = (u32, &CellValue)> + '_ {
        self.cells
            .range(CellRef::new(row, 0)..=CellRef::new(row, u32::MAX))
            .map(|(cell, value)| (cell.col, value))
    }

    /// All present cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (CellRef, &CellValue)> + '_ {
        self.cells.iter().map(|(cell, value)| (*cell, value))
    }

    /// Rows (0-indexed) with at least one non-blank cell, ascending.
    pub fn populated_rows(&self) -> Vec<u32> {
        let mut rows: Vec<u32> = Vec::new();
        for (cell, value) in &self.cells {
            if value.is_blank() || rows.last() == Some(&cell.row) {
                continue;
            }
            rows.push(cell.row);
        }
        rows
    }
}

fn parse_raw_value(key: &str, raw: &Value) -> Result<Option<CellValue>> {
    let scalar = match raw {
        Value::Object(fields) => match fields.get("v") {
            Some(v) => v,
            None => return Ok(None),
        },
        other => other,
    };

    match scalar {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(CellValue::Bool(*b))),
        Value::String(s) => Ok(Some(CellValue::Text(s.clone()))),
        Value::Number(n) => n
            .as_f64()
            .map(|f| Some(CellValue::Number(f)))
            .ok_or_else(|| Error::MalformedSheet(format!("cell {key}: unrepresentable number"))),
        other => Err(Error::MalformedSheet(format!(
            "cell {key}: unsupported value type {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
