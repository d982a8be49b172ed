//! Cell addresses and A1 notation helpers.

use lazy_static::lazy_static;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of columns in an Excel worksheet (`A`..=`XFD`).
pub const EXCEL_MAX_COLS: u32 = 16_384;

/// Number of rows in an Excel worksheet.
pub const EXCEL_MAX_ROWS: u32 = 1_048_576;

lazy_static! {
    static ref A1_PATTERN: Regex = Regex::new(r"^\$?([A-Za-z]{1,3})\$?([0-9]+)$").unwrap();
}

/// Position of a cell in a sheet (row, column).
///
/// Both coordinates are **0-indexed**: `row = 0` is spreadsheet row `1` and
/// `col = 0` is column `A`. Ordering is row-major.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct CellRef {
    /// Row index (0-based)
    pub row: u32,
    /// Column index (0-based)
    pub col: u32,
}

impl CellRef {
    /// Create a new cell reference.
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Convert to A1 notation.
    pub fn to_a1(self) -> String {
        encode_cell(self)
    }

    /// Parse A1 notation.
    pub fn from_a1(a1: &str) -> Result<Self> {
        decode_cell(a1)
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&encode_cell(*self))
    }
}

/// Encode a 0-based column index as letters (`0` → `A`, `26` → `AA`).
pub fn encode_col(col: u32) -> String {
    let mut n = col as u64 + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push(char::from(b'A' + rem));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Decode column letters (case-insensitive) into a 0-based index.
pub fn decode_col(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress(letters.to_string()));
    }

    let mut col: u32 = 0;
    for b in letters.bytes() {
        if !b.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(letters.to_string()));
        }
        let digit = u32::from(b.to_ascii_uppercase() - b'A') + 1;
        col = col
            .checked_mul(26)
            .and_then(|c| c.checked_add(digit))
            .ok_or_else(|| Error::InvalidAddress(letters.to_string()))?;
    }

    if col > EXCEL_MAX_COLS {
        return Err(Error::InvalidAddress(letters.to_string()));
    }
    Ok(col - 1)
}

/// Encode a cell reference as an A1 address key (`(0, 0)` → `A1`).
pub fn encode_cell(cell: CellRef) -> String {
    format!("{}{}", encode_col(cell.col), cell.row as u64 + 1)
}

/// Decode an A1 address key (`B3`, `$B$3`) into a cell reference.
pub fn decode_cell(address: &str) -> Result<CellRef> {
    let address = address.trim();
    let caps = A1_PATTERN
        .captures(address)
        .ok_or_else(|| Error::InvalidAddress(address.to_string()))?;

    let col = decode_col(&caps[1])?;
    let row: u32 = caps[2]
        .parse()
        .map_err(|_| Error::InvalidAddress(address.to_string()))?;
    if row == 0 {
        return Err(Error::InvalidAddress(address.to_string()));
    }

    Ok(CellRef::new(row - 1, col))
}
