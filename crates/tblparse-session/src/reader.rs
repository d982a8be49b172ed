//! Sheet readers turning uploaded bytes into sheets.

use std::path::Path;

use serde_json::Value;

use tblparse_core::{Error, Result, Sheet};

/// One uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetFile {
    /// File name as selected by the user
    pub name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl SheetFile {
    /// Create a new sheet file.
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, naming it after the path's file name.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }
}

/// Trait for decoding uploaded bytes into a sheet.
pub trait SheetReader: Send + Sync {
    /// Reader name for debugging/logging.
    fn name(&self) -> &'static str;

    /// Decode bytes into a sheet, failing with [`Error::Decode`] on bad input.
    fn read(&self, bytes: &[u8]) -> Result<Sheet>;
}

/// Reader for JSON dumps of address-keyed cell maps.
///
/// Accepts a single sheet (`{"A1": {"v": 1}}`) or a workbook
/// (`{"SheetNames": ["S1"], "Sheets": {"S1": {...}}}`), in which case the
/// first listed sheet is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSheetReader;

impl JsonSheetReader {
    /// Create a new JSON sheet reader.
    pub fn new() -> Self {
        Self
    }

    fn first_sheet(value: &Value) -> Result<&Value> {
        let (Some(names), Some(sheets)) = (value.get("SheetNames"), value.get("Sheets")) else {
            return Ok(value);
        };

        let first = names
            .as_array()
            .and_then(|names| names.first())
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Decode("workbook has no sheets".to_string()))?;

        sheets
            .get(first)
            .ok_or_else(|| Error::Decode(format!("workbook is missing sheet '{first}'")))
    }
}

impl SheetReader for JsonSheetReader {
    fn name(&self) -> &'static str {
        "json"
    }

    fn read(&self, bytes: &[u8]) -> Result<Sheet> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| Error::Decode(e.to_string()))?;
        let sheet_value = Self::first_sheet(&value)?;
        Sheet::from_json(sheet_value).map_err(|e| Error::Decode(e.to_string()))
    }
}
