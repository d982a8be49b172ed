//! Immutable per-upload result snapshots.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tblparse_detector::BlockView;

/// Unique identifier for one upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct UploadId(Uuid);

impl UploadId {
    /// Create a new random upload ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for UploadId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for UploadId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UploadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything displayed for one upload, replaced as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Upload that produced this snapshot (`None` before the first upload)
    pub upload_id: Option<UploadId>,
    /// Upload sequence number (0 before the first upload)
    pub sequence: u64,
    /// Name of the uploaded file
    pub file_name: Option<String>,
    /// RFC 3339 time the snapshot was built
    pub created_at: Option<String>,
    /// Detected blocks with titles and display data
    pub blocks: Vec<BlockView>,
}

impl Snapshot {
    /// Snapshot shown before any upload.
    pub fn empty() -> Self {
        Self {
            upload_id: None,
            sequence: 0,
            file_name: None,
            created_at: None,
            blocks: Vec::new(),
        }
    }

    /// Build the snapshot for a finished upload.
    pub fn new(sequence: u64, file_name: impl Into<String>, blocks: Vec<BlockView>) -> Self {
        Self {
            upload_id: Some(UploadId::new()),
            sequence,
            file_name: Some(file_name.into()),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            blocks,
        }
    }

    /// Number of detected blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if no blocks are displayed.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}
