//! Upload pipeline and displayed state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use tblparse_core::{DetectionSettings, Error, Result, TblparseConfig};
use tblparse_detector::{BlockAssembler, BlockView};

use crate::reader::{JsonSheetReader, SheetFile, SheetReader};
use crate::snapshot::Snapshot;

/// Result of an upload.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// No file was selected; nothing changed
    NoFile,
    /// The upload's snapshot is now displayed
    Published(Arc<Snapshot>),
    /// A newer upload was already displayed; this result was dropped
    Superseded {
        /// Sequence number of the dropped upload
        sequence: u64,
    },
}

/// Holds the displayed snapshot and runs the upload pipeline.
///
/// Each upload reads the file, detects blocks, analyzes their structure and
/// extracts display data, then swaps in a new [`Snapshot`] in one step. When
/// uploads overlap, the most recently started upload that finishes wins.
pub struct Workspace {
    reader: Arc<dyn SheetReader>,
    assembler: Arc<BlockAssembler>,
    sequence: AtomicU64,
    state: watch::Sender<Arc<Snapshot>>,
}

impl Workspace {
    /// Create a workspace reading JSON sheet dumps with default settings.
    pub fn new() -> Self {
        Self::with_reader(Arc::new(JsonSheetReader::new()), DetectionSettings::default())
    }

    /// Create a workspace from configuration.
    pub fn from_config(config: &TblparseConfig) -> Self {
        Self::with_reader(Arc::new(JsonSheetReader::new()), config.detection.clone())
    }

    /// Create a workspace with a custom sheet reader.
    pub fn with_reader(reader: Arc<dyn SheetReader>, settings: DetectionSettings) -> Self {
        let (state, _) = watch::channel(Arc::new(Snapshot::empty()));
        Self {
            reader,
            assembler: Arc::new(BlockAssembler::with_settings(settings)),
            sequence: AtomicU64::new(0),
            state,
        }
    }

    /// Currently displayed snapshot.
    pub fn current(&self) -> Arc<Snapshot> {
        Arc::clone(&self.state.borrow())
    }

    /// Subscribe to snapshot replacements.
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.state.subscribe()
    }

    /// Run the pipeline for a selected file.
    ///
    /// `None` means no file was selected and is a no-op. A file that cannot be
    /// decoded returns the reader's error and leaves the displayed snapshot
    /// untouched.
    pub async fn upload(&self, file: Option<SheetFile>) -> Result<UploadOutcome> {
        let Some(SheetFile { name, bytes }) = file else {
            debug!("no file selected, keeping current snapshot");
            return Ok(UploadOutcome::NoFile);
        };

        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(sequence, file = %name, reader = self.reader.name(), "starting upload");

        let reader = Arc::clone(&self.reader);
        let assembler = Arc::clone(&self.assembler);
        let blocks = tokio::task::spawn_blocking(move || -> Result<Vec<BlockView>> {
            let sheet = reader.read(&bytes)?;
            Ok(assembler.assemble(&sheet))
        })
        .await
        .map_err(|e| Error::Other(format!("upload pipeline failed: {e}")))?;

        let blocks = match blocks {
            Ok(blocks) => blocks,
            Err(e) => {
                warn!(sequence, file = %name, "failed to read upload: {}", e);
                return Err(e);
            }
        };

        let snapshot = Arc::new(Snapshot::new(sequence, name, blocks));
        let published = self.state.send_if_modified(|current| {
            if current.sequence < sequence {
                *current = Arc::clone(&snapshot);
                true
            } else {
                false
            }
        });

        if published {
            info!(
                sequence,
                file = snapshot.file_name.as_deref().unwrap_or_default(),
                blocks = snapshot.block_count(),
                "published snapshot"
            );
            Ok(UploadOutcome::Published(snapshot))
        } else {
            warn!(sequence, "upload superseded by a newer one");
            Ok(UploadOutcome::Superseded { sequence })
        }
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
