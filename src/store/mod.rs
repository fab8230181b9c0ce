//! Filesystem-backed artifact store keyed by correlation id.
//!
//! One generation session leaves up to three artifacts behind: the accepted
//! raw byte stream, the parsed dataset as JSON, and the invoice-number
//! annotated dataset for download. The contract is write-then-read only —
//! an id written by one request is immediately readable by a later one.
//! There is no cleanup policy; ids accumulate until externally purged.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::core::{Dataset, InvoiceError};

/// Process-wide tiebreaker so two uploads in the same millisecond get
/// distinct ids.
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

#[derive(Debug)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Open (creating if needed) the artifact directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, InvoiceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Persist an accepted upload: the raw bytes plus the parsed dataset as
    /// the JSON intermediate representation. Returns the correlation id.
    pub fn put_upload(&self, raw: &[u8], dataset: &Dataset) -> Result<String, InvoiceError> {
        let id = next_id();
        fs::write(self.dir.join(format!("raw-{id}.csv")), raw)?;
        fs::write(
            self.dir.join(format!("data-{id}.json")),
            serde_json::to_vec(dataset)?,
        )?;
        debug!(id = %id, "stored upload");
        Ok(id)
    }

    /// Load the dataset persisted under a correlation id.
    pub fn get_dataset(&self, id: &str) -> Result<Dataset, InvoiceError> {
        self.read_dataset("data", id)
    }

    /// Persist an annotated dataset for download; returns the export id.
    pub fn put_export(&self, dataset: &Dataset) -> Result<String, InvoiceError> {
        let id = next_id();
        fs::write(
            self.dir.join(format!("export-{id}.json")),
            serde_json::to_vec(dataset)?,
        )?;
        debug!(id = %id, "stored export");
        Ok(id)
    }

    /// Load an annotated dataset by export id.
    pub fn get_export(&self, id: &str) -> Result<Dataset, InvoiceError> {
        self.read_dataset("export", id)
    }

    fn read_dataset(&self, kind: &str, id: &str) -> Result<Dataset, InvoiceError> {
        check_id(id)?;
        let path = self.dir.join(format!("{kind}-{id}.json"));
        let bytes = fs::read(path)
            .map_err(|_| InvoiceError::NotFound(format!("no dataset for correlation id '{id}'")))?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn next_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{seq}")
}

/// Ids are our own timestamp-sequence strings; anything else never touches
/// the filesystem (path traversal via crafted ids included).
fn check_id(id: &str) -> Result<(), InvoiceError> {
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit() || c == '-') {
        Ok(())
    } else {
        Err(InvoiceError::NotFound(format!(
            "invalid correlation id '{id}'"
        )))
    }
}
