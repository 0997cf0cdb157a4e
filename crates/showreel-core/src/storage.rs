//! Persistent storage using redb.
//!
//! The whole portfolio is one JSON value under one key. There is no schema
//! version inside the value: an incompatible format change gets a new key
//! (the `_v1` suffix) instead of a migration.

use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::PortfolioError;
use crate::types::PortfolioDocument;

/// Key the document lives under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "portfolio_data_v1";

/// Single table holding serialized documents (key: storage key, value: JSON)
const PORTFOLIO_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("portfolio");

/// Load/save contract for the portfolio document
pub trait DocumentStore: Send + Sync {
    /// Read the stored document.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet and
    /// `Err(PortfolioError::Serialization)` when the stored value is unreadable.
    fn load(&self) -> Result<Option<PortfolioDocument>, PortfolioError>;

    /// Replace the stored document with `doc`
    fn save(&self, doc: &PortfolioDocument) -> Result<(), PortfolioError>;

    /// Remove the stored document
    fn clear(&self) -> Result<(), PortfolioError>;

    /// Write out anything buffered. Immediate stores have nothing to do.
    fn flush(&self) -> Result<(), PortfolioError> {
        Ok(())
    }
}

fn encode(doc: &PortfolioDocument) -> Result<Vec<u8>, PortfolioError> {
    Ok(serde_json::to_vec(doc)?)
}

fn decode(bytes: &[u8]) -> Result<PortfolioDocument, PortfolioError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
    key: String,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// Creates the parent directory and the portfolio table if needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, PortfolioError> {
        Self::with_key(path, DEFAULT_STORAGE_KEY)
    }

    /// Same as [`Storage::new`] with a custom storage key
    pub fn with_key(
        path: impl AsRef<Path>,
        key: impl Into<String>,
    ) -> Result<Self, PortfolioError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PORTFOLIO_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
            key: key.into(),
        })
    }

    /// The key this store reads and writes
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write raw bytes under the storage key, bypassing serialization
    pub fn save_raw(&self, data: &[u8]) -> Result<(), PortfolioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PORTFOLIO_TABLE)?;
            table.insert(self.key.as_str(), data)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Read raw bytes under the storage key
    pub fn load_raw(&self) -> Result<Option<Vec<u8>>, PortfolioError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PORTFOLIO_TABLE)?;

        Ok(table.get(self.key.as_str())?.map(|v| v.value().to_vec()))
    }
}

impl DocumentStore for Storage {
    fn load(&self) -> Result<Option<PortfolioDocument>, PortfolioError> {
        match self.load_raw()? {
            Some(bytes) => decode(&bytes).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, doc: &PortfolioDocument) -> Result<(), PortfolioError> {
        let data = encode(doc)?;
        self.save_raw(&data)
    }

    fn clear(&self) -> Result<(), PortfolioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PORTFOLIO_TABLE)?;
            table.remove(self.key.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory store holding the serialized bytes.
///
/// Goes through the same JSON encoding as [`Storage`], so round-trip behavior
/// matches the on-disk store.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot with raw bytes
    pub fn save_raw(&self, data: &[u8]) {
        *self.slot.lock() = Some(data.to_vec());
    }

    /// Current raw bytes, if any
    pub fn load_raw(&self) -> Option<Vec<u8>> {
        self.slot.lock().clone()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Option<PortfolioDocument>, PortfolioError> {
        match self.slot.lock().as_deref() {
            Some(bytes) => decode(bytes).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, doc: &PortfolioDocument) -> Result<(), PortfolioError> {
        let data = encode(doc)?;
        *self.slot.lock() = Some(data);
        Ok(())
    }

    fn clear(&self) -> Result<(), PortfolioError> {
        *self.slot.lock() = None;
        Ok(())
    }
}
