//! Directory-backed JSON store for shop records and the active pricing
//! rules.
//!
//! Each collection lives in its own pretty-printed JSON file; a missing
//! file is an empty collection, and missing pricing means the shop
//! defaults. Writes rewrite the whole file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::model::{Client, DoorOrder, SavedQuote};
use crate::pricing::PricingRules;

const QUOTES_FILE: &str = "quotes.json";
const DOORS_FILE: &str = "doors.json";
const CLIENTS_FILE: &str = "clients.json";
const PRICING_FILE: &str = "pricing.json";

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed store file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No record with id {id}")]
    NotFound { id: Uuid },
}

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Read a pricing rule file. Missing sub-tables and fields fall back to
/// the shop defaults.
pub fn load_pricing_file(path: &Path) -> StoreResult<PricingRules> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// The shop's record store, rooted at a data directory.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The data directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn load_collection<T: DeserializeOwned>(&self, file: &str) -> StoreResult<Vec<T>> {
        let path = self.path(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        let items = serde_json::from_str(&content)?;
        debug!("Loaded {}", path.display());
        Ok(items)
    }

    fn save_collection<T: Serialize>(&self, file: &str, items: &[T]) -> StoreResult<()> {
        let path = self.path(file);
        fs::write(&path, serde_json::to_string_pretty(items)?)?;
        debug!("Saved {}", path.display());
        Ok(())
    }

    fn remove_from<T: DeserializeOwned + Serialize>(
        &self,
        file: &str,
        id: Uuid,
        id_of: impl Fn(&T) -> Uuid,
    ) -> StoreResult<T> {
        let mut items: Vec<T> = self.load_collection(file)?;
        let index = items
            .iter()
            .position(|item| id_of(item) == id)
            .ok_or(StoreError::NotFound { id })?;
        let removed = items.remove(index);
        self.save_collection(file, &items)?;
        Ok(removed)
    }

    // ==================== quotes ====================

    /// All saved quotes.
    pub fn quotes(&self) -> StoreResult<Vec<SavedQuote>> {
        self.load_collection(QUOTES_FILE)
    }

    /// Persist a quote.
    pub fn add_quote(&self, quote: SavedQuote) -> StoreResult<()> {
        let mut quotes = self.quotes()?;
        quotes.push(quote);
        self.save_collection(QUOTES_FILE, &quotes)
    }

    /// Remove a quote by id, returning it.
    pub fn remove_quote(&self, id: Uuid) -> StoreResult<SavedQuote> {
        self.remove_from(QUOTES_FILE, id, |quote: &SavedQuote| quote.id)
    }

    // ==================== door orders ====================

    /// All door orders.
    pub fn doors(&self) -> StoreResult<Vec<DoorOrder>> {
        self.load_collection(DOORS_FILE)
    }

    /// Persist a door order.
    pub fn add_door(&self, order: DoorOrder) -> StoreResult<()> {
        let mut doors = self.doors()?;
        doors.push(order);
        self.save_collection(DOORS_FILE, &doors)
    }

    /// Remove a door order by id, returning it.
    pub fn remove_door(&self, id: Uuid) -> StoreResult<DoorOrder> {
        self.remove_from(DOORS_FILE, id, |order: &DoorOrder| order.id)
    }

    // ==================== clients ====================

    /// All clients on record.
    pub fn clients(&self) -> StoreResult<Vec<Client>> {
        self.load_collection(CLIENTS_FILE)
    }

    /// Persist a client record.
    pub fn add_client(&self, client: Client) -> StoreResult<()> {
        let mut clients = self.clients()?;
        clients.push(client);
        self.save_collection(CLIENTS_FILE, &clients)
    }

    /// Remove a client by id, returning the record.
    pub fn remove_client(&self, id: Uuid) -> StoreResult<Client> {
        self.remove_from(CLIENTS_FILE, id, |client: &Client| client.id)
    }

    // ==================== pricing ====================

    /// The active pricing rules; shop defaults when no file was saved.
    pub fn pricing(&self) -> StoreResult<PricingRules> {
        let path = self.path(PRICING_FILE);
        if !path.exists() {
            return Ok(PricingRules::default());
        }
        load_pricing_file(&path)
    }

    /// Persist the active pricing rules.
    pub fn save_pricing(&self, rules: &PricingRules) -> StoreResult<()> {
        let path = self.path(PRICING_FILE);
        fs::write(&path, serde_json::to_string_pretty(rules)?)?;
        debug!("Saved {}", path.display());
        Ok(())
    }

    /// Reset to the shop defaults by deleting the saved pricing file.
    pub fn reset_pricing(&self) -> StoreResult<()> {
        let path = self.path(PRICING_FILE);
        if path.exists() {
            fs::remove_file(&path)?;
            debug!("Removed {}", path.display());
        }
        Ok(())
    }
}
