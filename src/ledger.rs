//! Transaction Store
//!
//! Append-only list of transactions mirrored to a key-value store. Every
//! successful append rewrites the whole snapshot before returning, so memory
//! and storage never disagree between calls.

use chrono::Utc;
use log::{info, warn};

use crate::error::{AppendError, StorageError};
use crate::modal::Modal;
use crate::models::{Transaction, TransactionDraft};

/// Synchronous string store, e.g. `localStorage`
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct TransactionStore<S> {
    storage: S,
    key: String,
    transactions: Vec<Transaction>,
}

impl<S: KeyValueStore> TransactionStore<S> {
    /// Read the persisted snapshot.
    ///
    /// Missing or malformed data yields an empty store.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let transactions = match storage.get(&key) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Option<Vec<Transaction>>>(&raw) {
                Ok(loaded) => loaded.unwrap_or_default(),
                Err(e) => {
                    warn!("[Ledger] Discarding unreadable data under {:?}: {}", key, e);
                    Vec::new()
                }
            },
        };
        info!("[Ledger] Loaded {} transactions", transactions.len());
        Self {
            storage,
            key,
            transactions,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Validate `draft` against the open modal, then append and persist it.
    ///
    /// On any error the store and the persisted snapshot are left untouched.
    pub fn append(&mut self, draft: &TransactionDraft, modal: Modal) -> Result<Transaction, AppendError> {
        let transaction = draft.validate(modal, Utc::now().timestamp_millis())?;

        self.transactions.push(transaction.clone());
        if let Err(e) = self.persist() {
            self.transactions.pop();
            warn!("[Ledger] Append rolled back: {}", e);
            return Err(e.into());
        }

        info!(
            "[Ledger] Added {} {:?} ({} total)",
            transaction.kind.as_str(),
            transaction.name,
            self.transactions.len()
        );
        Ok(transaction)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let snapshot = serde_json::to_string(&self.transactions)
            .map_err(|e| StorageError::Encode(e.to_string()))?;
        self.storage.set(&self.key, &snapshot)
    }
}
