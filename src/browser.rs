//! Browser Bindings
//!
//! `window.localStorage`, the address bar and timers behind the traits the
//! core uses.

use gloo_timers::callback::Timeout;
use log::error;
use wasm_bindgen::JsValue;

use crate::error::{BrowserError, StorageError};
use crate::ledger::KeyValueStore;
use crate::modal::Address;
use crate::toast::{Cancel, Scheduler};

fn window() -> Result<web_sys::Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::MissingApi("window"))
}

// ========================
// Storage
// ========================

/// `localStorage`, or nothing when the browser denies it
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn open() -> Self {
        let storage = window().and_then(|w| {
            w.local_storage()
                .map_err(|e| BrowserError::js("localStorage", e))?
                .ok_or(BrowserError::MissingApi("localStorage"))
        });
        match storage {
            Ok(storage) => Self { storage: Some(storage) },
            Err(e) => {
                error!("[Storage] {}; transactions will not be saved", e);
                Self { storage: None }
            }
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                error!("[Storage] {}", BrowserError::js("getItem", e));
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(BrowserError::js("setItem", e).to_string()))
    }
}

// ========================
// Address bar
// ========================

/// `window.location` read, `history.pushState` write
#[derive(Clone, Copy, Default)]
pub struct BrowserAddress;

impl BrowserAddress {
    fn push(&self, query: &str) -> Result<(), BrowserError> {
        let window = window()?;
        let location = window.location();
        let path = location.pathname().map_err(|e| BrowserError::js("location.pathname", e))?;
        let hash = location.hash().map_err(|e| BrowserError::js("location.hash", e))?;
        let url = if query.is_empty() {
            format!("{}{}", path, hash)
        } else {
            format!("{}?{}{}", path, query, hash)
        };
        window
            .history()
            .map_err(|e| BrowserError::js("history", e))?
            .push_state_with_url(&JsValue::NULL, "", Some(&url))
            .map_err(|e| BrowserError::js("history.pushState", e))
    }
}

impl Address for BrowserAddress {
    fn query(&self) -> String {
        let search = window().and_then(|w| {
            w.location()
                .search()
                .map_err(|e| BrowserError::js("location.search", e))
        });
        match search {
            Ok(search) => search.trim_start_matches('?').to_string(),
            Err(e) => {
                error!("[Router] {}", e);
                String::new()
            }
        }
    }

    fn navigate(&self, query: &str) {
        if let Err(e) = self.push(query) {
            error!("[Router] {}", e);
        }
    }
}

// ========================
// Timers
// ========================

#[derive(Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Cancel for Timeout {
    fn cancel(self) {
        // clearTimeout has run; the returned closure is just freed.
        let _ = Timeout::cancel(self);
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}
