//! Application Context
//!
//! Shared handles provided via Leptos Context API. Every UI transition goes
//! through here so the visible state is always resynced from the tracker.

use chrono::Local;
use leptos::prelude::*;
use log::{debug, error, warn};

use crate::browser::{BrowserAddress, BrowserScheduler, BrowserStorage};
use crate::config::AppConfig;
use crate::error::AppendError;
use crate::ledger::TransactionStore;
use crate::modal::{Modal, ModalRouter};
use crate::models::{Kind, Transaction, TransactionDraft};
use crate::render::{ListView, Summary};
use crate::store::{AppStateStoreFields, AppStore};
use crate::toast::Toast;
use crate::tracker::Tracker;

pub type BrowserTracker = Tracker<BrowserStorage, BrowserAddress>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Owned ledger + router; the only place transactions are mutated
    tracker: RwSignal<BrowserTracker, LocalStorage>,
    /// Single-slot error toast
    toast: StoredValue<Toast<BrowserScheduler>, LocalStorage>,
    /// Visible UI state
    pub state: AppStore,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig, state: AppStore) -> Self {
        let store = TransactionStore::load(BrowserStorage::open(), config.storage_key.clone());
        let router = ModalRouter::new(BrowserAddress, config.modal_param.clone());
        let toast = Toast::new(BrowserScheduler, config.toast_hide_after_ms, move |visible| {
            state.toast_visible().set(visible);
        });

        let ctx = Self {
            tracker: RwSignal::new_local(Tracker::new(store, router)),
            toast: StoredValue::new_local(toast),
            state,
            config: StoredValue::new(config),
        };
        ctx.resync();
        ctx
    }

    /// Re-read the modal from the address bar into the UI state
    pub fn resync(&self) {
        let modal = self.tracker.with_untracked(|t| t.modal());
        debug!("[APP] Modal is {:?}", modal);
        self.state.modal().set(modal);
    }

    /// Modal as last resynced, without subscribing
    pub fn modal(&self) -> Modal {
        self.state.modal().get_untracked()
    }

    pub fn open(&self, kind: Kind) {
        self.tracker.with_untracked(|t| t.open(kind));
        self.resync();
    }

    pub fn close(&self) {
        self.tracker.with_untracked(|t| t.close());
        self.resync();
    }

    /// Record the form contents. Returns the new transaction on success;
    /// failures raise the toast.
    pub fn submit(&self, draft: TransactionDraft) -> Option<Transaction> {
        match self.tracker.try_update(|t| t.submit(&draft)) {
            Some(Ok(transaction)) => {
                self.toast.update_value(|toast| toast.dismiss());
                self.resync();
                Some(transaction)
            }
            Some(Err(e)) => {
                warn!("[Form] Rejected: {}", e);
                self.show_error(&e);
                None
            }
            None => {
                error!("[Form] Tracker is no longer available");
                None
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.toast.update_value(|toast| toast.dismiss());
    }

    fn show_error(&self, e: &AppendError) {
        self.state.toast_message().set(e.user_message());
        self.toast.update_value(|toast| toast.show());
    }

    /// Rows for the current transactions; tracks the tracker signal
    pub fn list_view(&self) -> ListView {
        let expanded_after = self.config.with_value(|c| c.expanded_after);
        self.tracker
            .with(|t| ListView::project(t.transactions(), &Local, expanded_after))
    }

    pub fn summary(&self) -> Summary {
        self.tracker.with(|t| Summary::of(t.transactions()))
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
