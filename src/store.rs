//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Transactions are
//! not mirrored here; the list reads them straight from the tracker.

use reactive_stores::Store;

use crate::modal::Modal;

/// Visible UI state, resynced from the tracker after every transition
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Modal currently showing, as last read from the address bar
    pub modal: Modal,
    /// Whether the validation toast is up
    pub toast_visible: bool,
    /// Text shown in the toast
    pub toast_message: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
