//! UI Components
//!
//! Leptos components for the tracker page.

mod action_bar;
mod error_toast;
mod summary_bar;
mod transaction_list;
mod transaction_modal;

pub use action_bar::ActionBar;
pub use error_toast::ErrorToast;
pub use summary_bar::SummaryBar;
pub use transaction_list::TransactionList;
pub use transaction_modal::TransactionModal;
