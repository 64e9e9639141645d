//! Pocket Ledger App
//!
//! Main application component: totals, action buttons, the transaction list
//! and the entry modal.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActionBar, ErrorToast, SummaryBar, TransactionList, TransactionModal};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let state = Store::new(AppState::default());
    let ctx = AppContext::new(config, state);
    provide_context(ctx);

    // Back/forward rewrites the query without going through the router
    let popstate = window_event_listener(ev::popstate, move |_| ctx.resync());
    on_cleanup(move || popstate.remove());

    view! {
        <main class="app-layout">
            <h1>"Pocket Ledger"</h1>

            <SummaryBar />

            <ActionBar />

            <TransactionList />

            <TransactionModal />

            <ErrorToast />
        </main>
    }
}
