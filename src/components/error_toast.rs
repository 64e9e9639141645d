//! Error Toast Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Validation failure banner; hides itself after the configured delay
#[component]
pub fn ErrorToast() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    let class = move || {
        if state.toast_visible().get() {
            "alert-error"
        } else {
            "alert-error hidden"
        }
    };

    view! {
        <div id="alertError" class=class role="alert">
            <span>{move || state.toast_message().get()}</span>
            <button type="button" class="alert-close" on:click=move |_| ctx.dismiss_error()>
                "×"
            </button>
        </div>
    }
}
