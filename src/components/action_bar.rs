//! Action Bar Component
//!
//! Buttons that open the income or expense form.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Kind;

#[component]
pub fn ActionBar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="action-bar">
            <button id="incomeBtn" class="action-btn income" on:click=move |_| ctx.open(Kind::Income)>
                "+ Income"
            </button>
            <button id="expenseBtn" class="action-btn expense" on:click=move |_| ctx.open(Kind::Expense)>
                "- Expense"
            </button>
        </div>
    }
}
