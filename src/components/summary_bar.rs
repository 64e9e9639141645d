//! Summary Bar Component
//!
//! Income, expense and balance totals above the list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Kind;
use crate::render::{format_balance, format_signed};

#[component]
pub fn SummaryBar() -> impl IntoView {
    let ctx = use_app_context();

    let income = move || format_signed(ctx.summary().income, Kind::Income);
    let expense = move || format_signed(ctx.summary().expense, Kind::Expense);
    let balance = move || format_balance(ctx.summary().balance());
    let balance_class = move || {
        if ctx.summary().balance() < 0.0 {
            "summary-value amount-expense"
        } else {
            "summary-value amount-income"
        }
    };

    view! {
        <div class="summary-bar">
            <div class="summary-card">
                <span class="summary-label">"Income"</span>
                <span class="summary-value amount-income">{income}</span>
            </div>
            <div class="summary-card">
                <span class="summary-label">"Expenses"</span>
                <span class="summary-value amount-expense">{expense}</span>
            </div>
            <div class="summary-card">
                <span class="summary-label">"Balance"</span>
                <span class=balance_class>{balance}</span>
            </div>
        </div>
    }
}
