//! Transaction List Component
//!
//! Rebuilds every row from the tracker whenever it changes.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn TransactionList() -> impl IntoView {
    let ctx = use_app_context();

    let rows = move || {
        let list = ctx.list_view();
        if list.rows.is_empty() {
            return view! { <p class="empty-state">"No transactions yet"</p> }.into_any();
        }

        let class = list.container_class();
        view! {
            <ul class=class>
                {list.rows.into_iter().map(|row| view! {
                    <li class="transaction">
                        <div class="transaction-main">
                            <span class="transaction-name">{row.name}</span>
                            <span class="transaction-category">{row.category}</span>
                        </div>
                        <span class="transaction-date">{row.date}</span>
                        <span class=row.tone.css_class()>{row.amount}</span>
                    </li>
                }).collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <section class="transactions">
            <h2>"Transactions"</h2>
            {rows}
        </section>
    }
}
