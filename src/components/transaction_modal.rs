//! Transaction Modal Component
//!
//! Overlay with the entry form. Visibility follows the modal in the app
//! store, which is always read back from the address bar.

use leptos::html;
use leptos::prelude::*;
use log::error;

use crate::context::use_app_context;
use crate::error::BrowserError;
use crate::modal::Modal;
use crate::models::{TransactionDraft, EXPENSE_CATEGORIES};
use crate::store::AppStateStoreFields;

#[component]
pub fn TransactionModal() -> impl IntoView {
    let ctx = use_app_context();

    let form_ref = NodeRef::<html::Form>::new();
    let name_ref = NodeRef::<html::Input>::new();
    let amount_ref = NodeRef::<html::Input>::new();
    let category_ref = NodeRef::<html::Select>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match read_draft(ctx.modal(), name_ref, amount_ref, category_ref) {
            Ok(draft) => draft,
            Err(e) => {
                error!("[Form] {}; submit aborted", e);
                return;
            }
        };
        if ctx.submit(draft).is_some() {
            if let Some(form) = form_ref.get_untracked() {
                form.reset();
            }
        }
    };

    let modal = move || ctx.state.modal().get();
    let overlay_class = move || if modal().is_open() { "overlay" } else { "overlay hidden" };
    let category_class = move || if modal() == Modal::Expense { "field" } else { "field hidden" };
    let title = move || match modal() {
        Modal::Income => "New income",
        Modal::Expense => "New expense",
        Modal::Closed => "",
    };

    view! {
        <div id="overlay" class=overlay_class>
            <div id="modal" class="modal">
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button id="closeBtn" type="button" class="close-btn" on:click=move |_| ctx.close()>
                        "×"
                    </button>
                </div>
                <form id="transactionForm" novalidate=true node_ref=form_ref on:submit=on_submit>
                    <label class="field">
                        <span>"Name"</span>
                        <input type="text" name="name" placeholder="e.g. Salary" node_ref=name_ref />
                    </label>
                    <label class="field">
                        <span>"Amount"</span>
                        <input type="number" name="amount" min="0" step="any" placeholder="0" node_ref=amount_ref />
                    </label>
                    <label class=category_class>
                        <span>"Category"</span>
                        <select name="category" node_ref=category_ref>
                            {EXPENSE_CATEGORIES.iter().map(|(value, label)| view! {
                                <option value=*value>{*label}</option>
                            }).collect_view()}
                        </select>
                    </label>
                    <button type="submit" class="submit-btn">"Save"</button>
                </form>
            </div>
        </div>
    }
}

/// Collect the form inputs. Income entries carry no category.
fn read_draft(
    modal: Modal,
    name_ref: NodeRef<html::Input>,
    amount_ref: NodeRef<html::Input>,
    category_ref: NodeRef<html::Select>,
) -> Result<TransactionDraft, BrowserError> {
    let name = name_ref
        .get_untracked()
        .ok_or(BrowserError::MissingElement("name input"))?;
    let amount = amount_ref
        .get_untracked()
        .ok_or(BrowserError::MissingElement("amount input"))?;
    let category = match modal {
        Modal::Expense => Some(
            category_ref
                .get_untracked()
                .ok_or(BrowserError::MissingElement("category select"))?
                .value(),
        ),
        _ => None,
    };

    Ok(TransactionDraft {
        name: name.value(),
        amount: amount.value(),
        category,
    })
}
