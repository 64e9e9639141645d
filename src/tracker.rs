//! Tracker
//!
//! Owns the transaction store and the modal router and ties them into the
//! submit flow: read the open modal, append, close the modal.

use crate::error::AppendError;
use crate::ledger::{KeyValueStore, TransactionStore};
use crate::modal::{Address, Modal, ModalRouter};
use crate::models::{Kind, Transaction, TransactionDraft};

pub struct Tracker<S, A> {
    store: TransactionStore<S>,
    router: ModalRouter<A>,
}

impl<S: KeyValueStore, A: Address> Tracker<S, A> {
    pub fn new(store: TransactionStore<S>, router: ModalRouter<A>) -> Self {
        Self { store, router }
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    pub fn modal(&self) -> Modal {
        self.router.current()
    }

    /// Open the form for `kind` and return the modal now showing
    pub fn open(&self, kind: Kind) -> Modal {
        self.router.open(kind);
        self.router.current()
    }

    pub fn close(&self) -> Modal {
        self.router.close();
        self.router.current()
    }

    /// Record the draft under the open modal. The modal closes only on
    /// success.
    pub fn submit(&mut self, draft: &TransactionDraft) -> Result<Transaction, AppendError> {
        let transaction = self.store.append(draft, self.router.current())?;
        self.router.close();
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;
    use crate::render::{ListView, Tone};
    use crate::testing::{ManualScheduler, MemoryAddress, MemoryStorage};
    use crate::toast::Toast;
    use chrono::FixedOffset;
    use std::cell::Cell;
    use std::rc::Rc;

    fn make_tracker(storage: &MemoryStorage, address: &MemoryAddress) -> Tracker<MemoryStorage, MemoryAddress> {
        Tracker::new(
            TransactionStore::load(storage.clone(), "transactions"),
            ModalRouter::new(address.clone(), "modal"),
        )
    }

    fn render(tracker: &Tracker<MemoryStorage, MemoryAddress>) -> ListView {
        ListView::project(tracker.transactions(), &FixedOffset::east_opt(0).unwrap(), 2)
    }

    #[test]
    fn test_fresh_start_is_closed() {
        let tracker = make_tracker(&MemoryStorage::new(), &MemoryAddress::new(""));
        assert!(tracker.transactions().is_empty());
        assert_eq!(tracker.modal(), Modal::Closed);
    }

    #[test]
    fn test_income_submission_closes_modal_and_renders() {
        let address = MemoryAddress::new("");
        let mut tracker = make_tracker(&MemoryStorage::new(), &address);

        assert_eq!(tracker.open(Kind::Income), Modal::Income);
        let added = tracker.submit(&TransactionDraft::new("Salary", "5000000")).unwrap();

        assert_eq!(added.kind, Kind::Income);
        assert_eq!(tracker.transactions().len(), 1);
        assert_eq!(tracker.modal(), Modal::Closed);

        let view = render(&tracker);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].tone, Tone::Positive);
        assert!(!view.expanded);
    }

    #[test]
    fn test_invalid_expense_shows_toast_and_keeps_modal() {
        let storage = MemoryStorage::new();
        let address = MemoryAddress::new("");
        let mut tracker = make_tracker(&storage, &address);
        let scheduler = ManualScheduler::new();
        let visible = Rc::new(Cell::new(false));
        let flag = visible.clone();
        let mut toast = Toast::new(scheduler.clone(), 3000, move |v| flag.set(v));

        tracker.open(Kind::Expense);
        let err = tracker.submit(&TransactionDraft::new("", "10000")).unwrap_err();
        match err {
            AppendError::Invalid(ref invalid) => assert_eq!(invalid.fields, vec![Field::Name]),
            other => panic!("unexpected error: {}", other),
        }
        toast.show();

        assert!(tracker.transactions().is_empty());
        assert_eq!(storage.writes(), 0);
        assert_eq!(tracker.modal(), Modal::Expense);
        assert!(visible.get());

        // A second failure restarts the countdown
        scheduler.advance(2500);
        assert!(tracker.submit(&TransactionDraft::new("", "10000")).is_err());
        toast.show();
        scheduler.advance(2500);
        assert!(visible.get());
        scheduler.advance(500);
        assert!(!visible.get());
    }

    #[test]
    fn test_three_transactions_expand_list() {
        let address = MemoryAddress::new("");
        let mut tracker = make_tracker(&MemoryStorage::new(), &address);

        for (name, kind) in [("Salary", Kind::Income), ("Rent", Kind::Expense)] {
            tracker.open(kind);
            tracker.submit(&TransactionDraft::new(name, "100")).unwrap();
        }
        assert!(!render(&tracker).expanded);

        tracker.open(Kind::Expense);
        tracker
            .submit(&TransactionDraft::new("Groceries", "30").with_category("food"))
            .unwrap();
        assert!(render(&tracker).expanded);
    }

    #[test]
    fn test_back_button_reopens_modal() {
        let address = MemoryAddress::new("");
        let tracker = make_tracker(&MemoryStorage::new(), &address);

        tracker.open(Kind::Expense);
        tracker.close();
        address.back();
        assert_eq!(tracker.modal(), Modal::Expense);
    }

    #[test]
    fn test_data_survives_reload() {
        let storage = MemoryStorage::new();
        let address = MemoryAddress::new("");
        let mut tracker = make_tracker(&storage, &address);
        tracker.open(Kind::Income);
        tracker.submit(&TransactionDraft::new("Salary", "5000000")).unwrap();

        let reloaded = make_tracker(&storage, &MemoryAddress::new(""));
        assert_eq!(reloaded.transactions(), tracker.transactions());
    }
}
