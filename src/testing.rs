//! In-memory host doubles for native tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StorageError;
use crate::ledger::KeyValueStore;
use crate::modal::Address;
use crate::toast::{Cancel, Scheduler};

/// Shared map standing in for `localStorage`
#[derive(Clone, Default)]
pub struct MemoryStorage {
    values: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.values.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    /// Make every later `set` fail
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.raw(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only.get() {
            return Err(StorageError::Rejected("quota exceeded".to_string()));
        }
        self.writes.set(self.writes.get() + 1);
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Address bar with a history list
#[derive(Clone)]
pub struct MemoryAddress {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryAddress {
    pub fn new(query: &str) -> Self {
        Self {
            history: Rc::new(RefCell::new(vec![query.to_string()])),
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.borrow().len()
    }

    /// Simulate the browser back button
    pub fn back(&self) {
        let mut history = self.history.borrow_mut();
        if history.len() > 1 {
            history.pop();
        }
    }
}

impl Address for MemoryAddress {
    fn query(&self) -> String {
        self.history.borrow().last().cloned().unwrap_or_default()
    }

    fn navigate(&self, query: &str) {
        self.history.borrow_mut().push(query.to_string());
    }
}

struct Task {
    due: u64,
    cancelled: Rc<Cell<bool>>,
    callback: Option<Box<dyn FnOnce()>>,
}

/// Scheduler driven by a virtual clock
#[derive(Clone, Default)]
pub struct ManualScheduler {
    now: Rc<Cell<u64>>,
    tasks: Rc<RefCell<Vec<Task>>>,
}

pub struct ManualHandle(Rc<Cell<bool>>);

impl Cancel for ManualHandle {
    fn cancel(self) {
        self.0.set(true);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward, running every task that comes due
    pub fn advance(&self, ms: u64) {
        let now = self.now.get() + ms;
        self.now.set(now);
        let due: Vec<Box<dyn FnOnce()>> = {
            let mut tasks = self.tasks.borrow_mut();
            let callbacks = tasks
                .iter_mut()
                .filter(|task| task.due <= now && !task.cancelled.get())
                .filter_map(|task| task.callback.take())
                .collect();
            tasks.retain(|task| task.callback.is_some() && !task.cancelled.get());
            callbacks
        };
        for callback in due {
            callback();
        }
    }

    pub fn pending(&self) -> usize {
        self.tasks
            .borrow()
            .iter()
            .filter(|task| !task.cancelled.get() && task.callback.is_some())
            .count()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.tasks.borrow_mut().push(Task {
            due: self.now.get() + u64::from(delay_ms),
            cancelled: cancelled.clone(),
            callback: Some(callback),
        });
        ManualHandle(cancelled)
    }
}
