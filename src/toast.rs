//! Error Toast Timer
//!
//! A single-slot auto-hide timer: showing the toast again cancels the
//! pending hide and starts a fresh one.

use std::rc::Rc;

/// A scheduled callback that can be called off
pub trait Cancel {
    fn cancel(self);
}

/// Runs a callback once after a delay
pub trait Scheduler {
    type Handle: Cancel;

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Holds at most one pending timer handle
pub struct CancelableTimer<H> {
    pending: Option<H>,
}

impl<H: Cancel> CancelableTimer<H> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Cancel the pending handle, if any, then store the one `start` returns
    pub fn restart(&mut self, start: impl FnOnce() -> H) {
        self.cancel();
        self.pending = Some(start());
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

impl<H: Cancel> Default for CancelableTimer<H> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Toast<S: Scheduler> {
    scheduler: S,
    set_visible: Rc<dyn Fn(bool)>,
    hide_after_ms: u32,
    timer: CancelableTimer<S::Handle>,
}

impl<S: Scheduler> Toast<S> {
    pub fn new(scheduler: S, hide_after_ms: u32, set_visible: impl Fn(bool) + 'static) -> Self {
        Self {
            scheduler,
            set_visible: Rc::new(set_visible),
            hide_after_ms,
            timer: CancelableTimer::new(),
        }
    }

    /// Show the toast and (re)start the hide countdown
    pub fn show(&mut self) {
        (self.set_visible)(true);
        let hide = self.set_visible.clone();
        let scheduler = &self.scheduler;
        let delay = self.hide_after_ms;
        self.timer
            .restart(|| scheduler.after(delay, Box::new(move || hide(false))));
    }

    /// Hide immediately and drop the countdown
    pub fn dismiss(&mut self) {
        self.timer.cancel();
        (self.set_visible)(false);
    }
}
