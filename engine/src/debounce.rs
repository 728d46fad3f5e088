//! Trailing-edge debounce for values that change on every keystroke.
//!
//! Each scheduled value gets a ticket. When its quiet period is over the
//! ticket is fired; only the newest ticket yields its value, so superseded
//! values are never exposed and the last one always is (unless cancelled).

use std::{cell::RefCell, rc::Rc, time::Duration};

use futures::future::LocalBoxFuture;

use crate::runtime::Timer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug)]
struct Slot<T> {
    generation: u64,
    pending: Option<T>,
    cancelled: bool,
}

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self { delay: self.delay, slot: self.slot.clone() }
    }
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            slot: Rc::new(RefCell::new(Slot { generation: 0, pending: None, cancelled: false })),
        }
    }

    /// Stores `value` as the pending one, superseding whatever was pending.
    pub fn schedule(&self, value: T) -> DebounceTicket {
        let mut slot = self.slot.borrow_mut();
        slot.generation += 1;
        slot.pending = Some(value);
        DebounceTicket(slot.generation)
    }

    /// Called when `ticket`'s quiet period has elapsed. Yields the value only
    /// if nothing newer was scheduled meanwhile.
    pub fn fire(&self, ticket: DebounceTicket) -> Option<T> {
        let mut slot = self.slot.borrow_mut();
        if slot.cancelled || slot.generation != ticket.0 {
            return None;
        }
        slot.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        let slot = self.slot.borrow();
        !slot.cancelled && slot.pending.is_some()
    }

    /// Drops the pending value; later schedules still work.
    pub fn discard(&self) {
        let mut slot = self.slot.borrow_mut();
        slot.generation += 1;
        slot.pending = None;
    }

    /// Teardown: nothing scheduled before or after this is ever exposed.
    pub fn cancel(&self) {
        let mut slot = self.slot.borrow_mut();
        slot.cancelled = true;
        slot.pending = None;
    }

    /// Schedules `value` now and resolves once the quiet period is over,
    /// to the value if it is still the latest.
    pub fn settle(&self, value: T, timer: &dyn Timer) -> LocalBoxFuture<'static, Option<T>>
    where
        T: 'static,
    {
        let ticket = self.schedule(value);
        let sleep = timer.sleep(self.delay);
        let debouncer = self.clone();
        Box::pin(async move {
            sleep.await;
            debouncer.fire(ticket)
        })
    }
}
