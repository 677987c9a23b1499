//! Request generations and keystroke debouncing.
//!
//! Both are built on a shared counter: every new request (or keystroke) takes
//! a [`Ticket`], and only the holder of the latest ticket may act. This keeps
//! a slow response from overwriting a newer one, and collapses a burst of
//! keystrokes into the single action issued after the input goes quiet.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request-generation counter. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct Generation(Arc<AtomicU64>);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket and makes every earlier ticket stale.
    pub fn next(&self) -> Ticket {
        Ticket(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0.load(Ordering::SeqCst) == ticket.0
    }

    /// Makes every outstanding ticket stale without issuing a new one.
    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Runs an action only after its trigger has been quiet for a delay.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    pending: Generation,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a trigger; any earlier pending trigger will not fire.
    pub fn schedule(&self) -> Ticket {
        self.pending.next()
    }

    /// Drops whatever is pending, e.g. when an immediate search supersedes it.
    pub fn cancel(&self) {
        self.pending.invalidate();
    }

    /// Waits for `sleep` and reports whether `ticket` is still the latest trigger.
    pub async fn settle<F>(&self, ticket: Ticket, sleep: F) -> bool
    where
        F: Future<Output = ()>,
    {
        sleep.await;
        self.pending.is_current(ticket)
    }

    /// Schedules `action` to run `delay_ms` after the last call to `trigger`.
    pub fn trigger<A>(&self, delay_ms: u32, action: A)
    where
        A: FnOnce() + 'static,
    {
        let ticket = self.schedule();
        let this = self.clone();
        spawn_local(async move {
            if this.settle(ticket, TimeoutFuture::new(delay_ms)).await {
                action();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn newer_ticket_makes_older_stale() {
        let generation = Generation::new();
        let first = generation.next();
        assert!(generation.is_current(first));
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        generation.invalidate();
        assert!(!generation.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let generation = Generation::new();
        let other = generation.clone();
        let ticket = generation.next();
        other.next();
        assert!(!generation.is_current(ticket));
    }

    #[test]
    fn burst_of_keystrokes_fires_once() {
        let debouncer = Debouncer::new();
        let fired = Cell::new(0);

        // Five keystrokes land inside the window before any timer elapses.
        let tickets: Vec<Ticket> = (0..5).map(|_| debouncer.schedule()).collect();

        for ticket in tickets {
            if block_on(debouncer.settle(ticket, async {})) {
                fired.set(fired.get() + 1);
            }
        }
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn keystroke_during_wait_suppresses_pending_action() {
        let debouncer = Debouncer::new();
        let ticket = debouncer.schedule();
        let other = debouncer.clone();
        let settled = block_on(debouncer.settle(ticket, async move {
            other.schedule();
        }));
        assert!(!settled);
    }

    #[test]
    fn cancel_drops_pending_trigger() {
        let debouncer = Debouncer::new();
        let ticket = debouncer.schedule();
        debouncer.cancel();
        assert!(!block_on(debouncer.settle(ticket, async {})));
    }
}
