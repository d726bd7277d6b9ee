//! Cancellable debounce scheduling.
//!
//! A debounce is backed by a shared generation counter: arming hands out a
//! ticket, and re-arming or cancelling invalidates every earlier ticket.
//! Only the most recently armed task may fire, so a superseded keystroke can
//! never apply stale results over the current query's.

use std::cell::Cell;
use std::rc::Rc;

/// Monotonic generation counter backing debounce cancellation.
#[derive(Clone, Default)]
pub struct DebounceGate {
    generation: Rc<Cell<u64>>,
}

/// Handle for one armed task; valid until the next arm or cancel.
pub struct DebounceTicket {
    generation: Rc<Cell<u64>>,
    issued: u64,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a new task, invalidating all outstanding tickets.
    pub fn arm(&self) -> DebounceTicket {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        DebounceTicket {
            generation: Rc::clone(&self.generation),
            issued: next,
        }
    }

    /// Invalidate all outstanding tickets without arming a new one.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
    }
}

impl DebounceTicket {
    /// True while no later arm or cancel has superseded this ticket.
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued
    }
}

/// Debounced task runner: `schedule` waits out the delay and runs the task
/// only if no later schedule or cancel happened in the meantime.
#[derive(Clone, Default)]
pub struct Debouncer {
    gate: DebounceGate,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&self, delay_ms: u32, task: F)
    where
        F: FnOnce() + 'static,
    {
        let ticket = self.gate.arm();
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            if ticket.is_current() {
                task();
            }
        });
    }

    /// Drop any pending task. Also used on teardown so an in-flight timer
    /// cannot touch destroyed state.
    pub fn cancel(&self) {
        self.gate.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rearming_supersedes_earlier_tickets() {
        let gate = DebounceGate::new();
        let a = gate.arm();
        let b = gate.arm();
        let c = gate.arm();
        assert!(!a.is_current());
        assert!(!b.is_current());
        assert!(c.is_current());
    }

    #[test]
    fn test_cancel_invalidates_without_arming() {
        let gate = DebounceGate::new();
        let ticket = gate.arm();
        gate.cancel();
        assert!(!ticket.is_current());
    }

    #[test]
    fn test_fresh_gate_tickets_are_current() {
        let gate = DebounceGate::new();
        assert!(gate.arm().is_current());
    }
}
