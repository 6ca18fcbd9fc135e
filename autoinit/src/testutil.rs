//! Shared scaffolding for the unit tests.
//!
//! Hooks are plain `fn()` and cannot capture, so test hooks record into a
//! thread-local journal; every test plan runs on the test's own thread,
//! which keeps parallel tests from seeing each other's calls. Tests that
//! touch the global boot state additionally serialize on one lock.

use std::cell::RefCell;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::plan::InitPlan;
use crate::slot::{OrderRule, Slot};
use crate::state;

static SEQ: Mutex<()> = Mutex::new(());

/// Take the global-state lock and start from a clean boot state.
pub fn serialize() -> MutexGuard<'static, ()> {
    let guard = SEQ.lock().unwrap_or_else(PoisonError::into_inner);
    state::reset();
    guard
}

thread_local! {
    static CALLS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

pub fn note_call(name: &'static str) {
    CALLS.with(|calls| calls.borrow_mut().push(name));
}

/// Drain and return the calls recorded on this thread.
pub fn take_calls() -> Vec<&'static str> {
    CALLS.with(|calls| calls.take())
}

/// Turn runtime-built tables into the `'static` slices `InitPlan` wants.
pub fn leak_plan(slots: Vec<Slot>, rules: Vec<OrderRule>) -> InitPlan {
    InitPlan::new(Vec::leak(slots), Vec::leak(rules))
}

macro_rules! journal_hooks {
    ($($name:ident),+ $(,)?) => {
        $(pub fn $name() {
            note_call(stringify!($name));
        })+
    };
}

journal_hooks!(alpha, bravo, charlie, delta, echo, foxtrot, golf, hotel);
