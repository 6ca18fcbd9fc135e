//! Boot progress bookkeeping.
//!
//! The orchestrator's only observable artifact is the ordered sequence of
//! hook invocations it makes; this module records that sequence in a
//! fixed-capacity trace plus a bitmask of phases that ran at least one
//! hook. Diagnostics read it after boot, and the ordering tests assert on
//! it. The lock is only ever taken between hook invocations, never across
//! one.

use mote_lib::{InitFlag, NameTrace};
use spin::{Mutex, MutexGuard};

use crate::phase::PhaseSet;
use crate::slot::Slot;

/// Upper bound on recorded invocations per boot. The full plan is well
/// below this; re-running the pass in a test harness may overflow, in
/// which case overflowing entries are counted and dropped.
pub const TRACE_CAPACITY: usize = 256;

/// Progress recorded while the init plan executes.
pub struct BootState {
    trace: NameTrace<TRACE_CAPACITY>,
    phases: PhaseSet,
}

impl BootState {
    const fn new() -> Self {
        Self {
            trace: NameTrace::new(),
            phases: PhaseSet::empty(),
        }
    }

    /// Names of the hooks invoked so far, in invocation order.
    pub fn trace(&self) -> &[&'static str] {
        self.trace.as_slice()
    }

    /// Phases that have executed at least one hook.
    pub fn phases(&self) -> PhaseSet {
        self.phases
    }

    /// Number of hook invocations recorded (excluding dropped entries).
    pub fn hooks_run(&self) -> usize {
        self.trace.len()
    }
}

static BOOT_STATE: Mutex<BootState> = Mutex::new(BootState::new());
static BOOT_COMPLETE: InitFlag = InitFlag::new();

/// Lock and read the recorded boot progress.
pub fn boot_state() -> MutexGuard<'static, BootState> {
    BOOT_STATE.lock()
}

/// Whether a full init pass has completed since the last reset.
pub fn is_boot_complete() -> bool {
    BOOT_COMPLETE.is_set()
}

/// Clear all recorded progress. Bring-up and test harness aid; the boot
/// path itself never calls this.
pub fn reset() {
    let mut state = BOOT_STATE.lock();
    state.trace.clear();
    state.phases = PhaseSet::empty();
    BOOT_COMPLETE.clear();
}

pub(crate) fn record(slot: &Slot) {
    let mut state = BOOT_STATE.lock();
    state.trace.push(slot.name());
    state.phases.insert(slot.phase().mask());
}

pub(crate) fn mark_boot_complete() {
    BOOT_COMPLETE.mark_set();
}
