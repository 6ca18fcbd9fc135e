//! Boot-time auto-initialization for the mote platform.
//!
//! Every optional module that has a trivial init entry point gets a slot
//! in a single, statically declared [`InitPlan`]: a (predicate, hook,
//! phase, position) table whose declaration order is the execution order.
//! Which slots actually run is decided entirely by the build
//! configuration (Cargo features); the projection onto the enabled slots
//! is executed in one synchronous pass by [`auto_init`], before the
//! application entry point runs.
//!
//! The orchestrator only guarantees invocation order. It neither infers
//! dependencies between modules (the table encodes them, including a few
//! explicit pairwise must-not-swap rules) nor handles hook failures: at
//! this point in boot no recovery infrastructure exists, so a hook that
//! halts, halts the boot.

#![cfg_attr(not(test), no_std)]

mod hooks;
mod phase;
mod plan;
mod slot;
pub mod state;
mod table;

#[cfg(test)]
mod plan_tests;
#[cfg(test)]
pub(crate) mod testutil;

pub use phase::{Phase, PhaseSet};
pub use plan::{InitPlan, PlanError};
pub use slot::{OrderRule, Slot};
pub use state::{boot_state, is_boot_complete};
pub use table::INIT_PLAN;

/// Run the boot-time initialization pass over the production plan.
///
/// Call exactly once during boot, before the application entry point.
/// Not idempotent: a second call re-runs every enabled hook, in the same
/// order. Debug builds validate the plan declaration first and panic on a
/// malformed table; release builds trust it.
pub fn auto_init() {
    if cfg!(debug_assertions) {
        if let Err(err) = INIT_PLAN.verify() {
            panic!("malformed init plan: {err}");
        }
    }
    INIT_PLAN.run();
}
