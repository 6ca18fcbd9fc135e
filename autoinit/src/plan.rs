//! The ordered init plan and its single-pass executor.

use core::fmt;

use log::debug;

use crate::phase::Phase;
use crate::slot::{OrderRule, Slot};
use crate::state;

/// A structural defect in a declared init plan.
///
/// These are authoring errors: a correct plan can never produce one at
/// boot. `verify()` exists so tests and debug builds catch a bad edit to
/// the slot table before it reaches hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanError {
    /// A slot is declared in an earlier phase than its predecessor.
    PhaseOutOfOrder { slot: &'static str },
    /// A slot repeats or inverts an intra-phase position.
    PositionNotIncreasing { slot: &'static str },
    /// Two slots share a name, which would make order rules ambiguous.
    DuplicateName { slot: &'static str },
    /// A declared pairwise rule is violated by declaration order.
    RuleViolated {
        before: &'static str,
        after: &'static str,
    },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::PhaseOutOfOrder { slot } => {
                write!(f, "slot '{slot}' declared behind a later phase")
            }
            PlanError::PositionNotIncreasing { slot } => {
                write!(f, "slot '{slot}' does not increase its phase position")
            }
            PlanError::DuplicateName { slot } => {
                write!(f, "slot name '{slot}' declared twice")
            }
            PlanError::RuleViolated { before, after } => {
                write!(f, "order rule '{before}' -> '{after}' violated by declaration")
            }
        }
    }
}

/// The complete ordered sequence of init slots, fixed at build time.
///
/// Execution order is exactly declaration order: phase first, intra-phase
/// position second, and the table is declared sorted that way. `run()`
/// projects the table onto the enabled slots; nothing is ever reordered.
pub struct InitPlan {
    slots: &'static [Slot],
    rules: &'static [OrderRule],
}

impl InitPlan {
    pub const fn new(slots: &'static [Slot], rules: &'static [OrderRule]) -> Self {
        Self { slots, rules }
    }

    /// Every declared slot, enabled or not, in declaration order.
    pub const fn slots(&self) -> &'static [Slot] {
        self.slots
    }

    /// The declared pairwise ordering rules.
    pub const fn rules(&self) -> &'static [OrderRule] {
        self.rules
    }

    /// The slots this build will actually run, in order.
    pub fn enabled(&self) -> impl Iterator<Item = &'static Slot> {
        self.slots.iter().filter(|slot| slot.is_enabled())
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.name() == name)
    }

    /// Check the structural invariants of the declared table.
    ///
    /// Verifies that phases never go backwards, intra-phase positions
    /// strictly increase, names are unique and every pairwise rule whose
    /// endpoints are both present holds. Checked over the full table, not
    /// just the enabled projection, so a bad edit is caught in every build
    /// configuration.
    pub fn verify(&self) -> Result<(), PlanError> {
        let mut prev: Option<&Slot> = None;
        for slot in self.slots {
            if let Some(p) = prev {
                if slot.phase() < p.phase() {
                    return Err(PlanError::PhaseOutOfOrder { slot: slot.name() });
                }
                if slot.phase() == p.phase() && slot.position() <= p.position() {
                    return Err(PlanError::PositionNotIncreasing { slot: slot.name() });
                }
            }
            prev = Some(slot);
        }

        for (idx, slot) in self.slots.iter().enumerate() {
            if self.index_of(slot.name()) != Some(idx) {
                return Err(PlanError::DuplicateName { slot: slot.name() });
            }
        }

        for rule in self.rules {
            let (Some(before), Some(after)) =
                (self.index_of(rule.before), self.index_of(rule.after))
            else {
                continue;
            };
            if before >= after {
                return Err(PlanError::RuleViolated {
                    before: rule.before,
                    after: rule.after,
                });
            }
        }

        Ok(())
    }

    /// Execute one boot pass over the plan.
    ///
    /// Visits every slot in declaration order and synchronously invokes the
    /// hook of each enabled one, waiting for it to return before moving on.
    /// Hook failures are not caught, wrapped or reported: this runs before
    /// any recovery infrastructure exists, and a hook that halts, halts the
    /// boot.
    ///
    /// One call is one full traversal. `run()` is neither reentrant-safe
    /// nor idempotent -- calling it again re-runs every enabled hook in the
    /// same order. The boot entry point is responsible for calling it
    /// exactly once.
    pub fn run(&self) {
        let mut current: Option<Phase> = None;
        for slot in self.enabled() {
            if current != Some(slot.phase()) {
                if let Some(done) = current {
                    debug!("init phase {} complete", done.name());
                }
                current = Some(slot.phase());
                debug!("init phase {} start", slot.phase().name());
            }
            debug!("auto init {}", slot.name());
            slot.invoke();
            state::record(slot);
        }
        if let Some(done) = current {
            debug!("init phase {} complete", done.name());
        }
        state::mark_boot_complete();
    }
}
