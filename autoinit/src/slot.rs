//! One entry of the init plan.

use crate::phase::Phase;

/// A (predicate, hook, phase, position) tuple in the init plan.
///
/// `enabled` is resolved from the build configuration when the plan is
/// constructed and never changes afterwards; for modules that are not part
/// of the build it is a compile-time `false` and the bound hook is an empty
/// function, so disabled slots cost nothing and pull in no external symbol.
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    name: &'static str,
    phase: Phase,
    position: u16,
    enabled: bool,
    hook: fn(),
}

impl Slot {
    /// Declare a slot that is enabled whenever it is compiled in.
    pub const fn new(name: &'static str, phase: Phase, position: u16, hook: fn()) -> Self {
        Self {
            name,
            phase,
            position,
            enabled: true,
            hook,
        }
    }

    /// Gate the slot on a build-time predicate.
    pub const fn enabled_if(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Module label, also used in the boot trace.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The boot stage this slot belongs to.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Position among siblings of the same phase. Strictly increasing in
    /// declaration order; gaps are fine.
    pub const fn position(&self) -> u16 {
        self.position
    }

    /// Whether this build's flag predicate selected the slot.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Call the bound init hook synchronously.
    pub fn invoke(&self) {
        (self.hook)()
    }
}

/// A declared must-not-swap relation between two slots, by name.
///
/// The relation holds for every build in which both slots are enabled,
/// independent of phase membership. Rules referring to a slot that is not
/// part of the plan are vacuous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderRule {
    pub before: &'static str,
    pub after: &'static str,
}

impl OrderRule {
    pub const fn new(before: &'static str, after: &'static str) -> Self {
        Self { before, after }
    }
}
