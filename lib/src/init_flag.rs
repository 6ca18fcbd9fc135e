//! Atomic one-shot state flags for boot subsystems.
//!
//! `InitFlag` wraps the recurring pattern of an `AtomicBool` static tracking
//! whether some piece of bring-up has happened, without every call site
//! repeating the ordering arguments.
//!
//! Memory ordering:
//! - `init_once()` uses a `SeqCst` swap so exactly one caller wins.
//! - `mark_set()` publishes with `Release`.
//! - `is_set()` observes with `Acquire`.

use core::sync::atomic::{AtomicBool, Ordering};

/// Atomic flag for tracking one-shot initialization state.
#[repr(transparent)]
pub struct InitFlag {
    flag: AtomicBool,
}

impl InitFlag {
    /// Create a new unset flag.
    #[inline]
    pub const fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }

    /// Atomically attempt to claim initialization.
    ///
    /// Returns `true` for the single caller that flipped the flag; every
    /// later caller gets `false` and should skip its init work.
    #[inline]
    pub fn init_once(&self) -> bool {
        !self.flag.swap(true, Ordering::SeqCst)
    }

    /// Set the flag unconditionally, publishing prior writes.
    #[inline]
    pub fn mark_set(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Clear the flag. Intended for bring-up and test harness resets.
    #[inline]
    pub fn clear(&self) {
        self.flag.store(false, Ordering::Release);
    }

    /// Whether the flag has been set.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

impl Default for InitFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        let flag = InitFlag::new();
        assert!(!flag.is_set());
    }

    #[test]
    fn init_once_claims_exactly_once() {
        let flag = InitFlag::new();
        assert!(flag.init_once());
        assert!(!flag.init_once());
        assert!(flag.is_set());
    }

    #[test]
    fn clear_reopens_the_flag() {
        let flag = InitFlag::new();
        flag.mark_set();
        assert!(flag.is_set());
        flag.clear();
        assert!(!flag.is_set());
        assert!(flag.init_once());
    }
}
