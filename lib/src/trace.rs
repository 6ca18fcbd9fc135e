//! Fixed-capacity recorder for boot-time event names.
//!
//! The boot path cannot allocate, so the trace is a static array of
//! `&'static str` labels plus a cursor. Pushes beyond capacity are counted
//! but dropped; the entries that did fit keep their order.

/// Append-only, allocation-free sequence of static name labels.
pub struct NameTrace<const N: usize> {
    entries: [&'static str; N],
    len: usize,
    dropped: usize,
}

impl<const N: usize> NameTrace<N> {
    /// Create an empty trace.
    pub const fn new() -> Self {
        Self {
            entries: [""; N],
            len: 0,
            dropped: 0,
        }
    }

    /// Append a label. Returns `false` (and bumps the drop counter) when
    /// the trace is full.
    pub fn push(&mut self, name: &'static str) -> bool {
        if self.len == N {
            self.dropped += 1;
            return false;
        }
        self.entries[self.len] = name;
        self.len += 1;
        true
    }

    /// The recorded labels, in push order.
    pub fn as_slice(&self) -> &[&'static str] {
        &self.entries[..self.len]
    }

    /// Number of labels recorded (excluding dropped ones).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of pushes that did not fit.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.len = 0;
        self.dropped = 0;
    }
}

impl<const N: usize> Default for NameTrace<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_push_order() {
        let mut trace: NameTrace<4> = NameTrace::new();
        assert!(trace.is_empty());
        assert!(trace.push("a"));
        assert!(trace.push("b"));
        assert!(trace.push("c"));
        assert_eq!(trace.as_slice(), &["a", "b", "c"]);
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn overflow_is_counted_not_stored() {
        let mut trace: NameTrace<2> = NameTrace::new();
        assert!(trace.push("a"));
        assert!(trace.push("b"));
        assert!(!trace.push("c"));
        assert!(!trace.push("d"));
        assert_eq!(trace.as_slice(), &["a", "b"]);
        assert_eq!(trace.dropped(), 2);
    }

    #[test]
    fn clear_resets_both_counters() {
        let mut trace: NameTrace<1> = NameTrace::new();
        trace.push("a");
        trace.push("b");
        trace.clear();
        assert!(trace.is_empty());
        assert_eq!(trace.dropped(), 0);
        assert!(trace.push("c"));
        assert_eq!(trace.as_slice(), &["c"]);
    }
}
