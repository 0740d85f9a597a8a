//! Raw scan stabilization
//!
//! Two identical consecutive raw scans are required before a transition is
//! trusted. A scan that disagrees with its predecessor is remembered and
//! discarded after a debounce wait; switch bounce therefore never reaches
//! the dispatcher, without per-key timers.

use alloc::collections::BTreeSet;

use embedded_hal::delay::DelayNs;

use mux_matrix::KeySlot;

use crate::DEBOUNCE_MS;

/// Transition between two stable pressed sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    pub pressed: BTreeSet<KeySlot>,
    pub released: BTreeSet<KeySlot>,
}

impl Diff {
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty() && self.released.is_empty()
    }
}

/// Debounces raw scans into a stable pressed set.
#[derive(Debug, Default)]
pub struct Stabilizer {
    last_raw: BTreeSet<KeySlot>,
    stable: BTreeSet<KeySlot>,
}

impl Stabilizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The debounced set of currently held slots.
    pub fn stable(&self) -> &BTreeSet<KeySlot> {
        &self.stable
    }

    /// Feed one raw scan; returns the committed transition, empty if none.
    ///
    /// A scan differing from the previous raw scan replaces it, waits the
    /// debounce interval and commits nothing. A scan matching the previous
    /// raw scan but differing from the stable set commits the diff and
    /// becomes the new stable set.
    pub fn observe<D: DelayNs>(&mut self, raw: &[KeySlot], delay: &mut D) -> Diff {
        let raw: BTreeSet<KeySlot> = raw.iter().copied().collect();

        if raw != self.last_raw {
            self.last_raw = raw;
            delay.delay_ms(DEBOUNCE_MS);
            return Diff::default();
        }

        if raw == self.stable {
            return Diff::default();
        }

        let pressed = &raw - &self.stable;
        let released = &self.stable - &raw;
        self.stable = raw;
        Diff { pressed, released }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockDelay;
    use alloc::collections::BTreeSet;

    fn set(slots: &[KeySlot]) -> BTreeSet<KeySlot> {
        slots.iter().copied().collect()
    }

    #[test]
    fn repeated_scan_commits_once_then_idles() {
        let mut stab = Stabilizer::new();
        let mut delay = MockDelay::new();

        // First sighting is treated as bounce.
        assert!(stab.observe(&["a1"], &mut delay).is_empty());
        // Confirmed on the second identical sweep.
        let diff = stab.observe(&["a1"], &mut delay);
        assert_eq!(diff.pressed, set(&["a1"]));
        assert!(diff.released.is_empty());
        // Idempotent afterwards.
        assert!(stab.observe(&["a1"], &mut delay).is_empty());
        assert!(stab.observe(&["a1"], &mut delay).is_empty());
    }

    #[test]
    fn one_sweep_transient_never_produces_a_diff() {
        let mut stab = Stabilizer::new();
        let mut delay = MockDelay::new();

        stab.observe(&["a1"], &mut delay);
        stab.observe(&["a1"], &mut delay);

        // A spike on a single sweep, gone by the next.
        assert!(stab.observe(&["a1", "b2"], &mut delay).is_empty());
        assert!(stab.observe(&["a1"], &mut delay).is_empty());
        // Settles back with no phantom transition committed.
        assert!(stab.observe(&["a1"], &mut delay).is_empty());
        assert_eq!(stab.stable(), &set(&["a1"]));
    }

    #[test]
    fn bounce_waits_debounce_interval() {
        let mut stab = Stabilizer::new();
        let mut delay = MockDelay::new();

        stab.observe(&["a1"], &mut delay);
        assert_eq!(delay.sleeps_ms(), &[crate::DEBOUNCE_MS]);
        stab.observe(&["a1"], &mut delay);
        assert_eq!(delay.sleeps_ms(), &[crate::DEBOUNCE_MS]);
    }

    #[test]
    fn diff_is_complete_between_stable_sets() {
        let mut stab = Stabilizer::new();
        let mut delay = MockDelay::new();

        stab.observe(&["a1", "b2"], &mut delay);
        stab.observe(&["a1", "b2"], &mut delay);
        let before = stab.stable().clone();

        stab.observe(&["b2", "c3"], &mut delay);
        let diff = stab.observe(&["b2", "c3"], &mut delay);

        let after = stab.stable().clone();
        assert_eq!(diff.pressed, &after - &before);
        assert_eq!(diff.released, &before - &after);
        let reconstructed: BTreeSet<KeySlot> = &(&before | &diff.pressed) - &diff.released;
        assert_eq!(reconstructed, after);
    }

    #[test]
    fn raw_order_does_not_matter() {
        let mut stab = Stabilizer::new();
        let mut delay = MockDelay::new();

        stab.observe(&["a1", "b2"], &mut delay);
        let diff = stab.observe(&["b2", "a1"], &mut delay);
        assert_eq!(diff.pressed, set(&["a1", "b2"]));
    }
}
