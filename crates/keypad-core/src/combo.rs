//! Combination key canonicalization
//!
//! A set of held slots is identified by one string: the slot names sorted
//! lexicographically and joined with a separator. Canonicalization is
//! order-independent, so the same physical chord always looks up the same
//! action no matter the order the scanner reported it in.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use mux_matrix::KeySlot;

/// Separator between slot names in a combination key.
pub const COMBO_SEPARATOR: &str = "-";

/// Canonical combination key for a set of slots.
///
/// The empty set canonicalizes to the empty string.
pub fn canonical<I>(slots: I) -> String
where
    I: IntoIterator<Item = KeySlot>,
{
    let sorted: BTreeSet<KeySlot> = slots.into_iter().collect();
    sorted.into_iter().collect::<Vec<_>>().join(COMBO_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn canonical_is_order_independent() {
        assert_eq!(canonical(vec!["a1", "b2"]), canonical(vec!["b2", "a1"]));
        assert_eq!(canonical(vec!["a1", "b2"]), "a1-b2");
    }

    #[test]
    fn canonical_deduplicates() {
        assert_eq!(canonical(vec!["a1", "a1", "b2"]), "a1-b2");
    }

    #[test]
    fn canonical_of_empty_set_is_empty() {
        assert_eq!(canonical(vec![]), "");
    }

    #[test]
    fn canonical_single_slot_has_no_separator() {
        assert_eq!(canonical(vec!["c3"]), "c3");
    }
}
