//! Matrix position to key slot mapping

use crate::error::LayoutError;

/// Stable logical name of one physical switch, e.g. `"a1"`.
///
/// Slot names live for the firmware's lifetime; the layout table owns them.
pub type KeySlot = &'static str;

/// Build-time description of which switch sits at which matrix position.
///
/// Positions with no physical switch are `None`. Validated on construction:
/// every row must have the same width and no slot name may appear twice.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    slots: &'static [&'static [Option<KeySlot>]],
    cols: usize,
}

impl Layout {
    /// Create a layout from a row-major table.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the table is empty, ragged, or assigns
    /// the same slot name to more than one position.
    pub fn new(slots: &'static [&'static [Option<KeySlot>]]) -> Result<Self, LayoutError> {
        let cols = slots.first().map_or(0, |row| row.len());
        if slots.is_empty() || cols == 0 {
            return Err(LayoutError::Empty);
        }
        for (index, row) in slots.iter().enumerate() {
            if row.len() != cols {
                return Err(LayoutError::Ragged {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
        }
        for (index, slot) in slots.iter().flat_map(|row| row.iter()).enumerate() {
            let Some(slot) = slot else { continue };
            let seen_before = slots
                .iter()
                .flat_map(|row| row.iter())
                .take(index)
                .any(|other| *other == Some(*slot));
            if seen_before {
                return Err(LayoutError::DuplicateSlot(slot));
            }
        }
        Ok(Self { slots, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.slots.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The slot at a position, or `None` for unassigned positions.
    pub fn slot_at(&self, row: usize, col: usize) -> Option<KeySlot> {
        *self.slots.get(row)?.get(col)?
    }

    /// Number of assigned slots.
    pub fn slot_count(&self) -> usize {
        self.slots
            .iter()
            .flat_map(|row| row.iter())
            .filter(|slot| slot.is_some())
            .count()
    }

    /// Iterate over all assigned slots in row-major order.
    pub fn slots(&self) -> impl Iterator<Item = KeySlot> + '_ {
        self.slots.iter().flat_map(|row| row.iter()).flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD: &[&[Option<KeySlot>]] = &[
        &[Some("a1"), Some("a2"), None],
        &[Some("b1"), None, Some("b3")],
    ];

    #[test]
    fn layout_dimensions_and_lookup() {
        let layout = Layout::new(GOOD).unwrap();
        assert_eq!(layout.rows(), 2);
        assert_eq!(layout.cols(), 3);
        assert_eq!(layout.slot_count(), 4);
        assert_eq!(layout.slot_at(0, 1), Some("a2"));
        assert_eq!(layout.slot_at(1, 1), None);
        assert_eq!(layout.slot_at(5, 0), None);
    }

    #[test]
    fn layout_rejects_duplicate_slot() {
        const DUP: &[&[Option<KeySlot>]] = &[&[Some("a1"), Some("b1")], &[Some("b1"), None]];
        assert_eq!(
            Layout::new(DUP).unwrap_err(),
            LayoutError::DuplicateSlot("b1")
        );
    }

    #[test]
    fn layout_rejects_ragged_rows() {
        const RAGGED: &[&[Option<KeySlot>]] = &[&[Some("a1"), Some("a2")], &[Some("b1")]];
        assert_eq!(
            Layout::new(RAGGED).unwrap_err(),
            LayoutError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn layout_rejects_empty() {
        assert_eq!(Layout::new(&[]).unwrap_err(), LayoutError::Empty);
    }
}
