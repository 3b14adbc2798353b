/// Visiting order over the records
///
/// Records are not shown in file order. The order groups them by index
/// modulo 3: every index ≡ 0 first, then ≡ 1, then ≡ 2, each group in its
/// file order. The order is fixed for the whole session; only the cursor
/// moves.
#[derive(Debug, Clone)]
pub struct Sequencer {
    /// Permutation of `0..len`
    order: Vec<usize>,
    /// Position in `order`, always < len (0 when empty)
    cursor: usize,
}

impl Sequencer {
    pub fn new(len: usize) -> Self {
        let order = (0..3)
            .flat_map(|start| (start..len).step_by(3))
            .collect();

        Sequencer { order, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cursor position within the visiting order
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Record index under the cursor
    pub fn current(&self) -> Option<usize> {
        self.order.get(self.cursor).copied()
    }

    #[cfg(test)]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Step forward. Returns false when already at the last position.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.order.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Step backward. Returns false when already at the first position.
    pub fn retreat(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Move to the first position (scanning from the start of the order, not
    /// from the cursor) whose record is not resolved. The cursor is left
    /// alone when every record is resolved.
    pub fn seek_first_unresolved<F>(&mut self, is_resolved: F) -> bool
    where
        F: Fn(usize) -> bool,
    {
        match self.order.iter().position(|&index| !is_resolved(index)) {
            Some(position) => {
                self.cursor = position;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_groups_by_mod_three() {
        let seq = Sequencer::new(8);
        assert_eq!(seq.order(), &[0, 3, 6, 1, 4, 7, 2, 5]);
    }

    #[test]
    fn test_order_is_a_permutation() {
        for n in 0..40 {
            let seq = Sequencer::new(n);
            let mut sorted = seq.order().to_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..n).collect::<Vec<_>>(), "n = {}", n);

            // groups are contiguous and ordered by residue
            let residues: Vec<usize> = seq.order().iter().map(|i| i % 3).collect();
            assert!(residues.windows(2).all(|w| w[0] <= w[1]), "n = {}", n);
        }
    }

    #[test]
    fn test_empty_sequencer() {
        let mut seq = Sequencer::new(0);
        assert!(seq.is_empty());
        assert_eq!(seq.current(), None);
        assert!(!seq.advance());
        assert!(!seq.retreat());
        assert!(!seq.seek_first_unresolved(|_| false));
        assert_eq!(seq.position(), 0);
    }

    #[test]
    fn test_advance_clamps_at_end() {
        let mut seq = Sequencer::new(4);
        for _ in 0..10 {
            seq.advance();
            assert!(seq.position() < seq.len());
        }
        assert_eq!(seq.position(), 3);
        assert_eq!(seq.current(), Some(2));
        assert!(!seq.advance());
    }

    #[test]
    fn test_retreat_clamps_at_zero() {
        let mut seq = Sequencer::new(5);
        seq.advance();
        assert!(seq.retreat());
        assert!(!seq.retreat());
        assert_eq!(seq.position(), 0);
        assert_eq!(seq.current(), Some(0));
    }

    #[test]
    fn test_seek_scans_from_start() {
        let mut seq = Sequencer::new(6); // order: 0 3 1 4 2 5
        seq.advance();
        seq.advance();
        seq.advance();
        assert_eq!(seq.position(), 3);

        // Only record 3 (position 1) is unresolved: the seek goes back to it
        assert!(seq.seek_first_unresolved(|index| index != 3));
        assert_eq!(seq.position(), 1);
        assert_eq!(seq.current(), Some(3));
    }

    #[test]
    fn test_seek_all_resolved_keeps_cursor() {
        let mut seq = Sequencer::new(7);
        seq.advance();
        seq.advance();
        assert!(!seq.seek_first_unresolved(|_| true));
        assert_eq!(seq.position(), 2);
    }
}
