//! Lexicographic combination traversal
//!
//! State is just `r` strictly increasing source indices plus an exhaustion
//! flag. Elements are only touched when a snapshot is taken.

use std::iter::FusedIterator;

use bitvec::vec::BitVec;
use tracing::trace;

use crate::source::Source;
use crate::util::selections_after;
use crate::CombinationError;

/// Lazy traversal over the length-`r` selections of a source.
///
/// Produced by [`Combinator::iter`](super::Combinator::iter) or by consuming
/// a [`Combinator`](super::Combinator). Continuation depends only on this
/// traversal's own exhaustion flag.
#[derive(Debug, Clone)]
pub struct Combinations<S> {
    source: S,

    /// Current selection as source indices, strictly increasing.
    /// Emptied once the traversal is exhausted.
    positions: Vec<usize>,

    exhausted: bool,
}

impl<S: Source> Combinations<S> {
    /// Traversal positioned at the first selection `{0, 1, .., size - 1}`.
    ///
    /// Starts exhausted when `size` exceeds the source length, and when
    /// `size == 0` unless `allow_empty` is set.
    pub(crate) fn new(source: S, size: usize, allow_empty: bool) -> Self {
        if size == 0 && !allow_empty {
            return Self::exhausted(source);
        }

        let mut positions = Vec::with_capacity(size);
        for idx in 0..size {
            if source.get(idx).is_none() {
                return Self::exhausted(source);
            }
            positions.push(idx);
        }

        Self {
            source,
            positions,
            exhausted: false,
        }
    }

    /// Traversal resuming at an already validated position vector.
    pub(crate) fn resume(source: S, positions: Vec<usize>) -> Self {
        Self {
            source,
            positions,
            exhausted: false,
        }
    }

    fn exhausted(source: S) -> Self {
        Self {
            source,
            positions: Vec::new(),
            exhausted: true,
        }
    }

    /// Whether the traversal has run out of selections. Terminal once set.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Source indices of the current selection.
    pub fn positions(&self) -> Option<&[usize]> {
        (!self.exhausted).then_some(self.positions.as_slice())
    }

    /// Snapshot of the current selection, in source order.
    ///
    /// Each call clones the selected elements into a fresh vector. Returns
    /// `None` once exhausted.
    pub fn current(&self) -> Option<Vec<S::Item>>
    where
        S::Item: Clone,
    {
        if self.exhausted {
            return None;
        }
        self.positions
            .iter()
            .map(|&idx| self.source.get(idx).cloned())
            .collect()
    }

    /// Like [`current`](Self::current) but reports exhaustion as an error.
    pub fn try_current(&self) -> Result<Vec<S::Item>, CombinationError>
    where
        S::Item: Clone,
    {
        self.current().ok_or(CombinationError::Exhausted)
    }

    /// Membership mask over the whole source: bit `p` is set when source
    /// index `p` is part of the current selection.
    pub fn selection_mask(&self) -> Option<BitVec> {
        if self.exhausted {
            return None;
        }
        let mut mask = BitVec::repeat(false, self.source.len());
        for &idx in &self.positions {
            mask.set(idx, true);
        }
        Some(mask)
    }

    /// Selections left to yield, counting the current one.
    ///
    /// `None` when the count does not fit in `usize`. In that case
    /// `size_hint` reports a lower bound of `usize::MAX`, so collecting the
    /// traversal fails up front with a capacity overflow rather than running
    /// until memory is exhausted. Consume such traversals lazily.
    pub fn remaining(&self) -> Option<usize> {
        if self.exhausted {
            return Some(0);
        }
        selections_after(&self.positions, self.source.len())?.checked_add(1)
    }

    /// Step to the lexicographically next selection.
    ///
    /// Scans from the last position toward the first, looking for the
    /// rightmost position that can move one step and still leave room for
    /// every position after it. Everything right of that position is packed
    /// directly behind it. When no position can move the traversal becomes
    /// exhausted. A no-op once exhausted.
    pub fn advance(&mut self) {
        if self.exhausted {
            return;
        }

        let len = self.source.len();
        let size = self.positions.len();

        for i in (0..size).rev() {
            let stepped = self.positions[i] + 1;
            // Positions i+1..size need (size - 1 - i) more slots after `stepped`.
            if stepped + (size - 1 - i) < len {
                for (offset, slot) in self.positions[i..].iter_mut().enumerate() {
                    *slot = stepped + offset;
                }
                return;
            }
        }

        trace!(len, size, "combination traversal exhausted");
        self.positions.clear();
        self.exhausted = true;
    }
}

impl<S> Iterator for Combinations<S>
where
    S: Source,
    S::Item: Clone,
{
    type Item = Vec<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let selection = self.current()?;
        self.advance();
        Some(selection)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(left) => (left, Some(left)),
            None => (usize::MAX, None),
        }
    }

    fn count(self) -> usize {
        match self.remaining() {
            Some(left) => left,
            None => self.fold(0, |total, _| total + 1),
        }
    }
}

impl<S> FusedIterator for Combinations<S>
where
    S: Source,
    S::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_positions(len: usize, size: usize) -> Vec<Vec<usize>> {
        let source: Vec<usize> = (0..len).collect();
        let mut traversal = Combinations::new(&source, size, false);
        let mut seen = Vec::new();
        while let Some(positions) = traversal.positions() {
            seen.push(positions.to_vec());
            traversal.advance();
        }
        seen
    }

    #[test]
    fn initial_positions_are_leading_indices() {
        let source = vec!['a', 'b', 'c', 'd'];
        let traversal = Combinations::new(&source, 3, false);
        assert_eq!(traversal.positions(), Some(&[0, 1, 2][..]));
        assert_eq!(traversal.current(), Some(vec!['a', 'b', 'c']));
    }

    #[test]
    fn advance_carries_and_resets_trailing_positions() {
        assert_eq!(
            walk_positions(5, 3),
            vec![
                vec![0, 1, 2],
                vec![0, 1, 3],
                vec![0, 1, 4],
                vec![0, 2, 3],
                vec![0, 2, 4],
                vec![0, 3, 4],
                vec![1, 2, 3],
                vec![1, 2, 4],
                vec![1, 3, 4],
                vec![2, 3, 4],
            ]
        );
    }

    #[test]
    fn single_position_walks_every_index() {
        assert_eq!(walk_positions(3, 1), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn short_source_starts_exhausted() {
        let source = [1, 2];
        let traversal = Combinations::new(&source, 3, false);
        assert!(traversal.is_exhausted());
        assert_eq!(traversal.positions(), None);
        assert_eq!(traversal.current(), None);
    }

    #[test]
    fn zero_size_follows_policy() {
        let source = [1, 2, 3];
        assert!(Combinations::new(&source, 0, false).is_exhausted());

        let mut single = Combinations::new(&source, 0, true);
        assert_eq!(single.next(), Some(vec![]));
        assert_eq!(single.next(), None);
    }

    #[test]
    fn advancing_past_exhaustion_is_a_no_op() {
        let source = [7];
        let mut traversal = Combinations::new(&source, 1, false);
        traversal.advance();
        assert!(traversal.is_exhausted());
        traversal.advance();
        assert!(traversal.is_exhausted());
        assert!(matches!(
            traversal.try_current(),
            Err(CombinationError::Exhausted)
        ));
    }

    #[test]
    fn remaining_tracks_progress() {
        let source: Vec<u8> = (0..6).collect();
        let mut traversal = Combinations::new(&source, 3, false);
        let mut expected = 20;
        while !traversal.is_exhausted() {
            assert_eq!(traversal.remaining(), Some(expected));
            assert_eq!(traversal.size_hint(), (expected, Some(expected)));
            traversal.advance();
            expected -= 1;
        }
        assert_eq!(expected, 0);
        assert_eq!(traversal.remaining(), Some(0));
    }

    #[test]
    fn mask_marks_selected_positions() {
        let source = ['w', 'x', 'y', 'z'];
        let mut traversal = Combinations::new(&source, 2, false);
        traversal.advance();
        let mask = traversal.selection_mask().unwrap();
        assert_eq!(mask.len(), 4);
        assert_eq!(mask.iter_ones().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn overflowing_count_is_reported_as_unknown() {
        let source = vec![0u8; 200];
        let traversal = Combinations::new(&source, 100, false);
        assert_eq!(traversal.remaining(), None);
        assert_eq!(traversal.size_hint(), (usize::MAX, None));

        let first_two: Vec<Vec<u8>> = traversal.take(2).collect();
        assert_eq!(first_two.len(), 2);
        assert!(first_two.iter().all(|selection| selection.len() == 100));
    }

    #[test]
    fn count_near_the_end_of_a_huge_space_is_closed_form() {
        // C(68, 34) overflows u64 but only 2 selections remain here.
        let source = vec![0u8; 68];
        let mut positions: Vec<usize> = (34..68).collect();
        positions[0] = 33;
        let traversal = Combinations::resume(&source, positions);
        assert_eq!(traversal.remaining(), Some(2));
        assert_eq!(traversal.count(), 2);
    }

    #[test]
    fn fused_after_exhaustion() {
        let source = [1, 2];
        let mut traversal = Combinations::new(&source, 2, false);
        assert_eq!(traversal.next(), Some(vec![1, 2]));
        assert_eq!(traversal.next(), None);
        assert_eq!(traversal.next(), None);
    }
}
