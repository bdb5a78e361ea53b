//! Combination engine
//!
//! A [`Combinator`] binds a source and a selection size and hands out
//! independent [`Combinations`] traversals. Building one is free; nothing is
//! read from the source until a traversal is created.
//!
//! Ownership follows the argument: `combinations(&v, 2)` borrows `v` for the
//! engine's lifetime, `combinations(vec![..], 2)` and `combinations([..], 2)`
//! move the sequence into the engine.

mod traversal;

pub use traversal::Combinations;

use tracing::debug;

use crate::source::Source;
use crate::util::binomial;
use crate::CombinationError;

/// How a selection size of zero is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZeroSizePolicy {
    /// No selections at all. This is the default.
    #[default]
    Exhausted,

    /// Exactly one empty selection, the usual combinatorics convention.
    SingleEmpty,
}

/// Factory for lazy combination traversals over one source.
///
/// Immutable once built. Create with [`combinations`] or
/// [`IntoCombinations::combinations`].
#[derive(Debug, Clone)]
pub struct Combinator<S> {
    source: S,
    size: usize,
    zero_size_policy: ZeroSizePolicy,
}

/// Build an engine yielding every length-`size` selection of `source`.
///
/// Sizes larger than the source, and a size of zero under the default
/// [`ZeroSizePolicy`], are accepted and simply yield no selections.
///
/// ```
/// use itercomb::combinations;
///
/// let digits = vec![1, 2, 3, 4];
/// let pairs: Vec<Vec<i32>> = combinations(&digits, 2).into_iter().collect();
/// assert_eq!(pairs.len(), 6);
/// assert_eq!(pairs[0], vec![1, 2]);
/// assert_eq!(pairs[5], vec![3, 4]);
/// ```
pub fn combinations<S: Source>(source: S, size: usize) -> Combinator<S> {
    Combinator {
        source,
        size,
        zero_size_policy: ZeroSizePolicy::default(),
    }
}

/// Method-call form of [`combinations`] for any [`Source`].
pub trait IntoCombinations: Source + Sized {
    /// Engine over `self` with selection size `size`.
    fn combinations(self, size: usize) -> Combinator<Self> {
        combinations(self, size)
    }
}

impl<S: Source> IntoCombinations for S {}

impl<S: Source> Combinator<S> {
    /// Replace the treatment of a zero selection size.
    pub fn with_zero_size_policy(mut self, policy: ZeroSizePolicy) -> Self {
        self.zero_size_policy = policy;
        self
    }

    /// The sequence selections are drawn from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Selection size `r`.
    pub fn selection_size(&self) -> usize {
        self.size
    }

    /// Number of elements in the source.
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Active zero-size policy.
    pub fn zero_size_policy(&self) -> ZeroSizePolicy {
        self.zero_size_policy
    }

    fn allow_empty(&self) -> bool {
        self.zero_size_policy == ZeroSizePolicy::SingleEmpty
    }

    /// Fresh traversal starting at the first selection.
    ///
    /// Every call is independent of earlier ones.
    pub fn iter(&self) -> Combinations<&S> {
        let traversal = Combinations::new(&self.source, self.size, self.allow_empty());
        if traversal.is_exhausted() {
            debug!(
                size = self.size,
                len = self.source.len(),
                "combination traversal starts exhausted"
            );
        }
        traversal
    }

    /// Traversal resuming at `positions`, typically one saved from
    /// [`Combinations::positions`].
    ///
    /// The vector must have exactly `r` entries, be strictly increasing and
    /// lie inside the source.
    pub fn traverse_from(&self, positions: &[usize]) -> Result<Combinations<&S>, CombinationError> {
        if let Err(err) = self.check_positions(positions) {
            debug!(?positions, %err, "rejected resume positions");
            return Err(err);
        }
        Ok(Combinations::resume(&self.source, positions.to_vec()))
    }

    fn check_positions(&self, positions: &[usize]) -> Result<(), CombinationError> {
        if positions.len() != self.size {
            return Err(CombinationError::invalid_positions(format!(
                "expected {} positions, got {}",
                self.size,
                positions.len()
            )));
        }
        if self.size == 0 && !self.allow_empty() {
            return Err(CombinationError::invalid_positions(
                "zero-size selections are disabled",
            ));
        }
        if let Some(pair) = positions.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(CombinationError::invalid_positions(format!(
                "positions not strictly increasing: {} then {}",
                pair[0], pair[1]
            )));
        }
        let len = self.source.len();
        if let Some(&last) = positions.last() {
            if last >= len {
                return Err(CombinationError::invalid_positions(format!(
                    "position {last} out of bounds for source of length {len}"
                )));
            }
        }
        Ok(())
    }

    /// Total number of selections a traversal yields, or `None` when it does
    /// not fit in `usize`.
    pub fn count(&self) -> Option<usize> {
        if self.size == 0 {
            return Some(usize::from(self.allow_empty()));
        }
        binomial(self.source.len(), self.size)
    }

    /// [`count`](Self::count) with overflow reported as an error.
    pub fn try_count(&self) -> Result<usize, CombinationError> {
        self.count().ok_or(CombinationError::CountOverflow {
            len: self.source.len(),
            size: self.size,
        })
    }
}

impl<'a, S: Source> IntoIterator for &'a Combinator<S>
where
    S::Item: Clone,
{
    type Item = Vec<S::Item>;
    type IntoIter = Combinations<&'a S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Source> IntoIterator for Combinator<S>
where
    S::Item: Clone,
{
    type Item = Vec<S::Item>;
    type IntoIter = Combinations<S>;

    fn into_iter(self) -> Self::IntoIter {
        let allow_empty = self.allow_empty();
        Combinations::new(self.source, self.size, allow_empty)
    }
}
