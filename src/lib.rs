//! # Lazy order-preserving combinations
//!
//! This library enumerates every length-`r` sub-selection of an ordered
//! sequence, one selection at a time, without materializing the full set.
//!
//! ## Core Algorithm
//!
//! 1. **Position vector**: a traversal tracks `r` strictly increasing source indices
//! 2. **Successor step**: bump the rightmost index that still leaves room, pack the rest behind it
//! 3. **Snapshots**: each selection is cloned out of the source on demand
//! 4. **Exhaustion flag**: a single terminal flag gates continuation
//!
//! Selections come out in lexicographic order by position, so duplicate
//! values in the source produce value-identical but positionally distinct
//! selections.
//!
//! ## Usage Example
//!
//! ```
//! use itercomb::combinations;
//!
//! let letters = vec!['a', 'b', 'c'];
//! let engine = combinations(&letters, 2);
//!
//! let mut traversal = engine.iter();
//! while let Some(selection) = traversal.current() {
//!     println!("{selection:?}");
//!     traversal.advance();
//! }
//!
//! assert_eq!(engine.iter().count(), 3);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod source;       // Readable sequences
pub mod combinations; // Engine and traversal
pub mod util;         // Binomial arithmetic

// Re-exports for convenience
pub use combinations::{combinations, Combinations, Combinator, IntoCombinations, ZeroSizePolicy};
pub use source::Source;

use thiserror::Error;

/// Settings for enumerating and printing selections
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumerationConfig {
    /// Selection size `r`
    pub size: usize,

    /// Stop after this many selections (`None` = all of them)
    pub limit: Option<usize>,

    /// Print source positions alongside each selection
    pub show_positions: bool,

    /// Joins the elements of a printed selection
    pub separator: String,

    /// Treatment of `size == 0`
    pub zero_size_policy: ZeroSizePolicy,
}

impl EnumerationConfig {
    /// Configuration for selections of `size` elements, everything else default.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            limit: None,
            show_positions: false,
            separator: " ".to_string(),
            zero_size_policy: ZeroSizePolicy::default(),
        }
    }

    /// Cap the number of selections produced.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Toggle printing of source positions.
    pub fn with_positions(mut self, enabled: bool) -> Self {
        self.show_positions = enabled;
        self
    }

    /// Set the element separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Set the zero-size policy.
    pub fn with_zero_size_policy(mut self, policy: ZeroSizePolicy) -> Self {
        self.zero_size_policy = policy;
        self
    }

    /// Reject settings that cannot produce meaningful output.
    pub fn validate(&self) -> Result<(), CombinationError> {
        if self.limit == Some(0) {
            return Err(CombinationError::InvalidConfiguration(
                "limit must be > 0".to_string(),
            ));
        }
        if self.separator.is_empty() {
            return Err(CombinationError::InvalidConfiguration(
                "separator must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Engine over `source` using this configuration's size and policy.
    pub fn engine<S: Source>(&self, source: S) -> Combinator<S> {
        combinations(source, self.size).with_zero_size_policy(self.zero_size_policy)
    }
}

/// Errors reported by the checked entry points
#[derive(Error, Debug)]
pub enum CombinationError {
    /// A selection was requested from an exhausted traversal
    #[error("traversal is exhausted")]
    Exhausted,

    /// A resume position vector was rejected
    #[error("invalid position vector: {reason}")]
    InvalidPositions {
        /// What was wrong with the vector
        reason: String,
    },

    /// Selection count does not fit in `usize`
    #[error("selection count overflows usize: C({len}, {size})")]
    CountOverflow {
        /// Source length
        len: usize,
        /// Selection size
        size: usize,
    },

    /// Enumeration settings failed validation
    #[error("invalid enumeration configuration: {0}")]
    InvalidConfiguration(String),
}

impl CombinationError {
    /// Helper for constructing position-vector errors.
    pub fn invalid_positions(reason: impl Into<String>) -> Self {
        CombinationError::InvalidPositions {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EnumerationConfig::new(2);
        assert!(config.validate().is_ok());
        assert_eq!(config.separator, " ");
        assert_eq!(config.limit, None);
    }

    #[test]
    fn zero_limit_and_empty_separator_are_rejected() {
        let config = EnumerationConfig::new(2).with_limit(Some(0));
        assert!(matches!(
            config.validate(),
            Err(CombinationError::InvalidConfiguration(_))
        ));

        let config = EnumerationConfig::new(2).with_separator("");
        assert!(matches!(
            config.validate(),
            Err(CombinationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn config_engine_carries_policy() {
        let config =
            EnumerationConfig::new(0).with_zero_size_policy(ZeroSizePolicy::SingleEmpty);
        let engine = config.engine([1, 2]);
        assert_eq!(engine.count(), Some(1));
        assert_eq!(engine.iter().next(), Some(vec![]));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = CombinationError::CountOverflow { len: 200, size: 100 };
        assert_eq!(err.to_string(), "selection count overflows usize: C(200, 100)");
        let err = CombinationError::invalid_positions("bad");
        assert_eq!(err.to_string(), "invalid position vector: bad");
    }
}
