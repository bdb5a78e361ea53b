//! Read-only sequences that combinations can be drawn from
//!
//! A source only needs a length and positional reads. Nothing is copied out
//! of it until a selection snapshot is requested.

use std::collections::VecDeque;
use std::sync::Arc;

/// Ordered, index-addressable sequence of elements.
///
/// Implemented for the standard contiguous containers and for shared
/// references to any source, so an engine can either borrow a caller-owned
/// sequence or take ownership of one.
pub trait Source {
    /// Element type stored in the sequence.
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Whether the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Source for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> Source for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Source for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> Source for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<T> Source for Box<[T]> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> Source for Arc<[T]> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<S: Source + ?Sized> Source for &S {
    type Item = S::Item;

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&S::Item> {
        (**self).get(index)
    }
}
