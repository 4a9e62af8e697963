// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Index Buffers** - *Shared integer sequences for redirection and offsets*
//!
//! `Index<I>` is the integer buffer behind `IndexedArray` (32- or 64-bit) and
//! `ListOffsetArray` offsets (64-bit). Clones share the allocation.

use std::fmt::Debug;
use std::sync::Arc;

use num_traits::{NumCast, PrimInt};

use crate::errors::KernelError;

/// Signed integer types usable as index or offset elements.
pub trait IndexInteger: PrimInt + NumCast + Into<i64> + Send + Sync + Debug + 'static {
    /// Short type name used in class names and messages.
    const NAME: &'static str;
}

impl IndexInteger for i32 {
    const NAME: &'static str = "32";
}

impl IndexInteger for i64 {
    const NAME: &'static str = "64";
}

/// Shared, immutable integer buffer.
///
/// An index is a window `start..start + len` over a reference-counted allocation, so
/// slicing never copies.
#[derive(Debug, Clone)]
pub struct Index<I: IndexInteger> {
    data: Arc<Vec<I>>,
    start: usize,
    len: usize,
}

pub type Index32 = Index<i32>;
pub type Index64 = Index<i64>;

impl<I: IndexInteger> Index<I> {
    pub fn new(data: Vec<I>) -> Self {
        let len = data.len();
        Self {
            data: Arc::new(data),
            start: 0,
            len,
        }
    }

    pub fn from_slice(data: &[I]) -> Self {
        Self::new(data.to_vec())
    }

    /// Builds an index from unsigned positions, failing if a value does not fit in `I`.
    pub fn try_from_usize(values: &[usize]) -> Result<Self, KernelError> {
        let data = values
            .iter()
            .map(|&v| {
                <I as NumCast>::from(v).ok_or_else(|| {
                    KernelError::InvalidIndex(format!(
                        "value {} does not fit in a {}-bit index",
                        v,
                        I::NAME
                    ))
                })
            })
            .collect::<Result<Vec<I>, KernelError>>()?;
        Ok(Self::new(data))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[I] {
        &self.data[self.start..self.start + self.len]
    }

    /// Value at `i` widened to `i64`.
    #[inline]
    pub fn get(&self, i: usize) -> i64 {
        self.as_slice()[i].into()
    }

    /// Copies the whole index widened to `i64`.
    pub fn to_i64_vec(&self) -> Vec<i64> {
        self.as_slice().iter().map(|&v| Into::<i64>::into(v)).collect()
    }

    /// Entries `start..stop`, sharing the allocation.
    pub fn slice(&self, start: usize, stop: usize) -> Self {
        debug_assert!(start <= stop && stop <= self.len);
        Self {
            data: Arc::clone(&self.data),
            start: self.start + start,
            len: stop - start,
        }
    }

    /// True when both indexes view the same window of the same allocation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data) && self.start == other.start && self.len == other.len
    }
}

impl<I: IndexInteger> PartialEq for Index<I> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Index64 {
    /// Builds 64-bit offsets from unsigned positions.
    pub fn from_usize(values: &[usize]) -> Self {
        Self::new(values.iter().map(|&v| v as i64).collect())
    }
}

impl<I: IndexInteger> From<Vec<I>> for Index<I> {
    fn from(data: Vec<I>) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widening_access() {
        let idx = Index32::new(vec![3, -1, 7]);
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.get(2), 7i64);
        assert_eq!(idx.to_i64_vec(), vec![3, -1, 7]);
    }

    #[test]
    fn test_try_from_usize_overflow() {
        let ok = Index32::try_from_usize(&[0, 5]).unwrap();
        assert_eq!(ok.as_slice(), &[0, 5]);
        let err = Index32::try_from_usize(&[usize::MAX]).unwrap_err();
        assert!(matches!(err, KernelError::InvalidIndex(_)));
    }

    #[test]
    fn test_clone_shares_allocation() {
        let a = Index64::from_usize(&[0, 2, 4]);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert!(a.ptr_eq(&a.slice(0, 3)));
    }

    #[test]
    fn test_slice_is_a_shared_window() {
        let a = Index64::from_usize(&[0, 2, 4, 7]);
        let s = a.slice(1, 3);
        assert_eq!(s.as_slice(), &[2, 4]);
        assert_eq!(s.get(1), 4);
        assert!(Arc::ptr_eq(&a.data, &s.data));
        assert!(!a.ptr_eq(&s));
        assert_eq!(s.slice(1, 2).to_i64_vec(), vec![4]);
        assert_eq!(s, Index64::new(vec![2, 4]));
    }
}
