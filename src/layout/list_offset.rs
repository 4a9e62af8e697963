// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **ListOffsetArray** - *Variable-length sublists over flat content*
//!
//! Sublist `i` is `content[offsets[i]..offsets[i + 1]]`. This is the ragged level of the
//! tree and the only node whose sort changes structure.
//!
//! ## Sorting
//! - **axis > 0**: each sublist is one segment of the content; the content is sorted
//!   within those segments one level down and the sublist boundaries are kept.
//! - **axis = 0**: ragged transpose. For each local position `k` the rows longer than `k`
//!   form a *contributing group*, in row order. Groups become the new sublists, and each
//!   group is sorted on its own, so argsort ranks are group-local.

use std::sync::Arc;

use tracing::trace;

use crate::errors::KernelError;
use crate::index::Index64;
use crate::kernels::sort::{SortConfig, SortMode};
use crate::layout::{Content, Sorted};
use crate::utils::{check_carry, check_range, offsets_to_segments, validate_offsets};

#[derive(Debug, Clone)]
pub struct ListOffsetArray {
    offsets: Index64,
    content: Arc<Content>,
}

impl ListOffsetArray {
    pub fn new(offsets: Index64, content: impl Into<Arc<Content>>) -> Result<Self, KernelError> {
        let content = content.into();
        validate_offsets(offsets.as_slice(), content.len())?;
        Ok(Self { offsets, content })
    }

    /// Builds offsets from sublist lengths, starting at zero.
    pub fn from_lengths(lengths: &[usize], content: impl Into<Arc<Content>>) -> Result<Self, KernelError> {
        let mut offsets = Vec::with_capacity(lengths.len() + 1);
        offsets.push(0usize);
        let mut total = 0usize;
        for &len in lengths {
            total += len;
            offsets.push(total);
        }
        Self::new(Index64::from_usize(&offsets), content)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn offsets(&self) -> &Index64 {
        &self.offsets
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    #[inline]
    fn start(&self, i: usize) -> usize {
        self.offsets.get(i) as usize
    }

    #[inline]
    fn stop(&self, i: usize) -> usize {
        self.offsets.get(i + 1) as usize
    }

    /// Content range spanned by all sublists.
    #[inline]
    fn global_range(&self) -> (usize, usize) {
        (self.start(0), self.offsets.get(self.len()) as usize)
    }

    /// Length of the longest sublist.
    pub fn max_count(&self) -> usize {
        (0..self.len())
            .map(|i| self.stop(i) - self.start(i))
            .max()
            .unwrap_or(0)
    }

    /// Gathers sublists into new zero-based offsets over carried content.
    pub fn carry(&self, carry: &[i64]) -> Result<ListOffsetArray, KernelError> {
        check_carry(carry, self.len(), "ListOffsetArray64")?;
        let mut offsets = Vec::with_capacity(carry.len() + 1);
        offsets.push(0usize);
        let mut nextcarry: Vec<i64> = Vec::new();
        for &c in carry {
            let (start, stop) = (self.start(c as usize), self.stop(c as usize));
            nextcarry.extend((start..stop).map(|p| p as i64));
            offsets.push(nextcarry.len());
        }
        let content = self.content.carry(&nextcarry)?;
        Ok(Self {
            offsets: Index64::from_usize(&offsets),
            content: Arc::new(content),
        })
    }

    /// Sublists `start..stop`; the content stays shared.
    pub fn range(&self, start: usize, stop: usize) -> Result<ListOffsetArray, KernelError> {
        check_range(start, stop, self.len(), "ListOffsetArray64")?;
        Ok(Self {
            offsets: self.offsets.slice(start, stop + 1),
            content: Arc::clone(&self.content),
        })
    }

    pub(crate) fn sort_next(
        &self,
        axis: usize,
        segments: &[usize],
        mode: SortMode,
        config: &SortConfig,
    ) -> Result<Sorted, KernelError> {
        if axis == 0 {
            self.sort_transposed(segments, mode, config)
        } else {
            self.sort_within(axis - 1, segments, mode, config)
        }
    }

    /// axis > 0: rows stay in place; content is sorted with each sublist as a segment.
    fn sort_within(
        &self,
        axis: usize,
        segments: &[usize],
        mode: SortMode,
        config: &SortConfig,
    ) -> Result<Sorted, KernelError> {
        let offsets = self.offsets.as_slice();
        let (globalstart, globalstop) = self.global_range();
        let trimmed = self.content.range(globalstart, globalstop)?;
        let rows = offsets_to_segments(offsets);
        let inner = trimmed.sort_next(axis, &rows, mode, config)?;

        let outoffsets = if globalstart == 0 && inner.segments == rows {
            self.offsets.clone()
        } else {
            Index64::from_usize(&inner.segments)
        };
        Ok(Sorted {
            content: Self {
                offsets: outoffsets,
                content: Arc::new(inner.content),
            }
            .into(),
            segments: segments.to_vec(),
        })
    }

    /// axis = 0: transpose each segment's rows into contributing groups, then sort every
    /// group independently one level down.
    fn sort_transposed(
        &self,
        segments: &[usize],
        mode: SortMode,
        config: &SortConfig,
    ) -> Result<Sorted, KernelError> {
        let (globalstart, globalstop) = self.global_range();
        let mut nextcarry: Vec<i64> = Vec::with_capacity(globalstop - globalstart);
        let mut groups: Vec<usize> = vec![0];
        let mut outsegments: Vec<usize> = vec![0];

        for w in segments.windows(2) {
            let mut active: Vec<usize> = (w[0]..w[1])
                .filter(|&row| self.stop(row) > self.start(row))
                .collect();
            let mut k = 0usize;
            while !active.is_empty() {
                nextcarry.extend(active.iter().map(|&row| (self.start(row) + k) as i64));
                groups.push(nextcarry.len());
                k += 1;
                active.retain(|&row| self.stop(row) - self.start(row) > k);
            }
            let last = outsegments[outsegments.len() - 1];
            outsegments.push(last + k);
        }
        trace!(
            rows = self.len(),
            segments = segments.len().saturating_sub(1),
            groups = groups.len() - 1,
            values = nextcarry.len(),
            "ragged transpose"
        );

        let nextcontent = self.content.carry(&nextcarry)?;
        let inner = nextcontent.sort_next(0, &groups, mode, config)?;
        Ok(Sorted {
            content: Self {
                offsets: Index64::from_usize(&inner.segments),
                content: Arc::new(inner.content),
            }
            .into(),
            segments: outsegments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::NumpyArray;

    fn ragged() -> ListOffsetArray {
        let content = NumpyArray::from_vec(vec![2.2f64, 1.1, 3.3, 4.4, 5.5, 5.5, -4.4, -5.5, -6.6]);
        ListOffsetArray::new(Index64::new(vec![0, 3, 3, 5, 6, 9]), content).unwrap()
    }

    fn parts(content: &Content) -> (Vec<i64>, Content) {
        match content {
            Content::ListOffset(x) => (x.offsets().to_i64_vec(), x.content().clone()),
            other => panic!("expected ListOffsetArray, got {}", other.classname()),
        }
    }

    fn ints(content: &Content) -> Vec<i64> {
        match content {
            Content::Numpy(x) => x.as_slice::<i64>().unwrap().to_vec(),
            other => panic!("expected NumpyArray, got {}", other.classname()),
        }
    }

    #[test]
    fn test_new_validates_offsets() {
        let content = NumpyArray::from_vec(vec![1i32, 2, 3]);
        assert!(ListOffsetArray::new(Index64::new(vec![0, 2, 1]), content.clone()).is_err());
        assert!(ListOffsetArray::new(Index64::new(vec![0, 4]), content.clone()).is_err());
        assert!(ListOffsetArray::new(Index64::new(vec![]), content).is_err());
    }

    #[test]
    fn test_argsort_axis1_per_row() {
        let out = ragged().argsort(1, true, false).unwrap();
        let (offsets, content) = parts(&out);
        assert_eq!(offsets, vec![0, 3, 3, 5, 6, 9]);
        assert_eq!(ints(&content), vec![1, 0, 2, 0, 1, 0, 2, 1, 0]);
    }

    #[test]
    fn test_argsort_axis1_reuses_offsets() {
        let list = ragged();
        match list.argsort(1, true, false).unwrap() {
            Content::ListOffset(out) => assert!(out.offsets().ptr_eq(list.offsets())),
            other => panic!("expected ListOffsetArray, got {}", other.classname()),
        }
    }

    #[test]
    fn test_argsort_axis0_transposes() {
        let out = ragged().argsort(0, true, false).unwrap();
        let (offsets, content) = parts(&out);
        assert_eq!(offsets, vec![0, 4, 7, 9]);
        assert_eq!(ints(&content), vec![3, 0, 1, 2, 2, 0, 1, 1, 0]);
    }

    #[test]
    fn test_sort_axis0_transposes_values() {
        let out = ragged().sort(0, true, false).unwrap();
        let (offsets, content) = parts(&out);
        assert_eq!(offsets, vec![0, 4, 7, 9]);
        match content {
            Content::Numpy(x) => assert_eq!(
                x.as_slice::<f64>().unwrap(),
                &[-4.4, 2.2, 4.4, 5.5, -5.5, 1.1, 5.5, -6.6, 3.3]
            ),
            other => panic!("expected NumpyArray, got {}", other.classname()),
        }
    }

    #[test]
    fn test_unaligned_offsets_are_rebased() {
        // Rows [[3, 1], [2]] sit at content[1..4].
        let content = NumpyArray::from_vec(vec![99i64, 3, 1, 2, 42]);
        let list = ListOffsetArray::new(Index64::new(vec![1, 3, 4]), content).unwrap();
        let out = list.sort(1, true, false).unwrap();
        let (offsets, content) = parts(&out);
        assert_eq!(offsets, vec![0, 2, 3]);
        assert_eq!(ints(&content), vec![1, 3, 2]);
    }

    #[test]
    fn test_carry_and_range() {
        let list = ragged();
        let picked = list.carry(&[4, 1, 0]).unwrap();
        assert_eq!(picked.offsets().to_i64_vec(), vec![0, 3, 3, 6]);
        let sliced = list.range(2, 4).unwrap();
        assert_eq!(sliced.offsets().to_i64_vec(), vec![3, 5, 6]);
        assert_eq!(sliced.max_count(), 2);
        assert!(list.carry(&[5]).is_err());
    }

    #[test]
    fn test_all_empty_rows_transpose_to_nothing() {
        let content = NumpyArray::from_vec(Vec::<f64>::new());
        let list = ListOffsetArray::new(Index64::new(vec![0, 0, 0]), content).unwrap();
        let out = list.argsort(0, true, false).unwrap();
        assert_eq!(out.len(), 0);
        let (offsets, _) = parts(&out);
        assert_eq!(offsets, vec![0]);
    }
}
