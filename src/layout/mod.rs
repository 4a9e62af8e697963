// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Layout Module** - *Nested, ragged array content tree*
//!
//! A nested array is a tree of `Content` nodes. Leaves hold data (`NumpyArray`) or
//! nothing (`EmptyArray`); inner nodes add one level of ragged nesting (`ListOffsetArray`),
//! redirect through an index (`IndexedArray`), or zip equal-length fields
//! (`RecordArray`). Nodes are immutable views; children and buffers are shared via `Arc`.
//!
//! ## Sorting
//! `sort`/`argsort` validate the axis once at the node they are called on, then recurse with
//! the axis decremented per level consumed. During recursion a node is sorted within
//! *segments*: contiguous ranges of its outer dimension that must be ordered independently
//! of each other (the sublists of the parent list, or the contributing groups of a ragged
//! transpose). Each node reports back how its output is segmented so its parent can rebuild
//! offsets around it.

use std::sync::Arc;

use tracing::debug;

use crate::errors::KernelError;
use crate::kernels::sort::{SortConfig, SortMode};

pub mod empty;
pub mod indexed;
pub mod list_offset;
pub mod numpy;
pub mod record;

pub use empty::EmptyArray;
pub use indexed::IndexedArray;
pub use list_offset::ListOffsetArray;
pub use numpy::NumpyArray;
pub use record::RecordArray;

/// A node of the nested array tree.
#[derive(Debug, Clone)]
pub enum Content {
    Empty(EmptyArray),
    Numpy(NumpyArray),
    Indexed32(IndexedArray<i32>),
    Indexed64(IndexedArray<i64>),
    ListOffset(ListOffsetArray),
    Record(RecordArray),
}

/// Output of one recursion step: the sorted node and how its outer dimension is segmented.
#[derive(Debug, Clone)]
pub(crate) struct Sorted {
    pub content: Content,
    pub segments: Vec<usize>,
}

impl Content {
    pub fn len(&self) -> usize {
        match self {
            Content::Empty(_) => 0,
            Content::Numpy(x) => x.len(),
            Content::Indexed32(x) => x.len(),
            Content::Indexed64(x) => x.len(),
            Content::ListOffset(x) => x.len(),
            Content::Record(x) => x.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn classname(&self) -> &'static str {
        match self {
            Content::Empty(_) => "EmptyArray",
            Content::Numpy(_) => "NumpyArray",
            Content::Indexed32(_) => "IndexedArray32",
            Content::Indexed64(_) => "IndexedArray64",
            Content::ListOffset(_) => "ListOffsetArray64",
            Content::Record(_) => "RecordArray",
        }
    }

    /// Fewest list levels reachable through any branch.
    pub fn min_depth(&self) -> usize {
        match self {
            Content::Empty(_) => 1,
            Content::Numpy(x) => x.ndim(),
            Content::Indexed32(x) => x.content().min_depth(),
            Content::Indexed64(x) => x.content().min_depth(),
            Content::ListOffset(x) => 1 + x.content().min_depth(),
            Content::Record(x) => x.min_depth(),
        }
    }

    /// Most list levels reachable through any branch.
    pub fn max_depth(&self) -> usize {
        match self {
            Content::Empty(_) => 1,
            Content::Numpy(x) => x.ndim(),
            Content::Indexed32(x) => x.content().max_depth(),
            Content::Indexed64(x) => x.content().max_depth(),
            Content::ListOffset(x) => 1 + x.content().max_depth(),
            Content::Record(x) => x.max_depth(),
        }
    }

    /// List levels before the first record, or 1 when a record sits at this level.
    pub fn purelist_depth(&self) -> usize {
        match self {
            Content::Empty(_) => 1,
            Content::Numpy(x) => x.ndim(),
            Content::Indexed32(x) => x.content().purelist_depth(),
            Content::Indexed64(x) => x.content().purelist_depth(),
            Content::ListOffset(x) => 1 + x.content().purelist_depth(),
            Content::Record(_) => 1,
        }
    }

    /// `(branches, depth)`: whether record fields reach different depths, and the minimum depth.
    pub fn branch_depth(&self) -> (bool, usize) {
        let min = self.min_depth();
        (min != self.max_depth(), min)
    }

    /// Gathers the outer entries at `carry` into a new content.
    pub fn carry(&self, carry: &[i64]) -> Result<Content, KernelError> {
        Ok(match self {
            Content::Empty(x) => x.carry(carry)?.into(),
            Content::Numpy(x) => x.carry(carry)?.into(),
            Content::Indexed32(x) => x.carry(carry)?.into(),
            Content::Indexed64(x) => x.carry(carry)?.into(),
            Content::ListOffset(x) => x.carry(carry)?.into(),
            Content::Record(x) => x.carry(carry)?.into(),
        })
    }

    /// Outer entries `start..stop`. The full range returns a cheap clone.
    pub fn range(&self, start: usize, stop: usize) -> Result<Content, KernelError> {
        if start == 0 && stop == self.len() {
            return Ok(self.clone());
        }
        Ok(match self {
            Content::Empty(x) => x.range(start, stop)?.into(),
            Content::Numpy(x) => x.range(start, stop)?.into(),
            Content::Indexed32(x) => x.range(start, stop)?.into(),
            Content::Indexed64(x) => x.range(start, stop)?.into(),
            Content::ListOffset(x) => x.range(start, stop)?.into(),
            Content::Record(x) => x.range(start, stop)?.into(),
        })
    }

    /// Sorts values along `axis` (negative counts from the innermost level).
    pub fn sort(&self, axis: i64, ascending: bool, stable: bool) -> Result<Content, KernelError> {
        let config = SortConfig::new().ascending(ascending).stable(stable);
        self.sort_with(axis, &config)
    }

    /// Positions that would sort values along `axis`, as `int64` leaves.
    pub fn argsort(&self, axis: i64, ascending: bool, stable: bool) -> Result<Content, KernelError> {
        let config = SortConfig::new().ascending(ascending).stable(stable);
        self.argsort_with(axis, &config)
    }

    pub fn sort_with(&self, axis: i64, config: &SortConfig) -> Result<Content, KernelError> {
        self.sort_entry(axis, SortMode::Sort, config)
    }

    pub fn argsort_with(&self, axis: i64, config: &SortConfig) -> Result<Content, KernelError> {
        self.sort_entry(axis, SortMode::Argsort, config)
    }

    fn sort_entry(
        &self,
        axis: i64,
        mode: SortMode,
        config: &SortConfig,
    ) -> Result<Content, KernelError> {
        let posaxis = self.resolve_axis(axis)?;
        debug!(
            classname = self.classname(),
            axis,
            posaxis,
            mode = ?mode,
            ascending = config.ascending,
            stable = config.stable,
            length = self.len(),
            "sort"
        );
        let segments = [0, self.len()];
        Ok(self.sort_next(posaxis, &segments, mode, config)?.content)
    }

    /// Maps a caller axis onto `0..depth`, checking it reaches every branch.
    ///
    /// Range errors quote `max_depth`, including on a branching record where the axis is
    /// below `max_depth` but past the shallowest field.
    pub fn resolve_axis(&self, axis: i64) -> Result<usize, KernelError> {
        let (min, max) = (self.min_depth(), self.max_depth());
        let posaxis = if axis >= 0 {
            axis
        } else if min == max {
            max as i64 + axis
        } else {
            return Err(KernelError::InvalidArguments(format!(
                "negative axis={} is ambiguous for a structure whose depth ranges from {} to {}",
                axis, min, max
            )));
        };
        if posaxis < 0 || posaxis >= max as i64 {
            return Err(KernelError::AxisOutOfRange { axis, depth: max });
        }
        if posaxis >= min as i64 {
            return Err(KernelError::AxisOutOfRange { axis, depth: max });
        }
        Ok(posaxis as usize)
    }

    /// One recursion step: sort along `axis` (relative to this node) within each segment
    /// of the outer dimension. `segments` are boundaries over `0..len`.
    pub(crate) fn sort_next(
        &self,
        axis: usize,
        segments: &[usize],
        mode: SortMode,
        config: &SortConfig,
    ) -> Result<Sorted, KernelError> {
        match self {
            Content::Empty(x) => x.sort_next(axis, segments),
            Content::Numpy(x) => x.sort_next(axis, segments, mode, config),
            Content::Indexed32(x) => x.project()?.sort_next(axis, segments, mode, config),
            Content::Indexed64(x) => x.project()?.sort_next(axis, segments, mode, config),
            Content::ListOffset(x) => x.sort_next(axis, segments, mode, config),
            Content::Record(x) => x.sort_next(axis, segments, mode, config),
        }
    }
}

macro_rules! impl_content_from {
    ($ty:ty, $variant:ident) => {
        impl From<$ty> for Content {
            fn from(x: $ty) -> Self {
                Content::$variant(x)
            }
        }

        impl From<$ty> for Arc<Content> {
            fn from(x: $ty) -> Self {
                Arc::new(Content::$variant(x))
            }
        }
    };
}

impl_content_from!(EmptyArray, Empty);
impl_content_from!(NumpyArray, Numpy);
impl_content_from!(IndexedArray<i32>, Indexed32);
impl_content_from!(IndexedArray<i64>, Indexed64);
impl_content_from!(ListOffsetArray, ListOffset);
impl_content_from!(RecordArray, Record);

/// Per-variant `sort`/`argsort` entry points that validate against the node itself.
macro_rules! impl_sort_entry {
    ($ty:ty) => {
        impl $ty {
            /// Sorts values along `axis`; see [`Content::sort`].
            pub fn sort(&self, axis: i64, ascending: bool, stable: bool) -> Result<Content, KernelError> {
                Content::from(self.clone()).sort(axis, ascending, stable)
            }

            /// Sort permutation along `axis`; see [`Content::argsort`].
            pub fn argsort(&self, axis: i64, ascending: bool, stable: bool) -> Result<Content, KernelError> {
                Content::from(self.clone()).argsort(axis, ascending, stable)
            }
        }
    };
}

impl_sort_entry!(EmptyArray);
impl_sort_entry!(NumpyArray);
impl_sort_entry!(IndexedArray<i32>);
impl_sort_entry!(IndexedArray<i64>);
impl_sort_entry!(ListOffsetArray);
impl_sort_entry!(RecordArray);
