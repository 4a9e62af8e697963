// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **NumpyArray** - *Regular n-dimensional leaf*
//!
//! A row-major typed buffer with an explicit shape. Every dimension is regular, so each one
//! counts as one level of list depth. Sorting along a dimension is a batched 1-D sort over
//! that dimension with every other dimension held as a batch position.
//!
//! Rank-2 arrays at axis 0 follow the list-of-rows reading instead: each column becomes
//! its own sublist, so the result is `(d1, d0)` and matches the same data stored as a
//! `ListOffsetArray` of equal-length rows.
//!
//! Views share their buffer. `range` only moves the window, so slicing a sublist range out
//! of a large leaf never copies it.

use crate::config::MAX_NDIM;
use crate::dtype::{DType, Primitive, PrimitiveBuffer};
use crate::errors::KernelError;
use crate::index::Index64;
use crate::kernels::sort::{Lane, SortConfig, SortMode};
use crate::layout::{Content, ListOffsetArray, Sorted};
use crate::utils::{check_carry, check_range, shape_product};

#[derive(Debug, Clone)]
pub struct NumpyArray {
    data: PrimitiveBuffer,
    offset: usize,
    shape: Vec<usize>,
}

impl NumpyArray {
    /// Wraps `data` with `shape`. The shape needs 1 to `MAX_NDIM` dimensions whose product
    /// equals the buffer length.
    pub fn new(data: PrimitiveBuffer, shape: Vec<usize>) -> Result<Self, KernelError> {
        if shape.is_empty() || shape.len() > MAX_NDIM {
            return Err(KernelError::ShapeMismatch(format!(
                "NumpyArray needs between 1 and {} dimensions, got {}",
                MAX_NDIM,
                shape.len()
            )));
        }
        let expected = shape_product(&shape);
        if expected != data.len() {
            return Err(KernelError::ShapeMismatch(format!(
                "shape {:?} holds {} elements but the {} buffer has {}",
                shape,
                expected,
                data.dtype(),
                data.len()
            )));
        }
        Ok(Self {
            data,
            offset: 0,
            shape,
        })
    }

    /// One-dimensional array over `values`.
    pub fn from_vec<T: Primitive>(values: Vec<T>) -> Self {
        let shape = vec![values.len()];
        Self {
            data: PrimitiveBuffer::from(values),
            offset: 0,
            shape,
        }
    }

    pub fn from_vec_shape<T: Primitive>(values: Vec<T>, shape: Vec<usize>) -> Result<Self, KernelError> {
        Self::new(PrimitiveBuffer::from(values), shape)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shape[0]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    /// Backing buffer. It may be shared with other views and extend past this array;
    /// the array's values start at [`NumpyArray::offset`].
    pub fn data(&self) -> &PrimitiveBuffer {
        &self.data
    }

    /// Position of the first value in the backing buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of values, the product of the shape.
    #[inline]
    pub fn size(&self) -> usize {
        shape_product(&self.shape)
    }

    /// Flat row-major view of the values.
    pub fn as_slice<T: Primitive>(&self) -> Result<&[T], KernelError> {
        let all = self.data.as_slice::<T>()?;
        Ok(&all[self.offset..self.offset + self.size()])
    }

    /// Elements per outer entry.
    #[inline]
    fn inner_size(&self) -> usize {
        shape_product(&self.shape[1..])
    }

    pub fn carry(&self, carry: &[i64]) -> Result<NumpyArray, KernelError> {
        check_carry(carry, self.len(), "NumpyArray")?;
        let inner = self.inner_size();
        let positions: Vec<usize> = carry
            .iter()
            .flat_map(|&c| {
                let start = self.offset + c as usize * inner;
                start..start + inner
            })
            .collect();
        let mut shape = self.shape.clone();
        shape[0] = carry.len();
        Ok(Self {
            data: self.data.gather(&positions),
            offset: 0,
            shape,
        })
    }

    /// Outer entries `start..stop`; the buffer stays shared.
    pub fn range(&self, start: usize, stop: usize) -> Result<NumpyArray, KernelError> {
        check_range(start, stop, self.len(), "NumpyArray")?;
        let mut shape = self.shape.clone();
        shape[0] = stop - start;
        Ok(Self {
            data: self.data.clone(),
            offset: self.offset + start * self.inner_size(),
            shape,
        })
    }

    /// Lanes of a batched 1-D sort along `axis`. Axis 0 is additionally split at `segments`.
    fn lanes(&self, axis: usize, segments: &[usize]) -> Vec<Lane> {
        let inner = shape_product(&self.shape[axis + 1..]);
        if axis == 0 {
            segments
                .windows(2)
                .flat_map(|w| {
                    let (lo, hi) = (w[0], w[1]);
                    (0..inner).map(move |j| Lane {
                        start: lo * inner + j,
                        len: hi - lo,
                        stride: inner,
                    })
                })
                .collect()
        } else {
            let n = self.shape[axis];
            let outer = shape_product(&self.shape[..axis]);
            (0..outer)
                .flat_map(|o| {
                    (0..inner).map(move |j| Lane {
                        start: o * n * inner + j,
                        len: n,
                        stride: inner,
                    })
                })
                .collect()
        }
    }

    pub(crate) fn sort_next(
        &self,
        axis: usize,
        segments: &[usize],
        mode: SortMode,
        config: &SortConfig,
    ) -> Result<Sorted, KernelError> {
        if axis >= self.ndim() {
            return Err(KernelError::AxisOutOfRange {
                axis: axis as i64,
                depth: self.ndim(),
            });
        }
        if axis == 0 && self.ndim() == 2 {
            return self.sort_columns(segments, mode, config);
        }
        let lanes = self.lanes(axis, segments);
        let data = match mode {
            SortMode::Sort => self.data.sort_lanes(self.offset, self.size(), &lanes, config),
            SortMode::Argsort => self.data.rank_lanes(self.offset, self.size(), &lanes, config),
        };
        Ok(Sorted {
            content: Self {
                data,
                offset: 0,
                shape: self.shape.clone(),
            }
            .into(),
            segments: segments.to_vec(),
        })
    }

    /// Rank-2 axis 0. Within each segment of rows, column `j` becomes sublist `j` and is
    /// sorted on its own. One segment stays regular as `(d1, rows)`; several segments
    /// give a `ListOffsetArray` of columns, segmented by column count per segment.
    fn sort_columns(
        &self,
        segments: &[usize],
        mode: SortMode,
        config: &SortConfig,
    ) -> Result<Sorted, KernelError> {
        let width = self.shape[1];
        let mut positions: Vec<usize> = Vec::with_capacity(self.size());
        let mut groups: Vec<usize> = vec![0];
        let mut outsegments: Vec<usize> = vec![0];
        for w in segments.windows(2) {
            let (lo, hi) = (w[0], w[1]);
            let columns = if hi > lo { width } else { 0 };
            for j in 0..columns {
                positions.extend((lo..hi).map(|row| self.offset + row * width + j));
                groups.push(positions.len());
            }
            let last = outsegments[outsegments.len() - 1];
            outsegments.push(last + columns);
        }

        let gathered = self.data.gather(&positions);
        let lanes: Vec<Lane> = groups
            .windows(2)
            .map(|g| Lane {
                start: g[0],
                len: g[1] - g[0],
                stride: 1,
            })
            .collect();
        let data = match mode {
            SortMode::Sort => gathered.sort_lanes(0, positions.len(), &lanes, config),
            SortMode::Argsort => gathered.rank_lanes(0, positions.len(), &lanes, config),
        };

        let content: Content = if let &[lo, hi] = segments {
            Self {
                data,
                offset: 0,
                shape: vec![outsegments[1], hi - lo],
            }
            .into()
        } else {
            let leaf = Self {
                data,
                offset: 0,
                shape: vec![positions.len()],
            };
            ListOffsetArray::new(Index64::from_usize(&groups), leaf)?.into()
        };
        Ok(Sorted {
            content,
            segments: outsegments,
        })
    }
}
