// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Primitive Types** - *Typed, shared value buffers for `NumpyArray`*
//!
//! `DType` names the primitive element types a regular buffer can hold and
//! `PrimitiveBuffer` is the closed set of shared typed buffers behind a `NumpyArray`.
//! Buffers are reference counted, so wrapping one in several layouts never copies it.

use std::fmt;
use std::sync::Arc;

use crate::errors::KernelError;
use crate::kernels::sort::{Lane, SortConfig, rank_lanes, sort_lanes};
use crate::traits::sort_key::SortKey;

/// Primitive element type of a regular buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
}

impl DType {
    /// Type name as rendered in layout descriptions, e.g. `"float64"`.
    pub fn name(&self) -> &'static str {
        match self {
            DType::Bool => "bool",
            DType::Int8 => "int8",
            DType::Int16 => "int16",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::UInt8 => "uint8",
            DType::UInt16 => "uint16",
            DType::UInt32 => "uint32",
            DType::UInt64 => "uint64",
            DType::Float32 => "float32",
            DType::Float64 => "float64",
        }
    }

    /// Size of one element in bytes.
    pub fn itemsize(&self) -> usize {
        match self {
            DType::Bool | DType::Int8 | DType::UInt8 => 1,
            DType::Int16 | DType::UInt16 => 2,
            DType::Int32 | DType::UInt32 | DType::Float32 => 4,
            DType::Int64 | DType::UInt64 | DType::Float64 => 8,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared typed buffer backing a `NumpyArray`.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveBuffer {
    Bool(Arc<Vec<bool>>),
    Int8(Arc<Vec<i8>>),
    Int16(Arc<Vec<i16>>),
    Int32(Arc<Vec<i32>>),
    Int64(Arc<Vec<i64>>),
    UInt8(Arc<Vec<u8>>),
    UInt16(Arc<Vec<u16>>),
    UInt32(Arc<Vec<u32>>),
    UInt64(Arc<Vec<u64>>),
    Float32(Arc<Vec<f32>>),
    Float64(Arc<Vec<f64>>),
}

/// Runs `$body` with `$v` bound to the typed `Arc<Vec<T>>` of whichever variant `$buf` holds.
macro_rules! with_buffer {
    ($buf:expr, $v:ident => $body:expr) => {
        match $buf {
            PrimitiveBuffer::Bool($v) => $body,
            PrimitiveBuffer::Int8($v) => $body,
            PrimitiveBuffer::Int16($v) => $body,
            PrimitiveBuffer::Int32($v) => $body,
            PrimitiveBuffer::Int64($v) => $body,
            PrimitiveBuffer::UInt8($v) => $body,
            PrimitiveBuffer::UInt16($v) => $body,
            PrimitiveBuffer::UInt32($v) => $body,
            PrimitiveBuffer::UInt64($v) => $body,
            PrimitiveBuffer::Float32($v) => $body,
            PrimitiveBuffer::Float64($v) => $body,
        }
    };
}

/// Element types that can live in a `PrimitiveBuffer`.
pub trait Primitive: SortKey + fmt::Debug + PartialEq {
    /// The dtype tag for this element type.
    const DTYPE: DType;

    /// Wraps an owned vector in the matching buffer variant.
    fn into_buffer(values: Vec<Self>) -> PrimitiveBuffer;

    /// Borrows the values if `buffer` holds this element type.
    fn from_buffer(buffer: &PrimitiveBuffer) -> Option<&[Self]>;
}

macro_rules! impl_primitive {
    ($ty:ty, $variant:ident) => {
        impl Primitive for $ty {
            const DTYPE: DType = DType::$variant;

            #[inline]
            fn into_buffer(values: Vec<Self>) -> PrimitiveBuffer {
                PrimitiveBuffer::$variant(Arc::new(values))
            }

            #[inline]
            fn from_buffer(buffer: &PrimitiveBuffer) -> Option<&[Self]> {
                match buffer {
                    PrimitiveBuffer::$variant(v) => Some(v.as_slice()),
                    _ => None,
                }
            }
        }
    };
}

impl_primitive!(bool, Bool);
impl_primitive!(i8, Int8);
impl_primitive!(i16, Int16);
impl_primitive!(i32, Int32);
impl_primitive!(i64, Int64);
impl_primitive!(u8, UInt8);
impl_primitive!(u16, UInt16);
impl_primitive!(u32, UInt32);
impl_primitive!(u64, UInt64);
impl_primitive!(f32, Float32);
impl_primitive!(f64, Float64);

impl<T: Primitive> From<Vec<T>> for PrimitiveBuffer {
    fn from(values: Vec<T>) -> Self {
        T::into_buffer(values)
    }
}

impl PrimitiveBuffer {
    /// Number of elements in the buffer.
    pub fn len(&self) -> usize {
        with_buffer!(self, v => v.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> DType {
        match self {
            PrimitiveBuffer::Bool(_) => DType::Bool,
            PrimitiveBuffer::Int8(_) => DType::Int8,
            PrimitiveBuffer::Int16(_) => DType::Int16,
            PrimitiveBuffer::Int32(_) => DType::Int32,
            PrimitiveBuffer::Int64(_) => DType::Int64,
            PrimitiveBuffer::UInt8(_) => DType::UInt8,
            PrimitiveBuffer::UInt16(_) => DType::UInt16,
            PrimitiveBuffer::UInt32(_) => DType::UInt32,
            PrimitiveBuffer::UInt64(_) => DType::UInt64,
            PrimitiveBuffer::Float32(_) => DType::Float32,
            PrimitiveBuffer::Float64(_) => DType::Float64,
        }
    }

    /// Borrows the buffer as a typed slice, failing if `T` is not the stored dtype.
    pub fn as_slice<T: Primitive>(&self) -> Result<&[T], KernelError> {
        T::from_buffer(self).ok_or_else(|| {
            KernelError::TypeMismatch(format!(
                "buffer holds {} but {} was requested",
                self.dtype(),
                T::DTYPE
            ))
        })
    }

    /// True when both buffers share the same allocation.
    pub fn ptr_eq(&self, other: &PrimitiveBuffer) -> bool {
        match (self, other) {
            (PrimitiveBuffer::Bool(a), PrimitiveBuffer::Bool(b)) => Arc::ptr_eq(a, b),
            (PrimitiveBuffer::Int8(a), PrimitiveBuffer::Int8(b)) => Arc::ptr_eq(a, b),
            (PrimitiveBuffer::Int16(a), PrimitiveBuffer::Int16(b)) => Arc::ptr_eq(a, b),
            (PrimitiveBuffer::Int32(a), PrimitiveBuffer::Int32(b)) => Arc::ptr_eq(a, b),
            (PrimitiveBuffer::Int64(a), PrimitiveBuffer::Int64(b)) => Arc::ptr_eq(a, b),
            (PrimitiveBuffer::UInt8(a), PrimitiveBuffer::UInt8(b)) => Arc::ptr_eq(a, b),
            (PrimitiveBuffer::UInt16(a), PrimitiveBuffer::UInt16(b)) => Arc::ptr_eq(a, b),
            (PrimitiveBuffer::UInt32(a), PrimitiveBuffer::UInt32(b)) => Arc::ptr_eq(a, b),
            (PrimitiveBuffer::UInt64(a), PrimitiveBuffer::UInt64(b)) => Arc::ptr_eq(a, b),
            (PrimitiveBuffer::Float32(a), PrimitiveBuffer::Float32(b)) => Arc::ptr_eq(a, b),
            (PrimitiveBuffer::Float64(a), PrimitiveBuffer::Float64(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Copies the elements at `positions` into a new buffer of the same dtype.
    ///
    /// Positions must already be bounds checked by the caller.
    pub fn gather(&self, positions: &[usize]) -> PrimitiveBuffer {
        with_buffer!(self, v => {
            let out: Vec<_> = positions.iter().map(|&p| v[p]).collect();
            PrimitiveBuffer::from(out)
        })
    }

    /// Reorders every lane of the window `start..start + len` by its sort permutation.
    ///
    /// Lane positions are relative to the window; the result holds only the window.
    pub fn sort_lanes(&self, start: usize, len: usize, lanes: &[Lane], config: &SortConfig) -> PrimitiveBuffer {
        with_buffer!(self, v => PrimitiveBuffer::from(sort_lanes(&v[start..start + len], lanes, config)))
    }

    /// Writes each lane's sort permutation in place of its values, as `int64`.
    pub fn rank_lanes(&self, start: usize, len: usize, lanes: &[Lane], config: &SortConfig) -> PrimitiveBuffer {
        with_buffer!(self, v => PrimitiveBuffer::from(rank_lanes(&v[start..start + len], lanes, config)))
    }
}
