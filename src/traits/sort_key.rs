// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **SortKey trait** - *Total ordering over primitive buffer values*
//!
//! Every primitive value stored in a `NumpyArray` buffer orders through this trait.
//! Integers and booleans use their natural order; floats use the IEEE 754 total order so
//! NaN and signed zero sort deterministically instead of poisoning the comparison.

use std::cmp::Ordering;

use crate::kernels::sort::total_cmp_f;

/// Total order used by the sort kernels.
pub trait SortKey: Copy + Send + Sync + 'static {
    /// Compares two values under the kernel's total order.
    fn total_cmp_key(&self, other: &Self) -> Ordering;
}

macro_rules! impl_sort_key_ord {
    ($($ty:ty),*) => {
        $(
            impl SortKey for $ty {
                #[inline(always)]
                fn total_cmp_key(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_sort_key_ord!(bool, i8, i16, i32, i64, u8, u16, u32, u64);

impl SortKey for f32 {
    #[inline(always)]
    fn total_cmp_key(&self, other: &Self) -> Ordering {
        total_cmp_f(self, other)
    }
}

impl SortKey for f64 {
    #[inline(always)]
    fn total_cmp_key(&self, other: &Self) -> Ordering {
        total_cmp_f(self, other)
    }
}
