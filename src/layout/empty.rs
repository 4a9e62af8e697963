// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Zero-length leaf with no type information.

use crate::errors::KernelError;
use crate::layout::Sorted;
use crate::utils::{check_carry, check_range};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyArray;

impl EmptyArray {
    pub fn new() -> Self {
        EmptyArray
    }

    pub fn len(&self) -> usize {
        0
    }

    pub fn is_empty(&self) -> bool {
        true
    }

    pub fn carry(&self, carry: &[i64]) -> Result<EmptyArray, KernelError> {
        check_carry(carry, 0, "EmptyArray")?;
        Ok(EmptyArray)
    }

    pub fn range(&self, start: usize, stop: usize) -> Result<EmptyArray, KernelError> {
        check_range(start, stop, 0, "EmptyArray")?;
        Ok(EmptyArray)
    }

    pub(crate) fn sort_next(&self, axis: usize, segments: &[usize]) -> Result<Sorted, KernelError> {
        if axis != 0 {
            return Err(KernelError::AxisOutOfRange {
                axis: axis as i64,
                depth: 1,
            });
        }
        Ok(Sorted {
            content: EmptyArray.into(),
            segments: segments.to_vec(),
        })
    }
}
