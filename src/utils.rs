// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Offsets, carries and segment bookkeeping*
//!
//! Validation and conversion helpers shared by the layout nodes: checking list offsets,
//! checking gather ("carry") indices, and turning offsets into the `usize` segment
//! boundaries the sort recursion passes between levels.

use crate::errors::KernelError;

/// Checks list offsets against the content they delimit.
///
/// Offsets must hold at least one entry, be non-negative, non-decreasing, and end at or
/// before `content_len`.
pub fn validate_offsets(offsets: &[i64], content_len: usize) -> Result<(), KernelError> {
    let Some(&first) = offsets.first() else {
        return Err(KernelError::InvalidOffsets(
            "offsets must contain at least one entry".to_string(),
        ));
    };
    if first < 0 {
        return Err(KernelError::InvalidOffsets(format!(
            "offsets[0] is negative ({})",
            first
        )));
    }
    for (i, w) in offsets.windows(2).enumerate() {
        if w[1] < w[0] {
            return Err(KernelError::InvalidOffsets(format!(
                "offsets decrease at position {} ({} > {})",
                i + 1,
                w[0],
                w[1]
            )));
        }
    }
    let last = offsets[offsets.len() - 1];
    if last as u64 > content_len as u64 {
        return Err(KernelError::InvalidOffsets(format!(
            "last offset {} exceeds content length {}",
            last, content_len
        )));
    }
    Ok(())
}

/// Checks every carry index lies in `[0, len)`.
pub fn check_carry(carry: &[i64], len: usize, classname: &str) -> Result<(), KernelError> {
    for (i, &c) in carry.iter().enumerate() {
        if c < 0 || c as u64 >= len as u64 {
            return Err(KernelError::InvalidIndex(format!(
                "{}: index[{}] = {} is outside [0, {})",
                classname, i, c, len
            )));
        }
    }
    Ok(())
}

/// Checks `start..stop` is a valid range of a content of length `len`.
pub fn check_range(start: usize, stop: usize, len: usize, classname: &str) -> Result<(), KernelError> {
    if start > stop || stop > len {
        return Err(KernelError::InvalidIndex(format!(
            "{}: range {}..{} is outside length {}",
            classname, start, stop, len
        )));
    }
    Ok(())
}

/// Rebases validated offsets to start at zero, as `usize` segment boundaries.
pub fn offsets_to_segments(offsets: &[i64]) -> Vec<usize> {
    let base = offsets.first().copied().unwrap_or(0);
    offsets.iter().map(|&o| (o - base) as usize).collect()
}

/// Product of a shape's dimensions; 1 for an empty shape.
#[inline]
pub fn shape_product(shape: &[usize]) -> usize {
    shape.iter().product()
}
