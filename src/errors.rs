// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Layout and Sort Error Handling*
//!
//! Error types for layout construction and the sort/argsort kernels.
//! Every failure here is a structural or precondition violation, so nothing is retried.
//!
//! ## Error Categories
//! - **Axis Errors**: Requested axis is deeper than the nested list structure
//! - **Index Errors**: Redirection or carry indices outside the target content
//! - **Length Errors**: Record fields that disagree in length
//! - **Structure Errors**: Malformed offsets or buffer/shape disagreement
//! - **Argument Errors**: Ambiguous or otherwise invalid arguments
//!
//! All variants other than `AxisOutOfRange` carry a contextual message.

use core::fmt;
use std::error::Error;

/// Error type for all layout and sort operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// Requested axis is at or beyond the depth of the nested list structure.
    ///
    /// `axis` is the axis as the caller supplied it, `depth` the depth it was checked against.
    AxisOutOfRange { axis: i64, depth: usize },

    /// Index outside `[0, length)` of the content it points into.
    InvalidIndex(String),

    /// Length mismatch between record fields or between operands.
    LengthMismatch(String),

    /// List offsets that are negative, decreasing, or overrun their content.
    InvalidOffsets(String),

    /// Buffer length does not match the product of the declared shape.
    ShapeMismatch(String),

    /// Typed access requested for a buffer of a different dtype.
    TypeMismatch(String),

    /// Invalid arguments provided to a layout constructor or kernel.
    InvalidArguments(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::AxisOutOfRange { axis, depth } => write!(
                f,
                "axis={} exceeds the depth of the nested list structure (which is {})",
                axis, depth
            ),
            KernelError::InvalidIndex(msg) => write!(f, "Invalid index: {}", msg),
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::InvalidOffsets(msg) => write!(f, "Invalid offsets: {}", msg),
            KernelError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
            KernelError::TypeMismatch(msg) => write!(f, "Type mismatch: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) contents.
///
/// # Arguments
/// * `fname` - Function or field name where the mismatch occurred
/// * `lhs` - Length of the left-hand side content
/// * `rhs` - Length of the right-hand side content
///
/// # Returns
/// A formatted error message string
pub fn log_length_mismatch(fname: String, lhs: usize, rhs: usize) -> String {
    format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs)
}
