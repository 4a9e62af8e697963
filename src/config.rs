// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Global configuration constants controlling kernel behaviour and performance thresholds.
//! These values are compile-time constants tuned for typical nested-array workloads.

/// Minimum number of independent lanes before argsort work is handed to rayon.
///
/// A lane is one 1-D run of values sorted on its own, e.g. a sublist or one batch position
/// of a regular dimension. Below this count the sequential path is used even when the
/// `parallel_sort` feature is enabled.
pub const PARALLEL_LANE_THRESHOLD: usize = 4096;

/// Maximum rank accepted by `NumpyArray` construction.
pub const MAX_NDIM: usize = 32;
