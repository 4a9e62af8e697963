// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Sorting Algorithms Kernels Module** - *Lane-wise Sorting and Ordering Operations*
//!
//! Flat sorting kernels underneath the layout-level `sort`/`argsort`. Every layout
//! algorithm eventually reduces to a set of independent 1-D *lanes* over one typed buffer:
//! a regular dimension with the others held as batch positions, a sublist, or a contributing
//! group of a ragged transpose. These kernels order each lane and either move the values
//! (`sort_lanes`) or write the permutation (`rank_lanes`).
//!
//! Regular sorts here return reordered data.
//! The argsort variants return the permutation positions local to each lane.

use std::cmp::Ordering;

use num_traits::Float;

use crate::traits::sort_key::SortKey;
use crate::traits::to_bits::ToBits;

/// Whether a layout sort returns reordered values or the permutation that orders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Reordered values, same dtype as the input.
    Sort,
    /// Lane-local positions as `int64`.
    Argsort,
}

/// Configuration for sort and argsort across a layout.
///
/// `stable` is carried explicitly through every recursive call rather than held globally,
/// so independent branches can be ordered on separate threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub ascending: bool,
    pub stable: bool,
    pub parallel: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            ascending: true,
            stable: false,
            parallel: cfg!(feature = "parallel_sort"),
        }
    }
}

impl SortConfig {
    /// Create a new config with default settings (ascending, unstable)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set ascending order
    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    /// Keep equal keys in their original relative order
    pub fn stable(mut self, stable: bool) -> Self {
        self.stable = stable;
        self
    }

    /// Enable parallel lane sorting (only effective with the `parallel_sort` feature)
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Total ordering for f32/f64 as per IEEE 754
///
/// - Positive NaN sorts after +inf; negative-signed NaN sorts before -inf.
/// - -0.0 sorts before +0.0.
/// - Compares the sign-adjusted bit patterns, so no value is left unordered.
#[inline(always)]
pub fn total_cmp_f<T: Float + ToBits>(a: &T, b: &T) -> Ordering {
    a.total_order_key().cmp(&b.total_order_key())
}

/// Comparison-based argsort for any `SortKey` type - returns indices that would sort the data
///
/// With `stable` set, equal keys keep their input order in both directions.
/// Without it, the order among equal keys is unspecified but deterministic for a given input.
#[inline]
pub fn argsort<T: SortKey>(data: &[T], ascending: bool, stable: bool) -> Vec<usize> {
    let n = data.len();
    if n == 0 {
        return vec![];
    }

    let mut indices: Vec<usize> = (0..n).collect();
    match (ascending, stable) {
        (true, true) => indices.sort_by(|&i, &j| data[i].total_cmp_key(&data[j])),
        (false, true) => indices.sort_by(|&i, &j| data[j].total_cmp_key(&data[i])),
        (true, false) => indices.sort_unstable_by(|&i, &j| data[i].total_cmp_key(&data[j])),
        (false, false) => indices.sort_unstable_by(|&i, &j| data[j].total_cmp_key(&data[i])),
    }
    indices
}

/// A strided 1-D run inside a flat buffer: positions `start + k * stride` for `k in 0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane {
    pub start: usize,
    pub len: usize,
    pub stride: usize,
}

impl Lane {
    #[inline(always)]
    pub fn position(&self, k: usize) -> usize {
        self.start + k * self.stride
    }
}

/// Returns the permutation of lane-local positions that orders one lane.
pub fn argsort_lane<T: SortKey>(data: &[T], lane: &Lane, config: &SortConfig) -> Vec<usize> {
    let values: Vec<T> = (0..lane.len).map(|k| data[lane.position(k)]).collect();
    argsort(&values, config.ascending, config.stable)
}

/// Returns one permutation per lane, in lane order.
pub fn argsort_lanes<T: SortKey>(data: &[T], lanes: &[Lane], config: &SortConfig) -> Vec<Vec<usize>> {
    #[cfg(feature = "parallel_sort")]
    {
        if config.parallel && lanes.len() >= crate::config::PARALLEL_LANE_THRESHOLD {
            return parallel_argsort::argsort_lanes_parallel(data, lanes, config);
        }
    }

    lanes
        .iter()
        .map(|lane| argsort_lane(data, lane, config))
        .collect()
}

/// Returns a copy of `data` with every lane reordered by its permutation.
///
/// Positions not covered by any lane keep their value.
pub fn sort_lanes<T: SortKey>(data: &[T], lanes: &[Lane], config: &SortConfig) -> Vec<T> {
    let perms = argsort_lanes(data, lanes, config);
    let mut out = data.to_vec();
    for (lane, perm) in lanes.iter().zip(perms.iter()) {
        for (pos, &k) in perm.iter().enumerate() {
            out[lane.position(pos)] = data[lane.position(k)];
        }
    }
    out
}

/// Returns an `int64` buffer shaped like `data` holding each lane's permutation.
///
/// Positions not covered by any lane are zero.
pub fn rank_lanes<T: SortKey>(data: &[T], lanes: &[Lane], config: &SortConfig) -> Vec<i64> {
    let perms = argsort_lanes(data, lanes, config);
    let mut out = vec![0i64; data.len()];
    for (lane, perm) in lanes.iter().zip(perms.iter()) {
        for (pos, &k) in perm.iter().enumerate() {
            out[lane.position(pos)] = k as i64;
        }
    }
    out
}

// Parallel Sort (feature-gated)

#[cfg(feature = "parallel_sort")]
pub mod parallel_argsort {
    use rayon::prelude::*;

    use super::{Lane, SortConfig, argsort_lane};
    use crate::traits::sort_key::SortKey;

    /// Parallel per-lane argsort. Results come back in lane order, so the caller's
    /// scatter is identical to the sequential path.
    pub fn argsort_lanes_parallel<T: SortKey>(
        data: &[T],
        lanes: &[Lane],
        config: &SortConfig,
    ) -> Vec<Vec<usize>> {
        lanes
            .par_iter()
            .map(|lane| argsort_lane(data, lane, config))
            .collect()
    }
}
