// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Ragged Kernels** - *Sort and argsort over nested, ragged arrays*
//!
//! Nested arrays are trees of [`Content`] nodes: regular n-dimensional leaves, ragged
//! list levels, index redirections and records. [`Content::sort`] and [`Content::argsort`]
//! order values along any list level of the tree, including the outermost, where sorting
//! becomes a ragged transpose.
//!
//! ```ignore
//! use ragged_kernels::{Content, Index64, ListOffsetArray, NumpyArray};
//!
//! let values = NumpyArray::from_vec(vec![2.2f64, 1.1, 3.3, 4.4, 5.5]);
//! let list: Content = ListOffsetArray::new(Index64::new(vec![0, 3, 3, 5]), values)?.into();
//! let ranks = list.argsort(1, true, false)?; // [[1, 0, 2], [], [0, 1]]
//! ```
//!
//! Enable the `parallel_sort` feature to argsort independent lanes on the rayon pool.

pub mod config;
pub mod dtype;
pub mod errors;
pub mod index;
pub mod layout;
pub mod utils;

pub mod kernels {
    pub mod sort;
}

pub mod traits {
    pub mod sort_key;
    pub mod to_bits;
}

pub use dtype::{DType, Primitive, PrimitiveBuffer};
pub use errors::KernelError;
pub use index::{Index, Index32, Index64, IndexInteger};
pub use kernels::sort::{SortConfig, SortMode};
pub use layout::{Content, EmptyArray, IndexedArray, ListOffsetArray, NumpyArray, RecordArray};
