//! Test fixtures with base layouts
#![allow(unused)]

use ragged_kernels::{Content, Index64, ListOffsetArray, NumpyArray, RecordArray};

/// `[[2.2, 1.1, 3.3], [], [4.4, 5.5], [5.5], [-4.4, -5.5, -6.6]]`
pub fn ragged_f64() -> Content {
    let content = NumpyArray::from_vec(vec![2.2f64, 1.1, 3.3, 4.4, 5.5, 5.5, -4.4, -5.5, -6.6]);
    ListOffsetArray::new(Index64::new(vec![0, 3, 3, 5, 6, 9]), content)
        .unwrap()
        .into()
}

/// `[[[3, 1], [2]], [], [[5, 4, 6]]]`
pub fn nested_i64() -> Content {
    let leaf = NumpyArray::from_vec(vec![3i64, 1, 2, 5, 4, 6]);
    let inner = ListOffsetArray::new(Index64::new(vec![0, 2, 3, 6]), leaf).unwrap();
    ListOffsetArray::new(Index64::new(vec![0, 2, 2, 3]), inner)
        .unwrap()
        .into()
}

/// `[[], [1], [2, 2], [3, 3, 3], [4, 4, 4, 4], [5, 5, 5], [6, 6], [7], []]`
pub fn staircase_i64() -> ListOffsetArray {
    ListOffsetArray::from_lengths(
        &[0, 1, 2, 3, 4, 3, 2, 1, 0],
        NumpyArray::from_vec(vec![1i64, 2, 2, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 6, 6, 7]),
    )
    .unwrap()
}

/// Record `{x: float64, y: var * int64}` of length 9.
pub fn record_xy() -> Content {
    let x = NumpyArray::from_vec(vec![0.0f64, 1.1, 2.2, 3.3, 4.4, 5.5, 6.6, 7.7, 8.8]);
    RecordArray::new(vec![
        ("x".to_string(), x.into()),
        ("y".to_string(), staircase_i64().into()),
    ])
    .unwrap()
    .into()
}

fn lcg(seed: u64) -> impl FnMut() -> usize {
    let mut state = seed;
    move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    }
}

/// Deterministic ragged `int32` lists, lengths in `0..max_len`.
pub fn generated_lists(rows: usize, max_len: usize, seed: u64) -> Content {
    let mut next = lcg(seed);
    let lengths: Vec<usize> = (0..rows).map(|_| next() % max_len).collect();
    let total: usize = lengths.iter().sum();
    // Small value range so duplicates are common.
    let values: Vec<i32> = (0..total).map(|_| (next() % 17) as i32 - 8).collect();
    ListOffsetArray::from_lengths(&lengths, NumpyArray::from_vec(values))
        .unwrap()
        .into()
}

/// Ragged `int32` lists like [`generated_lists`], but no value repeats.
pub fn generated_distinct_lists(rows: usize, max_len: usize, seed: u64) -> Content {
    let mut next = lcg(seed);
    let lengths: Vec<usize> = (0..rows).map(|_| next() % max_len).collect();
    let total: usize = lengths.iter().sum();
    assert!(total < 10007);
    let values: Vec<i32> = (0..total).map(|i| ((i * 7919) % 10007) as i32).collect();
    ListOffsetArray::from_lengths(&lengths, NumpyArray::from_vec(values))
        .unwrap()
        .into()
}

/// `count` deterministic `int32` values in `-8..9`.
pub fn generated_values(count: usize, seed: u64) -> Vec<i32> {
    let mut next = lcg(seed);
    (0..count).map(|_| (next() % 17) as i32 - 8).collect()
}
