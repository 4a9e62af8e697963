// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

mod common;
mod util;

mod indexed_sort_tests {
    use std::sync::Arc;

    use super::common::ragged_f64;
    use super::util::render;
    use ragged_kernels::{
        Content, Index32, Index64, IndexedArray, KernelError, ListOffsetArray, NumpyArray,
    };

    fn base() -> Arc<Content> {
        Arc::new(NumpyArray::from_vec(vec![1.1f64, 2.2, 3.3, 4.4, 5.5]).into())
    }

    #[test]
    fn indexed_leaf_sorts_projected_values() {
        let view: Content = IndexedArray::new(Index64::new(vec![4, 3, 0, 2, 1]), base()).into();
        assert_eq!(render(&view), "[5.5, 4.4, 1.1, 3.3, 2.2]");
        let out = view.sort(0, true, false).unwrap();
        assert!(matches!(out, Content::Numpy(_)));
        assert_eq!(render(&out), "[1.1, 2.2, 3.3, 4.4, 5.5]");
        assert_eq!(render(&view.argsort(0, true, false).unwrap()), "[2, 4, 3, 1, 0]");
    }

    #[test]
    fn indexed_content_inside_lists() {
        let view = IndexedArray::new(Index64::new(vec![4, 3, 0, 2, 1]), base());
        let list: Content = ListOffsetArray::new(Index64::new(vec![0, 2, 5]), view)
            .unwrap()
            .into();
        assert_eq!(
            render(&list.sort(1, true, false).unwrap()),
            "[[4.4, 5.5], [1.1, 2.2, 3.3]]"
        );
        assert_eq!(render(&list.argsort(1, true, false).unwrap()), "[[1, 0], [0, 2, 1]]");
        assert_eq!(
            render(&list.argsort(0, true, false).unwrap()),
            "[[1, 0], [1, 0], [0]]"
        );
    }

    #[test]
    fn indexed_lists() {
        let view: Content = IndexedArray::new(Index32::new(vec![2, 0]), ragged_f64()).into();
        assert_eq!(view.max_depth(), 2);
        assert_eq!(render(&view), "[[4.4, 5.5], [2.2, 1.1, 3.3]]");
        assert_eq!(
            render(&view.sort(1, true, false).unwrap()),
            "[[4.4, 5.5], [1.1, 2.2, 3.3]]"
        );
        assert_eq!(
            render(&view.argsort(0, true, false).unwrap()),
            "[[1, 0], [1, 0], [0]]"
        );
    }

    #[test]
    fn chained_indexes_compose() {
        let first = IndexedArray::new(Index32::new(vec![1, 2, 3, 4]), base());
        let second = IndexedArray::new(Index64::new(vec![3, 0, 2]), first);
        let view: Content = IndexedArray::new(Index32::new(vec![0, 1, 2]), second).into();
        assert_eq!(render(&view), "[5.5, 2.2, 4.4]");
        assert_eq!(
            render(&view.sort(0, false, false).unwrap()),
            "[5.5, 4.4, 2.2]"
        );
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let view: Content = IndexedArray::new(Index64::new(vec![0, 7]), base()).into();
        let err = view.sort(0, true, false).unwrap_err();
        assert!(matches!(err, KernelError::InvalidIndex(_)));
        assert!(err.to_string().starts_with("Invalid index: NumpyArray: index[1] = 7"));
    }

    #[test]
    fn shared_content_is_untouched() {
        let shared = base();
        let a: Content = IndexedArray::new(Index32::new(vec![4, 0]), Arc::clone(&shared)).into();
        let _ = a.sort(0, true, false).unwrap();
        assert_eq!(render(&shared), "[1.1, 2.2, 3.3, 4.4, 5.5]");
    }
}
