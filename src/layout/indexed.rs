// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **IndexedArray** - *Lazy redirection through an integer index*
//!
//! Entry `i` of an `IndexedArray` is `content[index[i]]`. The content is shared, so several
//! indexed views can point at one buffer without copying it. Sorting never walks through
//! the indirection: the node is first *projected* into plain content, composing any chain
//! of nested indexes into a single gather.

use std::sync::Arc;

use tracing::trace;

use crate::errors::KernelError;
use crate::index::{Index, IndexInteger};
use crate::layout::Content;
use crate::utils::{check_carry, check_range};

#[derive(Debug, Clone)]
pub struct IndexedArray<I: IndexInteger> {
    index: Index<I>,
    content: Arc<Content>,
}

impl<I: IndexInteger> IndexedArray<I> {
    /// Indices are checked when the array is projected, not here.
    pub fn new(index: Index<I>, content: impl Into<Arc<Content>>) -> Self {
        Self {
            index,
            content: content.into(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &Index<I> {
        &self.index
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Looks up `outer` positions in this index, producing positions into this content.
    fn compose(&self, outer: &[i64]) -> Result<Vec<i64>, KernelError> {
        check_carry(outer, self.len(), self.classname())?;
        Ok(outer.iter().map(|&i| self.index.get(i as usize)).collect())
    }

    fn classname(&self) -> &'static str {
        if I::NAME == "32" {
            "IndexedArray32"
        } else {
            "IndexedArray64"
        }
    }

    /// Materialises the array as plain content: `content[index[i]]` for every `i`, with
    /// nested indexed contents folded into one gather first.
    pub fn project(&self) -> Result<Content, KernelError> {
        let mut carry = self.index.to_i64_vec();
        let mut target: &Content = &self.content;
        let mut hops = 1usize;
        loop {
            match target {
                Content::Indexed32(inner) => {
                    carry = inner.compose(&carry)?;
                    target = inner.content();
                }
                Content::Indexed64(inner) => {
                    carry = inner.compose(&carry)?;
                    target = inner.content();
                }
                _ => break,
            }
            hops += 1;
        }
        trace!(
            classname = self.classname(),
            hops,
            length = carry.len(),
            target = target.classname(),
            "project"
        );
        target.carry(&carry)
    }

    /// Gathers index entries; the content stays shared and unprojected.
    pub fn carry(&self, carry: &[i64]) -> Result<IndexedArray<I>, KernelError> {
        check_carry(carry, self.len(), self.classname())?;
        let data: Vec<I> = carry
            .iter()
            .map(|&c| self.index.as_slice()[c as usize])
            .collect();
        Ok(Self {
            index: Index::new(data),
            content: Arc::clone(&self.content),
        })
    }

    pub fn range(&self, start: usize, stop: usize) -> Result<IndexedArray<I>, KernelError> {
        check_range(start, stop, self.len(), self.classname())?;
        Ok(Self {
            index: self.index.slice(start, stop),
            content: Arc::clone(&self.content),
        })
    }
}
