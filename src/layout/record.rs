// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **RecordArray** - *Struct-of-arrays record node*
//!
//! An ordered set of uniquely named fields, each a content of the record's length.
//! Sorting a record sorts each field on its own with the same axis and flags; there is no
//! whole-record ordering, and field results that come back with different lengths or
//! sublist structure are an error rather than being truncated to fit.

use std::sync::Arc;

use crate::errors::{KernelError, log_length_mismatch};
use crate::kernels::sort::{SortConfig, SortMode};
use crate::layout::{Content, Sorted};
use crate::utils::{check_carry, check_range};

#[derive(Debug, Clone)]
pub struct RecordArray {
    fields: Vec<(String, Arc<Content>)>,
    length: usize,
}

impl RecordArray {
    /// Record over `fields`, whose common length becomes the record length.
    ///
    /// A record without fields has length 0; use [`RecordArray::with_length`] to give it one.
    pub fn new(fields: Vec<(String, Content)>) -> Result<Self, KernelError> {
        let length = fields.first().map(|(_, c)| c.len()).unwrap_or(0);
        Self::with_length(fields, length)
    }

    pub fn with_length(fields: Vec<(String, Content)>, length: usize) -> Result<Self, KernelError> {
        let fields: Vec<(String, Arc<Content>)> = fields
            .into_iter()
            .map(|(name, content)| (name, Arc::new(content)))
            .collect();
        Self::from_shared(fields, length)
    }

    /// Record over fields that may be shared with other layouts.
    pub fn from_shared(fields: Vec<(String, Arc<Content>)>, length: usize) -> Result<Self, KernelError> {
        for (i, (name, content)) in fields.iter().enumerate() {
            if fields[..i].iter().any(|(other, _)| other == name) {
                return Err(KernelError::InvalidArguments(format!(
                    "duplicate RecordArray field name '{}'",
                    name
                )));
            }
            if content.len() != length {
                return Err(KernelError::LengthMismatch(log_length_mismatch(
                    format!("RecordArray field '{}'", name),
                    length,
                    content.len(),
                )));
            }
        }
        Ok(Self { fields, length })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn field(&self, name: &str) -> Option<&Content> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_ref())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Content)> {
        self.fields.iter().map(|(n, c)| (n.as_str(), c.as_ref()))
    }

    pub fn min_depth(&self) -> usize {
        self.fields
            .iter()
            .map(|(_, c)| c.min_depth())
            .min()
            .unwrap_or(1)
    }

    pub fn max_depth(&self) -> usize {
        self.fields
            .iter()
            .map(|(_, c)| c.max_depth())
            .max()
            .unwrap_or(1)
    }

    pub fn carry(&self, carry: &[i64]) -> Result<RecordArray, KernelError> {
        check_carry(carry, self.length, "RecordArray")?;
        let fields = self
            .fields
            .iter()
            .map(|(name, c)| Ok((name.clone(), Arc::new(c.carry(carry)?))))
            .collect::<Result<Vec<_>, KernelError>>()?;
        Ok(Self {
            fields,
            length: carry.len(),
        })
    }

    pub fn range(&self, start: usize, stop: usize) -> Result<RecordArray, KernelError> {
        check_range(start, stop, self.length, "RecordArray")?;
        let fields = self
            .fields
            .iter()
            .map(|(name, c)| Ok((name.clone(), Arc::new(c.range(start, stop)?))))
            .collect::<Result<Vec<_>, KernelError>>()?;
        Ok(Self {
            fields,
            length: stop - start,
        })
    }

    pub(crate) fn sort_next(
        &self,
        axis: usize,
        segments: &[usize],
        mode: SortMode,
        config: &SortConfig,
    ) -> Result<Sorted, KernelError> {
        let mut fields = Vec::with_capacity(self.fields.len());
        let mut outsegments: Option<Vec<usize>> = None;
        for (name, content) in &self.fields {
            let sorted = content.sort_next(axis, segments, mode, config)?;
            if let Some(expected) = &outsegments {
                if *expected != sorted.segments {
                    let (lhs, rhs) = (
                        expected.last().copied().unwrap_or(0),
                        sorted.segments.last().copied().unwrap_or(0),
                    );
                    let msg = if lhs != rhs {
                        log_length_mismatch(format!("RecordArray field '{}'", name), lhs, rhs)
                    } else {
                        format!(
                            "RecordArray field '{}' => sublist structure differs from preceding fields",
                            name
                        )
                    };
                    return Err(KernelError::LengthMismatch(msg));
                }
            } else {
                outsegments = Some(sorted.segments.clone());
            }
            fields.push((name.clone(), Arc::new(sorted.content)));
        }
        let segments = outsegments.unwrap_or_else(|| segments.to_vec());
        let length = segments.last().copied().unwrap_or(0);
        Ok(Sorted {
            content: Self { fields, length }.into(),
            segments,
        })
    }
}
