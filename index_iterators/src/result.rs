/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! The entry type yielded by every [`IndexIterator`](crate::IndexIterator).

use crate::DocId;

/// Bit mask of the fields a result matched in.
pub type FieldMask = u128;

/// Mask used by results that are not tied to a specific text field.
pub const FIELD_MASK_ALL: FieldMask = FieldMask::MAX;

/// Payload carried by an [`IndexResult`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResultData {
    /// No payload, the document simply exists in the iterator.
    Virtual,
    /// A structural match coming from a numeric index, carrying the matched value.
    Numeric(f64),
    /// The results of each child of an aggregating iterator, in child order.
    Aggregate(Vec<IndexResult>),
}

/// A single entry produced by an index iterator.
///
/// Fields specific to text matching (`freq`) stay zeroed for results coming
/// from structural indexes such as the numeric range index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexResult {
    /// The document this result refers to.
    pub doc_id: DocId,
    /// The fields this result matched in.
    pub field_mask: FieldMask,
    /// The term frequency, zero for structural matches.
    pub freq: u32,
    /// The result's payload.
    pub data: ResultData,
}

impl IndexResult {
    /// A result with no payload.
    pub const fn virt() -> Self {
        Self {
            doc_id: 0,
            field_mask: FIELD_MASK_ALL,
            freq: 0,
            data: ResultData::Virtual,
        }
    }

    /// A structural result holding a numeric value.
    pub const fn numeric(value: f64) -> Self {
        Self {
            doc_id: 0,
            field_mask: FIELD_MASK_ALL,
            freq: 0,
            data: ResultData::Numeric(value),
        }
    }

    /// An aggregate result able to hold `cap` children without reallocating.
    pub fn aggregate(cap: usize) -> Self {
        Self {
            doc_id: 0,
            field_mask: 0,
            freq: 0,
            data: ResultData::Aggregate(Vec::with_capacity(cap)),
        }
    }

    /// Set the document id, builder style.
    pub fn with_doc_id(mut self, doc_id: DocId) -> Self {
        self.doc_id = doc_id;
        self
    }

    /// The numeric value of this result, if it is a numeric result.
    pub const fn as_numeric(&self) -> Option<f64> {
        match self.data {
            ResultData::Numeric(value) => Some(value),
            _ => None,
        }
    }

    /// The children of this result, if it is an aggregate result.
    pub fn children(&self) -> Option<&[IndexResult]> {
        match &self.data {
            ResultData::Aggregate(children) => Some(children),
            _ => None,
        }
    }

    /// Reset an aggregate result and fill it with copies of `children`.
    ///
    /// The field mask becomes the union of the children's masks and the
    /// frequency their sum. Does nothing on non-aggregate results.
    pub fn set_children<'a>(&mut self, children: impl IntoIterator<Item = &'a IndexResult>) {
        let ResultData::Aggregate(agg) = &mut self.data else {
            return;
        };
        agg.clear();
        self.field_mask = 0;
        self.freq = 0;
        for child in children {
            self.field_mask |= child.field_mask;
            self.freq = self.freq.saturating_add(child.freq);
            agg.push(child.clone());
        }
    }
}
