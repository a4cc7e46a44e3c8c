/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Backing store of a numeric index.
//!
//! Each indexed field is persisted as a sorted set whose members are document
//! ids written as decimal strings and whose scores are the field values. The
//! in-memory [`ScoreTree`](sr_tree::ScoreTree) is hydrated from a full
//! ascending scan of that set.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use index_iterators::DocId;

use crate::StoreError;

/// Persistence seam of a [`NumericIndex`](crate::NumericIndex).
pub trait ScoreStore {
    /// Lazy ascending-by-score sequence of `(doc_id, score)` pairs.
    type Scan<'store>: Iterator<Item = (DocId, f64)>
    where
        Self: 'store;

    /// Upsert `doc_id` with `score`. Returns `true` if `doc_id` was not stored
    /// before.
    fn add(&mut self, doc_id: DocId, score: f64) -> Result<bool, StoreError>;

    /// Scan every stored pair in ascending score order.
    fn scan_by_score(&self) -> Self::Scan<'_>;
}

/// A member together with its score, ordered by score then member.
#[derive(Debug, Clone, PartialEq)]
struct ScoredMember {
    score: f64,
    member: String,
}

impl Eq for ScoredMember {}

impl PartialOrd for ScoredMember {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredMember {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.member.cmp(&other.member))
    }
}

/// A set of unique string members, each with a score.
#[derive(Debug, Default)]
pub struct SortedSet {
    scores: HashMap<String, f64>,
    by_score: BTreeSet<ScoredMember>,
}

impl SortedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `member` or update its score. Returns `true` if the member is new.
    pub fn insert(&mut self, member: impl Into<String>, score: f64) -> bool {
        let member = member.into();
        let previous = self.scores.insert(member.clone(), score);
        if let Some(old) = previous {
            self.by_score.remove(&ScoredMember {
                score: old,
                member: member.clone(),
            });
        }
        self.by_score.insert(ScoredMember { score, member });
        previous.is_none()
    }

    pub fn score(&self, member: &str) -> Option<f64> {
        self.scores.get(member).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Members in ascending score order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.by_score
            .iter()
            .map(|entry| (entry.member.as_str(), entry.score))
    }

    /// The first member ordered strictly after `after`, or the first member
    /// overall.
    fn next_after(&self, after: Option<&ScoredMember>) -> Option<&ScoredMember> {
        match after {
            None => self.by_score.first(),
            Some(after) => self
                .by_score
                .range((std::ops::Bound::Excluded(after), std::ops::Bound::Unbounded))
                .next(),
        }
    }
}

/// Shared handle to a [`SortedSet`] stored under a key of a
/// [`Keyspace`](crate::Keyspace).
#[derive(Debug, Clone)]
pub struct SortedSetHandle {
    key: Arc<str>,
    set: Arc<RwLock<SortedSet>>,
}

impl SortedSetHandle {
    pub(crate) fn new(key: &str) -> Self {
        Self {
            key: Arc::from(key),
            set: Arc::default(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read access to the underlying set. Lock poisoning is ignored.
    pub fn read(&self) -> RwLockReadGuard<'_, SortedSet> {
        self.set.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SortedSet> {
        self.set.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether both handles point to the same set.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.set, &other.set)
    }
}

impl ScoreStore for SortedSetHandle {
    type Scan<'store> = ScoreScan<'store>;

    fn add(&mut self, doc_id: DocId, score: f64) -> Result<bool, StoreError> {
        if score.is_nan() {
            return Err(StoreError::NotANumber {
                key: self.key.to_string(),
            });
        }
        Ok(self.write().insert(doc_id.to_string(), score))
    }

    fn scan_by_score(&self) -> ScoreScan<'_> {
        ScoreScan {
            key: self.key(),
            set: self.read(),
            cursor: None,
        }
    }
}

/// Cursor over a [`SortedSetHandle`] in ascending score order.
///
/// The scan holds the set's read lock until it is dropped, so it observes a
/// single consistent version of the set. Writers block meanwhile; adding to the
/// same set from the thread that owns a live scan deadlocks.
#[derive(Debug)]
pub struct ScoreScan<'store> {
    key: &'store str,
    set: RwLockReadGuard<'store, SortedSet>,
    cursor: Option<ScoredMember>,
}

impl Iterator for ScoreScan<'_> {
    type Item = (DocId, f64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next = self.set.next_after(self.cursor.as_ref()).cloned()?;
            let parsed = next.member.parse::<DocId>();
            let score = next.score;
            match parsed {
                Ok(doc_id) => {
                    self.cursor = Some(next);
                    return Some((doc_id, score));
                }
                Err(err) => {
                    tracing::warn!(
                        key = self.key,
                        member = %next.member,
                        %err,
                        "skipping sorted set member that is not a document id"
                    );
                    self.cursor = Some(next);
                }
            }
        }
    }
}
