/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! Error types for the numeric index and its backing store.

use crate::KeyType;

/// Errors raised by a [`ScoreStore`](crate::ScoreStore) or a [`Keyspace`](crate::Keyspace).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The key exists but holds a value that is not a sorted set.
    #[error("key `{key}` holds a {found} value, expected a sorted set")]
    WrongType {
        /// The offending key.
        key: String,
        /// The type of the value found under the key.
        found: KeyType,
    },

    /// A NaN score was passed to a sorted set.
    #[error("score for key `{key}` is not a number")]
    NotANumber { key: String },
}

/// Errors raised by a [`NumericIndex`](crate::NumericIndex).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// The index could not bind its store key when it was opened.
    #[error("numeric index `{key}` is unusable")]
    Unusable { key: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
