/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/


//! A minimal typed keyspace holding the sorted sets of numeric indexes.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::{SortedSetHandle, StoreError};

/// The type of a value stored under a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    String,
    List,
    Set,
    ZSet,
    Hash,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string",
            Self::List => "list",
            Self::Set => "set",
            Self::ZSet => "zset",
            Self::Hash => "hash",
        })
    }
}

/// A value stored under a key.
#[derive(Debug, Clone)]
pub enum Value {
    String(String),
    List(Vec<String>),
    Set(HashSet<String>),
    ZSet(SortedSetHandle),
    Hash(HashMap<String, String>),
}

impl Value {
    pub const fn key_type(&self) -> KeyType {
        match self {
            Self::String(_) => KeyType::String,
            Self::List(_) => KeyType::List,
            Self::Set(_) => KeyType::Set,
            Self::ZSet(_) => KeyType::ZSet,
            Self::Hash(_) => KeyType::Hash,
        }
    }
}

/// Maps key names to typed values.
#[derive(Debug, Default)]
pub struct Keyspace {
    entries: HashMap<String, Value>,
}

impl Keyspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, returning the value it replaced.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn key_type(&self, key: &str) -> Option<KeyType> {
        self.get(key).map(Value::key_type)
    }

    /// Open the sorted set stored under `key` for reading and writing,
    /// creating an empty one if the key does not exist.
    ///
    /// Fails with [`StoreError::WrongType`] if the key holds another type.
    pub fn open_sorted_set(&mut self, key: &str) -> Result<SortedSetHandle, StoreError> {
        let value = self
            .entries
            .entry(key.to_owned())
            .or_insert_with(|| Value::ZSet(SortedSetHandle::new(key)));
        match value {
            Value::ZSet(handle) => Ok(handle.clone()),
            other => Err(StoreError::WrongType {
                key: key.to_owned(),
                found: other.key_type(),
            }),
        }
    }
}
