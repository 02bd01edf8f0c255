// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Construction parameters for the two store backends.
//!
//! The parameters here are the entire configuration surface of the crate: a hash table
//! takes a fixed capacity and a [`Probing`] method, a tree takes a [`TreeMode`].
//! [`StoreConfig`] bundles either choice so a driver can pick a backend at runtime.
//!
//! ```
//! # use keyfreq::config::StoreConfig;
//! let config: StoreConfig = "rbt".parse().unwrap();
//! let mut store = config.build().unwrap();
//! store.insert("apple").unwrap();
//! assert_eq!(store.frequency("apple"), 1);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::htable::ProbingHashTable;
use crate::store::FrequencyStore;
use crate::tree::FrequencyTree;

/// Default hash table capacity.
///
/// A prime, so that double hashing strides visit every slot.
pub const DEFAULT_CAPACITY: usize = 113;

/// Collision resolution strategy of a [`ProbingHashTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Probing {
    /// Constant probe step of one.
    #[default]
    Linear,
    /// Probe step derived from a secondary hash of the key.
    Double,
}

impl fmt::Display for Probing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Probing::Linear => f.write_str("linear"),
            Probing::Double => f.write_str("double"),
        }
    }
}

impl FromStr for Probing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "lp" => Ok(Probing::Linear),
            "double" | "dh" => Ok(Probing::Double),
            other => Err(Error::invalid_argument(format!(
                "unknown probing method: {other:?}"
            ))),
        }
    }
}

/// Balancing discipline of a [`FrequencyTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeMode {
    /// Unbalanced binary search tree.
    #[default]
    Plain,
    /// Red-black tree, repaired after every insertion.
    RedBlack,
}

impl fmt::Display for TreeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeMode::Plain => f.write_str("bst"),
            TreeMode::RedBlack => f.write_str("rbt"),
        }
    }
}

impl FromStr for TreeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bst" | "plain" => Ok(TreeMode::Plain),
            "rbt" | "red-black" | "redblack" => Ok(TreeMode::RedBlack),
            other => Err(Error::invalid_argument(format!(
                "unknown tree mode: {other:?}"
            ))),
        }
    }
}

/// Backend selection for a frequency store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreConfig {
    /// Fixed-capacity open-addressing hash table.
    HashTable {
        /// Number of slots; never changes after construction.
        capacity: usize,
        /// Collision resolution strategy.
        probing: Probing,
    },
    /// Binary search tree.
    Tree {
        /// Balancing discipline.
        mode: TreeMode,
    },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::HashTable {
            capacity: DEFAULT_CAPACITY,
            probing: Probing::Linear,
        }
    }
}

impl StoreConfig {
    /// Creates an empty store for this configuration.
    pub fn build(&self) -> Result<Box<dyn FrequencyStore>, Error> {
        match *self {
            StoreConfig::HashTable { capacity, probing } => {
                Ok(Box::new(ProbingHashTable::try_new(capacity, probing)?))
            }
            StoreConfig::Tree { mode } => Ok(Box::new(FrequencyTree::new(mode))),
        }
    }
}

impl fmt::Display for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreConfig::HashTable { capacity, probing } => write!(f, "{probing}:{capacity}"),
            StoreConfig::Tree { mode } => write!(f, "{mode}"),
        }
    }
}

/// Parses `bst`, `rbt`, `linear`, `double`, or a probing method followed by
/// `:capacity` such as `double:251`. A bare probing method uses [`DEFAULT_CAPACITY`].
impl FromStr for StoreConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (method, capacity) = match s.split_once(':') {
            Some((method, capacity)) => {
                let capacity = capacity.trim().parse::<usize>().map_err(|err| {
                    Error::invalid_argument(format!("invalid capacity {capacity:?}: {err}"))
                })?;
                (method, Some(capacity))
            }
            None => (s, None),
        };
        if capacity.is_none() {
            if let Ok(mode) = method.parse::<TreeMode>() {
                return Ok(StoreConfig::Tree { mode });
            }
        }
        let probing = method.parse::<Probing>()?;
        Ok(StoreConfig::HashTable {
            capacity: capacity.unwrap_or(DEFAULT_CAPACITY),
            probing,
        })
    }
}
