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

//! The contract shared by both frequency store backends.

use std::io::Write;

use crate::error::Error;

/// An in-memory store counting how many times each distinct key was inserted.
///
/// Implemented by [`crate::htable::ProbingHashTable`] and [`crate::tree::FrequencyTree`].
/// The methods are object safe so a driver can hold a `Box<dyn FrequencyStore>` built from a
/// [`crate::config::StoreConfig`].
pub trait FrequencyStore {
    /// Records one occurrence of `key` and returns its new frequency.
    ///
    /// Fails with [`crate::error::ErrorKind::TableFull`] when a fixed-capacity backend has no
    /// room for a new key; the occurrence is then not counted.
    fn insert(&mut self, key: &str) -> Result<u64, Error>;

    /// Returns the frequency of `key`, or zero if it has never been inserted.
    fn frequency(&self, key: &str) -> u64;

    /// Returns true if `key` has been inserted at least once.
    fn contains(&self, key: &str) -> bool {
        self.frequency(key) > 0
    }

    /// Returns the number of distinct keys stored.
    fn num_keys(&self) -> usize;

    /// Returns true if no key has been stored.
    fn is_empty(&self) -> bool {
        self.num_keys() == 0
    }

    /// Calls `visitor` with `(frequency, key)` once for every stored key.
    ///
    /// Trees visit keys in ascending order; hash tables in slot order.
    fn for_each_entry(&self, visitor: &mut dyn FnMut(u64, &str));

    /// Writes one `"{frequency} of {key}"` line per stored key, in [`Self::for_each_entry`] order.
    fn write_entries(&self, out: &mut dyn Write) -> Result<(), Error> {
        let mut result = Ok(());
        self.for_each_entry(&mut |frequency, key| {
            if result.is_ok() {
                result = writeln!(out, "{frequency} of {key}");
            }
        });
        result.map_err(Error::from)
    }

    /// Writes a structural dump of the backend.
    ///
    /// Hash tables write their slot-by-slot table, trees their Graphviz description.
    fn export(&self, out: &mut dyn Write) -> Result<(), Error>;
}
