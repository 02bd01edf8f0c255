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

use std::io::Write;

use log::debug;
use log::trace;
use log::warn;

use crate::config::Probing;
use crate::error::Error;
use crate::store::FrequencyStore;

#[derive(Debug, Clone, Default)]
struct Slot {
    key: Option<String>,
    frequency: u64,
    /// Probes taken by the insertion that filled this slot; `None` while empty.
    probes: Option<usize>,
}

/// Open-addressing hash table mapping string keys to occurrence counts.
///
/// See [`crate::htable`] for an overview.
#[derive(Debug, Clone)]
pub struct ProbingHashTable {
    probing: Probing,
    slots: Vec<Slot>,
    num_keys: usize,
    /// Slot indices in the order they were first occupied.
    fill_order: Vec<usize>,
}

impl ProbingHashTable {
    /// Creates an empty table with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero, or if `capacity` is one and `probing` is
    /// [`Probing::Double`] (the secondary hash is taken modulo `capacity - 1`).
    pub fn new(capacity: usize, probing: Probing) -> Self {
        match Self::try_new(capacity, probing) {
            Ok(table) => table,
            Err(err) => panic!("{}", err.message()),
        }
    }

    /// Creates an empty table with `capacity` slots, rejecting invalid parameters.
    pub fn try_new(capacity: usize, probing: Probing) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::invalid_argument("capacity must be positive"));
        }
        if probing == Probing::Double && capacity < 2 {
            return Err(Error::invalid_argument(
                "double hashing requires a capacity of at least 2",
            ));
        }
        debug!("creating hash table with capacity {capacity} and {probing} probing");
        Ok(Self {
            probing,
            slots: vec![Slot::default(); capacity],
            num_keys: 0,
            fill_order: Vec::with_capacity(capacity),
        })
    }

    /// Returns the fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the collision resolution strategy.
    pub fn probing(&self) -> Probing {
        self.probing
    }

    /// Returns the number of occupied slots.
    pub fn num_keys(&self) -> usize {
        self.num_keys
    }

    /// Returns true if no key has been stored.
    pub fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    /// Returns true if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.num_keys == self.capacity()
    }

    /// Returns the slot where the probe sequence for `key` starts.
    pub fn home_slot(&self, key: &str) -> usize {
        fold_key(key) as usize % self.capacity()
    }

    /// Returns the distance between consecutive probes for `key`.
    pub fn probe_step(&self, key: &str) -> usize {
        self.step(self.home_slot(key))
    }

    fn step(&self, home: usize) -> usize {
        match self.probing {
            Probing::Linear => 1,
            Probing::Double => 1 + home % (self.capacity() - 1),
        }
    }

    /// Records one occurrence of `key` and returns its new frequency.
    ///
    /// A new key takes the first empty slot of its probe sequence. If the sequence comes back
    /// to the home slot first, nothing is stored and [`crate::error::ErrorKind::TableFull`]
    /// is returned.
    pub fn insert(&mut self, key: &str) -> Result<u64, Error> {
        let capacity = self.capacity();
        let home = self.home_slot(key);
        let step = self.step(home);
        let mut index = home;
        let mut probes = 0;
        loop {
            let slot = &mut self.slots[index];
            if slot.key.is_none() {
                slot.key = Some(key.to_owned());
                slot.frequency = 1;
                slot.probes = Some(probes);
                self.num_keys += 1;
                self.fill_order.push(index);
                trace!("stored {key:?} in slot {index} after {probes} probes");
                return Ok(1);
            }
            if slot.key.as_deref() == Some(key) {
                slot.frequency += 1;
                return Ok(slot.frequency);
            }
            index = (index + step) % capacity;
            probes += 1;
            if index == home {
                warn!("no slot left for {key:?} after {probes} probes");
                return Err(Error::table_full(key, capacity));
            }
        }
    }

    /// Returns the frequency of `key`, or zero if it is not stored.
    ///
    /// Probing stops at the first empty slot, or after `capacity` probes on a full table.
    pub fn search(&self, key: &str) -> u64 {
        let capacity = self.capacity();
        let home = self.home_slot(key);
        let step = self.step(home);
        let mut index = home;
        for _ in 0..capacity {
            let slot = &self.slots[index];
            match slot.key.as_deref() {
                None => return 0,
                Some(existing) if existing == key => return slot.frequency,
                Some(_) => index = (index + step) % capacity,
            }
        }
        0
    }

    /// Returns the index of the slot holding `key`, if any.
    pub fn slot_of(&self, key: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.key.as_deref() == Some(key))
    }

    /// Returns the number of probes the insertion into slot `index` took, or `None` if the
    /// slot is empty or out of range.
    pub fn probe_distance(&self, index: usize) -> Option<usize> {
        self.slots.get(index).and_then(|slot| slot.probes)
    }

    /// Returns an iterator over `(key, frequency)` of occupied slots, in slot order.
    pub fn iter(&self) -> Entries<'_> {
        Entries {
            slots: self.slots.iter(),
        }
    }

    /// Writes one `"{frequency} of {key}"` line per occupied slot, in slot order.
    pub fn write_entries<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), Error> {
        for (key, frequency) in self.iter() {
            writeln!(out, "{frequency} of {key}")?;
        }
        Ok(())
    }

    pub(super) fn slot_row(&self, index: usize) -> (u64, i64, &str) {
        let slot = &self.slots[index];
        let probes = slot.probes.map_or(-1, |p| p as i64);
        (slot.frequency, probes, slot.key.as_deref().unwrap_or("NULL"))
    }

    /// Probe counts of the first `n` insertions of new keys.
    pub(super) fn first_fill_probes(&self, n: usize) -> impl Iterator<Item = usize> + '_ {
        self.fill_order
            .iter()
            .take(n)
            .map(|&index| self.slots[index].probes.unwrap_or_default())
    }
}

/// Iterator over occupied slots of a [`ProbingHashTable`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    slots: std::slice::Iter<'a, Slot>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .by_ref()
            .find_map(|slot| slot.key.as_deref().map(|key| (key, slot.frequency)))
    }
}

impl FrequencyStore for ProbingHashTable {
    fn insert(&mut self, key: &str) -> Result<u64, Error> {
        ProbingHashTable::insert(self, key)
    }

    fn frequency(&self, key: &str) -> u64 {
        self.search(key)
    }

    fn num_keys(&self) -> usize {
        self.num_keys
    }

    fn for_each_entry(&self, visitor: &mut dyn FnMut(u64, &str)) {
        for (key, frequency) in self.iter() {
            visitor(frequency, key);
        }
    }

    fn write_entries(&self, out: &mut dyn Write) -> Result<(), Error> {
        ProbingHashTable::write_entries(self, out)
    }

    fn export(&self, out: &mut dyn Write) -> Result<(), Error> {
        self.write_table(out)
    }
}

/// Polynomial rolling hash over the key bytes: `h = byte + 31 * h`, wrapping at 32 bits.
pub(crate) fn fold_key(key: &str) -> u32 {
    key.bytes()
        .fold(0u32, |h, b| u32::from(b).wrapping_add(h.wrapping_mul(31)))
}
