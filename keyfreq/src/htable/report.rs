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

//! Text reports over the slot array and its probe statistics.

use std::io::Write;

use crate::config::Probing;
use crate::error::Error;
use crate::htable::ProbingHashTable;

const RULE: &str = "-----------------------------------------------------";

/// Clustering statistics of a table at one fill level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    /// Fill level this checkpoint describes, in percent of capacity.
    pub percent_full: usize,
    /// Number of keys inserted when the table reached that fill level.
    pub entries: usize,
    /// Percentage of those keys that landed in their home slot.
    pub percent_at_home: f64,
    /// Mean number of probes over those keys.
    pub average_probes: f64,
    /// Largest number of probes over those keys.
    pub max_probes: usize,
}

impl ProbingHashTable {
    /// Returns the clustering statistics of the first `capacity * percent_full / 100`
    /// insertions of new keys.
    ///
    /// Returns `None` if that number is zero or the table never held that many keys.
    pub fn checkpoint(&self, percent_full: usize) -> Option<Checkpoint> {
        let entries = self.capacity() * percent_full / 100;
        if entries == 0 || entries > self.num_keys() {
            return None;
        }
        let mut at_home = 0usize;
        let mut total = 0usize;
        let mut max_probes = 0usize;
        for probes in self.first_fill_probes(entries) {
            if probes == 0 {
                at_home += 1;
            }
            total += probes;
            max_probes = max_probes.max(probes);
        }
        Some(Checkpoint {
            percent_full,
            entries,
            percent_at_home: at_home as f64 * 100.0 / entries as f64,
            average_probes: total as f64 / entries as f64,
            max_probes,
        })
    }

    /// Writes every slot, occupied or not, with its index, frequency, probe count and key.
    ///
    /// Empty slots show a probe count of `-1` and the key `NULL`.
    pub fn write_table<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), Error> {
        writeln!(out, "{:>5} {:>5} {:>5}   {}", "Ind", "Freq", "Stats", "Key")?;
        writeln!(out, "{RULE}")?;
        for index in 0..self.capacity() {
            let (frequency, probes, key) = self.slot_row(index);
            writeln!(out, "{index:5} {frequency:5} {probes:5}   {key}")?;
        }
        Ok(())
    }

    /// Writes a clustering report with `num_stats` evenly spaced fill checkpoints.
    ///
    /// Checkpoints the table never reached are left out.
    pub fn write_stats<W: Write + ?Sized>(&self, out: &mut W, num_stats: usize) -> Result<(), Error> {
        let method = match self.probing() {
            Probing::Linear => "Linear Probing. ",
            Probing::Double => "Double Hashing.",
        };
        write!(out, "\nUsing {method}\n\n")?;
        writeln!(out, "Percent   Current   Percent    Average      Maximum")?;
        writeln!(out, " Full     Entries   At Home   Collisions   Collisions")?;
        writeln!(out, "{RULE}")?;
        for i in 1..=num_stats {
            if let Some(c) = self.checkpoint(100 * i / num_stats) {
                writeln!(
                    out,
                    "{:4} {:10} {:10.1} {:10.2} {:11}",
                    c.percent_full, c.entries, c.percent_at_home, c.average_probes, c.max_probes
                )?;
            }
        }
        write!(out, "{RULE}\n\n")?;
        Ok(())
    }
}
