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

//! Fixed-capacity open-addressing hash table counting key frequencies.
//!
//! # Overview
//!
//! Every key lives directly in a slot array whose length is fixed at construction. A key is
//! folded into a 32-bit integer with a polynomial rolling hash (`h = byte + 31 * h`) and
//! reduced modulo the capacity to find its home slot. Collisions are resolved by probing:
//!
//! * [`Probing::Linear`] steps through the table one slot at a time.
//! * [`Probing::Double`] steps by `1 + home % (capacity - 1)`, a stride that depends on the
//!   key and spreads colliding keys apart.
//!
//! The table never grows. When the probe sequence returns to the home slot without finding
//! either the key or an empty slot, the insert fails with
//! [`ErrorKind::TableFull`](crate::error::ErrorKind::TableFull) and the occurrence is not
//! counted.
//!
//! # Instrumentation
//!
//! Each slot remembers how many probes the insertion that filled it needed. The table also
//! remembers the order in which slots were filled, so [`ProbingHashTable::write_stats`] can
//! describe clustering as the table filled up.
//!
//! # Examples
//!
//! ```
//! # use keyfreq::htable::Probing;
//! # use keyfreq::htable::ProbingHashTable;
//! let mut table = ProbingHashTable::new(7, Probing::Linear);
//! for key in ["a", "b", "a", "c"] {
//!     table.insert(key).unwrap();
//! }
//! assert_eq!(table.search("a"), 2);
//! assert_eq!(table.search("z"), 0);
//! assert_eq!(table.num_keys(), 3);
//! ```

mod report;
mod table;

pub use self::report::Checkpoint;
pub use self::table::Entries;
pub use self::table::ProbingHashTable;
pub use crate::config::Probing;
