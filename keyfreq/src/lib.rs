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

//! In-memory key frequency counting.
//!
//! Given a stream of string keys, a store records how many times each distinct key has been
//! seen. Two interchangeable backends implement [`store::FrequencyStore`]:
//!
//! * [`htable::ProbingHashTable`]: a fixed-capacity open-addressing hash table using linear
//!   probing or double hashing, instrumented with per-insertion probe counts.
//! * [`tree::FrequencyTree`]: a binary search tree, optionally kept balanced as a red-black
//!   tree.
//!
//! Tokenizing input and driving the store is left to the caller.
//!
//! ```
//! # use keyfreq::config::StoreConfig;
//! # use keyfreq::store::FrequencyStore;
//! let mut store = "double:13".parse::<StoreConfig>().unwrap().build().unwrap();
//! for word in "the cat and the hat".split_whitespace() {
//!     store.insert(word).unwrap();
//! }
//! assert_eq!(store.frequency("the"), 2);
//! assert_eq!(store.num_keys(), 4);
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod htable;
pub mod store;
pub mod tree;
