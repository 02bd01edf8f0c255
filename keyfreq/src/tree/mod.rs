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

//! Binary search tree counting key frequencies, optionally red-black balanced.
//!
//! # Overview
//!
//! Keys are ordered lexicographically by their bytes. Inserting a key either creates a red
//! leaf with frequency one or increments the frequency of the existing node.
//!
//! In [`TreeMode::RedBlack`] mode every node on the insertion path is repaired on the way
//! back up: a red child with a red child is resolved either by recolouring (when the
//! sibling is red, which pushes the problem one level up) or by one or two rotations. The
//! root is painted black after each insertion, so no red node ever has a red child and every
//! path from the root to an empty subtree crosses the same number of black nodes.
//!
//! In [`TreeMode::Plain`] mode no repair happens; sorted input degenerates into a list.
//!
//! The mode belongs to each tree, so trees of different modes can be used side by side.
//!
//! # Examples
//!
//! ```
//! # use keyfreq::tree::FrequencyTree;
//! # use keyfreq::tree::TreeMode;
//! let mut tree = FrequencyTree::new(TreeMode::RedBlack);
//! for key in ["d", "b", "f", "b"] {
//!     tree.insert(key);
//! }
//! assert!(tree.search("b"));
//! assert_eq!(tree.frequency("b"), 2);
//!
//! let mut listing = vec![];
//! tree.inorder(|frequency, key| listing.push(format!("{frequency} {key}")));
//! assert_eq!(listing, ["2 b", "1 d", "1 f"]);
//! ```
//!
//! # Graphviz export
//!
//! [`FrequencyTree::write_dot`] writes a DOT description that can be rendered with
//! `dot -Tpdf < tree.dot > tree.pdf`.

mod dot;
mod frequency_tree;
mod iter;
mod node;

pub use self::frequency_tree::FrequencyTree;
pub use self::iter::Iter;
pub use self::node::Colour;
pub use crate::config::TreeMode;
