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

use crate::config::TreeMode;
use crate::error::Error;
use crate::store::FrequencyStore;
use crate::tree::Colour;
use crate::tree::Iter;
use crate::tree::node;
use crate::tree::node::Link;

/// Binary search tree mapping string keys to occurrence counts.
///
/// See [`crate::tree`] for an overview.
#[derive(Debug)]
pub struct FrequencyTree {
    mode: TreeMode,
    pub(super) root: Link,
    num_keys: usize,
}

impl FrequencyTree {
    /// Creates an empty tree with the given balancing mode.
    pub fn new(mode: TreeMode) -> Self {
        debug!("creating {mode} tree");
        Self {
            mode,
            root: None,
            num_keys: 0,
        }
    }

    /// Returns the balancing mode of this tree.
    pub fn mode(&self) -> TreeMode {
        self.mode
    }

    /// Returns the number of distinct keys.
    pub fn num_keys(&self) -> usize {
        self.num_keys
    }

    /// Returns true if the tree holds no key.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Records one occurrence of `key` and returns its new frequency.
    pub fn insert(&mut self, key: &str) -> u64 {
        let (mut root, frequency) = node::insert(self.root.take(), key, self.mode);
        if self.mode == TreeMode::RedBlack {
            root.colour = Colour::Black;
        }
        self.root = Some(root);
        if frequency == 1 {
            self.num_keys += 1;
        }
        frequency
    }

    /// Returns true if `key` is in the tree.
    pub fn search(&self, key: &str) -> bool {
        node::find(&self.root, key).is_some()
    }

    /// Returns the frequency of `key`, or zero if it is not in the tree.
    pub fn frequency(&self, key: &str) -> u64 {
        node::find(&self.root, key).map_or(0, |node| node.frequency)
    }

    /// Returns the colour of the node holding `key`.
    pub fn colour(&self, key: &str) -> Option<Colour> {
        node::find(&self.root, key).map(|node| node.colour)
    }

    /// Deleting keys is not supported; always fails with
    /// [`ErrorKind::Unsupported`](crate::error::ErrorKind::Unsupported).
    pub fn delete(&mut self, _key: &str) -> Result<u64, Error> {
        Err(Error::unsupported("tree deletion"))
    }

    /// Calls `visit` with `(frequency, key)` for every node in ascending key order.
    pub fn inorder<F: FnMut(u64, &str)>(&self, mut visit: F) {
        node::inorder(&self.root, &mut visit);
    }

    /// Calls `visit` with the key of every node, each node before its subtrees.
    pub fn preorder<F: FnMut(&str)>(&self, mut visit: F) {
        node::preorder(&self.root, &mut visit);
    }

    /// Returns an iterator over `(key, frequency)` in ascending key order.
    ///
    /// Unlike [`Self::inorder`] this walks the tree with an explicit stack.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root)
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        node::height(&self.root)
    }

    /// Returns the black height of the tree, or `None` if a red node has a red child or two
    /// paths cross different numbers of black nodes.
    ///
    /// Only meaningful for [`TreeMode::RedBlack`] trees.
    pub fn black_height(&self) -> Option<usize> {
        node::black_height(&self.root)
    }
}

impl Drop for FrequencyTree {
    fn drop(&mut self) {
        // unlink children first so a degenerate chain does not recurse in Box::drop
        let mut stack: Vec<Box<node::Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl FrequencyStore for FrequencyTree {
    fn insert(&mut self, key: &str) -> Result<u64, Error> {
        Ok(FrequencyTree::insert(self, key))
    }

    fn frequency(&self, key: &str) -> u64 {
        FrequencyTree::frequency(self, key)
    }

    fn num_keys(&self) -> usize {
        self.num_keys
    }

    fn for_each_entry(&self, visitor: &mut dyn FnMut(u64, &str)) {
        self.inorder(visitor);
    }

    fn export(&self, out: &mut dyn Write) -> Result<(), Error> {
        self.write_dot(out)
    }
}
