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

//! Tree nodes, rotations and the red-black repair step.

use std::cmp::Ordering;

use log::trace;

use crate::config::TreeMode;

pub(super) type Link = Option<Box<Node>>;

/// Colour tag of a tree node. Only meaningful for [`TreeMode::RedBlack`] trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colour {
    /// Newly inserted nodes start red.
    Red,
    /// Colour of the root after every red-black insertion.
    Black,
}

#[derive(Debug)]
pub(super) struct Node {
    pub(super) key: String,
    pub(super) frequency: u64,
    pub(super) colour: Colour,
    pub(super) left: Link,
    pub(super) right: Link,
}

impl Node {
    fn leaf(key: &str) -> Box<Self> {
        Box::new(Node {
            key: key.to_owned(),
            frequency: 1,
            colour: Colour::Red,
            left: None,
            right: None,
        })
    }

    fn left(&self) -> &Link {
        &self.left
    }

    fn right(&self) -> &Link {
        &self.right
    }
}

fn is_red(link: &Link) -> bool {
    matches!(link, Some(node) if node.colour == Colour::Red)
}

/// True if `link` is red and so is the grandchild picked by `next`.
fn red_chain(link: &Link, next: fn(&Node) -> &Link) -> bool {
    match link {
        Some(child) if child.colour == Colour::Red => is_red(next(child)),
        _ => false,
    }
}

fn paint(link: &mut Link, colour: Colour) {
    if let Some(node) = link {
        node.colour = colour;
    }
}

fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    match node.right.take() {
        Some(mut pivot) => {
            trace!("rotating left at {:?}", node.key);
            node.right = pivot.left.take();
            pivot.left = Some(node);
            pivot
        }
        None => node,
    }
}

fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    match node.left.take() {
        Some(mut pivot) => {
            trace!("rotating right at {:?}", node.key);
            node.left = pivot.right.take();
            pivot.right = Some(node);
            pivot
        }
        None => node,
    }
}

/// Pushes a red-red violation one level up by making `node` red and its children black.
fn split(node: &mut Node) {
    trace!("recolouring around {:?}", node.key);
    node.colour = Colour::Red;
    paint(&mut node.left, Colour::Black);
    paint(&mut node.right, Colour::Black);
}

/// Repairs a red child with a red child below `node`.
///
/// At most one of the four chain shapes is handled per call. With a red sibling the
/// violation moves up to the caller; otherwise one or two rotations settle it here.
pub(super) fn fixup(mut node: Box<Node>) -> Box<Node> {
    if red_chain(&node.left, Node::left) {
        if is_red(&node.right) {
            split(&mut node);
        } else {
            node = rotate_right(node);
            node.colour = Colour::Black;
            paint(&mut node.right, Colour::Red);
        }
    } else if red_chain(&node.left, Node::right) {
        if is_red(&node.right) {
            split(&mut node);
        } else {
            node.left = node.left.take().map(rotate_left);
            node = rotate_right(node);
            node.colour = Colour::Black;
            paint(&mut node.right, Colour::Red);
        }
    } else if red_chain(&node.right, Node::left) {
        if is_red(&node.left) {
            split(&mut node);
        } else {
            node.right = node.right.take().map(rotate_right);
            node = rotate_left(node);
            node.colour = Colour::Black;
            paint(&mut node.left, Colour::Red);
        }
    } else if red_chain(&node.right, Node::right) {
        if is_red(&node.left) {
            split(&mut node);
        } else {
            node = rotate_left(node);
            node.colour = Colour::Black;
            paint(&mut node.left, Colour::Red);
        }
    }
    node
}

/// Inserts or counts `key` below `link`, returning the new subtree root and the key's
/// frequency.
pub(super) fn insert(link: Link, key: &str, mode: TreeMode) -> (Box<Node>, u64) {
    let mut node = match link {
        Some(node) => node,
        None => return (Node::leaf(key), 1),
    };
    let frequency = match key.cmp(node.key.as_str()) {
        Ordering::Equal => {
            node.frequency += 1;
            node.frequency
        }
        Ordering::Less => {
            let (child, frequency) = insert(node.left.take(), key, mode);
            node.left = Some(child);
            frequency
        }
        Ordering::Greater => {
            let (child, frequency) = insert(node.right.take(), key, mode);
            node.right = Some(child);
            frequency
        }
    };
    match mode {
        TreeMode::RedBlack => (fixup(node), frequency),
        TreeMode::Plain => (node, frequency),
    }
}

pub(super) fn find<'a>(mut link: &'a Link, key: &str) -> Option<&'a Node> {
    while let Some(node) = link {
        link = match key.cmp(node.key.as_str()) {
            Ordering::Equal => return Some(&**node),
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
        };
    }
    None
}

pub(super) fn inorder<F: FnMut(u64, &str)>(link: &Link, visit: &mut F) {
    if let Some(node) = link {
        inorder(&node.left, visit);
        visit(node.frequency, &node.key);
        inorder(&node.right, visit);
    }
}

pub(super) fn preorder<F: FnMut(&str)>(link: &Link, visit: &mut F) {
    if let Some(node) = link {
        visit(&node.key);
        preorder(&node.left, visit);
        preorder(&node.right, visit);
    }
}

pub(super) fn height(link: &Link) -> usize {
    match link {
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
        None => 0,
    }
}

/// Number of black nodes on every path from `link` down to an empty subtree, or `None`
/// if a red node has a red child or two paths disagree.
pub(super) fn black_height(link: &Link) -> Option<usize> {
    let Some(node) = link else {
        return Some(0);
    };
    if node.colour == Colour::Red && (is_red(&node.left) || is_red(&node.right)) {
        return None;
    }
    let left = black_height(&node.left)?;
    let right = black_height(&node.right)?;
    if left != right {
        return None;
    }
    Some(left + usize::from(node.colour == Colour::Black))
}
