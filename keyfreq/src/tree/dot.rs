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

//! Graphviz DOT export.

use std::borrow::Cow;
use std::io;
use std::io::Write;

use crate::config::TreeMode;
use crate::error::Error;
use crate::tree::Colour;
use crate::tree::FrequencyTree;
use crate::tree::node::Node;

impl FrequencyTree {
    /// Writes a DOT description of the tree.
    ///
    /// Each node is a record labelled `key:frequency` with one port per child, edges go
    /// from the parent's child port to the child. Nodes of a red-black tree are outlined in
    /// their colour; every node of a plain tree is black.
    pub fn write_dot<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), Error> {
        writeln!(out, "digraph tree {{")?;
        writeln!(out, "node [shape = Mrecord, penwidth = 2];")?;
        if let Some(root) = &self.root {
            write_node(root, self.mode(), out)?;
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

fn write_node<W: Write + ?Sized>(node: &Node, mode: TreeMode, out: &mut W) -> io::Result<()> {
    let colour = match (mode, node.colour) {
        (TreeMode::RedBlack, Colour::Red) => "red",
        _ => "black",
    };
    let id = escape_id(&node.key);
    writeln!(
        out,
        "\"{id}\"[label=\"{{<f0>{}:{}|{{<f1>|<f2>}}}}\"color={colour}];",
        escape_label(&node.key),
        node.frequency
    )?;
    if let Some(left) = &node.left {
        write_node(left, mode, out)?;
        writeln!(out, "\"{id}\":f1 -> \"{}\":f0;", escape_id(&left.key))?;
    }
    if let Some(right) = &node.right {
        write_node(right, mode, out)?;
        writeln!(out, "\"{id}\":f2 -> \"{}\":f0;", escape_id(&right.key))?;
    }
    Ok(())
}

fn escape_id(key: &str) -> Cow<'_, str> {
    escape(key, &['"', '\\'])
}

/// Record labels additionally treat braces, bars and angle brackets as structure.
fn escape_label(key: &str) -> Cow<'_, str> {
    escape(key, &['"', '\\', '{', '}', '|', '<', '>'])
}

fn escape<'a>(key: &'a str, special: &[char]) -> Cow<'a, str> {
    if !key.contains(special) {
        return Cow::Borrowed(key);
    }
    let mut escaped = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if special.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}
