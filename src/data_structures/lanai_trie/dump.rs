// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Human-readable tree rendering of a Lanai Trie.
//!
//! The dump is a display artifact only; it is never parsed back.

use std::fmt::{self, Display, Formatter};

use super::node::TrieNode;
use super::LanaiTrie;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Borrowed view of a trie that renders as a box-drawing tree.
///
/// Interior nodes show their edge character, terminal nodes show
/// `word* (frequency)`, and the rendering ends with the word count.
#[derive(Debug, Clone, Copy)]
pub struct TreeDump<'a> {
    trie: &'a LanaiTrie,
}

impl<'a> TreeDump<'a> {
    pub(super) fn new(trie: &'a LanaiTrie) -> Self {
        Self { trie }
    }
}

impl Display for TreeDump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.trie.is_empty() {
            return write!(f, "[]");
        }

        writeln!(f, "Trie Structure:")?;
        let mut prefix = String::new();
        write_node(f, &self.trie.root, &mut prefix, true)?;
        write!(f, "\nTotal words: {}", self.trie.size())
    }
}

fn connector(is_last: bool) -> &'static str {
    if is_last {
        LAST_BRANCH
    } else {
        BRANCH
    }
}

fn indent(is_last: bool) -> &'static str {
    if is_last {
        SPACE
    } else {
        PIPE
    }
}

/// Writes `node` (when terminal) and then its subtree.
///
/// The root is written as a last child, so top-level entries sit one indent
/// in. Terminal children continue at the child indent; an interior child
/// prints its edge there and descends one indent further, as a last child.
fn write_node(
    f: &mut Formatter<'_>,
    node: &TrieNode,
    prefix: &mut String,
    is_last: bool,
) -> fmt::Result {
    if node.is_terminal {
        writeln!(
            f,
            "{prefix}{}{}* ({})",
            connector(is_last),
            node.word,
            node.frequency
        )?;
    }

    let depth = prefix.len();
    prefix.push_str(indent(is_last));
    let last_index = node.children.len().saturating_sub(1);

    for (i, (c, child)) in node.children.iter().enumerate() {
        let is_last_child = i == last_index;

        if child.is_terminal {
            write_node(f, child, prefix, is_last_child)?;
        } else {
            writeln!(f, "{prefix}{}{c}", connector(is_last_child))?;
            let child_depth = prefix.len();
            prefix.push_str(indent(is_last_child));
            write_node(f, child, prefix, true)?;
            prefix.truncate(child_depth);
        }
    }

    prefix.truncate(depth);
    Ok(())
}
