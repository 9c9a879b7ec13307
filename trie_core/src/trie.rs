//! Character trie mapping keywords to the documents that contain them.
//!
//! Lookups walk one edge per character of the query and return the ids held by
//! the node the walk ends on. Ids stored on descendant nodes are not merged in,
//! so `"cat"` finds documents containing the keyword `cat` but not `catalog`.

use crate::DocumentId;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

#[derive(Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// Ids in insertion order. A document repeating a keyword appears once per
    /// occurrence.
    document_ids: Vec<DocumentId>,
}

/// Prefix tree over keyword characters. The root is the empty prefix and never
/// holds document ids.
#[derive(Default)]
pub struct Trie {
    root: TrieNode,
    node_count: usize,
    keyword_count: usize,
}

impl Trie {
    pub fn new() -> Self { Self::default() }

    /// Append `id` to the node spelled by `keyword`, creating nodes as needed.
    /// Empty keywords are ignored.
    pub fn insert(&mut self, keyword: &str, id: DocumentId) {
        if keyword.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for ch in keyword.chars() {
            node = match node.children.entry(ch) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => {
                    self.node_count += 1;
                    e.insert(TrieNode::default())
                }
            };
        }
        if node.document_ids.is_empty() {
            self.keyword_count += 1;
        }
        node.document_ids.push(id);
    }

    /// Ids on the node reached by walking `query`, or an empty slice when some
    /// character has no edge.
    pub fn lookup_prefix(&self, query: &str) -> &[DocumentId] {
        match self.find(query) {
            Some(node) => &node.document_ids,
            None => &[],
        }
    }

    pub fn contains_keyword(&self, keyword: &str) -> bool {
        !keyword.is_empty() && self.find(keyword).is_some_and(|n| !n.document_ids.is_empty())
    }

    /// Nodes below the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Distinct keywords with at least one document.
    pub fn keyword_count(&self) -> usize {
        self.keyword_count
    }

    fn find(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}

// Nodes nest one level per character; tear down with an explicit stack so a
// long keyword cannot exhaust the call stack.
impl Drop for Trie {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> =
            self.root.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("node_count", &self.node_count)
            .field("keyword_count", &self.keyword_count)
            .finish()
    }
}
