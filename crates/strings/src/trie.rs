use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: HashMap<u8, usize>,
    /// Words ending exactly here.
    accepting: usize,
    /// Words passing through (or ending at) this node.
    common: usize,
}

/// Byte-alphabet trie counting multiplicities.
#[derive(Clone, Debug, Default)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
        }
    }

    /// Number of inserted words, multiplicity included.
    pub fn len(&self) -> usize {
        self.nodes[0].common
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// O(|word|).
    pub fn insert(&mut self, word: &str) {
        let mut node = 0;
        self.nodes[0].common += 1;
        for &b in word.as_bytes() {
            let next = match self.nodes[node].children.get(&b) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(b, next);
                    next
                }
            };
            self.nodes[next].common += 1;
            node = next;
        }
        self.nodes[node].accepting += 1;
    }

    /// True iff `word` itself was inserted. O(|word|).
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| self.nodes[node].accepting > 0)
    }

    /// True iff some inserted word starts with `prefix`. O(|prefix|).
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Longest prefix `word` shares with a *different* stored word,
    /// assuming `word` itself has been inserted (its own copy does not
    /// count as a match). O(|word|).
    pub fn lcp_length(&self, word: &str) -> usize {
        let mut node = 0;
        for (i, &b) in word.as_bytes().iter().enumerate() {
            match self.nodes[node].children.get(&b) {
                Some(&next) if self.nodes[next].common > 1 => node = next,
                _ => return i,
            }
        }
        word.len()
    }

    fn walk(&self, word: &str) -> Option<usize> {
        let mut node = 0;
        for &b in word.as_bytes() {
            node = *self.nodes[node].children.get(&b)?;
        }
        Some(node)
    }
}
