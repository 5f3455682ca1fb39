//! Arena-backed prefix trie used by the lexicon for prefix lookups.
//!
//! Nodes live in a flat `Vec` and reference each other by index rather than
//! by owned pointer, so removal never has to walk back up freeing parents
//! and insertion never allocates a node graph deeper than the arena itself.

use hashbrown::HashMap;

struct TrieNode {
    children: HashMap<u8, usize>,
    is_word: bool,
}

impl TrieNode {
    fn new() -> Self {
        TrieNode {
            children: HashMap::new(),
            is_word: false,
        }
    }
}

/// Stores lowercase `[a-z']` words keyed byte-by-byte. Words outside that
/// alphabet are simply never found, since no byte value for them exists
/// in any node's child map.
pub struct Trie {
    nodes: Vec<TrieNode>,
}

const ROOT: usize = 0;

impl Trie {
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::new()],
        }
    }

    pub fn insert(&mut self, word: &str) {
        let mut current = ROOT;
        for &byte in word.as_bytes() {
            current = match self.nodes[current].children.get(&byte) {
                Some(&next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[current].children.insert(byte, next);
                    next
                }
            };
        }
        self.nodes[current].is_word = true;
    }

    /// Per the current design, removal only clears the terminal marker; it
    /// does not reclaim now-unreachable nodes from the arena. That's a
    /// memory wart, not a correctness bug: lookups never traverse into a
    /// node that isn't the prefix of a word still marked terminal below it.
    pub fn remove(&mut self, word: &str) {
        if let Some(idx) = self.find_node(word) {
            self.nodes[idx].is_word = false;
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find_node(word)
            .map(|idx| self.nodes[idx].is_word)
            .unwrap_or(false)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn find_node(&self, word: &str) -> Option<usize> {
        let mut current = ROOT;
        for &byte in word.as_bytes() {
            current = *self.nodes[current].children.get(&byte)?;
        }
        Some(current)
    }

    /// Depth-first collects up to `max` words beneath `prefix`, stopping as
    /// soon as that many terminal nodes have been visited. Traversal order
    /// at each node is by ascending byte value, so the result is
    /// deterministic but not biased toward any particular ranking; callers
    /// that want frequency-ordered results re-sort the (small) result set.
    pub fn words_with_prefix(&self, prefix: &str, max: usize) -> Vec<String> {
        let mut out = Vec::new();
        if max == 0 {
            return out;
        }
        let Some(start) = self.find_node(prefix) else {
            return out;
        };
        let mut stack = vec![(start, prefix.as_bytes().to_vec())];
        while let Some((idx, path)) = stack.pop() {
            if out.len() >= max {
                break;
            }
            if self.nodes[idx].is_word {
                out.push(String::from_utf8(path.clone()).expect("ascii path"));
                if out.len() >= max {
                    break;
                }
            }
            let mut children: Vec<(&u8, &usize)> = self.nodes[idx].children.iter().collect();
            children.sort_by_key(|(byte, _)| std::cmp::Reverse(**byte));
            for (&byte, &child) in children {
                let mut child_path = path.clone();
                child_path.push(byte);
                stack.push((child, child_path));
            }
        }
        out
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}
