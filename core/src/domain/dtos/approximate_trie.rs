/// Index of a node inside the trie arena.
type NodeId = usize;

/// The root node is always the first slot of the arena.
const ROOT: NodeId = 0;

/// The mismatch tolerance carried along a single lookup branch.
///
/// A branch starts with `OneSubstitution` when approximate lookups are
/// requested and moves to `ExactOnly` the first time it follows a child whose
/// label differs from the key character. It never moves back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tolerance {
    OneSubstitution,
    ExactOnly,
}

impl Tolerance {
    fn from_exact_match_only(exact_match_only: bool) -> Self {
        if exact_match_only {
            Tolerance::ExactOnly
        } else {
            Tolerance::OneSubstitution
        }
    }
}

#[derive(Clone, Debug)]
struct TrieNode<V> {
    /// `None` only for the root node.
    label: Option<u8>,
    children: Vec<NodeId>,
    values: Vec<V>,
}

impl<V> TrieNode<V> {
    fn new(label: Option<u8>) -> Self {
        TrieNode {
            label,
            children: Vec::new(),
            values: Vec::new(),
        }
    }
}

/// A prefix keyed multimap supporting exact and single substitution lookups.
///
/// Nodes are stored in an arena and addressed by index. Children are kept in
/// insertion order, so lookups are deterministic for a given trie state. Keys
/// are expected to be ASCII strings over a small alphabet (DNA bases here).
///
/// # Example
///
/// ```
/// use gmatch_core::domain::dtos::approximate_trie::ApproximateTrie;
///
/// let mut trie = ApproximateTrie::new();
/// trie.insert("ACGT", 1);
/// trie.insert("ACGA", 2);
///
/// assert_eq!(trie.find("ACGT", true), vec![1]);
/// assert_eq!(trie.find("ACGT", false), vec![1, 2]);
/// assert_eq!(trie.find("TTTT", false), Vec::<i32>::new());
/// ```
///
#[derive(Clone, Debug)]
pub struct ApproximateTrie<V> {
    nodes: Vec<TrieNode<V>>,
}

impl<V> Default for ApproximateTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> ApproximateTrie<V> {
    pub fn new() -> Self {
        ApproximateTrie {
            nodes: vec![TrieNode::new(None)],
        }
    }

    /// Discard every node and value, keeping only an empty root.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.nodes.push(TrieNode::new(None));
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a value under the given key.
    ///
    /// Repeated insertions of the same key accumulate their values at the
    /// same terminal node.
    pub fn insert(&mut self, key: &str, value: V) {
        let mut current = ROOT;

        for label in key.bytes() {
            current = match self.child_with_label(current, label) {
                Some(child) => child,
                None => self.push_child(current, label),
            };
        }

        self.nodes[current].values.push(value);
    }

    fn child_with_label(&self, parent: NodeId, label: u8) -> Option<NodeId> {
        self.nodes[parent]
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[*child].label == Some(label))
    }

    fn push_child(&mut self, parent: NodeId, label: u8) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(TrieNode::new(Some(label)));
        self.nodes[parent].children.push(id);
        id
    }
}

impl<V: Clone> ApproximateTrie<V> {
    /// Collect the values of every key matching `key`.
    ///
    /// When `exact_match_only` is false each result path may differ from the
    /// key by at most one substituted character. The trie does not check that
    /// `key` has the same length as the inserted keys.
    pub fn find(&self, key: &str, exact_match_only: bool) -> Vec<V> {
        self.collect(
            ROOT,
            key.as_bytes(),
            Tolerance::from_exact_match_only(exact_match_only),
            Vec::new(),
        )
    }

    fn collect(
        &self,
        node: NodeId,
        key: &[u8],
        tolerance: Tolerance,
        mut found: Vec<V>,
    ) -> Vec<V> {
        let (current, rest) = match key.split_first() {
            None => {
                found.extend(self.nodes[node].values.iter().cloned());
                return found;
            }
            Some(split) => split,
        };

        for child in self.nodes[node].children.iter().copied() {
            if self.nodes[child].label == Some(*current) {
                found = self.collect(child, rest, tolerance, found);
            } else if tolerance == Tolerance::OneSubstitution {
                found = self.collect(child, rest, Tolerance::ExactOnly, found);
            }
        }

        found
    }
}
