//! Node storage for the trie map.
//!
//! Nodes live in an arena and refer to their children by [`NodeId`]. The trie
//! is a strict tree, so every node except the root is owned by exactly one
//! parent branch and no back references are needed.

use super::branches::Branches;

/// Handle to a node slot in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node. It always exists and holds the empty key's value.
    pub const ROOT: NodeId = NodeId(0);
}

/// A node in the trie map.
///
/// A node's path from the root spells out a key. The node holds that key's
/// value, if one has been stored, and the branches to its children.
#[derive(Debug)]
pub struct TrieNode<V, B> {
    /// Value stored for the key ending at this node
    pub value: Option<V>,

    /// Map of key elements to child nodes
    pub branches: B,
}

impl<V, B: Default> TrieNode<V, B> {
    /// Creates a new node with no value and no children.
    pub fn new() -> Self {
        Self {
            value: None,
            branches: B::default(),
        }
    }
}

impl<V, B: Default> Default for TrieNode<V, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, B> TrieNode<V, B> {
    /// Returns `true` if this node stores a value or has more than one child.
    ///
    /// Branch points are never pruned when a key below them is deleted.
    pub fn is_branch_point(&self) -> bool
    where
        B: Branches,
    {
        self.value.is_some() || self.branches.len() > 1
    }
}

/// Slot storage for trie nodes with a free list for reuse.
#[derive(Debug)]
pub(crate) struct NodeArena<V, B> {
    slots: Vec<TrieNode<V, B>>,
    free: Vec<NodeId>,
}

impl<V, B: Default> NodeArena<V, B> {
    /// Creates an arena holding only the root node.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity.max(1));
        slots.push(TrieNode::new());
        Self {
            slots,
            free: Vec::new(),
        }
    }

    /// Allocates an empty node, reusing a freed slot when one is available.
    pub(crate) fn allocate(&mut self) -> NodeId {
        match self.free.pop() {
            Some(id) => id,
            None => {
                self.slots.push(TrieNode::new());
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Drops every node except the root and empties the root.
    pub(crate) fn reset(&mut self) {
        self.slots.truncate(1);
        self.free.clear();
        self.slots[NodeId::ROOT.0] = TrieNode::new();
    }
}

impl<V, B> NodeArena<V, B> {
    pub(crate) fn node(&self, id: NodeId) -> &TrieNode<V, B> {
        &self.slots[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TrieNode<V, B> {
        &mut self.slots[id.0]
    }

    /// Number of nodes currently reachable, root included.
    pub(crate) fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Frees the subtree rooted at `id`, which must already be unlinked from
    /// its parent. Returns the number of nodes freed.
    pub(crate) fn release_subtree(&mut self, id: NodeId) -> usize
    where
        B: Branches,
    {
        let mut pending = vec![id];
        let mut released = 0;

        while let Some(current) = pending.pop() {
            let node = &mut self.slots[current.0];
            pending.extend(node.branches.entries().map(|(_, child)| child));
            node.branches.clear();
            node.value = None;
            self.free.push(current);
            released += 1;
        }

        released
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::trie_map::branches::FnvBranches;

    type Arena = NodeArena<u32, FnvBranches<char>>;

    #[test]
    fn test_node_new() {
        let node: TrieNode<u32, FnvBranches<char>> = TrieNode::new();
        assert!(node.value.is_none());
        assert!(node.branches.is_empty());
        assert!(!node.is_branch_point());
    }

    #[test]
    fn test_branch_point() {
        let mut node: TrieNode<u32, FnvBranches<char>> = TrieNode::new();
        node.branches.insert_child('a', NodeId(1));
        assert!(!node.is_branch_point());

        node.branches.insert_child('b', NodeId(2));
        assert!(node.is_branch_point());

        node.branches.remove_child(&'b');
        node.value = Some(7);
        assert!(node.is_branch_point());
    }

    #[test]
    fn test_arena_reuses_released_slots() {
        let mut arena = Arena::with_capacity(4);
        assert_eq!(arena.live_count(), 1);

        let a = arena.allocate();
        let b = arena.allocate();
        arena.node_mut(NodeId::ROOT).branches.insert_child('a', a);
        arena.node_mut(a).branches.insert_child('b', b);
        arena.node_mut(b).value = Some(1);
        assert_eq!(arena.live_count(), 3);

        arena.node_mut(NodeId::ROOT).branches.remove_child(&'a');
        assert_eq!(arena.release_subtree(a), 2);
        assert_eq!(arena.live_count(), 1);

        let reused = arena.allocate();
        assert!(reused == a || reused == b);
        assert!(arena.node(reused).value.is_none());
        assert!(arena.node(reused).branches.is_empty());
    }

    #[test]
    fn test_arena_reset() {
        let mut arena = Arena::with_capacity(0);
        let a = arena.allocate();
        arena.node_mut(NodeId::ROOT).branches.insert_child('x', a);
        arena.node_mut(NodeId::ROOT).value = Some(3);

        arena.reset();
        assert_eq!(arena.live_count(), 1);
        assert!(arena.node(NodeId::ROOT).value.is_none());
        assert!(arena.node(NodeId::ROOT).branches.is_empty());
    }
}
