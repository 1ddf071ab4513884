//! Per-node branching for the trie map.
//!
//! Each trie node maps key elements to child nodes. The map itself is
//! pluggable: any associative container that supports lookup, insertion and
//! removal by element can serve, hashed or ordered.

use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hash};

use super::node::NodeId;

/// Hashed branching using FNV, the default for [`HashTrieMap`](super::HashTrieMap).
pub type FnvBranches<A> = hashbrown::HashMap<A, NodeId, fnv::FnvBuildHasher>;

/// Ordered branching, the default for [`BTreeTrieMap`](super::BTreeTrieMap).
pub type OrderedBranches<A> = BTreeMap<A, NodeId>;

/// Element-to-child lookup stored at every trie node.
pub trait Branches: Default {
    /// The key element labelling each branch.
    type Element;

    /// Iterator over `(element, child)` pairs.
    type Entries<'a>: Iterator<Item = (&'a Self::Element, NodeId)>
    where
        Self: 'a;

    /// Returns the child reached through `element`, if any.
    fn child(&self, element: &Self::Element) -> Option<NodeId>;

    /// Links `element` to `child`, returning the previously linked child.
    fn insert_child(&mut self, element: Self::Element, child: NodeId) -> Option<NodeId>;

    /// Unlinks the child reached through `element` and returns it.
    fn remove_child(&mut self, element: &Self::Element) -> Option<NodeId>;

    /// Number of children.
    fn len(&self) -> usize;

    /// Returns `true` if there are no children.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unlinks every child.
    fn clear(&mut self);

    /// Iterates over all `(element, child)` pairs.
    fn entries(&self) -> Self::Entries<'_>;
}

fn copied_entry<'a, A>((element, child): (&'a A, &'a NodeId)) -> (&'a A, NodeId) {
    (element, *child)
}

impl<A, S> Branches for hashbrown::HashMap<A, NodeId, S>
where
    A: Eq + Hash,
    S: BuildHasher + Default,
{
    type Element = A;

    type Entries<'a> = std::iter::Map<
        hashbrown::hash_map::Iter<'a, A, NodeId>,
        fn((&'a A, &'a NodeId)) -> (&'a A, NodeId),
    >
    where
        Self: 'a;

    fn child(&self, element: &Self::Element) -> Option<NodeId> {
        self.get(element).copied()
    }

    fn insert_child(&mut self, element: Self::Element, child: NodeId) -> Option<NodeId> {
        self.insert(element, child)
    }

    fn remove_child(&mut self, element: &Self::Element) -> Option<NodeId> {
        self.remove(element)
    }

    fn len(&self) -> usize {
        hashbrown::HashMap::len(self)
    }

    fn clear(&mut self) {
        hashbrown::HashMap::clear(self);
    }

    fn entries(&self) -> Self::Entries<'_> {
        hashbrown::HashMap::iter(self).map(copied_entry as fn(_) -> _)
    }
}

impl<A: Ord> Branches for BTreeMap<A, NodeId> {
    type Element = A;

    type Entries<'a> = std::iter::Map<
        std::collections::btree_map::Iter<'a, A, NodeId>,
        fn((&'a A, &'a NodeId)) -> (&'a A, NodeId),
    >
    where
        Self: 'a;

    fn child(&self, element: &Self::Element) -> Option<NodeId> {
        self.get(element).copied()
    }

    fn insert_child(&mut self, element: Self::Element, child: NodeId) -> Option<NodeId> {
        self.insert(element, child)
    }

    fn remove_child(&mut self, element: &Self::Element) -> Option<NodeId> {
        self.remove(element)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    fn entries(&self) -> Self::Entries<'_> {
        BTreeMap::iter(self).map(copied_entry as fn(_) -> _)
    }
}
