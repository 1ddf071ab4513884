//! Trie Map Implementation
//!
//! This module provides a map keyed by sequences of comparable elements,
//! stored as a trie. Keys sharing a prefix share the nodes spelling it, and
//! every node keeps its own element-to-child branches.
//!
//! # Key features
//!
//! * Generic over the key type through [`SequenceKey`] (`str`, `String`,
//!   slices, vectors and arrays out of the box)
//! * Pluggable per-node branching through [`Branches`]: hashed
//!   ([`HashTrieMap`]) or ordered ([`BTreeTrieMap`])
//! * The empty key is a first-class key stored at the root
//! * Deletion prunes the chain of nodes no other key depends on, so memory
//!   tracks live keys and their shared prefixes
//!
//! # Example
//!
//! ```
//! use kukui_lib::data_structures::trie_map::HashTrieMap;
//!
//! let mut map: HashTrieMap<str, &str> = HashTrieMap::new();
//! map.insert("dog", "DOG").unwrap();
//! map.insert("doggy", "DOGGY").unwrap();
//! map.insert("cat", "CAT").unwrap();
//!
//! assert_eq!(map.find("dog").unwrap(), Some(&"DOG"));
//! assert!(map.find_prefix("do").unwrap());
//! assert_eq!(map.find("do").unwrap(), None);
//!
//! map.delete("dog").unwrap();
//! assert_eq!(map.find("dog").unwrap(), None);
//! assert!(map.find_prefix("dog").unwrap());
//! assert_eq!(map.find("doggy").unwrap(), Some(&"DOGGY"));
//! ```

mod branches;
mod config;
mod error;
mod key;
mod node;

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

pub use branches::{Branches, FnvBranches, OrderedBranches};
pub use config::TrieMapConfig;
pub use error::{TrieMapError, TrieMapResult};
pub use key::SequenceKey;
pub use node::{NodeId, TrieNode};

use node::NodeArena;

/// Trie map with FNV-hashed branches at every node.
pub type HashTrieMap<K, V> = TrieMap<K, V, FnvBranches<<K as SequenceKey>::Element>>;

/// Trie map with ordered branches at every node.
///
/// Prefix enumeration on this variant yields keys in lexicographic order.
pub type BTreeTrieMap<K, V> = TrieMap<K, V, OrderedBranches<<K as SequenceKey>::Element>>;

/// A map from sequence keys to values, stored as a trie.
///
/// # Type Parameters
///
/// * `K` - The key type. Each key is walked element by element.
/// * `V` - The value type.
/// * `B` - The per-node branching container.
pub struct TrieMap<K: ?Sized, V, B> {
    /// Node storage; slot 0 is the root
    arena: NodeArena<V, B>,

    /// Number of keys currently holding a value
    size: usize,

    /// Configuration options
    config: TrieMapConfig,

    _key: PhantomData<fn(&K)>,
}

impl<K, V, B> TrieMap<K, V, B>
where
    K: SequenceKey + ?Sized,
    B: Branches<Element = K::Element>,
{
    /// Creates a new empty map with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieMapConfig::default())
    }

    /// Creates a new empty map with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the map.
    pub fn with_config(config: TrieMapConfig) -> Self {
        Self {
            arena: NodeArena::with_capacity(config.initial_node_capacity),
            size: 0,
            config,
            _key: PhantomData,
        }
    }

    /// Returns the configuration this map was created with.
    pub fn config(&self) -> &TrieMapConfig {
        &self.config
    }

    /// Associates `value` with `key`.
    ///
    /// Missing nodes along the key's path are created on the way down. The
    /// empty key stores its value at the root.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(V))` - The value previously stored for `key`.
    /// * `Ok(None)` - `key` had no value; the map's size grew by one.
    /// * `Err(TrieMapError)` - If the key is longer than the configured maximum depth.
    pub fn insert(&mut self, key: &K, value: V) -> TrieMapResult<Option<V>> {
        self.check_key(key)?;

        let mut current = NodeId::ROOT;
        for element in key.elements() {
            current = match self.arena.node(current).branches.child(&element) {
                Some(child) => child,
                None => {
                    let child = self.arena.allocate();
                    self.arena
                        .node_mut(current)
                        .branches
                        .insert_child(element, child);
                    child
                }
            };
        }

        let previous = self.arena.node_mut(current).value.replace(value);
        if previous.is_none() {
            self.size += 1;
        }
        trace!(
            key_len = key.len(),
            replaced = previous.is_some(),
            size = self.size,
            "trie map insert"
        );

        Ok(previous)
    }

    /// Returns the value stored for `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(&V))` - The value stored for `key`.
    /// * `Ok(None)` - No path exists for `key`, or its node holds no value.
    /// * `Err(TrieMapError)` - If the key is longer than the configured maximum depth.
    pub fn find(&self, key: &K) -> TrieMapResult<Option<&V>> {
        self.check_key(key)?;
        Ok(self
            .walk(key)
            .and_then(|id| self.arena.node(id).value.as_ref()))
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn find_mut(&mut self, key: &K) -> TrieMapResult<Option<&mut V>> {
        self.check_key(key)?;
        Ok(match self.walk(key) {
            Some(id) => self.arena.node_mut(id).value.as_mut(),
            None => None,
        })
    }

    /// Returns `true` if `key` is stored with a value.
    pub fn contains_key(&self, key: &K) -> TrieMapResult<bool> {
        Ok(self.find(key)?.is_some())
    }

    /// Returns `true` if some node exists for the full path of `key`.
    ///
    /// This holds for every prefix of every stored key, including the empty
    /// prefix, whether or not a value is stored at that node.
    pub fn find_prefix(&self, key: &K) -> TrieMapResult<bool> {
        self.check_key(key)?;
        Ok(self.walk(key).is_some())
    }

    /// Removes `key` and its value from the map.
    ///
    /// If the key's node has children it stays in place and only loses its
    /// value. Otherwise the dangling chain above it is detached: everything
    /// below the deepest ancestor that still holds a value or branches more
    /// than one way. Keys with no stored value leave the map untouched.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(V))` - The removed value.
    /// * `Ok(None)` - `key` had no value; nothing changed.
    /// * `Err(TrieMapError)` - If the key is longer than the configured maximum depth.
    pub fn delete(&mut self, key: &K) -> TrieMapResult<Option<V>> {
        self.check_key(key)?;

        // Deepest node on the path that must survive, and the element leading
        // away from it towards the target. The root is the fallback anchor.
        let mut anchor = NodeId::ROOT;
        let mut branch: Option<K::Element> = None;
        let mut current = NodeId::ROOT;

        for element in key.elements() {
            let node = self.arena.node(current);
            if branch.is_none() || node.is_branch_point() {
                anchor = current;
                branch = Some(element.clone());
            }
            current = match node.branches.child(&element) {
                Some(child) => child,
                None => return Ok(None),
            };
        }

        let target = self.arena.node_mut(current);
        let removed = match target.value.take() {
            Some(value) => value,
            None => return Ok(None),
        };

        // `branch` is only unset for the empty key, whose node is the root.
        if target.branches.is_empty() {
            if let Some(element) = branch {
                if let Some(detached) = self.arena.node_mut(anchor).branches.remove_child(&element) {
                    let pruned = self.arena.release_subtree(detached);
                    debug!(pruned, "pruned dangling trie chain");
                }
            }
        }

        self.size -= 1;
        trace!(key_len = key.len(), size = self.size, "trie map delete");

        Ok(Some(removed))
    }

    /// Collects every stored key that starts with `prefix`, with its value.
    ///
    /// Keys are returned as element vectors. On a [`BTreeTrieMap`] they come
    /// out in lexicographic order; on a [`HashTrieMap`] the order is
    /// unspecified.
    pub fn entries_with_prefix(&self, prefix: &K) -> TrieMapResult<Vec<(Vec<K::Element>, &V)>> {
        self.check_key(prefix)?;

        let start = match self.walk(prefix) {
            Some(id) => id,
            None => return Ok(Vec::new()),
        };

        let mut entries = Vec::new();
        let mut pending = vec![(start, prefix.elements().collect::<Vec<_>>())];

        while let Some((id, path)) = pending.pop() {
            let node = self.arena.node(id);

            // Reverse so that ordered branches are visited smallest first.
            let mut children: Vec<_> = node.branches.entries().collect();
            children.reverse();
            for (element, child) in children {
                let mut child_path = path.clone();
                child_path.push(element.clone());
                pending.push((child, child_path));
            }

            if let Some(value) = node.value.as_ref() {
                entries.push((path, value));
            }
        }

        Ok(entries)
    }

    /// Removes every key from the map.
    pub fn clear(&mut self) {
        let released = self.arena.live_count() - 1;
        self.arena.reset();
        self.size = 0;
        debug!(released, "trie map cleared");
    }

    /// Returns the number of keys stored with a value.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of live trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.live_count()
    }

    /// Follows `key` from the root, stopping at the first missing element.
    fn walk(&self, key: &K) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for element in key.elements() {
            current = self.arena.node(current).branches.child(&element)?;
        }
        Some(current)
    }

    fn check_key(&self, key: &K) -> TrieMapResult<()> {
        let length = key.len();
        if length > self.config.max_depth {
            return Err(TrieMapError::KeyTooLong {
                length,
                max_depth: self.config.max_depth,
            });
        }
        Ok(())
    }
}

impl<K, V, B> Default for TrieMap<K, V, B>
where
    K: SequenceKey + ?Sized,
    B: Branches<Element = K::Element>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ?Sized, V, B> fmt::Debug for TrieMap<K, V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieMap")
            .field("size", &self.size)
            .field("nodes", &self.arena.live_count())
            .field("config", &self.config)
            .finish()
    }
}
