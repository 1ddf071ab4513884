//! Sequence keys for the trie map.
//!
//! A trie never stores whole keys. It stores the individual elements a key is
//! composed of, one per edge. Anything that can hand out its elements front to
//! back and report how many there are can key a [`TrieMap`](super::TrieMap).

use std::hash::Hash;
use std::iter::Cloned;
use std::slice::Iter;
use std::str::Chars;

/// A key that decomposes into an ordered sequence of comparable elements.
///
/// # Examples
///
/// ```
/// use kukui_lib::data_structures::trie_map::SequenceKey;
///
/// let key = "dog";
/// assert_eq!(key.len(), 3);
/// assert_eq!(key.elements().collect::<Vec<_>>(), vec!['d', 'o', 'g']);
/// ```
pub trait SequenceKey {
    /// The type of a single key element, one per trie edge.
    type Element: Eq + Hash + Ord + Clone;

    /// Iterator over the key's elements.
    type Elements<'a>: Iterator<Item = Self::Element>
    where
        Self: 'a;

    /// Returns the key's elements, front to back.
    fn elements(&self) -> Self::Elements<'_>;

    /// Returns the number of elements in the key.
    fn len(&self) -> usize;

    /// Returns `true` if the key has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SequenceKey for str {
    type Element = char;
    type Elements<'a> = Chars<'a>;

    fn elements(&self) -> Self::Elements<'_> {
        self.chars()
    }

    // Counts chars, not bytes: depth in the trie is one level per char.
    fn len(&self) -> usize {
        self.chars().count()
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl SequenceKey for String {
    type Element = char;
    type Elements<'a> = Chars<'a>;

    fn elements(&self) -> Self::Elements<'_> {
        self.chars()
    }

    fn len(&self) -> usize {
        self.chars().count()
    }

    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl<T: Eq + Hash + Ord + Clone> SequenceKey for [T] {
    type Element = T;
    type Elements<'a> = Cloned<Iter<'a, T>> where T: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter().cloned()
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: Eq + Hash + Ord + Clone> SequenceKey for Vec<T> {
    type Element = T;
    type Elements<'a> = Cloned<Iter<'a, T>> where T: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter().cloned()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T: Eq + Hash + Ord + Clone, const N: usize> SequenceKey for [T; N] {
    type Element = T;
    type Elements<'a> = Cloned<Iter<'a, T>> where T: 'a;

    fn elements(&self) -> Self::Elements<'_> {
        self.iter().cloned()
    }

    fn len(&self) -> usize {
        N
    }
}
