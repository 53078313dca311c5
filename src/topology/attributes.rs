//! Attribute storage keyed by `(dart, dimension)`.
//!
//! The store itself is a plain map. One-value-per-cell semantics are enforced
//! by [`GMap`](crate::topology::gmap::GMap), which resolves cells before it
//! reads or writes here.

use hashbrown::HashMap;

use crate::topology::dart::Dart;

/// Values attached to `(representative dart, dimension)` keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeStore<A> {
    entries: HashMap<(Dart, usize), A>,
}

impl<A> Default for AttributeStore<A> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<A> AttributeStore<A> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, dart: Dart, dimension: usize) -> Option<&A> {
        self.entries.get(&(dart, dimension))
    }

    #[inline]
    pub fn contains(&self, dart: Dart, dimension: usize) -> bool {
        self.entries.contains_key(&(dart, dimension))
    }

    /// Stores `value`, returning the value it replaced.
    pub fn insert(&mut self, dart: Dart, dimension: usize, value: A) -> Option<A> {
        self.entries.insert((dart, dimension), value)
    }

    pub fn remove(&mut self, dart: Dart, dimension: usize) -> Option<A> {
        self.entries.remove(&(dart, dimension))
    }

    /// Keeps only the entries for which `keep(dart, dimension)` holds.
    ///
    /// Returns the number of dropped entries.
    pub fn retain_keys<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(Dart, usize) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|&(dart, dimension), _| keep(dart, dimension));
        before - self.entries.len()
    }

    /// All keys, sorted by dart then dimension.
    pub fn keys(&self) -> Vec<(Dart, usize)> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Representative darts labelled at `dimension`, sorted.
    pub fn darts_at(&self, dimension: usize) -> Vec<Dart> {
        let mut darts: Vec<_> = self
            .entries
            .keys()
            .filter(|(_, i)| *i == dimension)
            .map(|(d, _)| *d)
            .collect();
        darts.sort_unstable();
        darts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
