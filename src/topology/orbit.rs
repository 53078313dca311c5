//! Orbits: breadth-first walks over a chosen subset of alphas.
//!
//! The orbit of a dart under `{alpha[i1], …, alpha[ik]}` is everything
//! reachable by following any of these involutions in either direction (an
//! involution is its own inverse). Neighbours are queued in the order the
//! alphas were selected.

use crate::algs::traversal::{Adjacency, BreadthFirst};
use crate::topology::bounds::ElementLike;
use crate::topology::involution::PartialInvolution;

/// Neighbour relation induced by a list of involutions.
#[derive(Clone, Debug)]
pub struct AlphaAdjacency<'a, E: ElementLike> {
    alphas: Vec<&'a PartialInvolution<E>>,
}

impl<'a, E: ElementLike> AlphaAdjacency<'a, E> {
    pub fn new(alphas: Vec<&'a PartialInvolution<E>>) -> Self {
        Self { alphas }
    }

    pub fn alphas(&self) -> &[&'a PartialInvolution<E>] {
        &self.alphas
    }
}

impl<E: ElementLike> Adjacency<E> for AlphaAdjacency<'_, E> {
    type Iter = std::vec::IntoIter<E>;

    fn neighbours(&self, p: E) -> Self::Iter {
        self.alphas
            .iter()
            .filter_map(|alpha| alpha.get(p))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

/// Lazy orbit of a start element; see the module docs.
#[derive(Clone, Debug)]
pub struct Orbit<'a, E: ElementLike>(BreadthFirst<E, AlphaAdjacency<'a, E>>);

impl<'a, E: ElementLike> Orbit<'a, E> {
    pub fn new(start: E, alphas: Vec<&'a PartialInvolution<E>>) -> Self {
        Orbit(BreadthFirst::new(start, AlphaAdjacency::new(alphas)))
    }
}

impl<E: ElementLike> Iterator for Orbit<'_, E> {
    type Item = E;

    #[inline]
    fn next(&mut self) -> Option<E> {
        self.0.next()
    }
}

impl<E: ElementLike> std::iter::FusedIterator for Orbit<'_, E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_alternates_between_alphas() {
        // A square as two involutions over 1..=8:
        // a0 = (1 2)(3 4)(5 6)(7 8), a1 = (2 3)(4 5)(6 7)(8 1)
        let mut a0 = PartialInvolution::new();
        let mut a1 = PartialInvolution::new();
        for (a, b) in [(1u32, 2), (3, 4), (5, 6), (7, 8)] {
            a0.link(a, b).unwrap();
        }
        for (a, b) in [(2u32, 3), (4, 5), (6, 7), (8, 1)] {
            a1.link(a, b).unwrap();
        }

        let both: Vec<u32> = Orbit::new(1, vec![&a0, &a1]).collect();
        assert_eq!(both, vec![1, 2, 8, 3, 7, 4, 6, 5]);

        let reversed: Vec<u32> = Orbit::new(1, vec![&a1, &a0]).collect();
        assert_eq!(reversed, vec![1, 8, 2, 7, 3, 6, 4, 5]);

        let only_a0: Vec<u32> = Orbit::new(1, vec![&a0]).collect();
        assert_eq!(only_a0, vec![1, 2]);
    }

    #[test]
    fn orbit_of_free_element_is_singleton() {
        let mut a0 = PartialInvolution::new();
        a0.put(3u32);
        assert_eq!(Orbit::new(3, vec![&a0]).collect::<Vec<_>>(), vec![3]);
        assert_eq!(Orbit::new(9, Vec::new()).collect::<Vec<_>>(), vec![9]);
    }
}
