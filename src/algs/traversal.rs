//! Breadth-first traversal over an arbitrary neighbour relation.
//!
//! [`BreadthFirst`] is a lazy, finite, non-restartable iterator. Each element
//! is queued at most once: membership is checked when a neighbour is
//! discovered, not when it is visited, so an element reachable along several
//! paths is still yielded exactly once. State lives in an explicit queue and
//! seen-set; no recursion is involved.

use std::collections::VecDeque;

use hashbrown::HashSet;

use crate::topology::bounds::ElementLike;

/// Neighbours provider for [`BreadthFirst`].
pub trait Adjacency<P> {
    type Iter: Iterator<Item = P>;
    /// Neighbours of `p`, in the order they should be queued.
    fn neighbours(&self, p: P) -> Self::Iter;
}

/// Adapts a closure `Fn(P) -> impl IntoIterator<Item = P>` into an [`Adjacency`].
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F>(pub F);

impl<P, F, I> Adjacency<P> for FromFn<F>
where
    F: Fn(P) -> I,
    I: IntoIterator<Item = P>,
{
    type Iter = I::IntoIter;

    #[inline]
    fn neighbours(&self, p: P) -> Self::Iter {
        (self.0)(p).into_iter()
    }
}

/// Convenience constructor for [`FromFn`].
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

/// Lazy breadth-first search from a single start element.
///
/// # Example
/// ```rust
/// use ngmap::algs::traversal::{BreadthFirst, from_fn};
/// // 1 - 2 - 4
/// //  \     /
/// //   3 --
/// let adj = |p: u32| match p {
///     1 => vec![2, 3],
///     2 => vec![1, 4],
///     3 => vec![1, 4],
///     4 => vec![2, 3],
///     _ => vec![],
/// };
/// let order: Vec<u32> = BreadthFirst::new(1, from_fn(adj)).collect();
/// assert_eq!(order, vec![1, 2, 3, 4]);
/// ```
#[derive(Clone, Debug)]
pub struct BreadthFirst<P, A> {
    adjacency: A,
    queue: VecDeque<P>,
    seen: HashSet<P>,
}

impl<P, A> BreadthFirst<P, A>
where
    P: ElementLike,
    A: Adjacency<P>,
{
    pub fn new(start: P, adjacency: A) -> Self {
        let mut seen = HashSet::new();
        seen.insert(start);
        Self {
            adjacency,
            queue: VecDeque::from([start]),
            seen,
        }
    }

    /// Number of elements discovered so far, visited or still queued.
    pub fn discovered(&self) -> usize {
        self.seen.len()
    }
}

impl<P, A> Iterator for BreadthFirst<P, A>
where
    P: ElementLike,
    A: Adjacency<P>,
{
    type Item = P;

    fn next(&mut self) -> Option<P> {
        let p = self.queue.pop_front()?;
        for q in self.adjacency.neighbours(p) {
            if self.seen.insert(q) {
                self.queue.push_back(q);
            }
        }
        Some(p)
    }
}

impl<P, A> std::iter::FusedIterator for BreadthFirst<P, A>
where
    P: ElementLike,
    A: Adjacency<P>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn lattice_is_visited_level_by_level() {
        let mut adj: HashMap<u32, Vec<u32>> = HashMap::new();
        adj.insert(1, vec![2, 3]);
        adj.insert(2, vec![1, 4, 5]);
        adj.insert(3, vec![1, 5, 6]);
        adj.insert(4, vec![2, 7, 8]);
        adj.insert(5, vec![2, 3, 8]);
        adj.insert(6, vec![3, 8, 9]);
        adj.insert(7, vec![4, 10, 11]);
        adj.insert(8, vec![4, 5, 6, 11, 12, 13]);
        adj.insert(9, vec![6, 13, 14]);
        adj.insert(10, vec![7, 15]);
        adj.insert(11, vec![7, 8, 15]);
        adj.insert(12, vec![8, 15, 16]);
        adj.insert(13, vec![8, 9, 16]);
        adj.insert(14, vec![9, 16]);
        adj.insert(15, vec![10, 11, 12]);
        adj.insert(16, vec![12, 13, 14]);

        let bfs = BreadthFirst::new(1, from_fn(|p: u32| adj.get(&p).cloned().unwrap_or_default()));
        assert_eq!(bfs.collect::<Vec<_>>(), (1..17).collect::<Vec<_>>());
    }

    #[test]
    fn isolated_start_yields_itself_once() {
        let mut bfs = BreadthFirst::new(5u32, from_fn(|_: u32| Vec::new()));
        assert_eq!(bfs.next(), Some(5));
        assert_eq!(bfs.next(), None);
        assert_eq!(bfs.next(), None);
    }

    #[test]
    fn cycles_and_self_loops_terminate() {
        // 0 -> 1 -> 2 -> 0, and 2 -> 2
        let bfs = BreadthFirst::new(
            0u32,
            from_fn(|p: u32| match p {
                0 => vec![1],
                1 => vec![2],
                2 => vec![0, 2],
                _ => vec![],
            }),
        );
        assert_eq!(bfs.collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn diamond_queues_shared_neighbour_once() {
        let mut bfs = BreadthFirst::new(
            0u32,
            from_fn(|p: u32| match p {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }),
        );
        assert_eq!(bfs.next(), Some(0));
        assert_eq!(bfs.discovered(), 3);
        assert_eq!(bfs.by_ref().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(bfs.discovered(), 4);
    }
}
