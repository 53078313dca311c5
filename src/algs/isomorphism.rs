//! Orbit isomorphism for sewing.
//!
//! Two orbits are walked in lockstep. The `k`-th element of the left walk is
//! paired with the `k`-th element of the right walk, which builds a candidate
//! bijection one pair at a time. The candidate is accepted when
//! - both walks end together,
//! - the two orbits are different sets,
//! - every involution agrees with the pairing so far: whenever the image of a
//!   left element is already paired, the image of the right element under the
//!   same involution is its partner.

use hashbrown::{HashMap, HashSet};
use itertools::{EitherOrBoth, Itertools};

use crate::topology::bounds::ElementLike;
use crate::topology::involution::PartialInvolution;

/// Outcome of [`match_orbits`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrbitMatch<E> {
    /// The lockstep pairs, in walk order.
    Isomorphic(Vec<(E, E)>),
    /// One walk ended before the other.
    LengthMismatch,
    /// Both walks covered the same set.
    SameOrbit,
    /// The pairing contradicts an involution at this pair.
    Inconsistent { left: E, right: E },
}

impl<E> OrbitMatch<E> {
    pub fn is_isomorphic(&self) -> bool {
        matches!(self, OrbitMatch::Isomorphic(_))
    }
}

/// Walks `left` and `right` in lockstep and checks the pairing against `alphas`.
pub fn match_orbits<E, L, R>(left: L, right: R, alphas: &[&PartialInvolution<E>]) -> OrbitMatch<E>
where
    E: ElementLike,
    L: IntoIterator<Item = E>,
    R: IntoIterator<Item = E>,
{
    let mut iso: HashMap<E, E> = HashMap::new();
    let mut left_orbit: HashSet<E> = HashSet::new();
    let mut right_orbit: HashSet<E> = HashSet::new();
    let mut pairs = Vec::new();

    for step in left.into_iter().zip_longest(right) {
        let (l, r) = match step {
            EitherOrBoth::Both(l, r) => (l, r),
            EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => return OrbitMatch::LengthMismatch,
        };
        left_orbit.insert(l);
        right_orbit.insert(r);
        iso.insert(l, r);
        pairs.push((l, r));

        for alpha in alphas {
            let Some(mapped) = alpha.get(l).and_then(|image| iso.get(&image)) else {
                continue;
            };
            if alpha.get(r) != Some(*mapped) {
                return OrbitMatch::Inconsistent { left: l, right: r };
            }
        }
    }

    if left_orbit == right_orbit {
        return OrbitMatch::SameOrbit;
    }
    OrbitMatch::Isomorphic(pairs)
}
