//! i-sewing and i-unsewing.
//!
//! Sewing two darts at dimension `i` links them in `alpha[i]` together with
//! everything that must follow: the orbits of both darts under the special
//! range `{ j : j <= i - 2 or j >= i + 2 }` are paired in lockstep and every
//! pair is linked. The pairing must be an isomorphism of the two orbits,
//! otherwise the sew is rejected and the map is left untouched.
//!
//! In 0- and 1-maps, and for `i = 1` in a 2-map, the special range is empty
//! and a sew only links the two given darts.

use hashbrown::HashSet;

use crate::algs::isomorphism::{OrbitMatch, match_orbits};
use crate::debug_invariants::DebugInvariants;
use crate::gmap_error::{GMapError, SewRejection};
use crate::topology::dart::Dart;
use crate::topology::gmap::{GMap, UnsewPolicy};

impl<A> GMap<A> {
    /// `true` if sewing at `i` links only the two given darts.
    fn is_simple_sew(&self, i: usize) -> bool {
        let n = self.dimension();
        n <= 1 || (n == 2 && i == 1)
    }

    /// Resolves the pairs a sew of `left` and `right` at `i` would link.
    ///
    /// Every rejection surfaces as [`GMapError::NotSewable`].
    fn plan_sew(&self, left: Dart, right: Dart, i: usize) -> Result<Vec<(Dart, Dart)>, GMapError> {
        self.check_dimension(i)?;
        let reject = |reason| GMapError::NotSewable {
            left,
            right,
            dimension: i,
            reason,
        };

        if left == right {
            return Err(reject(SewRejection::SameDart));
        }
        for dart in [left, right] {
            if !self.contains_dart(dart) {
                return Err(reject(SewRejection::UnknownDart(dart)));
            }
            if !self.alphas[i].is_free(dart) {
                return Err(reject(SewRejection::NotFree(dart)));
            }
        }
        if self.is_simple_sew(i) {
            return Ok(vec![(left, right)]);
        }

        let range = self.special_range(i);
        let pairs = match match_orbits(
            self.orbit_unchecked(left, &range),
            self.orbit_unchecked(right, &range),
            &self.select(&range),
        ) {
            OrbitMatch::Isomorphic(pairs) => pairs,
            OrbitMatch::LengthMismatch => return Err(reject(SewRejection::LengthMismatch)),
            OrbitMatch::SameOrbit => return Err(reject(SewRejection::SameOrbit)),
            OrbitMatch::Inconsistent { left: l, right: r } => {
                return Err(reject(SewRejection::NotIsomorphic { left: l, right: r }));
            }
        };

        // Each paired dart is linked exactly once, so none may repeat or be
        // sewn already.
        let mut used = HashSet::with_capacity(2 * pairs.len());
        for &(l, r) in &pairs {
            for dart in [l, r] {
                if !used.insert(dart) || !self.alphas[i].is_free(dart) {
                    return Err(reject(SewRejection::Overlap(dart)));
                }
            }
        }
        Ok(pairs)
    }

    /// `true` if [`sew`](Self::sew) would succeed.
    ///
    /// # Errors
    /// Only [`GMapError::InvalidDimension`]; every other failure is `Ok(false)`.
    pub fn is_sewable(&self, left: Dart, right: Dart, i: usize) -> Result<bool, GMapError> {
        match self.plan_sew(left, right, i) {
            Ok(_) => Ok(true),
            Err(GMapError::NotSewable { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Why `left` and `right` cannot be sewn at `i`, or `None` if they can.
    pub fn sew_rejection(&self, left: Dart, right: Dart, i: usize) -> Result<Option<SewRejection>, GMapError> {
        match self.plan_sew(left, right, i) {
            Ok(_) => Ok(None),
            Err(GMapError::NotSewable { reason, .. }) => Ok(Some(reason)),
            Err(e) => Err(e),
        }
    }

    /// i-sews `left` and `right`.
    ///
    /// # Errors
    /// [`GMapError::NotSewable`] with the first failed check; the map is
    /// unchanged.
    pub fn sew(&mut self, left: Dart, right: Dart, i: usize) -> Result<(), GMapError> {
        let pairs = self.plan_sew(left, right, i)?;
        let alpha = &mut self.alphas[i];
        for &(l, r) in &pairs {
            log::trace!("alpha[{i}]: {l} <-> {r}");
            alpha.link(l, r)?;
        }
        log::debug!("{i}-sewed {left} and {right} ({} pair(s))", pairs.len());
        crate::debug_invariants!(self.validate_invariants(), "GMap::sew");
        Ok(())
    }

    /// i-unsews `dart` and every dart of its special-range orbit.
    ///
    /// Unlinked darts stay in the map, free at `i`. With
    /// [`UnsewPolicy::Strict`] an i-free `dart` is an error; otherwise the
    /// walk still runs and unlinks whatever it finds.
    pub fn unsew(&mut self, dart: Dart, i: usize) -> Result<(), GMapError> {
        self.check_dimension(i)?;
        if self.options.unsew == UnsewPolicy::Strict && self.alphas[i].is_free(dart) {
            return Err(GMapError::AlreadyFree { dart, dimension: i });
        }

        let range = self.special_range(i);
        let orbit: Vec<Dart> = self.orbit_unchecked(dart, &range).collect();
        let alpha = &mut self.alphas[i];
        let mut unlinked = 0usize;
        for d in orbit {
            if let Some(image) = alpha.remove(d) {
                alpha.put(d);
                alpha.put(image);
                unlinked += 1;
            }
        }
        log::debug!("{i}-unsewed {dart} ({unlinked} pair(s))");
        crate::debug_invariants!(self.validate_invariants(), "GMap::unsew");
        Ok(())
    }
}
