//! Partial involutions: the adjacency relation of one dimension.
//!
//! A [`PartialInvolution`] is a symmetric mapping without fixed points. Every
//! element is in one of three states, reported by [`Slot`]:
//! - absent from the domain,
//! - present and free (no image),
//! - present and linked to exactly one other element, which links back.
//!
//! Both directions of a link are always written and removed together.

use hashbrown::HashMap as FastMap;
use hashbrown::HashSet;

use crate::debug_invariants::DebugInvariants;
use crate::gmap_error::GMapError;
use crate::topology::bounds::ElementLike;

/// State of one element in a [`PartialInvolution`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot<E> {
    /// Not in the domain.
    Absent,
    /// In the domain, no image.
    Free,
    /// In the domain, paired with the given element.
    Linked(E),
}

/// Symmetric, fixed-point-free partial mapping `E ⇀ E`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartialInvolution<E: ElementLike> {
    slots: FastMap<E, Option<E>>,
}

impl<E: ElementLike> Default for PartialInvolution<E> {
    fn default() -> Self {
        Self {
            slots: FastMap::new(),
        }
    }
}

impl<E: ElementLike> PartialInvolution<E> {
    /// Creates a new, empty involution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `element` as present and free.
    ///
    /// An existing link is left untouched. Returns `true` if the element was
    /// not in the domain before.
    pub fn put(&mut self, element: E) -> bool {
        let before = self.slots.len();
        self.slots.entry(element).or_insert(None);
        self.slots.len() != before
    }

    /// Links `element ↔ coelement`.
    ///
    /// # Errors
    /// - [`GMapError::FixedPoint`] if `element == coelement`.
    /// - [`GMapError::AlreadyLinked`] if either side already has an image.
    ///
    /// Nothing is written unless both checks pass.
    pub fn link(&mut self, element: E, coelement: E) -> Result<(), GMapError> {
        if element == coelement {
            return Err(GMapError::FixedPoint(format!("{element:?}")));
        }
        for side in [element, coelement] {
            if let Some(image) = self.get(side) {
                return Err(GMapError::AlreadyLinked {
                    element: format!("{side:?}"),
                    image: format!("{image:?}"),
                });
            }
        }
        self.slots.insert(element, Some(coelement));
        self.slots.insert(coelement, Some(element));
        Ok(())
    }

    /// Image of `element`, or `None` if it is absent or free.
    #[inline]
    pub fn get(&self, element: E) -> Option<E> {
        self.slots.get(&element).copied().flatten()
    }

    /// Tri-state view of `element`.
    pub fn slot(&self, element: E) -> Slot<E> {
        match self.slots.get(&element) {
            None => Slot::Absent,
            Some(None) => Slot::Free,
            Some(Some(image)) => Slot::Linked(*image),
        }
    }

    /// `true` if `element` is absent or has no image.
    #[inline]
    pub fn is_free(&self, element: E) -> bool {
        self.get(element).is_none()
    }

    #[inline]
    pub fn contains_element(&self, element: E) -> bool {
        self.slots.contains_key(&element)
    }

    /// `true` if some element maps to `coelement`.
    ///
    /// By symmetry this holds exactly when `coelement` itself is linked.
    #[inline]
    pub fn contains_coelement(&self, coelement: E) -> bool {
        self.get(coelement).is_some()
    }

    /// All elements in the domain, linked or free.
    pub fn domain(&self) -> impl Iterator<Item = E> + '_ {
        self.slots.keys().copied()
    }

    pub fn domain_set(&self) -> HashSet<E> {
        self.domain().collect()
    }

    /// Removes the link of `element`.
    ///
    /// If `element` is linked to `b`, both `element` and `b` leave the domain
    /// and `Some(b)` is returned. A free or absent element is left as is.
    pub fn remove(&mut self, element: E) -> Option<E> {
        let image = self.get(element)?;
        self.slots.remove(&element);
        self.slots.remove(&image);
        Some(image)
    }

    /// Drops a free `element` from the domain.
    ///
    /// Returns `true` if it was present. A linked element is refused with
    /// [`GMapError::AlreadyLinked`]; use [`remove`](Self::remove) first.
    pub fn discard(&mut self, element: E) -> Result<bool, GMapError> {
        match self.slot(element) {
            Slot::Absent => Ok(false),
            Slot::Free => Ok(self.slots.remove(&element).is_some()),
            Slot::Linked(image) => Err(GMapError::AlreadyLinked {
                element: format!("{element:?}"),
                image: format!("{image:?}"),
            }),
        }
    }

    /// Number of elements in the domain.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Each link once, as `(a, b)` with `a < b`.
    pub fn linked_pairs(&self) -> impl Iterator<Item = (E, E)> + '_ {
        self.slots
            .iter()
            .filter_map(|(&a, &image)| image.filter(|&b| a < b).map(|b| (a, b)))
    }

    pub fn link_count(&self) -> usize {
        self.linked_pairs().count()
    }

    /// `true` if no element has an image.
    pub fn is_entirely_free(&self) -> bool {
        self.slots.values().all(Option::is_none)
    }
}

impl<E: ElementLike> DebugInvariants for PartialInvolution<E> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "PartialInvolution");
    }

    fn validate_invariants(&self) -> Result<(), GMapError> {
        for (&element, &image) in &self.slots {
            let Some(image) = image else { continue };
            if image == element {
                return Err(GMapError::FixedPoint(format!("{element:?}")));
            }
            if self.get(image) != Some(element) {
                return Err(GMapError::AsymmetricLink {
                    element: format!("{element:?}"),
                    image: format!("{image:?}"),
                });
            }
        }
        Ok(())
    }
}
