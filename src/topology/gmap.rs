//! The n-GMap engine.
//!
//! A [`GMap`] owns `n + 1` partial involutions over darts, one per dimension,
//! and an attribute store labelling cells. Every public operation either
//! succeeds and leaves a valid map, or fails with a [`GMapError`] before
//! touching anything.
//!
//! Cells are orbits: the i-cell of a dart is its orbit under every alpha
//! except `alpha[i]`. Sewing lives in [`sew`](super::sew), shape builders in
//! [`builders`](super::builders).

use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

use itertools::Itertools;

use crate::debug_invariants::DebugInvariants;
use crate::gmap_error::GMapError;
use crate::topology::attributes::AttributeStore;
use crate::topology::dart::Dart;
use crate::topology::involution::PartialInvolution;
use crate::topology::orbit::Orbit;

/// What [`GMap::unsew`] does with a dart that has nothing to unsew.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnsewPolicy {
    /// Succeed silently.
    #[default]
    Tolerant,
    /// Fail with [`GMapError::AlreadyFree`].
    Strict,
}

/// Runtime options for a [`GMap`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GMapOptions {
    pub unsew: UnsewPolicy,
}

impl GMapOptions {
    /// Options rejecting every operation whose target is already in the
    /// requested state.
    pub fn strict() -> Self {
        Self {
            unsew: UnsewPolicy::Strict,
        }
    }
}

/// An n-dimensional generalized map with attributes of type `A`.
///
/// # Example
/// ```rust
/// use ngmap::topology::gmap::GMap;
/// let mut map: GMap<&str> = GMap::new(1);
/// let d1 = map.add_isolated_dart();
/// let d2 = map.add_isolated_dart();
/// map.sew(d1, d2, 0)?;
/// map.put_attribute(d1, 1, "edge")?;
/// assert_eq!(map.get_attribute(d2, 1)?, Some(&"edge"));
/// # Ok::<(), ngmap::gmap_error::GMapError>(())
/// ```
#[derive(Debug)]
pub struct GMap<A = ()> {
    pub(crate) alphas: Vec<PartialInvolution<Dart>>,
    pub(crate) attributes: AttributeStore<A>,
    pub(crate) options: GMapOptions,
    /// Darts handed out so far; the next dart is `issued + 1`.
    issued: AtomicU64,
}

impl<A> Default for GMap<A> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<A: Clone> Clone for GMap<A> {
    fn clone(&self) -> Self {
        Self {
            alphas: self.alphas.clone(),
            attributes: self.attributes.clone(),
            options: self.options,
            issued: AtomicU64::new(self.issued.load(Ordering::Relaxed)),
        }
    }
}

impl<A> GMap<A> {
    /// Creates an empty n-map.
    pub fn new(n: usize) -> Self {
        Self::with_options(n, GMapOptions::default())
    }

    pub fn with_options(n: usize, options: GMapOptions) -> Self {
        Self {
            alphas: (0..=n).map(|_| PartialInvolution::new()).collect(),
            attributes: AttributeStore::new(),
            options,
            issued: AtomicU64::new(0),
        }
    }

    pub fn options(&self) -> GMapOptions {
        self.options
    }

    // -------------------------------------------------------------------------
    // Dimension management
    // -------------------------------------------------------------------------

    /// `n`, the number of alphas minus one.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.alphas.len().saturating_sub(1)
    }

    /// Appends a new alpha with every existing dart free in it.
    pub fn increase_dimension(&mut self) {
        let mut alpha = PartialInvolution::new();
        for dart in self.alphas[0].domain() {
            alpha.put(dart);
        }
        self.alphas.push(alpha);
        log::debug!("increased dimension to {}", self.dimension());
    }

    /// Drops the top alpha.
    ///
    /// # Errors
    /// - [`GMapError::DimensionUnderflow`] on a 0-map.
    /// - [`GMapError::DimensionNotFree`] if the top alpha holds any link.
    ///
    /// Attributes keyed at the dropped dimension are discarded.
    pub fn decrease_dimension(&mut self) -> Result<(), GMapError> {
        let n = self.dimension();
        if n == 0 {
            return Err(GMapError::DimensionUnderflow);
        }
        let links = self.alphas[n].link_count();
        if links > 0 {
            return Err(GMapError::DimensionNotFree { dimension: n, links });
        }
        self.alphas.pop();
        let dropped = self.attributes.retain_keys(|_, i| i < n);
        log::debug!("decreased dimension to {} ({dropped} attribute(s) dropped)", n - 1);
        crate::debug_invariants!(self.validate_invariants(), "GMap::decrease_dimension");
        Ok(())
    }

    #[inline]
    pub(crate) fn check_dimension(&self, i: usize) -> Result<(), GMapError> {
        if i > self.dimension() {
            return Err(GMapError::InvalidDimension {
                dimension: i,
                max: self.dimension(),
            });
        }
        Ok(())
    }

    /// Read-only view of `alpha[i]`.
    pub fn alpha(&self, i: usize) -> Result<&PartialInvolution<Dart>, GMapError> {
        self.check_dimension(i)?;
        Ok(&self.alphas[i])
    }

    pub fn alphas(&self) -> &[PartialInvolution<Dart>] {
        &self.alphas
    }

    // -------------------------------------------------------------------------
    // Darts
    // -------------------------------------------------------------------------

    /// Allocates a new dart, free in every alpha.
    pub fn add_isolated_dart(&mut self) -> Dart {
        let issued = self.issued.fetch_add(1, Ordering::Relaxed);
        let dart = Dart::from_nonzero(NonZeroU64::MIN.saturating_add(issued));
        for alpha in &mut self.alphas {
            alpha.put(dart);
        }
        log::trace!("added isolated dart {dart}");
        dart
    }

    /// Removes a dart that is free in every alpha.
    ///
    /// Removing a dart that is not in the map is a no-op. Attributes keyed on
    /// the dart are dropped with it.
    ///
    /// # Errors
    /// [`GMapError::DartNotIsolated`] if the dart is sewn in any dimension.
    pub fn remove_isolated_dart(&mut self, dart: Dart) -> Result<(), GMapError> {
        if !self.is_isolated(dart) {
            return Err(GMapError::DartNotIsolated(dart));
        }
        for alpha in &mut self.alphas {
            alpha.discard(dart)?;
        }
        self.attributes.retain_keys(|d, _| d != dart);
        log::trace!("removed isolated dart {dart}");
        Ok(())
    }

    /// `true` if `dart` has no image in `alpha[i]` (absent darts are free).
    pub fn is_i_free(&self, dart: Dart, i: usize) -> Result<bool, GMapError> {
        self.check_dimension(i)?;
        Ok(self.alphas[i].is_free(dart))
    }

    /// `true` if `dart` is free in every alpha.
    pub fn is_isolated(&self, dart: Dart) -> bool {
        self.alphas.iter().all(|alpha| alpha.is_free(dart))
    }

    pub fn contains_dart(&self, dart: Dart) -> bool {
        self.alphas.iter().any(|alpha| alpha.contains_element(dart))
    }

    /// All member darts, sorted.
    pub fn darts(&self) -> Vec<Dart> {
        self.alphas
            .iter()
            .flat_map(|alpha| alpha.domain())
            .unique()
            .sorted_unstable()
            .collect()
    }

    pub fn dart_count(&self) -> usize {
        self.alphas[0].len()
    }

    // -------------------------------------------------------------------------
    // Orbits and cells
    // -------------------------------------------------------------------------

    /// Lazy orbit of `dart` under `alpha[dims[0]], alpha[dims[1]], …`.
    pub fn orbit(&self, dart: Dart, dims: &[usize]) -> Result<Orbit<'_, Dart>, GMapError> {
        for &i in dims {
            self.check_dimension(i)?;
        }
        Ok(self.orbit_unchecked(dart, dims))
    }

    pub(crate) fn orbit_unchecked(&self, dart: Dart, dims: &[usize]) -> Orbit<'_, Dart> {
        Orbit::new(dart, self.select(dims))
    }

    pub(crate) fn select(&self, dims: &[usize]) -> Vec<&PartialInvolution<Dart>> {
        dims.iter().map(|&i| &self.alphas[i]).collect()
    }

    fn cell(&self, dart: Dart, i: usize) -> Orbit<'_, Dart> {
        let dims: Vec<usize> = (0..=self.dimension()).filter(|&j| j != i).collect();
        self.orbit_unchecked(dart, &dims)
    }

    /// The i-cell containing `dart`, in breadth-first order from `dart`.
    pub fn i_cell(&self, dart: Dart, i: usize) -> Result<Vec<Dart>, GMapError> {
        self.check_dimension(i)?;
        Ok(self.cell(dart, i).collect())
    }

    /// Dimensions `j` with `j <= i - 2` or `j >= i + 2`, within `[0, n]`.
    pub(crate) fn special_range(&self, i: usize) -> Vec<usize> {
        (0..=self.dimension())
            .filter(|&j| j + 2 <= i || j >= i + 2)
            .collect()
    }

    // -------------------------------------------------------------------------
    // Attributes
    // -------------------------------------------------------------------------

    /// Labels the i-cell of `dart` with `value`.
    ///
    /// # Errors
    /// - [`GMapError::UnknownDart`] if `dart` is not in the map.
    /// - [`GMapError::AttributeAlreadySet`] if any dart of the cell already
    ///   carries an attribute at `i`.
    pub fn put_attribute(&mut self, dart: Dart, i: usize, value: A) -> Result<(), GMapError> {
        self.check_dimension(i)?;
        if !self.contains_dart(dart) {
            return Err(GMapError::UnknownDart(dart));
        }
        let holder = self
            .cell(dart, i)
            .find(|&d| self.attributes.contains(d, i));
        if let Some(holder) = holder {
            return Err(GMapError::AttributeAlreadySet {
                dart,
                dimension: i,
                holder,
            });
        }
        self.attributes.insert(dart, i, value);
        Ok(())
    }

    /// The attribute of the i-cell of `dart`, if any.
    pub fn get_attribute(&self, dart: Dart, i: usize) -> Result<Option<&A>, GMapError> {
        self.check_dimension(i)?;
        Ok(self.cell(dart, i).find_map(|d| self.attributes.get(d, i)))
    }

    /// Clears every attribute at `i` keyed on a dart of the i-cell of `dart`.
    ///
    /// Returns the first value removed, in cell order.
    pub fn remove_attribute(&mut self, dart: Dart, i: usize) -> Result<Option<A>, GMapError> {
        let cell = self.i_cell(dart, i)?;
        let mut removed = None;
        for d in cell {
            if let Some(value) = self.attributes.remove(d, i) {
                removed.get_or_insert(value);
            }
        }
        Ok(removed)
    }

    pub fn attributes(&self) -> &AttributeStore<A> {
        &self.attributes
    }
}

impl<A> DebugInvariants for GMap<A> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "GMap");
    }

    fn validate_invariants(&self) -> Result<(), GMapError> {
        for alpha in &self.alphas {
            alpha.validate_invariants()?;
        }
        if let Some((first, rest)) = self.alphas.split_first() {
            for (offset, alpha) in rest.iter().enumerate() {
                if let Some(dart) = first.domain().find(|&d| !alpha.contains_element(d)) {
                    return Err(GMapError::DomainMismatch {
                        dart,
                        dimension: offset + 1,
                    });
                }
                if let Some(dart) = alpha.domain().find(|&d| !first.contains_element(d)) {
                    return Err(GMapError::DomainMismatch { dart, dimension: 0 });
                }
            }
        }
        for (dart, dimension) in self.attributes.keys() {
            if dimension > self.dimension() || !self.contains_dart(dart) {
                return Err(GMapError::DanglingAttribute { dart, dimension });
            }
        }
        Ok(())
    }
}
