//! `Dart`: a strong, zero-cost handle for the atoms of a generalized map
//!
//! Darts carry no data of their own; every bit of meaning comes from their
//! position in the alphas and from the attributes attached to their orbits.
//! `Dart` wraps a nonzero `u64` so that 0 stays reserved as an invalid or
//! sentinel value.
//!
//! This module provides:
//! - A transparent `Dart` newtype around `NonZeroU64`.
//! - A fallible constructor and a raw accessor.
//! - `Debug`/`Display`, ordering and hashing so darts can key maps and sets.

use std::{fmt, num::NonZeroU64};

use crate::gmap_error::GMapError;

/// Opaque identity of a dart.
///
/// Maps hand out darts from their own counter (see
/// [`GMap::add_isolated_dart`](crate::topology::gmap::GMap::add_isolated_dart));
/// two darts are equal iff their raw ids are equal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Dart(NonZeroU64);

static_assertions::assert_eq_size!(Dart, u64);
static_assertions::assert_eq_align!(Dart, u64);

impl Dart {
    /// Creates a `Dart` from a raw `u64` value.
    ///
    /// # Errors
    ///
    /// Returns [`GMapError::InvalidDart`] if `raw == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use ngmap::topology::dart::Dart;
    /// let d = Dart::new(1).unwrap();
    /// assert_eq!(d.get(), 1);
    /// assert!(Dart::new(0).is_err());
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Result<Self, GMapError> {
        NonZeroU64::new(raw).map(Dart).ok_or(GMapError::InvalidDart)
    }

    #[inline]
    pub(crate) const fn from_nonzero(raw: NonZeroU64) -> Self {
        Dart(raw)
    }

    /// Returns the inner `u64` value of this `Dart`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

// -----------------------------------------------------------------------------
// Formatting traits
// -----------------------------------------------------------------------------

impl fmt::Debug for Dart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Dart").field(&self.get()).finish()
    }
}

/// Prints the numeric id without any wrapper text.
impl fmt::Display for Dart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
