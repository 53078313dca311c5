//! GMapError: Unified error type for ngmap public APIs
//!
//! Every invalid-state condition of the engine (a broken caller contract) is
//! surfaced as a variant of [`GMapError`]. Operations validate before they
//! mutate, so an `Err` always leaves the map exactly as it was.

use thiserror::Error;

use crate::topology::dart::Dart;

/// Why two darts could not be sewn.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SewRejection {
    /// Both sides name the same dart.
    #[error("a dart cannot be sewn to itself")]
    SameDart,
    /// The dart is not a member of the map.
    #[error("dart {0} is not in the map")]
    UnknownDart(Dart),
    /// The dart already has an image in the target alpha.
    #[error("dart {0} is not free in the target dimension")]
    NotFree(Dart),
    /// The two orbits have different sizes.
    #[error("orbits have different lengths")]
    LengthMismatch,
    /// Both darts lie in the same orbit; sewing would fold it onto itself.
    #[error("both darts lie in the same orbit")]
    SameOrbit,
    /// The lockstep walk produced a pairing that contradicts an existing alpha.
    #[error("orbits are not isomorphic at pair ({left}, {right})")]
    NotIsomorphic { left: Dart, right: Dart },
    /// The pairing would reuse a dart or touch a dart that is already sewn.
    #[error("pairing would link dart {0} twice")]
    Overlap(Dart),
}

/// Unified error type for ngmap operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GMapError {
    /// Attempted to construct a Dart with a zero value (invalid).
    #[error("Dart must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidDart,
    /// An involution may not map an element to itself.
    #[error("Involution error: cannot map `{0}` to itself")]
    FixedPoint(String),
    /// An involution entry already has an image and must be removed first.
    #[error("Involution error: `{element}` is already mapped to `{image}`")]
    AlreadyLinked { element: String, image: String },
    /// `m(a) = b` without `m(b) = a`.
    #[error("Involution error: `{element}` maps to `{image}` but not back")]
    AsymmetricLink { element: String, image: String },
    /// Dimension index outside `[0, n]`.
    #[error("dimension {dimension} is out of range for a {max}-map")]
    InvalidDimension { dimension: usize, max: usize },
    /// `decrease_dimension` on a 0-map.
    #[error("cannot decrease dimension below 0")]
    DimensionUnderflow,
    /// The top alpha still carries links.
    #[error("cannot drop dimension {dimension}: alpha still holds {links} link(s)")]
    DimensionNotFree { dimension: usize, links: usize },
    /// Only isolated darts can be removed.
    #[error("dart {0} is not isolated")]
    DartNotIsolated(Dart),
    /// The dart is not a member of the map.
    #[error("dart {0} is not in the map")]
    UnknownDart(Dart),
    /// The darts failed the sewability test.
    #[error("cannot {dimension}-sew darts {left} and {right}: {reason}")]
    NotSewable {
        left: Dart,
        right: Dart,
        dimension: usize,
        reason: SewRejection,
    },
    /// Strict unsew policy: the dart has nothing to unsew.
    #[error("dart {dart} is already {dimension}-free")]
    AlreadyFree { dart: Dart, dimension: usize },
    /// The i-cell already carries an attribute at this dimension.
    #[error("{dimension}-cell of dart {dart} is already labelled through dart {holder}")]
    AttributeAlreadySet {
        dart: Dart,
        dimension: usize,
        holder: Dart,
    },
    /// A dart is registered in some alphas but not in others.
    #[error("Invariant error: dart {dart} is missing from alpha {dimension}")]
    DomainMismatch { dart: Dart, dimension: usize },
    /// An attribute is keyed on a dart or dimension the map no longer has.
    #[error("Invariant error: attribute ({dart}, {dimension}) is dangling")]
    DanglingAttribute { dart: Dart, dimension: usize },
    /// A polygon needs at least one edge.
    #[error("a polygon needs at least one edge")]
    EmptyPolygon,
}
