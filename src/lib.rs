//! # ngmap
//!
//! ngmap is a library for n-dimensional generalized maps (n-GMaps), a
//! combinatorial representation of subdivided objects such as polygon
//! meshes, polyhedral complexes and their higher-dimensional analogues.
//!
//! A map is a set of darts and `n + 1` partial involutions `alpha[0..=n]`
//! over them. Vertices, edges, faces and volumes are never stored: an i-cell
//! is the orbit of a dart under every alpha except `alpha[i]`, computed on
//! demand by breadth-first search.
//!
//! ## Features
//! - [`PartialInvolution`](topology::involution::PartialInvolution) with
//!   absent, free and linked elements
//! - Lazy orbit traversal over any subset of alphas
//! - Sewing with orbit-isomorphism checks, and unsewing
//! - Dimension growth and shrinking
//! - One attribute per cell and dimension
//! - Invariant checking in debug builds or behind the `strict-invariants` and
//!   `check-invariants` features
//!
//! ## Usage
//!
//! ```rust
//! use ngmap::prelude::*;
//! let mut map: GMap<&str> = GMap::new(2);
//! let square = map.add_polygon(4)?;
//! map.put_attribute(square[0].start, 2, "face")?;
//! assert_eq!(map.get_attribute(square[3].end, 2)?, Some(&"face"));
//! assert_eq!(map.i_cell(square[0].start, 0)?.len(), 2);
//! # Ok::<(), GMapError>(())
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod gmap_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::isomorphism::{OrbitMatch, match_orbits};
    pub use crate::algs::traversal::{Adjacency, BreadthFirst, from_fn};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::gmap_error::{GMapError, SewRejection};
    pub use crate::topology::attributes::AttributeStore;
    pub use crate::topology::builders::Edge;
    pub use crate::topology::dart::Dart;
    pub use crate::topology::gmap::{GMap, GMapOptions, UnsewPolicy};
    pub use crate::topology::involution::{PartialInvolution, Slot};
    pub use crate::topology::orbit::Orbit;
}
