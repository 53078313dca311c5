//! Generalized-map topology.
//!
//! - [`dart`]: the dart handle
//! - [`involution`]: partial involutions, one per dimension
//! - [`orbit`]: breadth-first orbits over a selection of involutions
//! - [`gmap`]: the map engine, with sewing in [`sew`] and shape builders in
//!   [`builders`]
//! - [`attributes`]: per-cell values

pub mod attributes;
pub mod bounds;
pub mod builders;
pub mod dart;
pub mod gmap;
pub mod involution;
pub mod orbit;
pub mod sew;

pub use dart::Dart;
pub use gmap::GMap;
pub use involution::PartialInvolution;
