//! Re-export public algorithms.

pub mod isomorphism;
pub mod traversal;

pub use isomorphism::match_orbits;
pub use traversal::BreadthFirst;
