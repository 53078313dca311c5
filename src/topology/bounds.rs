//! Common bound aliases used across topology code.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds will automatically implement them. They only reduce duplication in
//! `where` clauses.

/// Canonical bound set for involution elements.
///
/// - `Copy` for cheap pass-by-value in traversal loops
/// - `Eq + Hash` for hash-backed involution slots and seen-sets
/// - `Ord` to report linked pairs once and in a deterministic order
/// - `Debug` for diagnostics and error payloads
pub trait ElementLike: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
impl<T> ElementLike for T where T: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
