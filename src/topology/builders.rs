//! Shape builders on top of dart allocation and sewing.

use crate::gmap_error::GMapError;
use crate::topology::dart::Dart;
use crate::topology::gmap::GMap;

/// Two darts 0-sewn together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub start: Dart,
    pub end: Dart,
}

impl Edge {
    pub fn darts(self) -> [Dart; 2] {
        [self.start, self.end]
    }
}

impl<A> GMap<A> {
    /// Allocates two darts and 0-sews them.
    pub fn add_edge(&mut self) -> Result<Edge, GMapError> {
        let start = self.add_isolated_dart();
        let end = self.add_isolated_dart();
        self.sew(start, end, 0)?;
        Ok(Edge { start, end })
    }

    /// Builds a closed polygon of `sides` edges.
    ///
    /// The end of each edge is 1-sewn to the start of the next, wrapping
    /// around. A single side gives a loop edge.
    ///
    /// # Errors
    /// - [`GMapError::EmptyPolygon`] for `sides == 0`.
    /// - [`GMapError::InvalidDimension`] on a 0-map; no dart is allocated.
    pub fn add_polygon(&mut self, sides: usize) -> Result<Vec<Edge>, GMapError> {
        if sides == 0 {
            return Err(GMapError::EmptyPolygon);
        }
        self.check_dimension(1)?;
        let edges = (0..sides)
            .map(|_| self.add_edge())
            .collect::<Result<Vec<_>, _>>()?;
        for (k, edge) in edges.iter().enumerate() {
            let next = edges[(k + 1) % sides];
            self.sew(edge.end, next.start, 1)?;
        }
        log::debug!("added {sides}-gon");
        Ok(edges)
    }
}
