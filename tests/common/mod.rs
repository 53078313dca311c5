//! Shape builders and cell helpers shared by the integration tests.
#![allow(dead_code)]

use std::collections::BTreeSet;

use ngmap::prelude::*;

pub type Polygon = Vec<Edge>;

/// `(face, edge)` of the dart `start` 2-sewn to the `end` of `(face, edge)`.
type Seam = ((usize, usize), (usize, usize));

const CUBE_SEAMS: [Seam; 12] = [
    ((0, 0), (1, 2)),
    ((0, 1), (2, 3)),
    ((0, 2), (3, 0)),
    ((0, 3), (4, 1)),
    ((1, 0), (5, 2)),
    ((1, 1), (2, 0)),
    ((1, 3), (4, 0)),
    ((2, 1), (5, 1)),
    ((2, 2), (3, 1)),
    ((3, 2), (5, 0)),
    ((3, 3), (4, 2)),
    ((4, 3), (5, 3)),
];

/// Face 0 is the square base, faces 1..=4 the triangles.
const PYRAMID_SEAMS: [Seam; 8] = [
    ((0, 0), (1, 2)),
    ((0, 1), (2, 0)),
    ((0, 2), (3, 0)),
    ((0, 3), (4, 1)),
    ((1, 0), (4, 0)),
    ((1, 1), (2, 1)),
    ((2, 2), (3, 1)),
    ((3, 2), (4, 2)),
];

fn stitch<A>(map: &mut GMap<A>, faces: &[Polygon], seams: &[Seam]) {
    for &((f, e), (g, h)) in seams {
        map.sew(faces[f][e].start, faces[g][h].end, 2)
            .expect("seam must be sewable");
    }
}

pub fn add_square<A>(map: &mut GMap<A>) -> Polygon {
    map.add_polygon(4).expect("square")
}

pub fn add_triangle<A>(map: &mut GMap<A>) -> Polygon {
    map.add_polygon(3).expect("triangle")
}

/// Six squares closed into a cube.
pub fn add_cube<A>(map: &mut GMap<A>) -> Vec<Polygon> {
    let faces: Vec<Polygon> = (0..6).map(|_| add_square(map)).collect();
    stitch(map, &faces, &CUBE_SEAMS);
    faces
}

/// A square base and four triangles closed into a pyramid.
pub fn add_pyramid<A>(map: &mut GMap<A>) -> Vec<Polygon> {
    let mut faces = vec![add_square(map)];
    faces.extend((0..4).map(|_| add_triangle(map)));
    stitch(map, &faces, &PYRAMID_SEAMS);
    faces
}

pub fn set(darts: impl IntoIterator<Item = Dart>) -> BTreeSet<Dart> {
    darts.into_iter().collect()
}

pub fn cell<A>(map: &GMap<A>, dart: Dart, i: usize) -> BTreeSet<Dart> {
    set(map.i_cell(dart, i).expect("dimension in range"))
}

/// Partition of every dart into i-cells.
pub fn cells<A>(map: &GMap<A>, i: usize) -> Vec<BTreeSet<Dart>> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for dart in map.darts() {
        if seen.contains(&dart) {
            continue;
        }
        let c = cell(map, dart, i);
        seen.extend(c.iter().copied());
        out.push(c);
    }
    out
}

pub fn darts<A>(map: &mut GMap<A>, count: usize) -> Vec<Dart> {
    (0..count).map(|_| map.add_isolated_dart()).collect()
}
