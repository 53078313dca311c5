mod common;

use common::{add_cube, add_pyramid};
use ngmap::prelude::*;

#[test]
fn built_shapes_satisfy_invariants() {
    let mut map: GMap<u8> = GMap::new(3);
    let cube = add_cube(&mut map);
    let roof = add_pyramid(&mut map);
    map.sew(cube[0][0].start, roof[0][0].start, 3).unwrap();
    map.put_attribute(cube[0][0].start, 3, 1).unwrap();
    map.validate_invariants().unwrap();
    map.debug_assert_invariants();

    for alpha in map.alphas() {
        alpha.validate_invariants().unwrap();
        assert_eq!(alpha.len(), map.dart_count());
    }
    assert_eq!(map.alphas()[3].link_count(), 8);
}

#[test]
fn invariants_hold_through_dimension_changes() {
    let mut map: GMap<u8> = GMap::new(1);
    let square = map.add_polygon(4).unwrap();
    map.put_attribute(square[0].start, 1, 7).unwrap();

    map.increase_dimension();
    map.increase_dimension();
    map.validate_invariants().unwrap();
    assert!(map.alphas()[3].is_entirely_free());

    map.decrease_dimension().unwrap();
    map.decrease_dimension().unwrap();
    map.validate_invariants().unwrap();
    assert_eq!(map.get_attribute(square[0].end, 1).unwrap(), Some(&7));

    map.decrease_dimension().unwrap_err();
    assert_eq!(map.dimension(), 1);
}

#[test]
fn new_darts_join_every_dimension() {
    let mut map: GMap = GMap::new(0);
    map.increase_dimension();
    let d = map.add_isolated_dart();
    map.increase_dimension();
    for i in 0..=2 {
        assert!(map.alpha(i).unwrap().contains_element(d));
        assert_eq!(map.alpha(i).unwrap().slot(d), Slot::Free);
    }
    map.validate_invariants().unwrap();
}

#[test]
fn involution_rejects_fixed_points_and_overwrites() {
    let mut alpha: PartialInvolution<Dart> = PartialInvolution::new();
    let (a, b, c) = (Dart::new(1).unwrap(), Dart::new(2).unwrap(), Dart::new(3).unwrap());
    assert!(matches!(alpha.link(a, a), Err(GMapError::FixedPoint(_))));
    alpha.link(a, b).unwrap();
    assert!(matches!(alpha.link(a, c), Err(GMapError::AlreadyLinked { .. })));
    assert!(matches!(alpha.link(c, b), Err(GMapError::AlreadyLinked { .. })));
    assert_eq!(alpha.get(c), None);
    alpha.validate_invariants().unwrap();
}
