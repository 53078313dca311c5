use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use ngmap::topology::builders::Edge;
use ngmap::topology::gmap::GMap;

/// A strip of `len` squares, each 2-sewn to the next.
fn build_strip(len: usize) -> (GMap, Vec<Vec<Edge>>) {
    let mut map = GMap::new(2);
    let mut squares: Vec<Vec<Edge>> = Vec::with_capacity(len);
    for _ in 0..len {
        let square = map.add_polygon(4).expect("square");
        if let Some(prev) = squares.last() {
            map.sew(prev[1].start, square[3].end, 2).expect("strip seam");
        }
        squares.push(square);
    }
    (map, squares)
}

fn bench_orbits(c: &mut Criterion) {
    let mut group = c.benchmark_group("orbit");

    for &len in &[64usize, 1024usize] {
        let (map, squares) = build_strip(len);
        let start = squares[0][0].start;

        group.bench_with_input(BenchmarkId::new("connected_component", len), &len, |b, _| {
            b.iter(|| {
                let n = map.orbit(start, &[0, 1, 2]).expect("valid dims").count();
                black_box(n);
            });
        });

        group.bench_with_input(BenchmarkId::new("vertex_cell", len), &len, |b, _| {
            b.iter(|| {
                let cell = map.i_cell(squares[len / 2][1].end, 0).expect("valid dim");
                black_box(cell);
            });
        });
    }
    group.finish();
}

fn bench_sewing(c: &mut Criterion) {
    let mut group = c.benchmark_group("sewing");

    for &len in &[64usize, 256usize] {
        group.bench_with_input(BenchmarkId::new("build_strip", len), &len, |b, &len| {
            b.iter(|| {
                let (map, _) = build_strip(len);
                black_box(map);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_orbits, bench_sewing);
criterion_main!(benches);
