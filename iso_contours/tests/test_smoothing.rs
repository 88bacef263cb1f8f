mod test_utils;

use iso_contours::{
    assert_fuzzy_eq,
    contour::{ContourBuilder, smooth_linear},
    core::{math::Vector2, traits::FuzzyEq},
    grid::Grid,
    isoring::IsoRingTracer,
    ring,
};
use test_utils::grid_with_samples;

#[test]
fn interpolates_both_axes() {
    let values = grid_with_samples(3, 3, &[(1, 1, 1.0)]);
    let grid = Grid::new(&values, 3, 3).unwrap();
    let mut rings = IsoRingTracer::new().trace_grid(&grid, 0.75);
    let ring = &mut rings[0];
    assert_eq!(smooth_linear(ring, &grid, 0.75), 0);

    for expected in [(1.5, 1.25), (1.25, 1.5), (1.5, 1.75), (1.75, 1.5)] {
        assert!(
            ring.iter()
                .any(|p| p.fuzzy_eq(Vector2::new(expected.0, expected.1))),
            "missing vertex {expected:?} in {ring:?}"
        );
    }
    assert!(ring.is_closed());
}

#[test]
fn moves_block_edge_toward_lower_sample() {
    let mut values = vec![0.0; 10 * 10];
    for row in 2..6 {
        for col in 3..7 {
            values[row * 10 + col] = 1.0;
        }
    }
    let results = ContourBuilder::new(10, 10)
        .smooth(true)
        .lines(&values, &[0.25])
        .unwrap();
    let ring = &results[0].rings().unwrap()[0];
    // left edge sits between samples 0.0 and 1.0, threshold at a quarter of the way
    let left: Vec<_> = ring.iter().filter(|p| p.y == 3.5).map(|p| p.x).collect();
    assert!(left.len() >= 2);
    assert!(left.iter().all(|&x| x != 3.0 && x != 7.0));
    assert!(left.iter().any(|&x| x.fuzzy_eq(2.75)));
    assert!(left.iter().any(|&x| x.fuzzy_eq(7.25)));

    let unsmoothed = ContourBuilder::new(10, 10)
        .lines(&values, &[0.25])
        .unwrap();
    assert_ne!(unsmoothed[0], results[0]);
    assert_eq!(
        unsmoothed[0].rings().unwrap()[0].vertex_count(),
        ring.vertex_count()
    );
}

#[test]
fn half_threshold_on_binary_grid_is_unchanged() {
    let values = grid_with_samples(5, 5, &[(1, 1, 1.0), (2, 1, 1.0), (2, 2, 1.0)]);
    let smoothed = ContourBuilder::new(5, 5)
        .smooth(true)
        .contours(&values, &[0.5])
        .unwrap();
    let plain = ContourBuilder::new(5, 5).contours(&values, &[0.5]).unwrap();
    assert_eq!(smoothed, plain);
}

#[test]
fn equal_samples_skip_vertex() {
    let values = [2.0, 2.0, 2.0, 2.0];
    let grid = Grid::new(&values, 2, 2).unwrap();
    // vertexes on the x = 1 and y = 1 lines between equal samples
    let mut r = ring![(1.0, 0.5), (0.5, 1.0), (1.0, 1.5), (1.5, 1.0), (1.0, 0.5)];
    let original = r.clone();
    assert_eq!(smooth_linear(&mut r, &grid, 1.0), 5);
    assert_eq!(r, original);
}

#[test]
fn nan_samples_skip_vertex() {
    let values = [f64::NAN, 1.0, 0.0, 1.0];
    let grid = Grid::new(&values, 2, 2).unwrap();
    let mut r = ring![(1.0, 0.5), (1.0, 1.5)];
    assert_eq!(smooth_linear(&mut r, &grid, 0.25), 1);
    // NaN on the left: kept
    assert_eq!(r[0], Vector2::new(1.0, 0.5));
    // 0.0 | 1.0
    assert_fuzzy_eq!(r[1].x, 0.75);
    assert!(r.iter().all(|p| p.is_finite()));
}

#[test]
fn infinite_samples_skip_vertex() {
    let values = [f64::INFINITY, 1.0, 0.0, 1.0];
    let grid = Grid::new(&values, 2, 2).unwrap();
    let mut r = ring![(1.0, 0.5), (1.0, 1.5)];
    assert_eq!(smooth_linear(&mut r, &grid, 0.25), 1);
    // inf - inf on the left pair gives a NaN offset
    assert_eq!(r[0], Vector2::new(1.0, 0.5));
    assert_fuzzy_eq!(r[1].x, 0.75);
    assert!(r.iter().all(|p| p.is_finite()));
}

#[test]
fn non_finite_samples_skip_vertex_f32() {
    let values = [f32::NEG_INFINITY, 1.0, f32::NAN, 1.0];
    let grid = Grid::new(&values, 2, 2).unwrap();
    let mut r = ring![(1.0f32, 0.5f32), (1.0, 1.5)];
    assert_eq!(smooth_linear(&mut r, &grid, 0.25f32), 2);
    assert_eq!(r[0], Vector2::new(1.0, 0.5));
    assert_eq!(r[1], Vector2::new(1.0, 1.5));
}

#[test]
fn boundary_vertexes_are_not_moved() {
    let values = [1.0, 0.0, 0.0, 0.0];
    let grid = Grid::new(&values, 2, 2).unwrap();
    let mut r = ring![(0.5, 0.0), (0.0, 0.5), (2.0, 1.5), (1.5, 2.0)];
    let original = r.clone();
    assert_eq!(smooth_linear(&mut r, &grid, 0.3), 0);
    assert_eq!(r, original);
}

#[test]
fn degenerate_samples_through_builder() {
    // NaN directly above one of the block samples
    let mut values = grid_with_samples(4, 3, &[(1, 1, 1.0), (2, 1, 1.0)]);
    values[1] = f64::NAN;
    let results = ContourBuilder::new(4, 3)
        .smooth(true)
        .contours(&values, &[0.5])
        .unwrap();
    let polygons = results[0].polygons().unwrap();
    assert_eq!(polygons.len(), 1);
    assert!(polygons[0].exterior.iter().all(|p| p.is_finite()));
    // the vertex next to the NaN keeps its lattice position
    assert!(
        polygons[0]
            .exterior
            .iter()
            .any(|p| *p == Vector2::new(1.5, 1.0))
    );
}
