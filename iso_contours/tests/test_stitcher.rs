use std::collections::HashSet;

use iso_contours::{
    core::math::Vector2,
    isoring::{HalfPoint, Stitcher},
    ring::{Ring, RingRole},
};

fn hp(x: i64, y: i64) -> HalfPoint {
    HalfPoint::new(x, y)
}

fn points(ring: &Ring<f64>) -> Vec<(f64, f64)> {
    ring.iter().map(|p| (p.x, p.y)).collect()
}

#[test]
fn extend_prepend_and_close() {
    // diamond around sample (0, 0) in the order the tracer emits it
    let mut stitcher = Stitcher::<f64>::new(1);
    let mut rings = Vec::new();

    stitcher.stitch(hp(1, 0), hp(0, 1), &mut rings);
    assert_eq!(stitcher.open_fragment_count(), 1);
    // prepend: the segment ends where the open fragment starts
    stitcher.stitch(hp(2, 1), hp(1, 0), &mut rings);
    assert_eq!(stitcher.open_fragment_count(), 1);
    // extend: the segment starts where the open fragment ends
    stitcher.stitch(hp(0, 1), hp(1, 2), &mut rings);
    assert_eq!(stitcher.open_fragment_count(), 1);
    assert!(rings.is_empty());
    // close: same fragment on both sides
    stitcher.stitch(hp(1, 2), hp(2, 1), &mut rings);

    assert_eq!(stitcher.open_fragment_count(), 0);
    assert_eq!(rings.len(), 1);
    assert_eq!(
        points(&rings[0]),
        vec![(1.0, 0.5), (0.5, 0.0), (0.0, 0.5), (0.5, 1.0), (1.0, 0.5)]
    );
    assert!(rings[0].is_closed());
    assert_eq!(rings[0].role(), RingRole::Outer);
}

#[test]
fn merge_two_fragments() {
    let mut stitcher = Stitcher::<f64>::new(1);
    let mut rings = Vec::new();

    stitcher.stitch(hp(1, 0), hp(0, 1), &mut rings);
    stitcher.stitch(hp(1, 2), hp(2, 1), &mut rings);
    assert_eq!(stitcher.open_fragment_count(), 2);

    // joins the end of the first fragment to the start of the second
    stitcher.stitch(hp(0, 1), hp(1, 2), &mut rings);
    assert_eq!(stitcher.open_fragment_count(), 1);
    assert!(rings.is_empty());

    stitcher.stitch(hp(2, 1), hp(1, 0), &mut rings);
    assert_eq!(stitcher.open_fragment_count(), 0);
    assert_eq!(
        points(&rings[0]),
        vec![(0.5, 0.0), (0.0, 0.5), (0.5, 1.0), (1.0, 0.5), (0.5, 0.0)]
    );
}

#[test]
fn merge_shorter_head_into_longer_tail() {
    let mut stitcher = Stitcher::<f64>::new(4);
    let mut rings = Vec::new();

    // head: a -> b
    stitcher.stitch(hp(0, 0), hp(2, 0), &mut rings);
    // tail: c -> d -> e -> f
    stitcher.stitch(hp(4, 0), hp(4, 2), &mut rings);
    stitcher.stitch(hp(4, 2), hp(4, 4), &mut rings);
    stitcher.stitch(hp(4, 4), hp(2, 4), &mut rings);
    assert_eq!(stitcher.open_fragment_count(), 2);

    stitcher.stitch(hp(2, 0), hp(4, 0), &mut rings);
    assert_eq!(stitcher.open_fragment_count(), 1);

    stitcher.stitch(hp(2, 4), hp(0, 0), &mut rings);
    assert_eq!(stitcher.open_fragment_count(), 0);
    assert_eq!(
        points(&rings[0]),
        vec![
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (2.0, 2.0),
            (1.0, 2.0),
            (0.0, 0.0)
        ]
    );
}

#[test]
fn rings_are_emitted_in_closing_order() {
    let mut stitcher = Stitcher::<f64>::new(8);
    let mut rings = Vec::new();

    // two interleaved triangles, the second one closes first
    stitcher.stitch(hp(0, 0), hp(2, 0), &mut rings);
    stitcher.stitch(hp(10, 0), hp(12, 0), &mut rings);
    stitcher.stitch(hp(12, 0), hp(10, 2), &mut rings);
    stitcher.stitch(hp(2, 0), hp(0, 2), &mut rings);
    stitcher.stitch(hp(10, 2), hp(10, 0), &mut rings);
    stitcher.stitch(hp(0, 2), hp(0, 0), &mut rings);

    assert_eq!(rings.len(), 2);
    assert_eq!(rings[0][0], Vector2::new(5.0, 0.0));
    assert_eq!(rings[1][0], Vector2::new(0.0, 0.0));
    assert!(rings.iter().all(|r| r.vertex_count() == 4 && r.is_closed()));
}

#[test]
fn encode_index_is_injective_over_lattice() {
    let width = 3;
    let height = 4;
    let stitcher = Stitcher::<f64>::new(width);
    let mut seen = HashSet::new();
    for y in 0..=(2 * height as i64) {
        for x in 0..=(2 * width as i64) {
            assert!(seen.insert(stitcher.encode_index(hp(x, y))), "({x}, {y})");
        }
    }

    // x * 2 + y * (width + 1) * 4 for grid space points
    assert_eq!(stitcher.encode_index(hp(3, 5)), 3 + 5 * 8);
}

#[test]
fn finish_discards_open_fragments() {
    let mut stitcher = Stitcher::<f64>::new(2);
    let mut rings = Vec::new();
    stitcher.stitch(hp(1, 0), hp(0, 1), &mut rings);
    stitcher.stitch(hp(3, 0), hp(4, 1), &mut rings);

    assert_eq!(stitcher.finish(), 2);
    assert_eq!(stitcher.open_fragment_count(), 0);
    assert_eq!(stitcher.finish(), 0);
    assert!(rings.is_empty());

    // state from the discarded fragments does not leak into the next trace
    stitcher.stitch(hp(0, 1), hp(1, 2), &mut rings);
    assert_eq!(stitcher.open_fragment_count(), 1);
}

#[test]
fn reset_changes_width() {
    let mut stitcher = Stitcher::<f64>::new(2);
    let mut rings = Vec::new();
    stitcher.stitch(hp(1, 0), hp(0, 1), &mut rings);

    stitcher.reset(5);
    assert_eq!(stitcher.width(), 5);
    assert_eq!(stitcher.open_fragment_count(), 0);
    assert_eq!(stitcher.encode_index(hp(1, 1)), 1 + 12);
}
