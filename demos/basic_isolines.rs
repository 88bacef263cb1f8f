use iso_contours::{
    contour::ContourBuilder,
    grid::Grid,
    isoring::IsoRingTracer,
    ring::{RingRole, signed_double_area},
};

fn main() {
    trace_single_threshold();
    isolines_at_many_thresholds();
}

/// 7x7 pyramid, value is the distance in samples from the border.
fn pyramid() -> Vec<f64> {
    let size = 7usize;
    let mut values = Vec::with_capacity(size * size);
    for row in 0..size {
        for col in 0..size {
            let d = col.min(row).min(size - 1 - col).min(size - 1 - row);
            values.push(d as f64);
        }
    }
    values
}

fn trace_single_threshold() {
    let values = pyramid();
    let grid = Grid::new(&values, 7, 7).expect("49 values for a 7x7 grid");

    let mut tracer = IsoRingTracer::new();
    let rings = tracer.trace_grid(&grid, 1.5);
    assert_eq!(rings.len(), 1, "one plateau above 1.5");

    let ring = &rings[0];
    assert!(ring.is_closed(), "traced rings repeat their first point");
    assert_eq!(ring.role(), RingRole::Outer);
    // 3x3 plateau: 12 boundary vertexes plus the closing point
    assert_eq!(ring.vertex_count(), 13);
    assert_eq!(signed_double_area(&ring.points), ring.signed_double_area());

    let extents = ring.extents().expect("non-empty ring");
    println!(
        "plateau at 1.5 spans [{}, {}] x [{}, {}]",
        extents.min_x, extents.max_x, extents.min_y, extents.max_y
    );
}

fn isolines_at_many_thresholds() {
    let values = pyramid();
    let builder = ContourBuilder::new(7, 7).smooth(true);
    let results = builder
        .lines(&values, &[0.5, 1.5, 2.5, 3.5])
        .expect("grid dimensions match");

    for result in results.iter() {
        let rings = result.rings().expect("line mode result");
        println!(
            "threshold {}: {} ring(s), {} point(s)",
            result.threshold,
            rings.len(),
            rings.iter().map(|r| r.vertex_count()).sum::<usize>()
        );
    }

    // nested levels, innermost ring is the single peak sample
    assert_eq!(results[0].rings().map(|r| r.len()), Some(1));
    assert_eq!(results[2].rings().map(|r| r[0].vertex_count()), Some(5));
    assert!(results[3].is_empty(), "nothing reaches 3.5");
}
