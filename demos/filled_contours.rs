use iso_contours::contour::{ContourBuilder, ContourOptions, GridTransform};

fn main() {
    polygons_with_holes();
    world_coordinates();
}

fn grid_from_art(rows: &[&str]) -> (Vec<f64>, usize, usize) {
    let width = rows[0].len();
    let values = rows
        .iter()
        .flat_map(|row| row.chars().map(|c| if c == '#' { 1.0 } else { 0.0 }))
        .collect();
    (values, width, rows.len())
}

fn polygons_with_holes() {
    let (values, width, height) = grid_from_art(&[
        "...........",
        ".#####.....",
        ".#...#..##.",
        ".#.#.#..##.",
        ".#...#.....",
        ".#####.....",
        "...........",
    ]);

    let results = ContourBuilder::new(width, height)
        .contours(&values, &[0.5])
        .expect("grid dimensions match");
    let polygons = results[0].polygons().expect("polygon mode result");

    // frame with a hole, the island inside that hole and the block on the right
    assert_eq!(polygons.len(), 3);
    let with_holes = polygons.iter().filter(|p| !p.interiors.is_empty()).count();
    assert_eq!(with_holes, 1, "only the frame has a hole");

    for (i, polygon) in polygons.iter().enumerate() {
        println!(
            "polygon {i}: exterior of {} point(s), {} hole(s)",
            polygon.exterior.vertex_count(),
            polygon.interiors.len()
        );
    }
}

fn world_coordinates() {
    let (values, width, height) = grid_from_art(&[
        "......",
        ".####.",
        ".#..#.",
        ".####.",
        "......",
    ]);

    // grid cells 0.25 degrees wide, north up (y decreases going down the rows)
    let options = ContourOptions {
        smooth: true,
        transform: GridTransform::new(-10.0, 52.0, 0.25, -0.25),
    };
    let results = ContourBuilder::new(width, height)
        .with_options(options)
        .contours(&values, &[0.5])
        .expect("grid dimensions match");
    let polygons = results[0].polygons().expect("polygon mode result");
    assert_eq!(polygons.len(), 1);
    assert_eq!(polygons[0].interiors.len(), 1, "hole survives the flip");

    let extents = polygons[0].exterior.extents().expect("non-empty ring");
    assert!(extents.min_x >= -10.0 && extents.max_x <= -10.0 + 0.25 * width as f64);
    assert!(extents.max_y <= 52.0 && extents.min_y >= 52.0 - 0.25 * height as f64);
    println!(
        "lon [{}, {}], lat [{}, {}]",
        extents.min_x, extents.max_x, extents.min_y, extents.max_y
    );
}
