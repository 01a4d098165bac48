use quadrant_scan::{
    Axis, EdgeConfig, EdgeError, Image, ProfileError, Rect, column_profile, compose_regions,
    detect_edges, luminance, row_profile,
};

const SCAN_COLUMN: usize = 140;
const SCAN_ROW: usize = 145;

/// Bright sheet crossed by three dark horizontal and three dark vertical
/// bands, each 9 pixels wide.
fn grid_image(width: usize, height: usize, rows: &[usize], cols: &[usize]) -> Image<f32> {
    let bright = luminance(51_400, 51_400, 51_400);
    let dark = luminance(12_850, 12_850, 12_850);
    let in_band = |v: usize, centers: &[usize]| centers.iter().any(|&c| v + 4 >= c && v <= c + 4);

    Image::from_fn(width, height, |x, y| {
        if in_band(y, rows) || in_band(x, cols) {
            dark
        } else {
            bright
        }
    })
}

#[test]
fn grid_splits_into_four_quadrants() {
    let _ = env_logger::builder().is_test(true).try_init();

    let img = grid_image(300, 300, &[70, 160, 250], &[50, 180, 270]);
    let view = img.as_view();
    let cfg = EdgeConfig::default();

    let column = column_profile(&view, SCAN_COLUMN).expect("column inside image");
    let row = row_profile(&view, SCAN_ROW).expect("row inside image");

    let col_edges = detect_edges(&column, &cfg).expect("three horizontal bands");
    let row_edges = detect_edges(&row, &cfg).expect("three vertical bands");

    assert_eq!(col_edges.edges, [71, 151, 161, 241]);
    assert_eq!(row_edges.edges, [53, 172, 182, 262]);

    let regions = compose_regions(&col_edges, &row_edges);
    assert_eq!(
        regions,
        [
            Rect::new(53, 71, 172, 151),
            Rect::new(182, 71, 262, 151),
            Rect::new(53, 161, 172, 241),
            Rect::new(182, 161, 262, 241),
        ]
    );
    let sizes: Vec<String> = regions.iter().map(|r| r.size().to_string()).collect();
    assert_eq!(sizes.join(" "), "(119,80) (80,80) (119,80) (80,80)");
}

#[test]
fn scan_outside_image_fails_fast() {
    let img = grid_image(120, 300, &[70, 160, 250], &[20, 60, 100]);
    let err = column_profile(&img.as_view(), SCAN_COLUMN).expect_err("column beyond width");
    assert_eq!(
        err,
        ProfileError::AxisOutOfBounds {
            axis: Axis::Column,
            index: SCAN_COLUMN,
            extent: 120
        }
    );
}

#[test]
fn missing_band_is_reported() {
    let img = grid_image(300, 300, &[70, 250], &[50, 180, 270]);
    let column = column_profile(&img.as_view(), SCAN_COLUMN).expect("column inside image");

    let err = detect_edges(&column, &EdgeConfig::default()).expect_err("only two bands");
    assert_eq!(
        err,
        EdgeError::InsufficientPeaks {
            found: 2,
            required: 3
        }
    );
}
