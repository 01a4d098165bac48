use qs_core::Rect;

use crate::detect::AxisEdges;

/// Splits the bounding box into its four quadrants.
///
/// `columns` holds boundaries found along a column (y coordinates) and
/// `rows` those found along a row (x coordinates). Quadrants are returned
/// top-left, top-right, bottom-left, bottom-right.
pub fn compose_regions(columns: &AxisEdges, rows: &AxisEdges) -> [Rect; 4] {
    let [y1, y2, y3, y4] = columns.edges;
    let [x1, x2, x3, x4] = rows.edges;

    [
        Rect::new(x1, y1, x2, y2),
        Rect::new(x3, y1, x4, y2),
        Rect::new(x1, y3, x2, y4),
        Rect::new(x3, y3, x4, y4),
    ]
}
