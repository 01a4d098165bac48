//! Umbrella crate for the `quadrant-scan` workspace.
//!
//! Re-exports the image and profile primitives of `qs-core` together with
//! the boundary detector of `qs-edge`. The two error types are renamed to
//! keep them apart.

pub use qs_core::{
    Axis, Error as ProfileError, Image, ImageView, Point2i, Rect, RegionSize, column_profile,
    luminance, luminance_rgba, profile, row_profile,
};
pub use qs_edge::{
    AxisEdges, EdgeConfig, Error as EdgeError, Maximum, TRANSITION_COUNT, Transition, average,
    compose_regions, deltas, detect_edges, find_lowest_point, find_maxima, find_zero_point,
    select_strongest,
};
