//! Boundary detection along 1D brightness profiles.
//!
//! Coordinates follow the pixel-index convention: sample `profile[i]` is the
//! pixel at position `i` along the scanned row or column.
//!
//! The detector expects a profile with three dominant dark-to-bright
//! transitions. It smooths the profile by block averaging, takes forward
//! differences, keeps the three strongest local maxima of the difference
//! sequence and snaps each of them to the darkest raw pixel nearby. The
//! outer transitions yield one boundary each; the middle transition is split
//! into two boundaries around its darkest pixel.
//!
//! All functions are pure: calling them twice on the same input yields the
//! same result.

pub mod detect;
mod error;
pub mod peaks;
pub mod refine;
pub mod regions;
pub mod smooth;

pub use detect::{AxisEdges, EdgeConfig, TRANSITION_COUNT, Transition, detect_edges};
pub use error::Error;
pub use peaks::{Maximum, find_maxima, select_strongest};
pub use refine::{find_lowest_point, find_zero_point};
pub use regions::compose_regions;
pub use smooth::{average, deltas};
