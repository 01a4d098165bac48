//! Foundational primitives for quadrant boundary scanning.
//!
//! ## Images
//! [`Image`] stores pixels row-major without padding; [`ImageView`] borrows
//! it for row and column access.
//!
//! ## Profiles
//! A profile is the ordered sequence of grayscale intensities sampled along a
//! single row or column. Sample `profile[i]` is the pixel at position `i`
//! along that axis.
//!
//! ## Rectangles
//! [`Rect`] uses integer pixel coordinates with `min` inclusive and `max`
//! exclusive for area purposes, mirroring how region outlines are drawn.

mod error;
mod geom;
mod image;
mod profile;

pub use error::Error;
pub use geom::{Point2i, Rect, RegionSize};
pub use image::{Image, ImageView};
pub use profile::{Axis, column_profile, luminance, luminance_rgba, profile, row_profile};
