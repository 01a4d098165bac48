use core::fmt;

use crate::{Error, ImageView};

/// Weights of the luminance sum applied to 16-bit channel values.
const LUMA_R: f32 = 0.3;
const LUMA_G: f32 = 0.59;
const LUMA_B: f32 = 0.11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Samples run top to bottom along a fixed `x`.
    Column,
    /// Samples run left to right along a fixed `y`.
    Row,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column => write!(f, "column"),
            Self::Row => write!(f, "row"),
        }
    }
}

/// Grayscale intensity of a 16-bit-per-channel color.
///
/// The result lies in `0.0..=65535.0`.
pub fn luminance(r: u16, g: u16, b: u16) -> f32 {
    LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32
}

/// Grayscale intensity of a straight-alpha 16-bit color.
///
/// Channels are premultiplied by `a` first, so a transparent pixel reads as
/// black and an opaque one matches [`luminance`].
pub fn luminance_rgba(r: u16, g: u16, b: u16, a: u16) -> f32 {
    let premul = |c: u16| (c as u32 * a as u32 / u16::MAX as u32) as u16;
    luminance(premul(r), premul(g), premul(b))
}

/// Extracts the intensities of column `x`, top to bottom.
pub fn column_profile<T: Copy + Into<f32>>(
    img: &ImageView<'_, T>,
    x: usize,
) -> Result<Vec<f32>, Error> {
    if x >= img.width() {
        return Err(Error::AxisOutOfBounds {
            axis: Axis::Column,
            index: x,
            extent: img.width(),
        });
    }
    Ok(img.column(x).map(|&px| px.into()).collect())
}

/// Extracts the intensities of row `y`, left to right.
pub fn row_profile<T: Copy + Into<f32>>(
    img: &ImageView<'_, T>,
    y: usize,
) -> Result<Vec<f32>, Error> {
    if y >= img.height() {
        return Err(Error::AxisOutOfBounds {
            axis: Axis::Row,
            index: y,
            extent: img.height(),
        });
    }
    Ok(img.row(y).iter().map(|&px| px.into()).collect())
}

/// Dispatches to [`column_profile`] or [`row_profile`].
pub fn profile<T: Copy + Into<f32>>(
    img: &ImageView<'_, T>,
    axis: Axis,
    index: usize,
) -> Result<Vec<f32>, Error> {
    match axis {
        Axis::Column => column_profile(img, index),
        Axis::Row => row_profile(img, index),
    }
}
