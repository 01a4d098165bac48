use core::fmt;

use crate::profile::Axis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    AxisOutOfBounds {
        axis: Axis,
        index: usize,
        extent: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::AxisOutOfBounds {
                axis,
                index,
                extent,
            } => write!(
                f,
                "{axis} {index} is out of bounds (image extent is {extent})"
            ),
        }
    }
}

impl std::error::Error for Error {}
