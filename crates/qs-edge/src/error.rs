use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyProfile,
    InvalidBlockSize,
    InsufficientPeaks { found: usize, required: usize },
    IndexOutOfRange { index: usize, len: usize },
    BoundaryOverflow { lowest: usize, margin: isize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyProfile => write!(f, "profile is empty"),
            Self::InvalidBlockSize => write!(f, "block size must be at least 1"),
            Self::InsufficientPeaks { found, required } => write!(
                f,
                "found {found} transition peaks, at least {required} required"
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::BoundaryOverflow { lowest, margin } => {
                write!(f, "margin {margin} overflows boundary at pixel {lowest}")
            }
        }
    }
}

impl std::error::Error for Error {}
