use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point2i {
    pub x: isize,
    pub y: isize,
}

/// Axis-aligned rectangle in pixel coordinates.
///
/// Always well-formed: `min.x <= max.x` and `min.y <= max.y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    pub min: Point2i,
    pub max: Point2i,
}

impl Rect {
    /// Builds a rectangle from two opposite corners, swapping coordinates
    /// as needed.
    pub fn new(x0: isize, y0: isize, x1: isize, y1: isize) -> Self {
        Self {
            min: Point2i {
                x: x0.min(x1),
                y: y0.min(y1),
            },
            max: Point2i {
                x: x0.max(x1),
                y: y0.max(y1),
            },
        }
    }

    pub fn width(&self) -> isize {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> isize {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> RegionSize {
        RegionSize {
            width: self.width(),
            height: self.height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct RegionSize {
    pub width: isize,
    pub height: isize,
}

impl fmt::Display for RegionSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point2i, Rect, RegionSize};

    #[test]
    fn new_canonicalizes_corners() {
        let r = Rect::new(40, 10, 5, 30);
        assert_eq!(r.min, Point2i { x: 5, y: 10 });
        assert_eq!(r.max, Point2i { x: 40, y: 30 });
        assert_eq!(
            r.size(),
            RegionSize {
                width: 35,
                height: 20
            }
        );
    }

    #[test]
    fn size_formats_as_pair() {
        assert_eq!(Rect::new(0, 0, 12, 7).size().to_string(), "(12,7)");
        assert_eq!(Rect::new(3, 3, 3, 3).size().to_string(), "(0,0)");
    }
}
