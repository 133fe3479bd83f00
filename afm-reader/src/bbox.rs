use std::fmt::{self, Display};

use crate::error::Error;

/// An axis-aligned rectangle in font units.
///
/// Nothing checks that the lower left corner really is below and left of the
/// upper right one; a malformed box just reports a negative width or height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub lower_left_x: f64,
    pub lower_left_y: f64,
    pub upper_right_x: f64,
    pub upper_right_y: f64,
}

impl BoundingBox {
    pub fn new(
        lower_left_x: f64,
        lower_left_y: f64,
        upper_right_x: f64,
        upper_right_y: f64,
    ) -> BoundingBox {
        BoundingBox {
            lower_left_x,
            lower_left_y,
            upper_right_x,
            upper_right_y,
        }
    }

    /// Build a box from `[llx, lly, urx, ury]`.
    pub fn from_slice(numbers: &[f64]) -> Result<BoundingBox, Error> {
        match numbers {
            &[llx, lly, urx, ury] => Ok(BoundingBox::new(llx, lly, urx, ury)),
            _ => Err(Error::InvalidBoundingBox(numbers.len())),
        }
    }

    pub fn width(&self) -> f64 {
        self.upper_right_x - self.lower_left_x
    }

    pub fn height(&self) -> f64 {
        self.upper_right_y - self.lower_left_y
    }

    /// Whether the point is inside the box, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (self.lower_left_x..=self.upper_right_x).contains(&x)
            && (self.lower_left_y..=self.upper_right_y).contains(&y)
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{},{},{}]",
            self.lower_left_x, self.lower_left_y, self.upper_right_x, self.upper_right_y
        )
    }
}
