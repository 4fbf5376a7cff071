use std::fmt::Display;

use crate::error::{GeomError, GeomResult};

/// The ordinate set a geometry carries.
///
/// The layout fixes the stride: the number of floating-point ordinates stored
/// per coordinate in a geometry's flat array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Undetermined. Carried only by empty geometries whose dimensionality
    /// has not been declared.
    #[default]
    None,

    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Layout {
    /// Returns the number of ordinates per coordinate.
    pub fn stride(&self) -> usize {
        match self {
            Layout::None => 0,
            Layout::XY => 2,
            Layout::XYZ => 3,
            Layout::XYM => 3,
            Layout::XYZM => 4,
        }
    }

    /// Returns true if the layout carries a Z ordinate.
    pub fn has_z(&self) -> bool {
        matches!(self, Layout::XYZ | Layout::XYZM)
    }

    /// Returns true if the layout carries an M ordinate.
    pub fn has_m(&self) -> bool {
        matches!(self, Layout::XYM | Layout::XYZM)
    }

    // Ordering used when merging child layouts. XYM outranks XYZ so that the
    // merge of mixed children is deterministic.
    fn rank(self) -> u8 {
        match self {
            Layout::None => 0,
            Layout::XY => 1,
            Layout::XYZ => 2,
            Layout::XYM => 3,
            Layout::XYZM => 4,
        }
    }

    /// Merges two layouts into the smallest layout covering both.
    ///
    /// XYZ and XYM merge to XYZM; otherwise the higher-ranked layout wins.
    pub(crate) fn merged(self, other: Layout) -> Layout {
        match (self, other) {
            (Layout::XYZ, Layout::XYM) | (Layout::XYM, Layout::XYZ) => Layout::XYZM,
            _ => {
                if other.rank() > self.rank() {
                    other
                } else {
                    self
                }
            }
        }
    }
}

impl TryFrom<Layout> for geo_traits::Dimensions {
    type Error = GeomError;

    fn try_from(value: Layout) -> GeomResult<Self> {
        match value {
            Layout::None => Err(GeomError::UnsupportedLayout(value)),
            Layout::XY => Ok(geo_traits::Dimensions::Xy),
            Layout::XYZ => Ok(geo_traits::Dimensions::Xyz),
            Layout::XYM => Ok(geo_traits::Dimensions::Xym),
            Layout::XYZM => Ok(geo_traits::Dimensions::Xyzm),
        }
    }
}

impl TryFrom<geo_traits::Dimensions> for Layout {
    type Error = GeomError;

    fn try_from(value: geo_traits::Dimensions) -> GeomResult<Self> {
        match value {
            geo_traits::Dimensions::Xy | geo_traits::Dimensions::Unknown(2) => Ok(Layout::XY),
            geo_traits::Dimensions::Xyz | geo_traits::Dimensions::Unknown(3) => Ok(Layout::XYZ),
            geo_traits::Dimensions::Xym => Ok(Layout::XYM),
            geo_traits::Dimensions::Xyzm | geo_traits::Dimensions::Unknown(4) => Ok(Layout::XYZM),
            _ => Err(GeomError::UnsupportedDimensions(value)),
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::None => write!(f, "None"),
            Layout::XY => write!(f, "XY"),
            Layout::XYZ => write!(f, "XYZ"),
            Layout::XYM => write!(f, "XYM"),
            Layout::XYZM => write!(f, "XYZM"),
        }
    }
}
