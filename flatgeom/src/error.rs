//! Defines [`GeomError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::Layout;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GeomError {
    /// A coordinate's ordinate count does not match the layout stride.
    #[error("dimension mismatch: got {got} ordinates, layout {layout} requires {want}")]
    DimensionMismatch {
        /// The layout the coordinate was checked against.
        layout: Layout,
        /// The number of ordinates actually supplied.
        got: usize,
        /// The stride required by the layout.
        want: usize,
    },

    /// A child geometry's layout disagrees with its container's layout.
    #[error("layout mismatch: got {got}, want {want}")]
    LayoutMismatch {
        /// The child's layout.
        got: Layout,
        /// The container's layout.
        want: Layout,
    },

    /// An ends offset array violates the flat-storage invariants: an entry
    /// is not a multiple of the stride, the sequence decreases, or the final
    /// entry does not equal the flat length.
    #[error("invalid ends: end {end} does not delimit flat storage of length {flat_len}")]
    InvalidEnds {
        /// The offending end offset.
        end: usize,
        /// The length of the flat ordinate storage.
        flat_len: usize,
    },

    /// The layout cannot be used in the requested context.
    #[error("unsupported layout {0}")]
    UnsupportedLayout(Layout),

    /// A `geo_traits` dimensionality with no counterpart in [Layout].
    #[error("unsupported dimensions {0:?}")]
    UnsupportedDimensions(geo_traits::Dimensions),
}

/// Crate-specific result type.
pub type GeomResult<T> = std::result::Result<T, GeomError>;
