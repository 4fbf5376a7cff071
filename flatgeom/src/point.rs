use crate::error::{GeomError, GeomResult};
use crate::{Bounds, Layout};

/// A single position, or the empty point.
///
/// The empty point stores no ordinates at all; its layout is still tracked so
/// codecs can round-trip the declared dimensionality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Point {
    layout: Layout,
    flat_coords: Vec<f64>,
    srid: i32,
}

impl Point {
    /// Creates the empty point with the given layout.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: Vec::new(),
            srid: 0,
        }
    }

    /// Creates a point from exactly one coordinate.
    ///
    /// Errors with [`GeomError::DimensionMismatch`] when the coordinate's
    /// length differs from the layout stride.
    pub fn new(layout: Layout, coords: Vec<f64>) -> GeomResult<Self> {
        if coords.len() != layout.stride() {
            return Err(GeomError::DimensionMismatch {
                layout,
                got: coords.len(),
                want: layout.stride(),
            });
        }
        Ok(Self {
            layout,
            flat_coords: coords,
            srid: 0,
        })
    }

    /// Creates a point from one coordinate, treating an all-NaN coordinate as
    /// the empty point.
    ///
    /// This backs the binary codec's NaN empty-point policy: the wire format
    /// has no native empty point, so a stride-length run of NaN stands in for
    /// it.
    pub fn new_flat_maybe_empty(layout: Layout, coords: Vec<f64>) -> GeomResult<Self> {
        if !coords.is_empty() && coords.iter().all(|ordinate| ordinate.is_nan()) {
            if coords.len() != layout.stride() {
                return Err(GeomError::DimensionMismatch {
                    layout,
                    got: coords.len(),
                    want: layout.stride(),
                });
            }
            return Ok(Self::empty(layout));
        }
        Self::new(layout, coords)
    }

    /// Returns the point's layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the number of ordinates per coordinate.
    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    /// Returns the flat ordinate storage: empty, or exactly one stride-length
    /// coordinate.
    pub fn flat_coords(&self) -> &[f64] {
        &self.flat_coords
    }

    /// Returns the point's coordinate, or an empty slice for the empty point.
    pub fn coords(&self) -> &[f64] {
        &self.flat_coords
    }

    /// Returns true for the empty point.
    pub fn is_empty(&self) -> bool {
        self.flat_coords.is_empty()
    }

    /// Returns the spatial reference id, 0 meaning unspecified.
    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// Sets the spatial reference id.
    pub fn set_srid(&mut self, srid: i32) {
        self.srid = srid;
    }

    /// Computes the per-ordinate bounding box.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new(self.layout);
        bounds.extend_flat_coords(&self.flat_coords, self.stride());
        bounds
    }
}
