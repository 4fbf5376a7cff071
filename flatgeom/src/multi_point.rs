use crate::error::{GeomError, GeomResult};
use crate::line_string::check_flat;
use crate::polygon::check_ends;
use crate::{Bounds, Layout, Point};

/// A set of points sharing one flat array.
///
/// The `ends` array always has one entry per point; two consecutive equal
/// entries denote an embedded empty point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPoint {
    layout: Layout,
    flat_coords: Vec<f64>,
    ends: Vec<usize>,
    srid: i32,
}

impl MultiPoint {
    /// Creates an empty multi-point with the given layout.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: Vec::new(),
            ends: Vec::new(),
            srid: 0,
        }
    }

    /// Creates a multi-point from pre-flattened ordinate storage and per-point
    /// ends.
    pub fn new_flat(layout: Layout, flat_coords: Vec<f64>, ends: Vec<usize>) -> GeomResult<Self> {
        check_flat(layout, &flat_coords)?;
        check_ends(layout, flat_coords.len(), &ends)?;
        Ok(Self {
            layout,
            flat_coords,
            ends,
            srid: 0,
        })
    }

    /// Creates a multi-point from one coordinate per point.
    pub fn from_coords<C: AsRef<[f64]>>(
        layout: Layout,
        coords: impl IntoIterator<Item = C>,
    ) -> GeomResult<Self> {
        let mut multi_point = Self::empty(layout);
        for coord in coords {
            multi_point.push(Point::new(layout, coord.as_ref().to_vec())?)?;
        }
        Ok(multi_point)
    }

    /// Appends a point, which may be empty.
    ///
    /// Errors with [`GeomError::LayoutMismatch`] when the point's layout
    /// differs from the multi-point's.
    pub fn push(&mut self, point: Point) -> GeomResult<()> {
        if point.layout() != self.layout {
            return Err(GeomError::LayoutMismatch {
                got: point.layout(),
                want: self.layout,
            });
        }
        self.flat_coords.extend_from_slice(point.flat_coords());
        self.ends.push(self.flat_coords.len());
        Ok(())
    }

    /// Returns the multi-point's layout.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Returns the number of ordinates per coordinate.
    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    /// Returns the flat ordinate storage.
    pub fn flat_coords(&self) -> &[f64] {
        &self.flat_coords
    }

    /// Returns the per-point end offsets.
    pub fn ends(&self) -> &[usize] {
        &self.ends
    }

    /// Returns the number of points, embedded empty points included.
    pub fn num_points(&self) -> usize {
        self.ends.len()
    }

    /// Returns the `i`th point.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn point(&self, i: usize) -> Point {
        let start = if i == 0 { 0 } else { self.ends[i - 1] };
        if start == self.ends[i] {
            Point::empty(self.layout)
        } else {
            Point::new(self.layout, self.flat_coords[start..self.ends[i]].to_vec())
                .unwrap_or_else(|_| Point::empty(self.layout))
        }
    }

    /// Returns true if the multi-point has no points.
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
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
