use crate::error::{GeomError, GeomResult};
use crate::{Bounds, Layout};

/// An ordered run of two or more coordinates (or no coordinates at all).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineString {
    layout: Layout,
    flat_coords: Vec<f64>,
    srid: i32,
}

impl LineString {
    /// Creates an empty line string with the given layout.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: Vec::new(),
            srid: 0,
        }
    }

    /// Creates a line string from pre-flattened ordinate storage.
    pub fn new_flat(layout: Layout, flat_coords: Vec<f64>) -> GeomResult<Self> {
        check_flat(layout, &flat_coords)?;
        Ok(Self {
            layout,
            flat_coords,
            srid: 0,
        })
    }

    /// Creates a line string from nested coordinates.
    pub fn from_coords<C: AsRef<[f64]>>(
        layout: Layout,
        coords: impl IntoIterator<Item = C>,
    ) -> GeomResult<Self> {
        let flat_coords = flatten(layout, coords)?;
        Ok(Self {
            layout,
            flat_coords,
            srid: 0,
        })
    }

    /// Returns the line string's layout.
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

    /// Returns an iterator over the coordinates.
    pub fn coords(&self) -> impl Iterator<Item = &[f64]> {
        self.flat_coords.chunks_exact(self.stride().max(1))
    }

    /// Returns the number of coordinates.
    pub fn num_coords(&self) -> usize {
        match self.stride() {
            0 => 0,
            stride => self.flat_coords.len() / stride,
        }
    }

    /// Returns the `i`th coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn coord(&self, i: usize) -> &[f64] {
        let stride = self.stride();
        &self.flat_coords[i * stride..(i + 1) * stride]
    }

    /// Returns true if the line string has no coordinates.
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

/// Validates that flat storage divides evenly into stride-length coordinates.
pub(crate) fn check_flat(layout: Layout, flat_coords: &[f64]) -> GeomResult<()> {
    let stride = layout.stride();
    if stride == 0 {
        if flat_coords.is_empty() {
            return Ok(());
        }
        return Err(GeomError::UnsupportedLayout(layout));
    }
    if flat_coords.len() % stride != 0 {
        return Err(GeomError::DimensionMismatch {
            layout,
            got: flat_coords.len(),
            want: stride,
        });
    }
    Ok(())
}

/// Flattens nested coordinates, checking each against the layout stride.
pub(crate) fn flatten<C: AsRef<[f64]>>(
    layout: Layout,
    coords: impl IntoIterator<Item = C>,
) -> GeomResult<Vec<f64>> {
    let stride = layout.stride();
    let mut flat_coords = Vec::new();
    for coord in coords {
        let coord = coord.as_ref();
        if coord.len() != stride {
            return Err(GeomError::DimensionMismatch {
                layout,
                got: coord.len(),
                want: stride,
            });
        }
        flat_coords.extend_from_slice(coord);
    }
    Ok(flat_coords)
}
