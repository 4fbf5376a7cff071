use crate::error::{GeomError, GeomResult};
use crate::line_string::{check_flat, flatten};
use crate::{Bounds, Layout, LineString};

/// One outer ring plus zero or more inner rings, delimited by the `ends`
/// offset array.
///
/// `ends[i]` is the flat-array index one past ring `i`'s last ordinate, so
/// each entry is a multiple of the stride, the sequence is non-decreasing,
/// and the final entry equals the flat length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    layout: Layout,
    flat_coords: Vec<f64>,
    ends: Vec<usize>,
    srid: i32,
}

impl Polygon {
    /// Creates an empty polygon with the given layout.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: Vec::new(),
            ends: Vec::new(),
            srid: 0,
        }
    }

    /// Creates a polygon from pre-flattened ordinate storage and ring ends.
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

    /// Creates a polygon from nested ring coordinates.
    pub fn from_coords<C, R>(layout: Layout, rings: impl IntoIterator<Item = R>) -> GeomResult<Self>
    where
        C: AsRef<[f64]>,
        R: IntoIterator<Item = C>,
    {
        let mut flat_coords = Vec::new();
        let mut ends = Vec::new();
        for ring in rings {
            flat_coords.extend(flatten(layout, ring)?);
            ends.push(flat_coords.len());
        }
        Ok(Self {
            layout,
            flat_coords,
            ends,
            srid: 0,
        })
    }

    /// Returns the polygon's layout.
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

    /// Returns the ring end offsets.
    pub fn ends(&self) -> &[usize] {
        &self.ends
    }

    /// Returns the number of rings.
    pub fn num_rings(&self) -> usize {
        self.ends.len()
    }

    /// Returns the `i`th ring's flat ordinates, the outer ring being ring 0.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn ring_flat_coords(&self, i: usize) -> &[f64] {
        let start = if i == 0 { 0 } else { self.ends[i - 1] };
        &self.flat_coords[start..self.ends[i]]
    }

    /// Returns the `i`th ring as a line string.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn ring(&self, i: usize) -> LineString {
        LineString::new_flat(self.layout, self.ring_flat_coords(i).to_vec())
            .unwrap_or_else(|_| LineString::empty(self.layout))
    }

    /// Returns true if the polygon has no rings.
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

/// Validates an ends array against flat storage of the given length.
pub(crate) fn check_ends(layout: Layout, flat_len: usize, ends: &[usize]) -> GeomResult<()> {
    let stride = layout.stride();
    let mut prev = 0;
    for &end in ends {
        if stride == 0 || end % stride != 0 || end < prev {
            return Err(GeomError::InvalidEnds { end, flat_len });
        }
        prev = end;
    }
    let last = ends.last().copied().unwrap_or(0);
    if last != flat_len {
        return Err(GeomError::InvalidEnds {
            end: last,
            flat_len,
        });
    }
    Ok(())
}
