use crate::error::{GeomError, GeomResult};
use crate::line_string::check_flat;
use crate::polygon::check_ends;
use crate::{Bounds, Layout, Polygon};

/// A set of polygons sharing one flat array, delimited by `endss`: one ends
/// array per polygon, each holding absolute flat-array offsets.
///
/// An empty inner ends array denotes an embedded empty polygon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPolygon {
    layout: Layout,
    flat_coords: Vec<f64>,
    endss: Vec<Vec<usize>>,
    srid: i32,
}

impl MultiPolygon {
    /// Creates an empty multi-polygon with the given layout.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: Vec::new(),
            endss: Vec::new(),
            srid: 0,
        }
    }

    /// Creates a multi-polygon from pre-flattened ordinate storage and nested
    /// ends.
    pub fn new_flat(
        layout: Layout,
        flat_coords: Vec<f64>,
        endss: Vec<Vec<usize>>,
    ) -> GeomResult<Self> {
        check_flat(layout, &flat_coords)?;
        let flattened: Vec<usize> = endss.iter().flatten().copied().collect();
        check_ends(layout, flat_coords.len(), &flattened)?;
        Ok(Self {
            layout,
            flat_coords,
            endss,
            srid: 0,
        })
    }

    /// Creates a multi-polygon from nested coordinates, one ring list per
    /// polygon.
    pub fn from_coords<C, R, P>(
        layout: Layout,
        polygons: impl IntoIterator<Item = P>,
    ) -> GeomResult<Self>
    where
        C: AsRef<[f64]>,
        R: IntoIterator<Item = C>,
        P: IntoIterator<Item = R>,
    {
        let mut multi_polygon = Self::empty(layout);
        for polygon in polygons {
            multi_polygon.push(Polygon::from_coords(layout, polygon)?)?;
        }
        Ok(multi_polygon)
    }

    /// Appends a polygon, which may be empty.
    ///
    /// Errors with [`GeomError::LayoutMismatch`] when the element's layout
    /// differs from the container's.
    pub fn push(&mut self, polygon: Polygon) -> GeomResult<()> {
        if polygon.layout() != self.layout {
            return Err(GeomError::LayoutMismatch {
                got: polygon.layout(),
                want: self.layout,
            });
        }
        let offset = self.flat_coords.len();
        self.flat_coords.extend_from_slice(polygon.flat_coords());
        self.endss
            .push(polygon.ends().iter().map(|end| end + offset).collect());
        Ok(())
    }

    /// Returns the multi-polygon's layout.
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

    /// Returns the nested end offsets, one ends array per polygon.
    pub fn endss(&self) -> &[Vec<usize>] {
        &self.endss
    }

    /// Returns the number of polygons, empty elements included.
    pub fn num_polygons(&self) -> usize {
        self.endss.len()
    }

    /// Returns the `i`th polygon.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn polygon(&self, i: usize) -> Polygon {
        let ends = &self.endss[i];
        if ends.is_empty() {
            return Polygon::empty(self.layout);
        }
        // The nearest preceding non-empty polygon's final end is where this
        // polygon's ordinates start.
        let offset = self.endss[..i]
            .iter()
            .rev()
            .find_map(|ends| ends.last().copied())
            .unwrap_or(0);
        let last = *ends.last().unwrap();
        let flat_coords = self.flat_coords[offset..last].to_vec();
        let ends = ends.iter().map(|end| end - offset).collect();
        Polygon::new_flat(self.layout, flat_coords, ends)
            .unwrap_or_else(|_| Polygon::empty(self.layout))
    }

    /// Returns true if the multi-polygon has no polygons.
    pub fn is_empty(&self) -> bool {
        self.endss.is_empty()
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
