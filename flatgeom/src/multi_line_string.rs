use crate::error::{GeomError, GeomResult};
use crate::line_string::check_flat;
use crate::polygon::check_ends;
use crate::{Bounds, Layout, LineString};

/// A set of line strings sharing one flat array, delimited by `ends`.
///
/// As with [`crate::MultiPoint`], consecutive equal ends denote an embedded
/// empty element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiLineString {
    layout: Layout,
    flat_coords: Vec<f64>,
    ends: Vec<usize>,
    srid: i32,
}

impl MultiLineString {
    /// Creates an empty multi-line-string with the given layout.
    pub fn empty(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: Vec::new(),
            ends: Vec::new(),
            srid: 0,
        }
    }

    /// Creates a multi-line-string from pre-flattened ordinate storage and
    /// per-element ends.
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

    /// Creates a multi-line-string from nested coordinates, one coordinate
    /// list per element.
    pub fn from_coords<C, L>(
        layout: Layout,
        lines: impl IntoIterator<Item = L>,
    ) -> GeomResult<Self>
    where
        C: AsRef<[f64]>,
        L: IntoIterator<Item = C>,
    {
        let mut multi_line_string = Self::empty(layout);
        for line in lines {
            multi_line_string.push(LineString::from_coords(layout, line)?)?;
        }
        Ok(multi_line_string)
    }

    /// Appends a line string, which may be empty.
    ///
    /// Errors with [`GeomError::LayoutMismatch`] when the element's layout
    /// differs from the container's.
    pub fn push(&mut self, line_string: LineString) -> GeomResult<()> {
        if line_string.layout() != self.layout {
            return Err(GeomError::LayoutMismatch {
                got: line_string.layout(),
                want: self.layout,
            });
        }
        self.flat_coords.extend_from_slice(line_string.flat_coords());
        self.ends.push(self.flat_coords.len());
        Ok(())
    }

    /// Returns the multi-line-string's layout.
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

    /// Returns the per-element end offsets.
    pub fn ends(&self) -> &[usize] {
        &self.ends
    }

    /// Returns the number of line strings, empty elements included.
    pub fn num_line_strings(&self) -> usize {
        self.ends.len()
    }

    /// Returns the `i`th line string.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn line_string(&self, i: usize) -> LineString {
        let start = if i == 0 { 0 } else { self.ends[i - 1] };
        LineString::new_flat(self.layout, self.flat_coords[start..self.ends[i]].to_vec())
            .unwrap_or_else(|_| LineString::empty(self.layout))
    }

    /// Returns true if the multi-line-string has no elements.
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
