use crate::error::{GeomError, GeomResult};
use crate::{Bounds, Geometry, Layout};

/// An ordered sequence of heterogeneous geometries.
///
/// Unlike the other variants a collection shares no flat storage with its
/// children. It carries its own layout so an empty collection's
/// dimensionality survives round trips; when no layout has been declared,
/// [`layout`](Self::layout) derives one by merging the children's layouts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryCollection {
    layout: Layout,
    geoms: Vec<Geometry>,
    srid: i32,
}

impl GeometryCollection {
    /// Creates a collection with no children and no declared layout.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a collection from child geometries, with no declared layout.
    pub fn new(geoms: Vec<Geometry>) -> Self {
        Self {
            layout: Layout::None,
            geoms,
            srid: 0,
        }
    }

    /// Declares the collection's layout.
    ///
    /// Errors with [`GeomError::LayoutMismatch`] when a non-empty child's
    /// layout disagrees. Declaring [`Layout::None`] always succeeds and
    /// returns the collection to the undetermined state.
    pub fn set_layout(&mut self, layout: Layout) -> GeomResult<()> {
        if layout != Layout::None {
            for geom in &self.geoms {
                let child = geom.layout();
                if !geom.is_empty() && child != Layout::None && child != layout {
                    return Err(GeomError::LayoutMismatch {
                        got: child,
                        want: layout,
                    });
                }
            }
        }
        self.layout = layout;
        Ok(())
    }

    /// Appends a child geometry.
    pub fn push(&mut self, geom: Geometry) {
        self.geoms.push(geom);
    }

    /// Returns the declared layout, or the merge of the children's layouts
    /// when none has been declared.
    pub fn layout(&self) -> Layout {
        if self.layout != Layout::None {
            return self.layout;
        }
        self.geoms
            .iter()
            .fold(Layout::None, |acc, geom| acc.merged(geom.layout()))
    }

    /// Returns the number of ordinates per coordinate under
    /// [`layout`](Self::layout).
    pub fn stride(&self) -> usize {
        self.layout().stride()
    }

    /// Returns the child geometries.
    pub fn geometries(&self) -> &[Geometry] {
        &self.geoms
    }

    /// Returns the number of child geometries.
    pub fn num_geometries(&self) -> usize {
        self.geoms.len()
    }

    /// Returns the `i`th child geometry.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn geometry(&self, i: usize) -> &Geometry {
        &self.geoms[i]
    }

    /// Returns true if every child is empty, vacuously so for no children.
    pub fn is_empty(&self) -> bool {
        self.geoms.iter().all(|geom| geom.is_empty())
    }

    /// Returns the spatial reference id, 0 meaning unspecified.
    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// Sets the spatial reference id.
    pub fn set_srid(&mut self, srid: i32) {
        self.srid = srid;
    }

    /// Computes the per-ordinate bounding box over all children.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new(self.layout());
        for geom in &self.geoms {
            bounds.extend_bounds(&geom.bounds());
        }
        bounds
    }
}
