use std::fmt::Display;

use crate::{
    Bounds, GeometryCollection, Layout, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

/// A geometry of any kind.
///
/// A closed sum over the seven variants; codecs and callers dispatch with
/// exhaustive matches.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// [Point]
    Point(Point),
    /// [LineString]
    LineString(LineString),
    /// [Polygon]
    Polygon(Polygon),
    /// [MultiPoint]
    MultiPoint(MultiPoint),
    /// [MultiLineString]
    MultiLineString(MultiLineString),
    /// [MultiPolygon]
    MultiPolygon(MultiPolygon),
    /// [GeometryCollection]
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Returns the geometry's kind tag.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Returns the geometry's layout.
    pub fn layout(&self) -> Layout {
        match self {
            Geometry::Point(g) => g.layout(),
            Geometry::LineString(g) => g.layout(),
            Geometry::Polygon(g) => g.layout(),
            Geometry::MultiPoint(g) => g.layout(),
            Geometry::MultiLineString(g) => g.layout(),
            Geometry::MultiPolygon(g) => g.layout(),
            Geometry::GeometryCollection(g) => g.layout(),
        }
    }

    /// Returns the number of ordinates per coordinate.
    pub fn stride(&self) -> usize {
        self.layout().stride()
    }

    /// Returns the flat ordinate storage. A collection shares no flat
    /// storage with its children and returns an empty slice.
    pub fn flat_coords(&self) -> &[f64] {
        match self {
            Geometry::Point(g) => g.flat_coords(),
            Geometry::LineString(g) => g.flat_coords(),
            Geometry::Polygon(g) => g.flat_coords(),
            Geometry::MultiPoint(g) => g.flat_coords(),
            Geometry::MultiLineString(g) => g.flat_coords(),
            Geometry::MultiPolygon(g) => g.flat_coords(),
            Geometry::GeometryCollection(_) => &[],
        }
    }

    /// Returns true if the geometry is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }

    /// Returns the spatial reference id, 0 meaning unspecified.
    pub fn srid(&self) -> i32 {
        match self {
            Geometry::Point(g) => g.srid(),
            Geometry::LineString(g) => g.srid(),
            Geometry::Polygon(g) => g.srid(),
            Geometry::MultiPoint(g) => g.srid(),
            Geometry::MultiLineString(g) => g.srid(),
            Geometry::MultiPolygon(g) => g.srid(),
            Geometry::GeometryCollection(g) => g.srid(),
        }
    }

    /// Sets the spatial reference id.
    pub fn set_srid(&mut self, srid: i32) {
        match self {
            Geometry::Point(g) => g.set_srid(srid),
            Geometry::LineString(g) => g.set_srid(srid),
            Geometry::Polygon(g) => g.set_srid(srid),
            Geometry::MultiPoint(g) => g.set_srid(srid),
            Geometry::MultiLineString(g) => g.set_srid(srid),
            Geometry::MultiPolygon(g) => g.set_srid(srid),
            Geometry::GeometryCollection(g) => g.set_srid(srid),
        }
    }

    /// Computes the per-ordinate bounding box.
    pub fn bounds(&self) -> Bounds {
        match self {
            Geometry::Point(g) => g.bounds(),
            Geometry::LineString(g) => g.bounds(),
            Geometry::Polygon(g) => g.bounds(),
            Geometry::MultiPoint(g) => g.bounds(),
            Geometry::MultiLineString(g) => g.bounds(),
            Geometry::MultiPolygon(g) => g.bounds(),
            Geometry::GeometryCollection(g) => g.bounds(),
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Geometry::GeometryCollection(value)
    }
}

/// The kind of a geometry, independent of layout and SRID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    /// [Point]
    Point,
    /// [LineString]
    LineString,
    /// [Polygon]
    Polygon,
    /// [MultiPoint]
    MultiPoint,
    /// [MultiLineString]
    MultiLineString,
    /// [MultiPolygon]
    MultiPolygon,
    /// [GeometryCollection]
    GeometryCollection,
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        };
        write!(f, "{name}")
    }
}
