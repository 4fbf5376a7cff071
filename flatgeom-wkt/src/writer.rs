use std::fmt::Write;

use flatgeom::{
    Geometry, GeometryCollection, Layout, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

/// Serializes a geometry to its canonical WKT form.
///
/// Equivalent to `Encoder::new().encode(geometry)`.
pub fn encode(geometry: &Geometry) -> String {
    Encoder::new().encode(geometry)
}

/// A WKT serializer.
///
/// The default encoder prints ordinates with the shortest representation that
/// round-trips through `f64`. An encoder constructed with
/// [`Encoder::with_max_decimal_digits`] rounds ordinates to a fixed number of
/// decimal digits instead, trimming trailing zeros.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    max_decimal_digits: Option<usize>,
}

impl Encoder {
    /// Creates an encoder with default number formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder that rounds ordinates to at most `digits` decimal
    /// digits.
    pub fn with_max_decimal_digits(digits: usize) -> Self {
        Self {
            max_decimal_digits: Some(digits),
        }
    }

    /// Serializes a geometry to WKT.
    pub fn encode(&self, geometry: &Geometry) -> String {
        let mut out = String::new();
        self.geometry(&mut out, geometry);
        out
    }

    fn geometry(&self, out: &mut String, geometry: &Geometry) {
        match geometry {
            Geometry::Point(point) => self.point(out, point),
            Geometry::LineString(line_string) => self.line_string(out, line_string),
            Geometry::Polygon(polygon) => self.polygon(out, polygon),
            Geometry::MultiPoint(multi_point) => self.multi_point(out, multi_point),
            Geometry::MultiLineString(multi_line_string) => {
                self.multi_line_string(out, multi_line_string)
            }
            Geometry::MultiPolygon(multi_polygon) => self.multi_polygon(out, multi_polygon),
            Geometry::GeometryCollection(collection) => self.collection(out, collection),
        }
    }

    fn point(&self, out: &mut String, point: &Point) {
        tag(out, "POINT", point.layout());
        if point.is_empty() {
            out.push_str("EMPTY");
        } else {
            out.push('(');
            self.coord(out, point.coords());
            out.push(')');
        }
    }

    fn line_string(&self, out: &mut String, line_string: &LineString) {
        tag(out, "LINESTRING", line_string.layout());
        if line_string.is_empty() {
            out.push_str("EMPTY");
        } else {
            self.coord_seq(out, line_string.flat_coords(), line_string.stride());
        }
    }

    fn polygon(&self, out: &mut String, polygon: &Polygon) {
        tag(out, "POLYGON", polygon.layout());
        if polygon.is_empty() {
            out.push_str("EMPTY");
        } else {
            self.rings(out, polygon);
        }
    }

    fn rings(&self, out: &mut String, polygon: &Polygon) {
        out.push('(');
        for i in 0..polygon.num_rings() {
            if i > 0 {
                out.push_str(", ");
            }
            self.coord_seq(out, polygon.ring_flat_coords(i), polygon.stride());
        }
        out.push(')');
    }

    fn multi_point(&self, out: &mut String, multi_point: &MultiPoint) {
        tag(out, "MULTIPOINT", multi_point.layout());
        if multi_point.is_empty() {
            out.push_str("EMPTY");
            return;
        }
        out.push('(');
        for i in 0..multi_point.num_points() {
            if i > 0 {
                out.push_str(", ");
            }
            let point = multi_point.point(i);
            if point.is_empty() {
                out.push_str("EMPTY");
            } else {
                self.coord(out, point.coords());
            }
        }
        out.push(')');
    }

    fn multi_line_string(&self, out: &mut String, multi_line_string: &MultiLineString) {
        tag(out, "MULTILINESTRING", multi_line_string.layout());
        if multi_line_string.is_empty() {
            out.push_str("EMPTY");
            return;
        }
        out.push('(');
        for i in 0..multi_line_string.num_line_strings() {
            if i > 0 {
                out.push_str(", ");
            }
            let line_string = multi_line_string.line_string(i);
            if line_string.is_empty() {
                out.push_str("EMPTY");
            } else {
                self.coord_seq(out, line_string.flat_coords(), line_string.stride());
            }
        }
        out.push(')');
    }

    fn multi_polygon(&self, out: &mut String, multi_polygon: &MultiPolygon) {
        tag(out, "MULTIPOLYGON", multi_polygon.layout());
        if multi_polygon.is_empty() {
            out.push_str("EMPTY");
            return;
        }
        out.push('(');
        for i in 0..multi_polygon.num_polygons() {
            if i > 0 {
                out.push_str(", ");
            }
            let polygon = multi_polygon.polygon(i);
            if polygon.is_empty() {
                out.push_str("EMPTY");
            } else {
                self.rings(out, &polygon);
            }
        }
        out.push(')');
    }

    fn collection(&self, out: &mut String, collection: &GeometryCollection) {
        tag(out, "GEOMETRYCOLLECTION", collection.layout());
        // is_empty() is true for a collection of all-empty children, which
        // still prints its member list; only an element-less collection is
        // the EMPTY form.
        if collection.num_geometries() == 0 {
            out.push_str("EMPTY");
            return;
        }
        out.push('(');
        for (i, geometry) in collection.geometries().iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.geometry(out, geometry);
        }
        out.push(')');
    }

    /// Writes `(c, c, ...)` for a flat run of coordinates.
    fn coord_seq(&self, out: &mut String, flat_coords: &[f64], stride: usize) {
        out.push('(');
        for (i, coord) in flat_coords.chunks_exact(stride).enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.coord(out, coord);
        }
        out.push(')');
    }

    fn coord(&self, out: &mut String, coord: &[f64]) {
        for (i, &ordinate) in coord.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            self.number(out, ordinate);
        }
    }

    fn number(&self, out: &mut String, value: f64) {
        match self.max_decimal_digits {
            None => {
                let _ = write!(out, "{value}");
            }
            Some(digits) => {
                let mut formatted = format!("{value:.digits$}");
                if formatted.contains('.') {
                    while formatted.ends_with('0') {
                        formatted.pop();
                    }
                    if formatted.ends_with('.') {
                        formatted.pop();
                    }
                }
                out.push_str(&formatted);
            }
        }
    }
}

/// Writes the geometry tag followed by its dimension suffix, if any, and a
/// trailing space.
fn tag(out: &mut String, name: &str, layout: Layout) {
    out.push_str(name);
    match layout {
        Layout::None | Layout::XY => {}
        Layout::XYZ => out.push_str(" Z"),
        Layout::XYM => out.push_str(" M"),
        Layout::XYZM => out.push_str(" ZM"),
    }
    out.push(' ');
}
