//! Flat-coordinate geometry model.
//!
//! Every geometry stores its ordinates in one contiguous `Vec<f64>` with a
//! per-[Layout] stride, and delimits rings/parts with integer end-offset
//! arrays instead of nested allocations. The [Geometry] enum closes over the
//! seven variants so codecs dispatch with exhaustive matches.

#![warn(missing_docs)]

mod bounds;
mod collection;
mod error;
mod geometry;
mod layout;
mod line_string;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;

pub use bounds::Bounds;
pub use collection::GeometryCollection;
pub use error::{GeomError, GeomResult};
pub use geometry::{Geometry, GeometryType};
pub use layout::Layout;
pub use line_string::LineString;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
