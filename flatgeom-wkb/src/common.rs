use flatgeom::Layout;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{WkbError, WkbResult};

/// High bit of an extended type tag flagging a Z ordinate.
pub(crate) const EWKB_Z: u32 = 0x8000_0000;
/// High bit of an extended type tag flagging an M ordinate.
pub(crate) const EWKB_M: u32 = 0x4000_0000;
/// High bit of an extended type tag flagging a trailing SRID field.
pub(crate) const EWKB_SRID: u32 = 0x2000_0000;

pub(crate) const EWKB_FLAG_MASK: u32 = EWKB_Z | EWKB_M | EWKB_SRID;

/// The byte-order byte leading every encoded geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Endianness {
    /// XDR, most significant byte first.
    BigEndian = 0,
    /// NDR, least significant byte first.
    #[default]
    LittleEndian = 1,
}

/// The base geometry-kind ids shared by both tag schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WkbType {
    /// A WKB Point
    Point = 1,
    /// A WKB LineString
    LineString = 2,
    /// A WKB Polygon
    Polygon = 3,
    /// A WKB MultiPoint
    MultiPoint = 4,
    /// A WKB MultiLineString
    MultiLineString = 5,
    /// A WKB MultiPolygon
    MultiPolygon = 6,
    /// A WKB GeometryCollection
    GeometryCollection = 7,
}

/// A decoded type tag: base kind, layout, and whether an SRID field follows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TypeTag {
    pub kind: WkbType,
    pub layout: Layout,
    pub has_srid: bool,
}

impl TypeTag {
    /// Splits a 32-bit tag, detecting which scheme produced it from the bit
    /// pattern: any Z/M/SRID high bit set means the flag scheme, otherwise
    /// the offset scheme (base id plus 1000/2000/3000 per Z/M/ZM).
    pub(crate) fn parse(tag: u32) -> WkbResult<Self> {
        if tag & EWKB_FLAG_MASK != 0 {
            let layout = match (tag & EWKB_Z != 0, tag & EWKB_M != 0) {
                (false, false) => Layout::XY,
                (true, false) => Layout::XYZ,
                (false, true) => Layout::XYM,
                (true, true) => Layout::XYZM,
            };
            let kind = WkbType::try_from_primitive(tag & !EWKB_FLAG_MASK)
                .map_err(|_| WkbError::UnknownType(tag))?;
            Ok(Self {
                kind,
                layout,
                has_srid: tag & EWKB_SRID != 0,
            })
        } else {
            let layout = match tag / 1000 {
                0 => Layout::XY,
                1 => Layout::XYZ,
                2 => Layout::XYM,
                3 => Layout::XYZM,
                _ => return Err(WkbError::UnknownType(tag)),
            };
            let kind =
                WkbType::try_from_primitive(tag % 1000).map_err(|_| WkbError::UnknownType(tag))?;
            Ok(Self {
                kind,
                layout,
                has_srid: false,
            })
        }
    }
}

/// The offset added to a base kind id under the offset tag scheme.
pub(crate) fn layout_offset(layout: Layout) -> WkbResult<u32> {
    match layout {
        Layout::None => Err(WkbError::Geom(flatgeom::GeomError::UnsupportedLayout(
            layout,
        ))),
        Layout::XY => Ok(0),
        Layout::XYZ => Ok(1000),
        Layout::XYM => Ok(2000),
        Layout::XYZM => Ok(3000),
    }
}
