use std::io::Write;

use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};
use flatgeom::{GeomError, Geometry, Layout};

use crate::common::{layout_offset, Endianness, WkbType, EWKB_M, EWKB_SRID, EWKB_Z};
use crate::error::{WkbError, WkbResult};
use crate::options::{EmptyPointHandling, EncodeOptions, Flavor};

/// Encodes one geometry to a byte buffer.
pub fn encode(
    geom: &Geometry,
    byte_order: Endianness,
    opts: &EncodeOptions,
) -> WkbResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(size_hint(geom, opts));
    write_geometry(&mut buf, geom, byte_order, opts)?;
    Ok(buf)
}

/// Writes one geometry to a stream.
pub fn write_geometry<W: Write>(
    mut writer: W,
    geom: &Geometry,
    byte_order: Endianness,
    opts: &EncodeOptions,
) -> WkbResult<()> {
    match byte_order {
        Endianness::BigEndian => {
            write_geometry_inner::<_, BigEndian>(&mut writer, geom, byte_order, opts)
        }
        Endianness::LittleEndian => {
            write_geometry_inner::<_, LittleEndian>(&mut writer, geom, byte_order, opts)
        }
    }
}

fn write_geometry_inner<W: Write, B: ByteOrder>(
    writer: &mut W,
    geom: &Geometry,
    byte_order: Endianness,
    opts: &EncodeOptions,
) -> WkbResult<()> {
    let kind = match geom {
        Geometry::Point(_) => WkbType::Point,
        Geometry::LineString(_) => WkbType::LineString,
        Geometry::Polygon(_) => WkbType::Polygon,
        Geometry::MultiPoint(_) => WkbType::MultiPoint,
        Geometry::MultiLineString(_) => WkbType::MultiLineString,
        Geometry::MultiPolygon(_) => WkbType::MultiPolygon,
        Geometry::GeometryCollection(_) => WkbType::GeometryCollection,
    };
    let layout = match geom {
        // An element-less collection that never declared a layout still
        // encodes; its tag is the bare base id.
        Geometry::GeometryCollection(g)
            if g.num_geometries() == 0 && geom.layout() == Layout::None =>
        {
            Layout::XY
        }
        _ => geom.layout(),
    };
    write_header::<W, B>(writer, byte_order, kind, layout, geom.srid(), opts)?;

    match geom {
        Geometry::Point(g) => {
            if g.is_empty() {
                match opts.empty_point_handling {
                    EmptyPointHandling::Error => return Err(WkbError::EmptyPoint),
                    EmptyPointHandling::Nan => {
                        for _ in 0..g.stride() {
                            writer.write_f64::<B>(f64::NAN)?;
                        }
                    }
                }
            } else {
                for &ordinate in g.coords() {
                    writer.write_f64::<B>(ordinate)?;
                }
            }
        }
        Geometry::LineString(g) => {
            writer.write_u32::<B>(g.num_coords() as u32)?;
            for &ordinate in g.flat_coords() {
                writer.write_f64::<B>(ordinate)?;
            }
        }
        Geometry::Polygon(g) => {
            write_rings::<W, B>(writer, g.stride(), (0..g.num_rings()).map(|i| g.ring_flat_coords(i)))?;
        }
        Geometry::MultiPoint(g) => {
            writer.write_u32::<B>(g.num_points() as u32)?;
            for i in 0..g.num_points() {
                let element: Geometry = g.point(i).into();
                write_geometry_inner::<W, B>(writer, &element, byte_order, opts)?;
            }
        }
        Geometry::MultiLineString(g) => {
            writer.write_u32::<B>(g.num_line_strings() as u32)?;
            for i in 0..g.num_line_strings() {
                let element: Geometry = g.line_string(i).into();
                write_geometry_inner::<W, B>(writer, &element, byte_order, opts)?;
            }
        }
        Geometry::MultiPolygon(g) => {
            writer.write_u32::<B>(g.num_polygons() as u32)?;
            for i in 0..g.num_polygons() {
                let element: Geometry = g.polygon(i).into();
                write_geometry_inner::<W, B>(writer, &element, byte_order, opts)?;
            }
        }
        Geometry::GeometryCollection(g) => {
            writer.write_u32::<B>(g.num_geometries() as u32)?;
            for element in g.geometries() {
                write_geometry_inner::<W, B>(writer, element, byte_order, opts)?;
            }
        }
    }
    Ok(())
}

fn write_header<W: Write, B: ByteOrder>(
    writer: &mut W,
    byte_order: Endianness,
    kind: WkbType,
    layout: Layout,
    srid: i32,
    opts: &EncodeOptions,
) -> WkbResult<()> {
    writer.write_u8(byte_order.into())?;
    match opts.flavor {
        Flavor::Basic => {
            writer.write_u32::<B>(u32::from(kind) + layout_offset(layout)?)?;
        }
        Flavor::Extended => {
            if layout == Layout::None {
                return Err(GeomError::UnsupportedLayout(layout).into());
            }
            let mut tag = u32::from(kind);
            if layout.has_z() {
                tag |= EWKB_Z;
            }
            if layout.has_m() {
                tag |= EWKB_M;
            }
            if srid != 0 {
                tag |= EWKB_SRID;
            }
            writer.write_u32::<B>(tag)?;
            if srid != 0 {
                writer.write_i32::<B>(srid)?;
            }
        }
    }
    Ok(())
}

fn write_rings<'a, W: Write, B: ByteOrder>(
    writer: &mut W,
    stride: usize,
    rings: impl ExactSizeIterator<Item = &'a [f64]>,
) -> WkbResult<()> {
    writer.write_u32::<B>(rings.len() as u32)?;
    for ring in rings {
        writer.write_u32::<B>((ring.len() / stride.max(1)) as u32)?;
        for &ordinate in ring {
            writer.write_f64::<B>(ordinate)?;
        }
    }
    Ok(())
}

/// A capacity hint for [encode]; undercounting only costs a reallocation.
fn size_hint(geom: &Geometry, opts: &EncodeOptions) -> usize {
    let header = 1 + 4 + if geom.srid() != 0 { 4 } else { 0 };
    header
        + match geom {
            Geometry::Point(g) => g.stride() * 8,
            Geometry::LineString(g) => 4 + g.flat_coords().len() * 8,
            Geometry::Polygon(g) => 4 + g.num_rings() * 4 + g.flat_coords().len() * 8,
            Geometry::MultiPoint(g) => {
                4 + g.num_points() * 5 + g.flat_coords().len() * 8
            }
            Geometry::MultiLineString(g) => {
                4 + g.num_line_strings() * 9 + g.flat_coords().len() * 8
            }
            Geometry::MultiPolygon(g) => {
                let rings: usize = g.endss().iter().map(Vec::len).sum();
                4 + g.num_polygons() * 9 + rings * 4 + g.flat_coords().len() * 8
            }
            Geometry::GeometryCollection(g) => {
                4 + g
                    .geometries()
                    .iter()
                    .map(|child| size_hint(child, opts))
                    .sum::<usize>()
            }
        }
}
