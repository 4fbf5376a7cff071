use std::io::{Cursor, Read};

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use flatgeom::{
    Geometry, GeometryCollection, GeometryType, Layout, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

use crate::common::{Endianness, TypeTag, WkbType};
use crate::error::{WkbError, WkbResult};
use crate::options::{DecodeOptions, EmptyPointHandling};

/// Decodes one geometry from a byte buffer.
///
/// Both tag schemes are recognized, detected per tag from its bit pattern.
/// Trailing bytes after the geometry are ignored.
pub fn decode(buf: &[u8], opts: &DecodeOptions) -> WkbResult<Geometry> {
    read_geometry(&mut Cursor::new(buf), opts)
}

/// Reads one geometry from a stream.
pub fn read_geometry<R: Read>(reader: &mut R, opts: &DecodeOptions) -> WkbResult<Geometry> {
    let byte_order = reader.read_u8()?;
    match Endianness::try_from(byte_order) {
        Ok(Endianness::BigEndian) => read_tagged::<R, BigEndian>(reader, opts),
        Ok(Endianness::LittleEndian) => read_tagged::<R, LittleEndian>(reader, opts),
        Err(_) => Err(WkbError::UnknownByteOrder(byte_order)),
    }
}

fn read_tagged<R: Read, B: ByteOrder>(reader: &mut R, opts: &DecodeOptions) -> WkbResult<Geometry> {
    let tag = TypeTag::parse(reader.read_u32::<B>()?)?;
    let srid = if tag.has_srid {
        reader.read_i32::<B>()?
    } else {
        0
    };
    let layout = tag.layout;
    let mut geom: Geometry = match tag.kind {
        WkbType::Point => read_point::<R, B>(reader, layout, opts)?.into(),
        WkbType::LineString => read_line_string::<R, B>(reader, layout, opts)?.into(),
        WkbType::Polygon => read_polygon::<R, B>(reader, layout, opts)?.into(),
        WkbType::MultiPoint => read_multi_point::<R, B>(reader, layout, opts)?.into(),
        WkbType::MultiLineString => read_multi_line_string::<R, B>(reader, layout, opts)?.into(),
        WkbType::MultiPolygon => read_multi_polygon::<R, B>(reader, layout, opts)?.into(),
        WkbType::GeometryCollection => {
            read_geometry_collection::<R, B>(reader, layout, opts)?.into()
        }
    };
    if srid != 0 {
        geom.set_srid(srid);
    }
    Ok(geom)
}

/// Reads a 32-bit element count and checks it against the configured limit
/// for `level` before anything is allocated.
fn read_count<R: Read, B: ByteOrder>(
    reader: &mut R,
    opts: &DecodeOptions,
    level: usize,
) -> WkbResult<usize> {
    let n = reader.read_u32::<B>()? as usize;
    if let Some(limit) = opts.max_elements[level] {
        if n > limit {
            return Err(WkbError::GeometryTooLarge { level, n, limit });
        }
    }
    Ok(n)
}

fn read_flat_coords<R: Read, B: ByteOrder>(
    reader: &mut R,
    flat_coords: &mut Vec<f64>,
    num_coords: usize,
    stride: usize,
) -> WkbResult<()> {
    flat_coords.reserve(num_coords * stride);
    for _ in 0..num_coords * stride {
        flat_coords.push(reader.read_f64::<B>()?);
    }
    Ok(())
}

fn read_point<R: Read, B: ByteOrder>(
    reader: &mut R,
    layout: Layout,
    opts: &DecodeOptions,
) -> WkbResult<Point> {
    let mut coords = Vec::with_capacity(layout.stride());
    for _ in 0..layout.stride() {
        coords.push(reader.read_f64::<B>()?);
    }
    let point = match opts.empty_point_handling {
        EmptyPointHandling::Error => Point::new(layout, coords)?,
        EmptyPointHandling::Nan => Point::new_flat_maybe_empty(layout, coords)?,
    };
    Ok(point)
}

fn read_line_string<R: Read, B: ByteOrder>(
    reader: &mut R,
    layout: Layout,
    opts: &DecodeOptions,
) -> WkbResult<LineString> {
    let num_coords = read_count::<R, B>(reader, opts, 1)?;
    let mut flat_coords = Vec::new();
    read_flat_coords::<R, B>(reader, &mut flat_coords, num_coords, layout.stride())?;
    Ok(LineString::new_flat(layout, flat_coords)?)
}

fn read_polygon<R: Read, B: ByteOrder>(
    reader: &mut R,
    layout: Layout,
    opts: &DecodeOptions,
) -> WkbResult<Polygon> {
    let num_rings = read_count::<R, B>(reader, opts, 2)?;
    let mut flat_coords = Vec::new();
    let mut ends = Vec::with_capacity(num_rings);
    for _ in 0..num_rings {
        let num_coords = read_count::<R, B>(reader, opts, 1)?;
        read_flat_coords::<R, B>(reader, &mut flat_coords, num_coords, layout.stride())?;
        ends.push(flat_coords.len());
    }
    Ok(Polygon::new_flat(layout, flat_coords, ends)?)
}

fn read_multi_point<R: Read, B: ByteOrder>(
    reader: &mut R,
    layout: Layout,
    opts: &DecodeOptions,
) -> WkbResult<MultiPoint> {
    let n = read_count::<R, B>(reader, opts, 1)?;
    let mut multi_point = MultiPoint::empty(layout);
    for _ in 0..n {
        match read_geometry(reader, opts)? {
            Geometry::Point(point) => multi_point.push(point)?,
            other => {
                return Err(WkbError::UnexpectedType {
                    got: other.geometry_type(),
                    want: GeometryType::Point,
                });
            }
        }
    }
    Ok(multi_point)
}

fn read_multi_line_string<R: Read, B: ByteOrder>(
    reader: &mut R,
    layout: Layout,
    opts: &DecodeOptions,
) -> WkbResult<MultiLineString> {
    let n = read_count::<R, B>(reader, opts, 2)?;
    let mut multi_line_string = MultiLineString::empty(layout);
    for _ in 0..n {
        match read_geometry(reader, opts)? {
            Geometry::LineString(line_string) => multi_line_string.push(line_string)?,
            other => {
                return Err(WkbError::UnexpectedType {
                    got: other.geometry_type(),
                    want: GeometryType::LineString,
                });
            }
        }
    }
    Ok(multi_line_string)
}

fn read_multi_polygon<R: Read, B: ByteOrder>(
    reader: &mut R,
    layout: Layout,
    opts: &DecodeOptions,
) -> WkbResult<MultiPolygon> {
    let n = read_count::<R, B>(reader, opts, 3)?;
    let mut multi_polygon = MultiPolygon::empty(layout);
    for _ in 0..n {
        match read_geometry(reader, opts)? {
            Geometry::Polygon(polygon) => multi_polygon.push(polygon)?,
            other => {
                return Err(WkbError::UnexpectedType {
                    got: other.geometry_type(),
                    want: GeometryType::Polygon,
                });
            }
        }
    }
    Ok(multi_polygon)
}

fn read_geometry_collection<R: Read, B: ByteOrder>(
    reader: &mut R,
    layout: Layout,
    opts: &DecodeOptions,
) -> WkbResult<GeometryCollection> {
    let n = read_count::<R, B>(reader, opts, 1)?;
    let mut collection = GeometryCollection::empty();
    for _ in 0..n {
        collection.push(read_geometry(reader, opts)?);
    }
    // The tag is the only record of an element-less collection's
    // dimensionality.
    if collection.num_geometries() == 0 {
        collection.set_layout(layout)?;
    }
    Ok(collection)
}
