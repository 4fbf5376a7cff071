/// How empty points are represented on the wire.
///
/// Neither binary format has a native empty point; a stride-length run of
/// NaN ordinates is the conventional stand-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyPointHandling {
    /// Refuse to encode an empty point; decode NaN ordinates as ordinary
    /// (NaN-valued) coordinates.
    #[default]
    Error,
    /// Encode an empty point as all-NaN ordinates; decode an all-NaN point
    /// back to the empty point.
    Nan,
}

/// Which type-tag scheme [`encode`](crate::encode) emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Flavor {
    /// Offset-scheme tags (base id plus 1000/2000/3000), never an SRID.
    #[default]
    Basic,
    /// Flag-scheme tags; a non-zero SRID sets the SRID bit and is written
    /// after the tag.
    Extended,
}

/// Per-nesting-level element-count limits applied before allocation.
///
/// Index is the nesting level; index 0 is unused. Level 1 covers coordinate
/// counts and MultiPoint/GeometryCollection elements, level 2 covers polygon
/// rings and MultiLineString elements, level 3 covers MultiPolygon elements.
pub const DEFAULT_MAX_ELEMENTS: [Option<usize>; 4] =
    [None, Some(1 << 20), Some(1 << 15), Some(1 << 10)];

/// Options controlling [`decode`](crate::decode).
#[derive(Clone, Debug, PartialEq)]
pub struct DecodeOptions {
    /// Empty-point policy; [`EmptyPointHandling::Error`] by default.
    pub empty_point_handling: EmptyPointHandling,
    /// Per-level element-count limits; `None` disables the check for a
    /// level.
    pub max_elements: [Option<usize>; 4],
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            empty_point_handling: EmptyPointHandling::default(),
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}

impl DecodeOptions {
    /// The defaults conventionally used with the extended format: all-NaN
    /// points decode as the empty point.
    pub fn extended() -> Self {
        Self {
            empty_point_handling: EmptyPointHandling::Nan,
            ..Self::default()
        }
    }
}

/// Options controlling [`encode`](crate::encode).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Which tag scheme to emit; [`Flavor::Basic`] by default.
    pub flavor: Flavor,
    /// Empty-point policy; [`EmptyPointHandling::Error`] by default.
    pub empty_point_handling: EmptyPointHandling,
}

impl EncodeOptions {
    /// The defaults conventionally used with the extended format: flag-scheme
    /// tags, SRID when present, empty points written as NaN.
    pub fn extended() -> Self {
        Self {
            flavor: Flavor::Extended,
            empty_point_handling: EmptyPointHandling::Nan,
        }
    }
}
