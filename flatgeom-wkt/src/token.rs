use std::fmt;

use flatgeom::{GeometryType, Layout};

/// Dimension suffix attached to a geometry tag, either fused (`POINTZM`)
/// or standalone (`POINT ZM`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Suffix {
    Z,
    M,
    Zm,
}

impl Suffix {
    pub(crate) fn layout(self) -> Layout {
        match self {
            Suffix::Z => Layout::XYZ,
            Suffix::M => Layout::XYM,
            Suffix::Zm => Layout::XYZM,
        }
    }

    fn parse(word: &str) -> Option<Suffix> {
        match word {
            "Z" => Some(Suffix::Z),
            "M" => Some(Suffix::M),
            "ZM" => Some(Suffix::Zm),
            _ => None,
        }
    }
}

/// A lexed token with its source position: 1-based line, 0-based column.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub pos: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum TokenKind {
    /// A geometry tag, with its fused or standalone dimension suffix if any.
    Tag {
        kind: GeometryType,
        suffix: Option<Suffix>,
    },
    /// A standalone `Z`/`M`/`ZM` following an unsuffixed tag.
    Suffix(Suffix),
    Empty,
    Num(f64),
    LParen,
    RParen,
    Comma,
    Eof,
}

impl TokenKind {
    /// How the token is referred to in `unexpected ...` messages.
    pub(crate) fn describe(&self) -> String {
        match self {
            TokenKind::Tag { kind, .. } => tag_name(*kind).to_owned(),
            TokenKind::Suffix(Suffix::Z) => "Z".to_owned(),
            TokenKind::Suffix(Suffix::M) => "M".to_owned(),
            TokenKind::Suffix(Suffix::Zm) => "ZM".to_owned(),
            TokenKind::Empty => "EMPTY".to_owned(),
            TokenKind::Num(_) => "NUM".to_owned(),
            TokenKind::LParen => "'('".to_owned(),
            TokenKind::RParen => "')'".to_owned(),
            TokenKind::Comma => "','".to_owned(),
            TokenKind::Eof => "$end".to_owned(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

pub(crate) fn tag_name(kind: GeometryType) -> &'static str {
    match kind {
        GeometryType::Point => "POINT",
        GeometryType::LineString => "LINESTRING",
        GeometryType::Polygon => "POLYGON",
        GeometryType::MultiPoint => "MULTIPOINT",
        GeometryType::MultiLineString => "MULTILINESTRING",
        GeometryType::MultiPolygon => "MULTIPOLYGON",
        GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
    }
}

const TAGS: &[(&str, GeometryType)] = &[
    ("POINT", GeometryType::Point),
    ("LINESTRING", GeometryType::LineString),
    ("POLYGON", GeometryType::Polygon),
    ("MULTIPOINT", GeometryType::MultiPoint),
    ("MULTILINESTRING", GeometryType::MultiLineString),
    ("MULTIPOLYGON", GeometryType::MultiPolygon),
    ("GEOMETRYCOLLECTION", GeometryType::GeometryCollection),
];

/// Resolves an uppercased word to a geometry tag, handling fused suffix
/// forms like `POINTZM`. Returns `None` for anything else.
pub(crate) fn lookup_tag(word: &str) -> Option<(GeometryType, Option<Suffix>)> {
    for (name, kind) in TAGS {
        if let Some(rest) = word.strip_prefix(name) {
            if rest.is_empty() {
                return Some((*kind, None));
            }
            if let Some(suffix) = Suffix::parse(rest) {
                return Some((*kind, Some(suffix)));
            }
        }
    }
    None
}
