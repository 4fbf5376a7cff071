//! Defines [`WkbError`], representing all errors returned by this crate.

use flatgeom::{GeomError, GeometryType};
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WkbError {
    /// [GeomError]
    #[error(transparent)]
    Geom(#[from] GeomError),

    /// [std::io::Error]
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The leading byte-order byte is neither 0x00 nor 0x01.
    #[error("unknown byte order {0:#04x}")]
    UnknownByteOrder(u8),

    /// The 32-bit type tag matches neither tag scheme.
    #[error("unknown type tag {0}")]
    UnknownType(u32),

    /// A container element decoded to the wrong concrete kind.
    #[error("unexpected type: got {got}, want {want}")]
    UnexpectedType {
        /// The kind actually decoded.
        got: GeometryType,
        /// The kind the container requires.
        want: GeometryType,
    },

    /// A declared element count exceeds the configured per-level limit.
    ///
    /// Raised before any allocation or recursion, so hostile inputs
    /// declaring absurd counts fail in constant work.
    #[error("geometry too large: level {level}, n {n}, limit {limit}")]
    GeometryTooLarge {
        /// The nesting level whose limit was exceeded.
        level: usize,
        /// The declared element count.
        n: usize,
        /// The configured limit for the level.
        limit: usize,
    },

    /// The base format has no representation for the empty point.
    #[error("cannot encode empty Point in WKB")]
    EmptyPoint,

    /// A hex string is not well-formed.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

/// Crate-specific result type.
pub type WkbResult<T> = std::result::Result<T, WkbError>;
