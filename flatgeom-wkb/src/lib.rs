//! WKB and extended-WKB codec for [flatgeom] geometries.
//!
//! One decode engine serves both formats: the tag scheme (offset-based plain
//! WKB, or flag-based extended WKB with an optional SRID) is detected from
//! each 32-bit type tag's bit pattern rather than from a mode switch. Encode
//! picks the scheme through [`EncodeOptions::flavor`].
//!
//! Decoding is guarded against hostile inputs: declared element counts are
//! checked against [`DecodeOptions::max_elements`] before any allocation or
//! recursion.

#![warn(missing_docs)]

mod common;
mod error;
pub mod hex;
mod options;
mod reader;
mod writer;

pub use common::{Endianness, WkbType};
pub use error::{WkbError, WkbResult};
pub use options::{
    DecodeOptions, EmptyPointHandling, EncodeOptions, Flavor, DEFAULT_MAX_ELEMENTS,
};
pub use reader::{decode, read_geometry};
pub use writer::{encode, write_geometry};
