//! Hex-string wrappers over the binary codec.
//!
//! Spatial databases commonly exchange the binary formats as lowercase hex
//! text; these helpers compose the codec with that transport encoding.

use std::fmt::Write as _;

use flatgeom::Geometry;

use crate::common::Endianness;
use crate::error::{WkbError, WkbResult};
use crate::options::{DecodeOptions, EncodeOptions};

/// Encodes one geometry as a lowercase hex string.
pub fn encode(
    geom: &Geometry,
    byte_order: Endianness,
    opts: &EncodeOptions,
) -> WkbResult<String> {
    Ok(bytes_to_hex(&crate::encode(geom, byte_order, opts)?))
}

/// Decodes one geometry from a hex string. Both nibble cases are accepted.
pub fn decode(s: &str, opts: &DecodeOptions) -> WkbResult<Geometry> {
    crate::decode(&hex_to_bytes(s)?, opts)
}

pub(crate) fn bytes_to_hex(buf: &[u8]) -> String {
    let mut out = String::with_capacity(buf.len() * 2);
    for byte in buf {
        // Writing into a String cannot fail.
        let _ = write!(out, "{byte:02x}");
    }
    out
}

pub(crate) fn hex_to_bytes(s: &str) -> WkbResult<Vec<u8>> {
    if s.len() % 2 != 0 {
        return Err(WkbError::InvalidHex(format!(
            "odd number of digits ({})",
            s.len()
        )));
    }
    s.as_bytes()
        .chunks_exact(2)
        .map(|pair| match (nibble(pair[0]), nibble(pair[1])) {
            (Some(hi), Some(lo)) => Ok(hi << 4 | lo),
            _ => Err(WkbError::InvalidHex(format!(
                "bad digit pair {:?}",
                String::from_utf8_lossy(pair)
            ))),
        })
        .collect()
}

/// Decodes one hex digit. `from_str_radix` is not used here because it
/// accepts a leading sign.
fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
