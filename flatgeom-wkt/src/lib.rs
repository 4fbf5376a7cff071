//! WKT codec for [flatgeom] geometries.
//!
//! Parsing is a hand-written lexer and recursive-descent parser that track
//! one dimensional layout across the whole text: a `Z`/`M`/`ZM` suffix
//! declares it, an undecorated tuple infers it from its coordinate count, and
//! any later disagreement is a [`SyntaxError`] pointing at the offending
//! token, with the source line quoted and a caret under the position.
//!
//! ```
//! use flatgeom_wkt::{encode, parse};
//!
//! let geometry = parse("MULTIPOINT Z (1 2 3, EMPTY)")?;
//! assert_eq!(encode(&geometry), "MULTIPOINT Z (1 2 3, EMPTY)");
//! # Ok::<(), flatgeom_wkt::WktError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod lexer;
mod parser;
mod token;
mod writer;

pub use error::{SyntaxError, WktError, WktResult};
pub use parser::parse;
pub use writer::{encode, Encoder};
