//! Decoding of SGR colour sequences and the cumulative paint state they
//! produce.
//!
//! [`decode`] turns a delimited sequence token (as produced by the
//! `sgr-scan` tokenizer) into typed [`Color`] codes; [`Painter`] folds
//! those codes into a foreground/background/bold/italic record a renderer
//! can consume.

mod codes;
mod color;
mod painter;

pub use codes::{DecodeError, decode, must_decode};
pub use color::{BACKGROUND_OFFSET, Color, HIGH_INTENSITY_OFFSET, Rgba};
pub use painter::{Painter, StyleFlags};
