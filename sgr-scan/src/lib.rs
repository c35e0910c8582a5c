//! Streaming tokenizer for SGR colour escape sequences.
//!
//! Splits a byte stream into alternating runs of plain text and delimited
//! `ESC [ ... m` sequences. The tokenizer only classifies; decoding the
//! numeric parameters inside a sequence is the job of a downstream crate.

mod scanner;

pub use scanner::{
    ESCAPE, INTRODUCER, SEPARATOR, TERMINATOR, ScanResult, Token, Tokens,
    is_complete_sequence, next_token,
};
