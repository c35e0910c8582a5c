use memchr::{memchr, memmem};

/// ESC control byte opening every recognized sequence.
pub const ESCAPE: u8 = 0x1B;

/// Two-byte prefix marking the start of an SGR sequence.
pub const INTRODUCER: [u8; 2] = *b"\x1b[";

/// Final byte of an SGR sequence.
pub const TERMINATOR: u8 = b'm';

/// Separator between numeric parameters inside a sequence.
pub const SEPARATOR: u8 = b';';

/// A classified run of bytes borrowed from the caller's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Bytes that are not part of a recognized sequence.
    PlainText(&'a [u8]),
    /// Bytes starting with the introducer. The run is only guaranteed to
    /// end with the terminator when [`Token::is_complete_sequence`] holds.
    Sequence(&'a [u8]),
}

impl<'a> Token<'a> {
    pub fn bytes(&self) -> &'a [u8] {
        match self {
            Self::PlainText(bytes) | Self::Sequence(bytes) => bytes,
        }
    }

    pub fn is_complete_sequence(&self) -> bool {
        is_complete_sequence(self.bytes())
    }
}

/// Outcome of a single [`next_token`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanResult<'a> {
    /// A token was produced and `consumed` bytes of the buffer were used.
    Token { consumed: usize, token: Token<'a> },
    /// The buffer is empty and the stream is still open.
    NeedMoreInput,
    /// The caller signalled that no further input exists.
    EndOfStream,
}

fn is_sequence_start(bytes: &[u8]) -> bool {
    bytes.len() >= INTRODUCER.len() && bytes[..INTRODUCER.len()] == INTRODUCER
}

/// Checks whether `bytes` form a fully delimited SGR sequence: introducer
/// first, terminator last. Meant to gate tokens produced by [`next_token`]
/// before handing them to a decoder.
pub fn is_complete_sequence(bytes: &[u8]) -> bool {
    is_sequence_start(bytes) && bytes[bytes.len() - 1] == TERMINATOR
}

/// Produces the next token from the front of `buffer`.
///
/// Designed for a caller-driven pull loop: each call consumes a prefix of
/// the unconsumed buffer and reports how many bytes it used, so the caller
/// can slide a window over a growing stream. Guarantees a non-zero advance
/// whenever the buffer is non-empty.
///
/// An unterminated sequence at the end of the buffer is consumed whole and
/// tagged [`Token::Sequence`]; callers must confirm the terminator with
/// [`is_complete_sequence`] before decoding.
pub fn next_token(buffer: &[u8], at_end_of_input: bool) -> ScanResult<'_> {
    if at_end_of_input {
        return ScanResult::EndOfStream;
    }

    if buffer.is_empty() {
        return ScanResult::NeedMoreInput;
    }

    let consumed = if is_sequence_start(buffer) {
        match memchr(TERMINATOR, buffer) {
            Some(i) => i + 1,
            None => buffer.len(),
        }
    } else {
        // The buffer does not start with the introducer, so any match is at
        // offset >= 1 and forward progress holds.
        match memmem::find(buffer, &INTRODUCER) {
            Some(i) => i,
            None => buffer.len(),
        }
    };

    let bytes = &buffer[..consumed];
    let token = if is_sequence_start(bytes) {
        Token::Sequence(bytes)
    } else {
        Token::PlainText(bytes)
    };

    ScanResult::Token { consumed, token }
}

/// Iterator over all tokens of an in-memory buffer.
pub struct Tokens<'a> {
    buffer: &'a [u8],
}

impl<'a> Tokens<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match next_token(self.buffer, false) {
            ScanResult::Token { consumed, token } => {
                self.buffer = &self.buffer[consumed..];
                Some(token)
            },
            ScanResult::NeedMoreInput | ScanResult::EndOfStream => None,
        }
    }
}
