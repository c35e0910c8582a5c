//! Full scan -> classify -> decode -> fold pipeline over realistic byte
//! streams.

use sgr_paint::{Color, DecodeError, HIGH_INTENSITY_OFFSET, Painter, decode};
use sgr_scan::{ScanResult, Token, Tokens, next_token};

#[test]
fn red_hello_world() {
    let input = b"\x1b[31mHello, World!";

    let ScanResult::Token { consumed, token } = next_token(input, false)
    else {
        panic!("expected a sequence token");
    };
    assert_eq!(consumed, 5);
    assert!(token.is_complete_sequence());

    let codes = decode(token.bytes()).unwrap();
    assert_eq!(codes, vec![Color::RED]);

    let ScanResult::Token { consumed, token } =
        next_token(&input[consumed..], false)
    else {
        panic!("expected a text token");
    };
    assert_eq!(consumed, 13);
    assert_eq!(token, Token::PlainText(b"Hello, World!".as_slice()));

    let mut painter = Painter::new();
    painter.apply(&codes);
    assert_eq!(painter.text_color(), Some(Color::RED));
    assert_eq!(painter.background_color(), None);
    assert!(!painter.bold() && !painter.italic());
}

#[test]
fn banner_stream_folds_and_round_trips() {
    // Shaped like a boot banner: compound styles, bright colours, resets.
    let input: &[u8] = b"\x1b[0;1;34;94m___\x1b[0m  \
                         \x1b[0;34m\\(_)\x1b[0m |\n\
                         Welcome to \x1b[0;91mArmbian 23.02.2\x1b[0m with \
                         \x1b[91mLinux 6.1.63\x1b[0m\n\
                         System load: \x1b[0;92m 2%\x1b[0m\n";

    let mut rebuilt = Vec::new();
    let mut sequences = 0usize;
    let mut painter = Painter::new();

    for token in Tokens::new(input) {
        assert!(!token.bytes().is_empty(), "tokenizer must make progress");
        rebuilt.extend_from_slice(token.bytes());

        if token.is_complete_sequence() {
            sequences += 1;
            painter.apply(&decode(token.bytes()).unwrap());
        }
    }

    assert_eq!(rebuilt, input);
    assert_eq!(sequences, 10);

    // Last colour sequence wins; earlier resets never cleared anything.
    assert_eq!(
        painter.text_color(),
        Some(Color::new(Color::GREEN.code() + HIGH_INTENSITY_OFFSET))
    );
    assert!(painter.bold(), "bold from the first sequence sticks");
    assert!(!painter.italic());
}

#[test]
fn incomplete_trailing_sequence_is_not_decoded() {
    let input = b"text\x1b[31;4";

    let tokens: Vec<Token<'_>> = Tokens::new(input).collect();
    assert_eq!(tokens.len(), 2);
    assert!(!tokens[1].is_complete_sequence());

    // The speculative tail still fails decoding cleanly if forced.
    assert_eq!(
        decode(tokens[1].bytes()),
        Err(DecodeError::MalformedNumber)
    );
}
