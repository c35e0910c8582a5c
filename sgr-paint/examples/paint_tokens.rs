//! Print every token of a byte stream along with the paint state it
//! leaves behind.
use sgr_paint::{Painter, must_decode};
use sgr_scan::{Token, Tokens};

fn main() {
    let bytes = b"plain \x1b[1;31mbold red\x1b[0m then \
                  \x1b[44;96mbright cyan on blue\x1b[0m\n";

    let mut painter = Painter::new();

    for (seq, token) in Tokens::new(bytes).enumerate() {
        match token {
            Token::Sequence(bytes) if token.is_complete_sequence() => {
                let codes = must_decode(bytes);
                painter.apply(&codes);

                let names: Vec<String> =
                    codes.iter().map(ToString::to_string).collect();
                println!("{:02}: sequence {:?}", seq, names.join(";"));
            },
            _ => {
                println!(
                    "{:02}: text {:?} fg={:?} bg={:?} bold={} italic={}",
                    seq,
                    String::from_utf8_lossy(token.bytes()),
                    painter.text_color().map(|c| c.rgba8().to_string()),
                    painter.background_color().map(|c| c.rgba8().to_string()),
                    painter.bold(),
                    painter.italic(),
                );
            },
        }
    }
}
