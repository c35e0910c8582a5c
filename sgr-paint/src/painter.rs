use bitflags::bitflags;
use log::debug;

use crate::codes::{DecodeError, decode};
use crate::color::Color;

bitflags! {
    /// Style attributes toggled by the BOLD and ITALIC codes.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        const BOLD   = 0b0000_0001;
        const ITALIC = 0b0000_0010;
    }
}

/// Cumulative paint state produced by folding decoded colour codes.
///
/// Unset colours mean the renderer should fall back to its own defaults.
/// A reset code (`Color::NORMAL`) leaves already-set fields untouched;
/// create a fresh `Painter` wherever full reset semantics are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Painter {
    text: Option<Color>,
    back: Option<Color>,
    flags: StyleFlags,
}

impl Painter {
    /// Painter with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Painter preloaded with the given foreground and background colours.
    pub fn with_colors(text: Option<Color>, back: Option<Color>) -> Self {
        Self {
            text,
            back,
            flags: StyleFlags::empty(),
        }
    }

    /// Decodes a delimited colour sequence and folds its codes into a
    /// fresh painter.
    pub fn from_sequence(sequence: &[u8]) -> Result<Self, DecodeError> {
        let mut painter = Self::new();
        painter.apply(&decode(sequence)?);
        Ok(painter)
    }

    /// Folds `codes` into the state strictly left-to-right. Later colour
    /// codes override earlier ones of the same class; codes that classify
    /// as neither style nor colour are ignored.
    pub fn apply(&mut self, codes: &[Color]) {
        for &code in codes {
            match code.code() {
                // Reset leaves set fields untouched.
                0 => {},
                1 => self.flags |= StyleFlags::BOLD,
                2 => self.flags |= StyleFlags::ITALIC,
                // Colours keep their raw code so RGB resolution retains
                // brightness information.
                _ if code.is_text() => self.text = Some(code),
                _ if code.is_background() => self.back = Some(code),
                value => debug!("[ignored: sgr] code: {value}"),
            }
        }
    }

    pub fn text_color(&self) -> Option<Color> {
        self.text
    }

    pub fn background_color(&self) -> Option<Color> {
        self.back
    }

    pub fn bold(&self) -> bool {
        self.flags.contains(StyleFlags::BOLD)
    }

    pub fn italic(&self) -> bool {
        self.flags.contains(StyleFlags::ITALIC)
    }

    pub fn style_flags(&self) -> StyleFlags {
        self.flags
    }
}
