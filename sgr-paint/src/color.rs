use std::fmt::{self, Display, Formatter};

/// Added to a base colour code to mark it as a background colour.
pub const BACKGROUND_OFFSET: u8 = 10;

/// Added to a foreground or background code to mark it high intensity.
pub const HIGH_INTENSITY_OFFSET: u8 = 60;

/// A single SGR parameter value.
///
/// Keeps the raw numeric encoding from the escape sequence; background and
/// high-intensity variants are derived through the classification
/// predicates rather than stored, so `Color::RED + 60` style arithmetic at
/// the decode boundary survives untouched into RGB resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u8);

impl Color {
    pub const NORMAL: Self = Self(0);
    pub const BOLD: Self = Self(1);
    pub const ITALIC: Self = Self(2);
    pub const BLACK: Self = Self(30);
    pub const RED: Self = Self(31);
    pub const GREEN: Self = Self(32);
    pub const YELLOW: Self = Self(33);
    pub const BLUE: Self = Self(34);
    pub const PURPLE: Self = Self(35);
    pub const CYAN: Self = Self(36);
    pub const WHITE: Self = Self(37);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Raw SGR parameter value.
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Maps background and high-intensity codes back to the base
    /// `BLACK..=WHITE` range. Codes at or below `WHITE` are unchanged.
    pub const fn normalize(self) -> Self {
        if self.0 > Self::WHITE.0 {
            Self(Self::BLACK.0 + self.0 % 10)
        } else {
            self
        }
    }

    pub const fn is_high_intensity(self) -> bool {
        self.0 >= Self::BLACK.0 + HIGH_INTENSITY_OFFSET
    }

    /// Whether the code selects a foreground (text) colour.
    pub const fn is_text(self) -> bool {
        let code = self.strip_intensity();
        Self::BLACK.0 <= code && code <= Self::WHITE.0
    }

    /// Whether the code selects a background colour.
    pub const fn is_background(self) -> bool {
        let code = self.strip_intensity();
        Self::BLACK.0 + BACKGROUND_OFFSET <= code
            && code <= Self::WHITE.0 + BACKGROUND_OFFSET
    }

    const fn strip_intensity(self) -> u8 {
        if self.is_high_intensity() {
            self.0 - HIGH_INTENSITY_OFFSET
        } else {
            self.0
        }
    }

    /// RGBA for the code under the Campbell palette, picking the bright
    /// table for high-intensity codes. Codes with no palette entry after
    /// normalization resolve to transparent black.
    pub const fn rgba8(self) -> Rgba {
        if self.is_high_intensity() {
            self.rgba8_bright()
        } else {
            self.rgba8_normal()
        }
    }

    /// RGBA from the normal-intensity Campbell table.
    pub const fn rgba8_normal(self) -> Rgba {
        self.palette_entry(&CAMPBELL_NORMAL)
    }

    /// RGBA from the high-intensity Campbell table.
    pub const fn rgba8_bright(self) -> Rgba {
        self.palette_entry(&CAMPBELL_BRIGHT)
    }

    /// RGBA in the doubled-byte 16-bit-per-channel convention used by
    /// colour-library interop: each channel is `v | (v << 8)`.
    pub const fn rgba16(self) -> (u16, u16, u16, u16) {
        self.rgba8().expand16()
    }

    const fn palette_entry(self, table: &[Rgba; 8]) -> Rgba {
        let base = self.normalize().0;
        if Self::BLACK.0 <= base && base <= Self::WHITE.0 {
            table[(base - Self::BLACK.0) as usize]
        } else {
            Rgba::TRANSPARENT
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let base = match self.normalize().code() {
            0 => return f.write_str("NORMAL"),
            1 => return f.write_str("BOLD"),
            2 => return f.write_str("ITALIC"),
            30 => "BLACK",
            31 => "RED",
            32 => "GREEN",
            33 => "YELLOW",
            34 => "BLUE",
            35 => "PURPLE",
            36 => "CYAN",
            37 => "WHITE",
            _ => "",
        };

        f.write_str(base)?;
        if self.is_background() {
            f.write_str("_BACKGROUND")?;
        }
        if self.is_high_intensity() {
            f.write_str("_BRIGHT")?;
        }

        Ok(())
    }
}

/// An 8-bit-per-channel RGBA value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Replicates each channel's low byte into its high byte.
    pub const fn expand16(self) -> (u16, u16, u16, u16) {
        const fn widen(v: u8) -> u16 {
            v as u16 | (v as u16) << 8
        }

        (widen(self.r), widen(self.g), widen(self.b), widen(self.a))
    }
}

impl Display for Rgba {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

// Windows 10 "Campbell" console palette, BLACK through WHITE.
const CAMPBELL_NORMAL: [Rgba; 8] = [
    Rgba::opaque(12, 12, 12),
    Rgba::opaque(197, 15, 31),
    Rgba::opaque(19, 161, 14),
    Rgba::opaque(193, 156, 0),
    Rgba::opaque(0, 55, 218),
    Rgba::opaque(136, 23, 152),
    Rgba::opaque(58, 150, 221),
    Rgba::opaque(204, 204, 204),
];

const CAMPBELL_BRIGHT: [Rgba; 8] = [
    Rgba::opaque(118, 118, 118),
    Rgba::opaque(231, 72, 86),
    Rgba::opaque(22, 198, 12),
    Rgba::opaque(249, 241, 165),
    Rgba::opaque(59, 120, 255),
    Rgba::opaque(180, 0, 158),
    Rgba::opaque(97, 214, 214),
    Rgba::opaque(242, 242, 242),
];
