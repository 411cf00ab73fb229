use crate::booking::StatusTone;

/// An sRGB colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b }
    }

    pub const fn new_grey(level: u8) -> Colour {
        Colour::new_rgb_bytes(level, level, level)
    }

    /// Components scaled to `0.0..=1.0`, as PDF colour operators expect.
    pub fn as_fractions(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

/// The fixed confirmation palette.
pub mod colours {
    use super::Colour;

    pub const WHITE: Colour = Colour::new_grey(255);
    pub const PRIMARY: Colour = Colour::new_rgb_bytes(37, 99, 235);
    pub const PRIMARY_DARK: Colour = Colour::new_rgb_bytes(30, 64, 175);
    pub const PRIMARY_TINT: Colour = Colour::new_rgb_bytes(219, 234, 254);
    pub const CARD_FILL: Colour = Colour::new_rgb_bytes(239, 246, 255);
    pub const TEXT_DARK: Colour = Colour::new_rgb_bytes(31, 41, 55);
    pub const TEXT_MUTED: Colour = Colour::new_rgb_bytes(75, 85, 99);
    pub const PANEL_FILL: Colour = Colour::new_rgb_bytes(249, 250, 251);
    pub const PANEL_BORDER: Colour = Colour::new_rgb_bytes(209, 213, 219);
    pub const PICKUP_FILL: Colour = Colour::new_rgb_bytes(239, 246, 255);
    pub const PICKUP_ACCENT: Colour = Colour::new_rgb_bytes(37, 99, 235);
    pub const RETURN_FILL: Colour = Colour::new_rgb_bytes(240, 253, 244);
    pub const RETURN_ACCENT: Colour = Colour::new_rgb_bytes(22, 163, 74);
    pub const FOOTER: Colour = Colour::new_rgb_bytes(31, 41, 55);
    pub const FOOTER_MUTED: Colour = Colour::new_rgb_bytes(209, 213, 219);
    pub const GREEN: Colour = Colour::new_rgb_bytes(22, 163, 74);
    pub const AMBER: Colour = Colour::new_rgb_bytes(217, 119, 6);
    pub const RED: Colour = Colour::new_rgb_bytes(220, 38, 38);
}

/// Text colour for a status line.
pub fn tone_colour(tone: StatusTone) -> Colour {
    match tone {
        StatusTone::Positive => colours::GREEN,
        StatusTone::Pending => colours::AMBER,
        StatusTone::Negative => colours::RED,
    }
}
