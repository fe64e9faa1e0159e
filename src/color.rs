/**
 * Color Module
 *
 * RGB colors used both as generator inputs (base, accent, mortar colors) and
 * as the cell values of a pixel buffer. Channels are stored as `u8`, so any
 * arithmetic that could leave [0, 255] goes through `with_offset`, which
 * clamps.
 */

use crate::generator::{Result, TextureError};

/// RGB color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    /// Create a new color from RGB values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(TextureError::InvalidHexColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| TextureError::InvalidHexColor(hex.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Format as a lowercase `#rrggbb` string
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Shift every channel by the same amount, clamping to [0, 255].
    ///
    /// A single offset for all three channels brightens or darkens the color
    /// without changing its hue, which is what every noisy pattern relies on.
    #[inline]
    pub fn with_offset(&self, offset: i32) -> Self {
        let shift = |channel: u8| i32::from(channel).saturating_add(offset).clamp(0, 255) as u8;
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }

    /// Channels as an `[r, g, b]` array
    #[inline]
    pub fn to_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from(channels: [u8; 3]) -> Self {
        Self::new(channels[0], channels[1], channels[2])
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}
