//! Colors and the planet palette.

use geosphere_biome::Biome;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from red, green and blue.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// CSS-style `#rrggbb` string.
    pub fn to_hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as `[r, g, b, a]`.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Fixed display colors used by the planet screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Fill for land faces.
    pub land: Color,
    /// Fill for sea faces.
    pub sea: Color,
    /// Stroke for wireframe edges.
    pub wireframe: Color,
    /// Canvas clear color.
    pub background: Color,
}

impl Palette {
    /// Fill color for a face of the given biome.
    pub fn biome(&self, biome: Biome) -> Color {
        match biome {
            Biome::Land => self.land,
            Biome::Sea => self.sea,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            land: Color::from_hex(0x27ae60),
            sea: Color::from_hex(0x3498db),
            wireframe: Color::from_hex(0x222222),
            background: Color::from_hex(0x0b0d17),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0x27ae60);
        assert_eq!((c.r, c.g, c.b, c.a), (0x27, 0xae, 0x60, 255));
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(Color::from_hex(0x3498db).to_hex_string(), "#3498db");
        assert_eq!(Color::BLACK.to_hex_string(), "#000000");
    }

    #[test]
    fn test_palette_maps_biomes() {
        let palette = Palette::default();
        assert_eq!(palette.biome(Biome::Land).to_hex_string(), "#27ae60");
        assert_eq!(palette.biome(Biome::Sea).to_hex_string(), "#3498db");
        assert_ne!(palette.land, palette.sea);
    }
}
