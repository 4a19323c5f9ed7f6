//! Watch face configuration

use embassy_time::Duration;
use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

const LCD_W: u32 = 240;
const LCD_H: u32 = 240;

/// Interactive mode redraws once a second since seconds are displayed.
const INTERACTIVE_UPDATE_RATE: Duration = Duration::from_secs(1);

/// Colors used by the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Logo base color, also the bottom band and the dot
    pub base: Rgb565,
    pub yellow: Rgb565,
    pub pink: Rgb565,
    pub blue: Rgb565,
    /// Date and time text
    pub alt: Rgb565,
    /// Ambient accent for the logo glyph
    pub am_i: Rgb565,
    /// Ambient logo text
    pub am_p: Rgb565,
    pub background: Rgb565,
    pub ambient_background: Rgb565,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: Rgb565::new(3, 11, 9),
            yellow: Rgb565::new(31, 48, 5),
            pink: Rgb565::new(29, 7, 12),
            blue: Rgb565::new(0, 42, 30),
            alt: Rgb565::new(8, 16, 8),
            am_i: Rgb565::new(24, 48, 24),
            am_p: Rgb565::new(19, 39, 19),
            background: Rgb565::WHITE,
            ambient_background: Rgb565::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WatchFaceConfig {
    /// Display width in pixels
    pub width: u32,
    /// Display height in pixels
    pub height: u32,
    /// Ratio of scaled (font) density to display density
    pub scaled: f32,
    pub palette: Palette,
    /// Redraw interval while visible and interactive
    pub update_rate: Duration,
    /// Draw baseline guides for the text rows
    pub debug_guides: bool,
}

impl WatchFaceConfig {
    /// Create the default configuration for a 240x240 panel
    pub fn new() -> Self {
        Self {
            width: LCD_W,
            height: LCD_H,
            scaled: 1.0,
            palette: Palette::default(),
            update_rate: INTERACTIVE_UPDATE_RATE,
            debug_guides: false,
        }
    }

    /// Same configuration on a panel of another size
    pub fn with_display_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

impl Default for WatchFaceConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_square_240_panel() {
        let config = WatchFaceConfig::new();
        assert_eq!((config.width, config.height), (240, 240));
        assert_eq!(config.update_rate.as_millis(), 1000);
        assert!(!config.debug_guides);
    }

    #[test]
    fn display_size_override() {
        let config = WatchFaceConfig::new().with_display_size(320, 280);
        assert_eq!((config.width, config.height), (320, 280));
        assert_eq!(config.palette, Palette::default());
    }
}
