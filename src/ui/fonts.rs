//! Typeface selection and text measurement

use core::convert::Infallible;

use embedded_graphics::{
    geometry::Dimensions,
    mono_font::{
        ascii::{FONT_6X13_BOLD, FONT_7X14_BOLD, FONT_9X15_BOLD, FONT_9X18_BOLD},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::{Rgb565, RgbColor},
    prelude::*,
    primitives::Rectangle,
    text::{renderer::TextRenderer, Baseline, DecorationColor},
};
use profont::{
    PROFONT_10_POINT, PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT,
    PROFONT_7_POINT, PROFONT_9_POINT,
};

/// Font roles used by the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Typeface {
    Regular,
    Semibold,
    Bold,
}

// Ordered by glyph height, smallest first. ProFont only ships one weight, so
// it serves both regular and semibold.
static PROFONT: [&MonoFont<'static>; 7] = [
    &PROFONT_7_POINT,
    &PROFONT_9_POINT,
    &PROFONT_10_POINT,
    &PROFONT_12_POINT,
    &PROFONT_14_POINT,
    &PROFONT_18_POINT,
    &PROFONT_24_POINT,
];

static BOLD: [&MonoFont<'static>; 4] = [
    &FONT_6X13_BOLD,
    &FONT_7X14_BOLD,
    &FONT_9X15_BOLD,
    &FONT_9X18_BOLD,
];

/// Pick the largest font of a role that is no taller than `px` pixels, or the
/// smallest one if none fits.
pub fn select(typeface: Typeface, px: f32) -> &'static MonoFont<'static> {
    let family: &[&'static MonoFont<'static>] = match typeface {
        Typeface::Regular | Typeface::Semibold => &PROFONT,
        Typeface::Bold => &BOLD,
    };

    family
        .iter()
        .copied()
        .filter(|font| font.character_size.height as f32 <= px)
        .max_by_key(|font| font.character_size.height)
        .unwrap_or(family[0])
}

/// Vertical font metrics, both measured from the baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Distance from the top of the glyph box down to the baseline
    pub ascent: i32,
    /// Distance from the baseline down to the bottom of the glyph box
    pub descent: i32,
}

impl FontMetrics {
    pub fn of(font: &MonoFont<'_>) -> Self {
        let ascent = font.baseline as i32;
        Self {
            ascent,
            descent: font.character_size.height as i32 - ascent,
        }
    }

    pub fn line_height(&self) -> i32 {
        self.ascent + self.descent
    }
}

/// Text measurement queries a glyph renderer needs from the current font
pub trait TextMeasure {
    /// Tight bounds of the pixels `text` lights up, relative to a baseline origin
    fn ink_bounds(&self, text: &str) -> Option<Rectangle>;

    /// Horizontal space `text` reserves in a line
    fn advance(&self, text: &str) -> i32;

    fn metrics(&self) -> FontMetrics;
}

impl TextMeasure for MonoTextStyle<'_, Rgb565> {
    fn ink_bounds(&self, text: &str) -> Option<Rectangle> {
        let mut style = *self;
        style.text_color = Some(InkCollector::INK);
        style.background_color = None;
        style.underline_color = DecorationColor::None;
        style.strikethrough_color = DecorationColor::None;

        let mut ink = InkCollector::default();
        // The collector never fails
        let _ = style.draw_string(text, Point::zero(), Baseline::Alphabetic, &mut ink);
        ink.bounds()
    }

    fn advance(&self, text: &str) -> i32 {
        self.measure_string(text, Point::zero(), Baseline::Alphabetic)
            .next_position
            .x
    }

    fn metrics(&self) -> FontMetrics {
        FontMetrics::of(self.font)
    }
}

/// Draw target that only records the extent of the pixels drawn into it
#[derive(Default)]
struct InkCollector {
    extent: Option<(Point, Point)>,
}

impl InkCollector {
    const INK: Rgb565 = Rgb565::WHITE;

    fn bounds(&self) -> Option<Rectangle> {
        self.extent.map(|(min, max)| {
            Rectangle::new(
                min,
                Size::new((max.x - min.x + 1) as u32, (max.y - min.y + 1) as u32),
            )
        })
    }
}

impl Dimensions for InkCollector {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(Point::new(-4096, -4096), Size::new(8192, 8192))
    }
}

impl DrawTarget for InkCollector {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if color != Self::INK {
                continue;
            }
            self.extent = Some(match self.extent {
                None => (point, point),
                Some((min, max)) => (
                    Point::new(min.x.min(point.x), min.y.min(point.y)),
                    Point::new(max.x.max(point.x), max.y.max(point.y)),
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    #[test]
    fn select_picks_largest_fitting_font() {
        let font = select(Typeface::Regular, 1000.0);
        assert_eq!(font.character_size, PROFONT_24_POINT.character_size);

        let font = select(Typeface::Bold, 16.0);
        assert!(font.character_size.height <= 16);
        assert!(font.character_size.height >= FONT_9X15_BOLD.character_size.height);
    }

    #[test]
    fn select_falls_back_to_smallest() {
        let font = select(Typeface::Bold, 1.0);
        assert_eq!(font.character_size, FONT_6X13_BOLD.character_size);
    }

    #[test]
    fn metrics_split_line_at_baseline() {
        let metrics = FontMetrics::of(&FONT_6X10);
        assert_eq!(metrics.line_height(), FONT_6X10.character_size.height as i32);
        assert_eq!(metrics.ascent, FONT_6X10.baseline as i32);
    }

    #[test]
    fn reference_glyph_ink() {
        let style = MonoTextStyle::new(&FONT_6X10, Rgb565::RED);
        let o = style.ink_bounds("o").unwrap();
        let i = style.ink_bounds("i").unwrap();

        // Dotted "i" rises above the x-height of "o"
        assert!(i.size.height > o.size.height);
        assert!(i.size.width < o.size.width);
        // Ink sits above the baseline
        assert!(o.top_left.y < 0);
        assert!(i.top_left.y < o.top_left.y);
        assert!(i.size.width as i32 <= style.advance("i"));
    }

    #[test]
    fn blank_text_has_no_ink() {
        let style = MonoTextStyle::new(&FONT_6X10, Rgb565::RED);
        assert_eq!(style.ink_bounds(" "), None);
        assert_eq!(style.advance("ab"), 2 * style.advance("a"));
    }
}
