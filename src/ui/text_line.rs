//! Single line of mixed text runs and replacement glyphs on a shared baseline

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb565,
    prelude::*,
    text::{Baseline, Text},
};

use super::{
    fonts::{FontMetrics, TextMeasure},
    logo_span::LogoGlyphRenderer,
};
use crate::Error;

pub enum Segment<'a> {
    /// Plain text in its own style
    Text {
        text: &'a str,
        style: MonoTextStyle<'a, Rgb565>,
    },
    /// Logo glyph sized against the font of `style`
    Logo {
        renderer: &'a LogoGlyphRenderer,
        style: MonoTextStyle<'a, Rgb565>,
    },
}

impl Segment<'_> {
    fn metrics(&self) -> FontMetrics {
        match self {
            Segment::Text { style, .. } | Segment::Logo { style, .. } => style.metrics(),
        }
    }

    fn advance(&self) -> Result<i32, Error> {
        match self {
            Segment::Text { text, style } => Ok(style.advance(text)),
            Segment::Logo { renderer, style } => Ok(renderer.measure(style)?.advance()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMetrics {
    pub width: i32,
    pub ascent: i32,
    pub descent: i32,
}

pub struct TextLine<'a> {
    segments: &'a [Segment<'a>],
}

impl<'a> TextLine<'a> {
    pub fn new(segments: &'a [Segment<'a>]) -> Self {
        Self { segments }
    }

    /// Total advance plus the tallest ascent and descent of any segment font
    pub fn measure(&self) -> Result<LineMetrics, Error> {
        let mut line = LineMetrics {
            width: 0,
            ascent: 0,
            descent: 0,
        };
        for segment in self.segments {
            let metrics = segment.metrics();
            line.width += segment.advance()?;
            line.ascent = line.ascent.max(metrics.ascent);
            line.descent = line.descent.max(metrics.descent);
        }
        Ok(line)
    }

    /// Draw with the left end of the baseline at `origin`, returning where the
    /// line ends.
    pub fn draw<D>(&self, target: &mut D, origin: Point) -> Result<Point, Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut position = origin;
        for segment in self.segments {
            match segment {
                Segment::Text { text, style } => {
                    position = Text::with_baseline(text, position, *style, Baseline::Alphabetic)
                        .draw(target)
                        .map_err(|_| Error::Draw)?;
                }
                Segment::Logo { renderer, style } => {
                    let spec = renderer.measure(style)?;
                    renderer.draw(target, &spec, position.x, position.y)?;
                    position.x += spec.advance();
                }
            }
        }
        Ok(position)
    }

    /// Draw with the top of the line at `top_left`; the baseline sits at the
    /// tallest ascent below it.
    pub fn draw_at_top<D>(&self, target: &mut D, top_left: Point) -> Result<Point, Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let ascent = self
            .segments
            .iter()
            .map(|segment| segment.metrics().ascent)
            .max()
            .unwrap_or(0);
        self.draw(target, top_left + Point::new(0, ascent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::logo_span::LogoColors;
    use embedded_graphics::{
        mock_display::MockDisplay,
        mono_font::ascii::{FONT_5X8, FONT_6X10, FONT_9X18_BOLD},
        pixelcolor::RgbColor,
    };

    const COLORS: LogoColors = LogoColors {
        base: Rgb565::RED,
        yellow: Rgb565::YELLOW,
        pink: Rgb565::MAGENTA,
        blue: Rgb565::BLUE,
    };

    #[test]
    fn logo_reserves_template_advance() {
        let renderer = LogoGlyphRenderer::new(COLORS);
        let style = MonoTextStyle::new(&FONT_9X18_BOLD, Rgb565::GREEN);
        let segments = [
            Segment::Text { text: "pr", style },
            Segment::Logo {
                renderer: &renderer,
                style,
            },
            Segment::Text { text: "nt", style },
        ];

        let line = TextLine::new(&segments).measure().unwrap();
        assert_eq!(line.width, style.advance("print"));
    }

    #[test]
    fn line_takes_tallest_font() {
        let small = MonoTextStyle::new(&FONT_5X8, Rgb565::GREEN);
        let large = MonoTextStyle::new(&FONT_6X10, Rgb565::GREEN);
        let segments = [
            Segment::Text {
                text: "1:05",
                style: large,
            },
            Segment::Text {
                text: "PM",
                style: small,
            },
        ];

        let line = TextLine::new(&segments).measure().unwrap();
        assert_eq!(line.ascent, FONT_6X10.baseline as i32);
        assert_eq!(line.width, large.advance("1:05") + small.advance("PM"));
    }

    #[test]
    fn draw_advances_past_every_segment() {
        let renderer = LogoGlyphRenderer::new(COLORS);
        let style = MonoTextStyle::new(&FONT_6X10, Rgb565::GREEN);
        let segments = [
            Segment::Text { text: "p", style },
            Segment::Logo {
                renderer: &renderer,
                style,
            },
        ];
        let line = TextLine::new(&segments);

        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let end = line.draw_at_top(&mut display, Point::new(2, 4)).unwrap();

        let metrics = line.measure().unwrap();
        assert_eq!(end, Point::new(2 + metrics.width, 4 + metrics.ascent));

        let logo_colored = display
            .bounding_box()
            .points()
            .filter(|p| display.get_pixel(*p) == Some(COLORS.yellow))
            .count();
        assert!(logo_colored > 0);
    }
}
