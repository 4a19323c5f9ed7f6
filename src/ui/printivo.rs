//! Printivo watchface
//!
//! Date on top, the time with a small AM/PM suffix below it, then the
//! "printivo" word whose "i" is the colored logo glyph. Concentric circles in
//! the lower left corner finish the interactive face.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::{Rgb565, RgbColor},
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle},
    text::{Baseline, Text},
};

use super::{
    fonts::{self, FontMetrics, Typeface},
    logo_span::{LogoColors, LogoGlyphRenderer},
    text_line::{Segment, TextLine},
    WatchFace, WatchFaceState,
};
use crate::{
    system::{
        config::WatchFaceConfig,
        time::{am_pm, format_date, format_time},
    },
    Error,
};

const BUF_LEN: usize = 16;

const GUIDE_COLOR: Rgb565 = Rgb565::RED;

/// Fonts for each row, resolved once from the display width
#[derive(Debug, Clone, Copy)]
pub struct FaceFonts {
    pub date: &'static MonoFont<'static>,
    pub time: &'static MonoFont<'static>,
    pub am_pm: &'static MonoFont<'static>,
    pub logo: &'static MonoFont<'static>,
}

impl FaceFonts {
    fn for_config(config: &WatchFaceConfig) -> Self {
        let width = config.width as f32;
        let scaled = config.scaled;
        Self {
            date: fonts::select(Typeface::Regular, scaled * width / 16.0),
            time: fonts::select(Typeface::Semibold, scaled * width / 5.0),
            am_pm: fonts::select(Typeface::Regular, scaled * width / 10.0),
            logo: fonts::select(Typeface::Bold, scaled * (width * 3.0 / 20.0)),
        }
    }
}

/// Top-left corners of the three text rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceLayout {
    pub date: Point,
    pub time: Point,
    pub logo: Point,
}

impl FaceLayout {
    fn calculate(config: &WatchFaceConfig, fonts: &FaceFonts) -> Self {
        let width = config.width as i32;
        let height = config.height as i32;

        let date_y = height / 4;
        let date_height = FontMetrics::of(fonts.date).line_height();
        let time_y = date_y + date_height + width / 40;
        let time_height = FontMetrics::of(fonts.time).ascent;
        let logo_y = time_y + time_height;

        Self {
            date: Point::new(width / 8, date_y),
            time: Point::new(width / 10, time_y),
            logo: Point::new(width / 8, logo_y),
        }
    }
}

/// Corner decoration, outermost circle first
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decor {
    pub center: Point,
    pub radii: [f32; 4],
}

impl Decor {
    fn for_screen(config: &WatchFaceConfig, is_round: bool) -> Self {
        let width = config.width as f32;
        let height = config.height as f32;

        let center = if is_round {
            Point::new((width / 8.0) as i32, (height - height / 16.0) as i32)
        } else {
            Point::new(0, height as i32)
        };

        let outer = width * 3.0 / 16.0;
        let decrement = width / if is_round { 40.0 } else { 32.0 };
        let radii = core::array::from_fn(|i| outer - decrement * i as f32);

        Self { center, radii }
    }
}

pub struct PrintivoWatchface {
    config: WatchFaceConfig,
    fonts: FaceFonts,
    layout: FaceLayout,
    decor: Decor,
    logo: LogoGlyphRenderer,
}

impl PrintivoWatchface {
    /// Create the face; square insets until the host reports otherwise
    pub fn new(config: WatchFaceConfig) -> Self {
        let fonts = FaceFonts::for_config(&config);
        let layout = FaceLayout::calculate(&config, &fonts);
        let decor = Decor::for_screen(&config, false);
        let palette = config.palette;
        let logo = LogoGlyphRenderer::new(LogoColors {
            base: palette.base,
            yellow: palette.yellow,
            pink: palette.pink,
            blue: palette.blue,
        });

        Self {
            config,
            fonts,
            layout,
            decor,
            logo,
        }
    }

    /// Recompute the corner decoration for a round or square screen
    pub fn apply_window_insets(&mut self, is_round: bool) {
        debug!("Applying window insets, round: {}", is_round);
        self.decor = Decor::for_screen(&self.config, is_round);
    }

    pub fn config(&self) -> &WatchFaceConfig {
        &self.config
    }

    pub fn fonts(&self) -> &FaceFonts {
        &self.fonts
    }

    pub fn layout(&self) -> &FaceLayout {
        &self.layout
    }

    pub fn decor(&self) -> &Decor {
        &self.decor
    }

    fn draw_guides<D>(&self, target: &mut D) -> Result<(), Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let width = self.config.width as i32;
        let rows = [
            (self.layout.date.y, self.fonts.date),
            (self.layout.time.y, self.fonts.time),
            (self.layout.logo.y, self.fonts.logo),
        ];
        let style = PrimitiveStyle::with_stroke(GUIDE_COLOR, 1);

        for (top, font) in rows {
            let spacing = FontMetrics::of(font).line_height();
            for y in [top, top + spacing] {
                Line::new(Point::new(0, y), Point::new(width - 1, y))
                    .into_styled(style)
                    .draw(target)
                    .map_err(|_| Error::Draw)?;
            }
        }
        Ok(())
    }

    fn draw_date<D>(&self, target: &mut D, state: &WatchFaceState) -> Result<(), Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let mut buf = [0u8; BUF_LEN];
        let date = format_date(&mut buf, &state.time)?;
        let style = MonoTextStyle::new(self.fonts.date, self.config.palette.alt);

        Text::with_baseline(date, self.layout.date, style, Baseline::Top)
            .draw(target)
            .map_err(|_| Error::Draw)?;
        Ok(())
    }

    fn draw_time<D>(&self, target: &mut D, state: &WatchFaceState) -> Result<(), Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let color = if state.ambient {
            Rgb565::WHITE
        } else {
            self.config.palette.alt
        };

        let mut buf = [0u8; BUF_LEN];
        let time = format_time(&mut buf, &state.time, state.ambient)?;
        let segments = [
            Segment::Text {
                text: time,
                style: MonoTextStyle::new(self.fonts.time, color),
            },
            Segment::Text {
                text: am_pm(&state.time),
                style: MonoTextStyle::new(self.fonts.am_pm, color),
            },
        ];

        TextLine::new(&segments).draw_at_top(target, self.layout.time)?;
        Ok(())
    }

    fn draw_logo<D>(&self, target: &mut D, ambient: bool) -> Result<(), Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let palette = &self.config.palette;

        if ambient {
            // No colored glyph in ambient mode, just a highlighted "i"
            let plain = MonoTextStyle::new(self.fonts.logo, palette.am_p);
            let accent = MonoTextStyle::new(self.fonts.logo, palette.am_i);
            let segments = [
                Segment::Text {
                    text: "pr",
                    style: plain,
                },
                Segment::Text {
                    text: "i",
                    style: accent,
                },
                Segment::Text {
                    text: "ntivo",
                    style: plain,
                },
            ];
            TextLine::new(&segments).draw_at_top(target, self.layout.logo)?;
        } else {
            let style = MonoTextStyle::new(self.fonts.logo, palette.base);
            let segments = [
                Segment::Text { text: "pr", style },
                Segment::Logo {
                    renderer: &self.logo,
                    style,
                },
                Segment::Text {
                    text: "ntivo",
                    style,
                },
            ];
            TextLine::new(&segments).draw_at_top(target, self.layout.logo)?;
        }
        Ok(())
    }

    fn draw_decor<D>(&self, target: &mut D) -> Result<(), Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let palette = &self.config.palette;
        let colors = [palette.blue, palette.pink, palette.yellow, palette.base];

        // The circles hang off the screen edge
        let area = target.bounding_box();
        let mut target = target.clipped(&area);

        for (radius, color) in self.decor.radii.iter().zip(colors) {
            Circle::with_center(self.decor.center, libm::roundf(radius * 2.0) as u32)
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(&mut target)
                .map_err(|_| Error::Draw)?;
        }
        Ok(())
    }
}

impl WatchFace for PrintivoWatchface {
    fn draw<D>(&self, target: &mut D, state: &WatchFaceState) -> Result<(), Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let palette = &self.config.palette;
        let background = if state.ambient {
            palette.ambient_background
        } else {
            palette.background
        };
        target.clear(background).map_err(|_| Error::Draw)?;

        if !state.ambient && self.config.debug_guides {
            self.draw_guides(target)?;
        }

        if !state.ambient {
            self.draw_date(target, state)?;
        }
        self.draw_time(target, state)?;
        self.draw_logo(target, state.ambient)?;

        if !state.ambient {
            self.draw_decor(target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_stack_down_the_face() {
        let face = PrintivoWatchface::new(WatchFaceConfig::new());
        let layout = face.layout();
        let fonts = face.fonts();

        assert_eq!(layout.date, Point::new(30, 60));
        assert_eq!(
            layout.time.y,
            60 + FontMetrics::of(fonts.date).line_height() + 6
        );
        assert_eq!(layout.time.x, 24);
        assert_eq!(
            layout.logo.y,
            layout.time.y + FontMetrics::of(fonts.time).ascent
        );
    }

    #[test]
    fn fonts_follow_display_width() {
        let face = PrintivoWatchface::new(WatchFaceConfig::new());
        let fonts = face.fonts();
        assert!(fonts.date.character_size.height <= 15);
        assert!(fonts.time.character_size.height > fonts.date.character_size.height);
        assert!(fonts.logo.character_size.height <= 36);
    }

    #[test]
    fn decor_depends_on_screen_shape() {
        let mut face = PrintivoWatchface::new(WatchFaceConfig::new());
        assert_eq!(face.decor().center, Point::new(0, 240));
        assert_eq!(face.decor().radii, [45.0, 37.5, 30.0, 22.5]);

        face.apply_window_insets(true);
        assert_eq!(face.decor().center, Point::new(30, 225));
        assert_eq!(face.decor().radii, [45.0, 39.0, 33.0, 27.0]);
    }
}
