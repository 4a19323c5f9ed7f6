//! Printivo logo glyph
//!
//! Replaces a literal "i" in a line of text with four stacked color bands and
//! a round dot. The glyph is sized from the font in effect so it keeps the
//! advance width of the "i" it stands in for.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle},
};

use crate::{ui::fonts::TextMeasure, Error};

/// Glyph whose advance width the logo reserves
pub const TEMPLATE: &str = "i";
/// Reference glyph for the band stack height
pub const CAP_REFERENCE: &str = "o";
/// Reference glyph for the band width
pub const WIDTH_REFERENCE: &str = "i";

/// Trimmed off the ink width of the reference "i" so the bands read slightly narrower.
pub const WIDTH_ADJUST: f32 = 1.0;
pub const BAND_COUNT: usize = 4;

/// Raw measurements of the reference glyphs
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphMetrics {
    /// Ink height of "o"
    pub cap_height: f32,
    /// Ink width of "i"
    pub tight_width: f32,
    /// Advance width of the template glyph
    pub total_width: f32,
    /// Ink height of "i", dot included
    pub total_height: f32,
}

impl GlyphMetrics {
    /// Query the reference glyphs. `None` if either has no ink.
    pub fn measure<M>(measure: &M) -> Option<Self>
    where
        M: TextMeasure + ?Sized,
    {
        let cap = measure.ink_bounds(CAP_REFERENCE)?;
        let tight = measure.ink_bounds(WIDTH_REFERENCE)?;

        Some(Self {
            cap_height: cap.size.height as f32,
            tight_width: tight.size.width as f32,
            total_width: measure.advance(TEMPLATE) as f32,
            total_height: tight.size.height as f32,
        })
    }
}

/// Measured, drawable glyph dimensions
///
/// Only produced by [`LogoGlyphRenderer::measure`] or [`GlyphSpec::from_metrics`],
/// so holding one means the glyph has been measured.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphSpec {
    cap_height: f32,
    band_width: f32,
    advance: i32,
    total_height: f32,
}

impl GlyphSpec {
    pub fn from_metrics(metrics: GlyphMetrics) -> Result<Self, Error> {
        let band_width = metrics.tight_width - WIDTH_ADJUST;
        if metrics.cap_height <= 0.0 || band_width <= 0.0 {
            warn!(
                "Rejecting logo glyph: cap height {}, band width {}",
                metrics.cap_height,
                band_width
            );
            return Err(Error::DegenerateGlyph);
        }

        Ok(Self {
            cap_height: metrics.cap_height,
            band_width,
            // Truncated like any other whole-pixel advance
            advance: metrics.total_width as i32,
            total_height: metrics.total_height,
        })
    }

    /// Width to reserve in the surrounding line
    pub fn advance(&self) -> i32 {
        self.advance
    }

    pub fn cap_height(&self) -> f32 {
        self.cap_height
    }

    /// Width of each band and diameter of the dot
    pub fn band_width(&self) -> f32 {
        self.band_width
    }

    pub fn total_height(&self) -> f32 {
        self.total_height
    }
}

/// The four logo colors, bottom band first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoColors {
    pub base: Rgb565,
    pub yellow: Rgb565,
    pub pink: Rgb565,
    pub blue: Rgb565,
}

impl LogoColors {
    pub fn bands(&self) -> [Rgb565; BAND_COUNT] {
        [self.base, self.yellow, self.pink, self.blue]
    }
}

/// Filled band, edges in pixel space with `top < bottom`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub color: Rgb565,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
    pub color: Rgb565,
}

/// Resolved logo shapes at a position, in drawing order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoGeometry {
    pub bands: [Band; BAND_COUNT],
    pub dot: Dot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoGlyphRenderer {
    colors: LogoColors,
}

impl LogoGlyphRenderer {
    pub fn new(colors: LogoColors) -> Self {
        Self { colors }
    }

    pub fn colors(&self) -> &LogoColors {
        &self.colors
    }

    /// Measure the glyph against the font in effect
    pub fn measure<M>(&self, measure: &M) -> Result<GlyphSpec, Error>
    where
        M: TextMeasure + ?Sized,
    {
        let metrics = GlyphMetrics::measure(measure).ok_or(Error::DegenerateGlyph)?;
        let spec = GlyphSpec::from_metrics(metrics)?;
        debug!(
            "Logo glyph measured: cap {}, band {}, advance {}",
            spec.cap_height,
            spec.band_width,
            spec.advance
        );
        Ok(spec)
    }

    /// Lay out the glyph in the space reserved at `origin_x`, sitting on `baseline_y`
    pub fn geometry(&self, spec: &GlyphSpec, origin_x: f32, baseline_y: f32) -> LogoGeometry {
        // Center the narrow bands within the wider advance
        let dx = (spec.advance as f32 - spec.band_width) / 2.0;
        let x = origin_x + dx;
        let dy = spec.cap_height / BAND_COUNT as f32;

        let colors = self.colors.bands();
        let bands = core::array::from_fn(|i| Band {
            left: x,
            top: baseline_y - dy * (i + 1) as f32,
            right: x + spec.band_width,
            bottom: baseline_y - dy * i as f32,
            color: colors[i],
        });

        let radius = spec.band_width / 2.0;
        let dot = Dot {
            center_x: x + radius,
            center_y: baseline_y - spec.total_height + radius,
            radius,
            color: self.colors.base,
        };

        LogoGeometry { bands, dot }
    }

    /// Draw the glyph; bands bottom-up, then the dot on top.
    pub fn draw<D>(
        &self,
        target: &mut D,
        spec: &GlyphSpec,
        origin_x: i32,
        baseline_y: i32,
    ) -> Result<(), Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        // Text ink includes the baseline row, so the continuous baseline is
        // the bottom edge of that row.
        let geometry = self.geometry(spec, origin_x as f32, (baseline_y + 1) as f32);

        for band in geometry.bands.iter() {
            let top_left = Point::new(round(band.left), round(band.top));
            let bottom_right = Point::new(round(band.right), round(band.bottom));
            let size = Size::new(
                (bottom_right.x - top_left.x).max(0) as u32,
                (bottom_right.y - top_left.y).max(0) as u32,
            );
            Rectangle::new(top_left, size)
                .into_styled(PrimitiveStyle::with_fill(band.color))
                .draw(target)
                .map_err(|_| Error::Draw)?;
        }

        let dot = geometry.dot;
        Circle::with_center(
            Point::new(round(dot.center_x), round(dot.center_y)),
            round(dot.radius * 2.0).max(0) as u32,
        )
        .into_styled(PrimitiveStyle::with_fill(dot.color))
        .draw(target)
        .map_err(|_| Error::Draw)?;

        Ok(())
    }
}

fn round(v: f32) -> i32 {
    libm::roundf(v) as i32
}
