//! UI definitions module

use chrono::NaiveDateTime;
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use crate::Error;

pub mod fonts;
pub mod logo_span;
pub mod printivo;
pub mod text_line;

pub trait WatchFace {
    /// Draw the whole face for `state`
    fn draw<D>(&self, target: &mut D, state: &WatchFaceState) -> Result<(), Error>
    where
        D: DrawTarget<Color = Rgb565>;
}

/// State for the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchFaceState {
    /// Local wall clock time
    pub time: NaiveDateTime,
    /// Low-power display mode: no seconds, no date, no colors
    pub ambient: bool,
}
