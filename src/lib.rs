//! Printivo watch face
//!
//! Renders the Printivo face onto any `embedded-graphics` draw target: date,
//! time with an AM/PM suffix, the "printivo" word with its colored logo glyph,
//! and the corner decoration.
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

mod error;
pub mod system;
pub mod ui;

pub use error::Error;
pub use system::config::{Palette, WatchFaceConfig};
pub use system::time::FaceEngine;
pub use ui::{
    logo_span::{GlyphMetrics, GlyphSpec, LogoColors, LogoGeometry, LogoGlyphRenderer},
    printivo::PrintivoWatchface,
    text_line::{Segment, TextLine},
    WatchFace, WatchFaceState,
};
