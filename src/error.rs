use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A reference glyph had no ink, or the band width came out non-positive.
    #[error("reference glyph has no usable ink")]
    DegenerateGlyph,
    /// The draw target rejected a primitive.
    #[error("draw target error")]
    Draw,
    /// A formatted string did not fit its buffer.
    #[error("text buffer overflow")]
    Format,
}
