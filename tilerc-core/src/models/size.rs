use serde::{Deserialize, Serialize};

/// Helper enum to represent a size which can be
/// an absolute pixel value or a fraction of the screen
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Copy)]
#[serde(untagged)]
pub enum Size {
    Pixel(i32),
    Fraction(f32),
}

impl Size {
    /// Turn the size into an absolute value, the pixel value
    /// will be returned as is, the fraction will be
    /// multiplied by the provided `whole` to calculate
    /// the absolute value
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn into_absolute(self, whole: f32) -> f32 {
        match self {
            Size::Pixel(x) => x as f32,
            Size::Fraction(x) => whole * x,
        }
    }

    /// Fractions must stay within the screen.
    #[must_use]
    pub fn is_within_screen(self) -> bool {
        match self {
            Size::Pixel(x) => x >= 0,
            Size::Fraction(x) => (0.0..=1.0).contains(&x),
        }
    }

    /// The range `is_within_screen` accepts for this variant.
    #[must_use]
    pub fn screen_range(self) -> &'static str {
        match self {
            Size::Pixel(_) => ">= 0",
            Size::Fraction(_) => "within [0, 1]",
        }
    }
}
