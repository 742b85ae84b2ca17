use crate::errors::{Result, TileError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A colour written as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green, blue and alpha channels. Colours without an alpha channel are opaque.
    #[must_use]
    pub fn rgba(&self) -> (u8, u8, u8, u8) {
        let hex = &self.0[1..];
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or_default();
        let alpha = if hex.len() == 8 { byte(6) } else { u8::MAX };
        (byte(0), byte(2), byte(4), alpha)
    }

    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.rgba().3 == 0
    }
}

impl FromStr for Color {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| TileError::InvalidColor(s.to_owned()))?;
        if matches!(hex.len(), 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(s.to_owned()))
        } else {
            Err(TileError::InvalidColor(s.to_owned()))
        }
    }
}

impl TryFrom<String> for Color {
    type Error = TileError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Symbolic colour names mapped to colours.
pub type Palette = BTreeMap<String, Color>;

/// Every palette of a configuration, by palette name.
pub type Palettes = BTreeMap<String, Palette>;

/// Where a styled element takes its colour from.
///
/// Written as `"gruvbox_material.bg_3"` to pick `bg_3` out of the
/// `gruvbox_material` palette, or as a literal such as `"#00000000"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum ColorRef {
    Literal(Color),
    Named { palette: String, key: String },
}

impl ColorRef {
    #[must_use]
    pub fn named(palette: &str, key: &str) -> Self {
        Self::Named {
            palette: palette.to_owned(),
            key: key.to_owned(),
        }
    }

    /// # Panics
    ///
    /// Panics if `color` is not a valid colour literal. Only meant for
    /// colours written in code.
    #[must_use]
    pub fn literal(color: &str) -> Self {
        Self::Literal(color.parse().expect("colour literals in code are valid"))
    }

    /// Look the colour up in `palettes`.
    ///
    /// # Errors
    ///
    /// Errors when the palette or the key within it does not exist.
    pub fn resolve(&self, palettes: &Palettes) -> Result<Color> {
        match self {
            Self::Literal(color) => Ok(color.clone()),
            Self::Named { palette, key } => palettes
                .get(palette)
                .ok_or_else(|| TileError::UnknownPalette(palette.clone()))?
                .get(key)
                .cloned()
                .ok_or_else(|| TileError::UnknownColor {
                    palette: palette.clone(),
                    key: key.clone(),
                }),
        }
    }
}

impl FromStr for ColorRef {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with('#') {
            return Ok(Self::Literal(s.parse()?));
        }
        match s.split_once('.') {
            Some((palette, key)) if !palette.is_empty() && !key.is_empty() => {
                Ok(Self::named(palette, key))
            }
            _ => Err(TileError::InvalidColorRef(s.to_owned())),
        }
    }
}

impl TryFrom<String> for ColorRef {
    type Error = TileError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ColorRef> for String {
    fn from(c: ColorRef) -> Self {
        c.to_string()
    }
}

impl fmt::Display for ColorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(color) => write!(f, "{color}"),
            Self::Named { palette, key } => write!(f, "{palette}.{key}"),
        }
    }
}

/// Anything styled with colours taken from the palettes.
pub trait Themed {
    fn color_refs(&self) -> Vec<&ColorRef>;

    fn color_refs_mut(&mut self) -> Vec<&mut ColorRef>;

    /// Replace every named reference by the literal colour it points to.
    ///
    /// # Errors
    ///
    /// Errors on the first reference that does not resolve.
    fn resolve_colors(&mut self, palettes: &Palettes) -> Result<()> {
        for color_ref in self.color_refs_mut() {
            *color_ref = ColorRef::Literal(color_ref.resolve(palettes)?);
        }
        Ok(())
    }
}

impl Themed for ColorRef {
    fn color_refs(&self) -> Vec<&ColorRef> {
        vec![self]
    }

    fn color_refs_mut(&mut self) -> Vec<&mut ColorRef> {
        vec![self]
    }
}

impl<T: Themed> Themed for Option<T> {
    fn color_refs(&self) -> Vec<&ColorRef> {
        self.as_ref().map(|t| t.color_refs()).unwrap_or_default()
    }

    fn color_refs_mut(&mut self) -> Vec<&mut ColorRef> {
        self.as_mut().map(|t| t.color_refs_mut()).unwrap_or_default()
    }
}

impl<T: Themed> Themed for Vec<T> {
    fn color_refs(&self) -> Vec<&ColorRef> {
        self.iter().flat_map(|t| t.color_refs()).collect()
    }

    fn color_refs_mut(&mut self) -> Vec<&mut ColorRef> {
        self.iter_mut().flat_map(|t| t.color_refs_mut()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palettes() -> Palettes {
        let mut fuji = Palette::new();
        fuji.insert("C".to_owned(), "#F6f6E6".parse().unwrap());
        let mut palettes = Palettes::new();
        palettes.insert("fuji".to_owned(), fuji);
        palettes
    }

    #[test]
    fn parse_colors() {
        assert!("#282828".parse::<Color>().is_ok());
        assert!("#00000000".parse::<Color>().is_ok());
        assert!("#F6f6E6".parse::<Color>().is_ok());
        assert!("282828".parse::<Color>().is_err());
        assert!("#28282".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
    }

    #[test]
    fn color_channels() {
        let opaque: Color = "#cc241d".parse().unwrap();
        assert_eq!(opaque.rgba(), (0xcc, 0x24, 0x1d, 0xff));
        let clear: Color = "#00000000".parse().unwrap();
        assert!(clear.is_transparent());
        assert!(!opaque.is_transparent());
    }

    #[test]
    fn parse_color_refs() {
        assert_eq!(
            "gruvbox_material.bg_3".parse::<ColorRef>().unwrap(),
            ColorRef::named("gruvbox_material", "bg_3")
        );
        assert_eq!(
            "#00000000".parse::<ColorRef>().unwrap(),
            ColorRef::literal("#00000000")
        );
        assert!("bg_3".parse::<ColorRef>().is_err());
        assert!(".bg_3".parse::<ColorRef>().is_err());
        assert!("#nothex".parse::<ColorRef>().is_err());
    }

    #[test]
    fn resolve_against_palettes() {
        let palettes = palettes();
        let color = ColorRef::named("fuji", "C").resolve(&palettes).unwrap();
        assert_eq!(color.as_str(), "#F6f6E6");
        assert!(matches!(
            ColorRef::named("fuji", "Z").resolve(&palettes),
            Err(TileError::UnknownColor { .. })
        ));
        assert!(matches!(
            ColorRef::named("nord", "C").resolve(&palettes),
            Err(TileError::UnknownPalette(_))
        ));
    }

    #[test]
    fn resolve_colors_replaces_names_with_literals() {
        let mut refs = vec![ColorRef::named("fuji", "C"), ColorRef::literal("#000000")];
        refs.resolve_colors(&palettes()).unwrap();
        assert_eq!(
            refs,
            vec![ColorRef::literal("#F6f6E6"), ColorRef::literal("#000000")]
        );
    }

    #[test]
    fn color_refs_serialize_as_strings() {
        let color = ColorRef::named("fuji", "I");
        let ron = ron::to_string(&color).unwrap();
        assert_eq!(ron, "\"fuji.I\"");
        assert_eq!(ron::from_str::<ColorRef>(&ron).unwrap(), color);
    }
}
