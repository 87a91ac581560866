//! Static palette for workplace highlighting, plus the hash-to-slot
//! assignment. Values are hex tokens so the frontend can apply them directly.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hash;

/// Built-in palette matching the scheduling UI theme: alternating primary
/// purples and accent cyans, ordered so neighboring indices stay visually
/// distinct.
pub const DEFAULT_COLORS: [&str; 10] = [
    "#7B1CD7", // primary-600
    "#11A3D4", // accent-500
    "#6C18BB", // primary-700
    "#0F8FB8", // accent-600
    "#9F4CF5", // primary-400
    "#3EB3DB", // accent-400
    "#8A20F2", // primary-500
    "#0D7A9D", // accent-700
    "#B378F7", // primary-300
    "#0B6581", // accent-800
];

/// Opaque color token, by convention a `#RRGGBB` hex string. The crate never
/// parses or blends it; it only hands tokens back out of the palette.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    EmptyPalette,
}

/// Ordered, non-empty list of colors. Index order is the only thing that
/// matters: it must stay stable so names keep their assigned color.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Builds a palette, rejecting an empty color list. This is the only
    /// fallible step; once constructed, [`Palette::color_for`] is total.
    pub fn new(colors: Vec<Color>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        tracing::debug!(len = colors.len(), "constructed palette");
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the color assigned to the provided location name.
    ///
    /// Deterministic: the same name with the same palette yields the same
    /// color on every call and across restarts.
    #[inline]
    pub fn color_for(&self, name: &str) -> &Color {
        let index = hash::bucket(hash::name_hash(name), self.colors.len());
        &self.colors[index]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|&token| Color::from(token)).collect(),
        }
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = PaletteError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

/// Returns a hex color token for the provided location name, using the
/// built-in palette.
#[inline]
pub fn color_for(name: &str) -> &'static str {
    let index = hash::bucket(hash::name_hash(name), DEFAULT_COLORS.len());
    DEFAULT_COLORS[index]
}
