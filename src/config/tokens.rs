//! Closed vocabularies used by enumerated configuration leaves.
//!
//! Wire spellings live in the serde attributes and in each type's `TOKENS` table (listed
//! in variant order). Parsing comes in two flavours: `from_token` goes through serde and
//! is strict, used when the store validates a write; `resolve` is total and used by the
//! projector so that an unexpected value still renders the same way the editor always has.

use serde::{
    Deserialize, Serialize,
    de::{DeserializeOwned, IntoDeserializer, value::StrDeserializer},
};

/// Font weights offered by the editor.
pub const FONT_WEIGHTS: &[i64] = &[400, 500, 600, 700];

/// Strict parse of a wire token through the type's `Deserialize` impl.
fn strict<T: DeserializeOwned>(token: &str) -> Option<T> {
    let de: StrDeserializer<'_, serde::de::value::Error> = token.into_deserializer();
    T::deserialize(de).ok()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Button drop-shadow tier.
pub enum ButtonShadow {
    /// No shadow.
    None,
    /// Low offset, low blur.
    Small,
    /// Medium offset, medium blur.
    Medium,
    /// High offset, high blur.
    Large,
}

impl ButtonShadow {
    /// Wire spellings, in tier order.
    pub const TOKENS: &'static [&'static str] = &["none", "small", "medium", "large"];

    /// Exact wire token, or `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        strict(token)
    }

    /// Unknown tokens fall through to the strongest tier.
    pub fn resolve(token: &str) -> Self {
        Self::from_token(token).unwrap_or(Self::Large)
    }

    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        Self::TOKENS[self as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Horizontal placement of the primary action button.
pub enum ButtonAlignment {
    /// Pack to the start edge.
    Left,
    /// Centre.
    Center,
    /// Pack to the end edge.
    Right,
}

impl ButtonAlignment {
    /// Wire spellings.
    pub const TOKENS: &'static [&'static str] = &["left", "center", "right"];

    /// Exact wire token, or `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        strict(token)
    }

    /// Total: anything unrecognised behaves like `right`.
    pub fn resolve(token: &str) -> Self {
        Self::from_token(token).unwrap_or(Self::Right)
    }

    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        Self::TOKENS[self as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Justification of the swatch container.
pub enum GalleryAlignment {
    /// `grid-left`
    GridLeft,
    /// `grid-center`
    GridCenter,
    /// `grid-right`
    GridRight,
}

impl GalleryAlignment {
    /// Wire spellings.
    pub const TOKENS: &'static [&'static str] = &["grid-left", "grid-center", "grid-right"];

    /// Exact wire token, or `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        strict(token)
    }

    /// Unknown tokens justify to the start, like `grid-left`.
    pub fn resolve(token: &str) -> Self {
        Self::from_token(token).unwrap_or(Self::GridLeft)
    }

    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        Self::TOKENS[self as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Which of the two page compositions to render.
pub enum LayoutVariant {
    /// Two regions: large image with thumbnails, side panel with swatches.
    LayoutA,
    /// Single stacked column: hero image, then a card with a swatch row.
    LayoutB,
}

impl LayoutVariant {
    /// Wire spellings.
    pub const TOKENS: &'static [&'static str] = &["layoutA", "layoutB"];

    /// Exact wire token, or `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        strict(token)
    }

    /// Only `layoutA` selects the split composition; everything else stacks.
    pub fn resolve(token: &str) -> Self {
        Self::from_token(token).unwrap_or(Self::LayoutB)
    }

    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        Self::TOKENS[self as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Preview device frame.
pub enum Viewport {
    /// Fluid, wide container.
    Desktop,
    /// Fixed narrow phone-sized box.
    Mobile,
}

impl Viewport {
    /// Wire spellings.
    pub const TOKENS: &'static [&'static str] = &["desktop", "mobile"];

    /// Exact wire token, or `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        strict(token)
    }

    /// Only `mobile` narrows the container.
    pub fn resolve(token: &str) -> Self {
        Self::from_token(token).unwrap_or(Self::Desktop)
    }

    /// Wire spelling.
    pub fn as_str(self) -> &'static str {
        Self::TOKENS[self as usize]
    }

    /// Caption used in the preview footer.
    pub fn label(self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Mobile => "Mobile",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/tokens.rs"]
mod tests;
