//! The fixed shape of a configuration: every leaf, where it lives, what it accepts and
//! what it starts as.

use std::fmt;

use serde_json::{Map, Value, json};

use crate::{
    config::tokens::{
        ButtonAlignment, ButtonShadow, FONT_WEIGHTS, GalleryAlignment, LayoutVariant, Viewport,
    },
    fonts::FontFamily,
    foundation::error::{VitrineError, VitrineResult},
};

/// Swatch grids never render more columns than this, whatever the stored value.
pub const MAX_RENDERED_COLUMNS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Typed selector for one configuration leaf.
///
/// Variants are declared in export order.
pub enum ConfigField {
    /// `fontFamily`
    FontFamily,
    /// `fontWeight`
    FontWeight,
    /// `fontSize`
    FontSize,
    /// `button.borderRadius`
    ButtonBorderRadius,
    /// `button.shadow`
    ButtonShadow,
    /// `button.alignment`
    ButtonAlignment,
    /// `button.background`
    ButtonBackground,
    /// `button.textColor`
    ButtonTextColor,
    /// `button.paddingY`
    ButtonPaddingY,
    /// `button.paddingX`
    ButtonPaddingX,
    /// `gallery.alignment`
    GalleryAlignment,
    /// `gallery.spacing`
    GallerySpacing,
    /// `gallery.imageRadius`
    GalleryImageRadius,
    /// `gallery.columns`
    GalleryColumns,
    /// `gallery.swatchSize`
    GallerySwatchSize,
    /// `cardRadius`
    CardRadius,
    /// `containerPadding`
    ContainerPadding,
    /// `sectionBg`
    SectionBg,
    /// `strokeColor`
    StrokeColor,
    /// `strokeWeight`
    StrokeWeight,
    /// `layout`
    Layout,
    /// `viewport`
    Viewport,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a leaf accepts.
pub enum Constraint {
    /// Integer in `[min, max]`; `max: None` means unbounded above.
    Range {
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: Option<i64>,
    },
    /// Integer drawn from a fixed set.
    IntChoice(&'static [i64]),
    /// String drawn from a fixed vocabulary.
    Token(&'static [&'static str]),
    /// Free-form CSS colour text (hex or named).
    Color,
}

impl ConfigField {
    /// Every leaf, in export order.
    pub const ALL: [ConfigField; 22] = [
        Self::FontFamily,
        Self::FontWeight,
        Self::FontSize,
        Self::ButtonBorderRadius,
        Self::ButtonShadow,
        Self::ButtonAlignment,
        Self::ButtonBackground,
        Self::ButtonTextColor,
        Self::ButtonPaddingY,
        Self::ButtonPaddingX,
        Self::GalleryAlignment,
        Self::GallerySpacing,
        Self::GalleryImageRadius,
        Self::GalleryColumns,
        Self::GallerySwatchSize,
        Self::CardRadius,
        Self::ContainerPadding,
        Self::SectionBg,
        Self::StrokeColor,
        Self::StrokeWeight,
        Self::Layout,
        Self::Viewport,
    ];

    /// Key sequence from the root to this leaf.
    pub const fn path(self) -> &'static [&'static str] {
        match self {
            Self::FontFamily => &["fontFamily"],
            Self::FontWeight => &["fontWeight"],
            Self::FontSize => &["fontSize"],
            Self::ButtonBorderRadius => &["button", "borderRadius"],
            Self::ButtonShadow => &["button", "shadow"],
            Self::ButtonAlignment => &["button", "alignment"],
            Self::ButtonBackground => &["button", "background"],
            Self::ButtonTextColor => &["button", "textColor"],
            Self::ButtonPaddingY => &["button", "paddingY"],
            Self::ButtonPaddingX => &["button", "paddingX"],
            Self::GalleryAlignment => &["gallery", "alignment"],
            Self::GallerySpacing => &["gallery", "spacing"],
            Self::GalleryImageRadius => &["gallery", "imageRadius"],
            Self::GalleryColumns => &["gallery", "columns"],
            Self::GallerySwatchSize => &["gallery", "swatchSize"],
            Self::CardRadius => &["cardRadius"],
            Self::ContainerPadding => &["containerPadding"],
            Self::SectionBg => &["sectionBg"],
            Self::StrokeColor => &["strokeColor"],
            Self::StrokeWeight => &["strokeWeight"],
            Self::Layout => &["layout"],
            Self::Viewport => &["viewport"],
        }
    }

    /// Parent object key for nested leaves (`button`, `gallery`).
    pub fn group(self) -> Option<&'static str> {
        match self.path() {
            [group, _] => Some(*group),
            _ => None,
        }
    }

    /// Final key of the path.
    pub fn key(self) -> &'static str {
        let path = self.path();
        path[path.len() - 1]
    }

    /// Resolve a key sequence to a leaf.
    pub fn from_path<S: AsRef<str>>(segments: &[S]) -> VitrineResult<Self> {
        Self::ALL
            .into_iter()
            .find(|f| {
                let path = f.path();
                path.len() == segments.len()
                    && path.iter().zip(segments).all(|(a, b)| *a == b.as_ref())
            })
            .ok_or_else(|| {
                let dotted: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
                VitrineError::invalid_path(format!(
                    "\"{}\" does not name a configuration leaf",
                    dotted.join(".")
                ))
            })
    }

    /// Resolve a dot-separated path such as `button.borderRadius`.
    pub fn parse(dotted: &str) -> VitrineResult<Self> {
        let segments: Vec<&str> = dotted.split('.').collect();
        Self::from_path(&segments)
    }

    /// Value constraint enforced on every store write.
    pub const fn constraint(self) -> Constraint {
        match self {
            Self::FontFamily => Constraint::Token(FontFamily::TOKENS),
            Self::FontWeight => Constraint::IntChoice(FONT_WEIGHTS),
            Self::FontSize => Constraint::Range {
                min: 10,
                max: Some(30),
            },
            Self::ButtonBorderRadius => Constraint::Range {
                min: 0,
                max: Some(28),
            },
            Self::ButtonShadow => Constraint::Token(ButtonShadow::TOKENS),
            Self::ButtonAlignment => Constraint::Token(ButtonAlignment::TOKENS),
            Self::ButtonBackground | Self::ButtonTextColor => Constraint::Color,
            Self::ButtonPaddingY
            | Self::ButtonPaddingX
            | Self::CardRadius
            | Self::ContainerPadding
            | Self::StrokeWeight => Constraint::Range { min: 0, max: None },
            Self::GalleryAlignment => Constraint::Token(GalleryAlignment::TOKENS),
            Self::GallerySpacing => Constraint::Range {
                min: 0,
                max: Some(24),
            },
            Self::GalleryImageRadius => Constraint::Range {
                min: 0,
                max: Some(20),
            },
            Self::GalleryColumns => Constraint::Range { min: 1, max: None },
            Self::GallerySwatchSize => Constraint::Range {
                min: 16,
                max: Some(48),
            },
            Self::SectionBg | Self::StrokeColor => Constraint::Color,
            Self::Layout => Constraint::Token(LayoutVariant::TOKENS),
            Self::Viewport => Constraint::Token(Viewport::TOKENS),
        }
    }

    /// Value of this leaf in the startup snapshot.
    pub fn default_value(self) -> Value {
        match self {
            Self::FontFamily => json!("Inter"),
            Self::FontWeight => json!(600),
            Self::FontSize => json!(15),
            Self::ButtonBorderRadius => json!(8),
            Self::ButtonShadow => json!("medium"),
            Self::ButtonAlignment => json!("right"),
            Self::ButtonBackground => json!("#d66b58"),
            Self::ButtonTextColor => json!("#fff"),
            Self::ButtonPaddingY => json!(10),
            Self::ButtonPaddingX => json!(18),
            Self::GalleryAlignment => json!("grid-right"),
            Self::GallerySpacing => json!(8),
            Self::GalleryImageRadius => json!(8),
            Self::GalleryColumns => json!(4),
            Self::GallerySwatchSize => json!(28),
            Self::CardRadius => json!(12),
            Self::ContainerPadding => json!(18),
            Self::SectionBg => json!("#ffffff"),
            Self::StrokeColor => json!("#e5e7eb"),
            Self::StrokeWeight => json!(1),
            Self::Layout => json!("layoutA"),
            Self::Viewport => json!("desktop"),
        }
    }

    /// Coerce `value` to this leaf's type and check its constraint.
    pub fn check(self, value: Value) -> VitrineResult<Value> {
        self.constraint().check(self, value)
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path().join("."))
    }
}

impl Constraint {
    fn check(self, field: ConfigField, value: Value) -> VitrineResult<Value> {
        match self {
            Self::Range { min, max } => {
                let n = coerce_int(field, &value)?;
                let above = max.is_some_and(|max| n > max);
                if n < min || above {
                    let bound = match max {
                        Some(max) => format!("[{min}, {max}]"),
                        None => format!(">= {min}"),
                    };
                    return Err(VitrineError::validation(format!(
                        "{field}: {n} is out of range, expected {bound}"
                    )));
                }
                Ok(Value::from(n))
            }
            Self::IntChoice(choices) => {
                let n = coerce_int(field, &value)?;
                if !choices.contains(&n) {
                    return Err(VitrineError::validation(format!(
                        "{field}: {n} is not one of {choices:?}"
                    )));
                }
                Ok(Value::from(n))
            }
            Self::Token(tokens) => {
                let s = expect_str(field, &value)?;
                if !tokens.contains(&s) {
                    return Err(VitrineError::validation(format!(
                        "{field}: \"{s}\" is not one of {tokens:?}"
                    )));
                }
                Ok(value)
            }
            Self::Color => {
                expect_str(field, &value)?;
                Ok(value)
            }
        }
    }
}

/// Integer leaves accept JSON integers, integral floats and numeric strings, since form
/// widgets hand values over as text.
fn coerce_int(field: ConfigField, value: &Value) -> VitrineResult<i64> {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(integral_f64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral_f64))
        }
        _ => None,
    };
    parsed.ok_or_else(|| {
        VitrineError::validation(format!("{field}: expected an integer, got {value}"))
    })
}

fn integral_f64(x: f64) -> Option<i64> {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 9.0e15 {
        Some(x as i64)
    } else {
        None
    }
}

fn expect_str(field: ConfigField, value: &Value) -> VitrineResult<&str> {
    value
        .as_str()
        .ok_or_else(|| VitrineError::validation(format!("{field}: expected a string, got {value}")))
}

/// Top-level keys in export order (leaf keys and group keys).
pub fn top_level_keys() -> Vec<&'static str> {
    let mut keys = Vec::<&'static str>::new();
    for field in ConfigField::ALL {
        let key = field.path()[0];
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

/// Leaves nested under `group`, in export order.
pub fn group_fields(group: &str) -> impl Iterator<Item = ConfigField> + '_ {
    ConfigField::ALL
        .into_iter()
        .filter(move |f| f.group() == Some(group))
}

/// Check one top-level entry of an incoming document.
///
/// Returns `Ok(None)` for keys outside the schema (they are dropped), the coerced leaf for
/// top-level leaves, and for groups an object holding only the coerced sub-keys that were
/// present. Sub-keys absent from the incoming object stay absent.
pub fn check_top_level(key: &str, value: Value) -> VitrineResult<Option<Value>> {
    if let Ok(field) = ConfigField::from_path(&[key]) {
        return field.check(value).map(Some);
    }
    if group_fields(key).next().is_none() {
        tracing::warn!(key, "ignoring key outside the configuration schema");
        return Ok(None);
    }

    let Value::Object(incoming) = value else {
        return Err(VitrineError::validation(format!(
            "{key}: expected an object, got {value}"
        )));
    };
    let mut checked = Map::new();
    for (sub, v) in incoming {
        match ConfigField::from_path(&[key, sub.as_str()]) {
            Ok(field) => {
                checked.insert(sub, field.check(v)?);
            }
            Err(_) => {
                tracing::warn!(
                    key,
                    sub = sub.as_str(),
                    "ignoring key outside the configuration schema"
                );
            }
        }
    }
    Ok(Some(Value::Object(checked)))
}

#[cfg(test)]
#[path = "../../tests/unit/config/schema.rs"]
mod tests;
