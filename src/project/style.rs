//! Style derivation shared by both layouts.
//!
//! [`StyleInputs::read`] is the only place that touches the raw configuration tree. It
//! fails loudly on absent leaves and wrongly typed numbers, and resolves tokens leniently
//! so that a surprising token still renders the way the editor always rendered it.

use serde_json::Value;

use crate::{
    config::{
        model::Configuration,
        schema::{ConfigField, MAX_RENDERED_COLUMNS},
        tokens::{ButtonAlignment, ButtonShadow, GalleryAlignment, LayoutVariant, Viewport},
    },
    foundation::core::{Edges, Size},
    foundation::error::{VitrineError, VitrineResult},
    project::tree::{
        Arrangement, ContainerSizing, Dimension, Justify, RenderNode, ShadowSpec, StyleBundle,
    },
};

/// Sample colours shown as swatches, in display order.
pub const PALETTE: [&str; 10] = [
    "#A56B58", "#8FB9A8", "#3A5A40", "#F2C6B5", "#D66B58", "#C6C6C6", "#6B4C7C", "#2D9CDB",
    "#F7E4D9", "#3B3B3B",
];

/// Sample product name.
pub const PRODUCT_TITLE: &str = "Cozy Lounge Chair";
/// Sample product price.
pub const PRODUCT_PRICE: &str = "$899";

pub(crate) const WHITE: &str = "#ffffff";
pub(crate) const PLACEHOLDER_BG: &str = "#f3f4f6";
pub(crate) const TEXT_SUBTLE: &str = "#4b5563";
pub(crate) const TEXT_MUTED: &str = "#6b7280";
pub(crate) const TEXT_FAINT: &str = "#9ca3af";

const SWATCH_BORDER: &str = "rgba(0,0,0,0.08)";
const MOBILE_FRAME: Size = Size::new(340.0, 700.0);
const DESKTOP_MAX_WIDTH: f64 = 1024.0;

#[derive(Clone, Debug, PartialEq)]
/// Typed view of the `button` group.
pub struct ButtonInputs {
    pub radius: u32,
    pub shadow: ButtonShadow,
    pub alignment: ButtonAlignment,
    pub background: String,
    pub text_color: String,
    pub padding_y: u32,
    pub padding_x: u32,
}

#[derive(Clone, Debug, PartialEq)]
/// Typed view of the `gallery` group.
pub struct GalleryInputs {
    pub alignment: GalleryAlignment,
    pub spacing: u32,
    pub image_radius: u32,
    pub columns: u32,
    pub swatch_size: u32,
}

#[derive(Clone, Debug, PartialEq)]
/// Every configuration leaf the projector reads, already typed.
pub struct StyleInputs {
    pub font_family: String,
    pub font_weight: u32,
    pub font_size: u32,
    pub button: ButtonInputs,
    pub gallery: GalleryInputs,
    pub card_radius: u32,
    pub container_padding: u32,
    pub section_bg: String,
    pub stroke_color: String,
    pub stroke_weight: u32,
    pub layout: LayoutVariant,
    pub viewport: Viewport,
}

impl StyleInputs {
    /// Read every leaf of `config`.
    ///
    /// Errors with [`VitrineError::MissingLeaf`] naming the first absent leaf in schema
    /// order, or [`VitrineError::Validation`] when a pixel leaf is not a non-negative
    /// integer or a text leaf is not a string.
    pub fn read(config: &Configuration) -> VitrineResult<Self> {
        let px = |field| read_px(config, field);
        let text = |field| read_text(config, field);
        Ok(Self {
            font_family: text(ConfigField::FontFamily)?,
            font_weight: px(ConfigField::FontWeight)?,
            font_size: px(ConfigField::FontSize)?,
            button: ButtonInputs {
                radius: px(ConfigField::ButtonBorderRadius)?,
                shadow: ButtonShadow::resolve(&text(ConfigField::ButtonShadow)?),
                alignment: ButtonAlignment::resolve(&text(ConfigField::ButtonAlignment)?),
                background: text(ConfigField::ButtonBackground)?,
                text_color: text(ConfigField::ButtonTextColor)?,
                padding_y: px(ConfigField::ButtonPaddingY)?,
                padding_x: px(ConfigField::ButtonPaddingX)?,
            },
            gallery: GalleryInputs {
                alignment: GalleryAlignment::resolve(&text(ConfigField::GalleryAlignment)?),
                spacing: px(ConfigField::GallerySpacing)?,
                image_radius: px(ConfigField::GalleryImageRadius)?,
                columns: px(ConfigField::GalleryColumns)?,
                swatch_size: px(ConfigField::GallerySwatchSize)?,
            },
            card_radius: px(ConfigField::CardRadius)?,
            container_padding: px(ConfigField::ContainerPadding)?,
            section_bg: text(ConfigField::SectionBg)?,
            stroke_color: text(ConfigField::StrokeColor)?,
            stroke_weight: px(ConfigField::StrokeWeight)?,
            layout: LayoutVariant::resolve(&text(ConfigField::Layout)?),
            viewport: Viewport::resolve(&text(ConfigField::Viewport)?),
        })
    }
}

fn require(config: &Configuration, field: ConfigField) -> VitrineResult<&Value> {
    config
        .leaf(field)
        .ok_or_else(|| VitrineError::missing_leaf(field.to_string()))
}

fn read_px(config: &Configuration, field: ConfigField) -> VitrineResult<u32> {
    let v = require(config, field)?;
    let n = v
        .as_u64()
        .or_else(|| v.as_f64().filter(|x| x.fract() == 0.0 && *x >= 0.0).map(|x| x as u64));
    n.and_then(|n| u32::try_from(n).ok()).ok_or_else(|| {
        VitrineError::validation(format!("{field}: expected a pixel count, got {v}"))
    })
}

fn read_text(config: &Configuration, field: ConfigField) -> VitrineResult<String> {
    let v = require(config, field)?;
    v.as_str()
        .map(str::to_owned)
        .ok_or_else(|| VitrineError::validation(format!("{field}: expected a string, got {v}")))
}

/// Concrete shadow for a tier; `None` paints no shadow.
pub fn button_shadow(tier: ButtonShadow) -> Option<ShadowSpec> {
    match tier {
        ButtonShadow::None => None,
        ButtonShadow::Small => Some(ShadowSpec::new(0.0, 2.0, 6.0, "rgba(0,0,0,0.08)")),
        ButtonShadow::Medium => Some(ShadowSpec::new(0.0, 8.0, 20.0, "rgba(0,0,0,0.12)")),
        ButtonShadow::Large => Some(ShadowSpec::new(0.0, 16.0, 40.0, "rgba(0,0,0,0.16)")),
    }
}

/// Main-axis placement of the primary button row.
pub fn button_justify(alignment: ButtonAlignment) -> Justify {
    match alignment {
        ButtonAlignment::Left => Justify::Start,
        ButtonAlignment::Center => Justify::Center,
        ButtonAlignment::Right => Justify::End,
    }
}

/// Justification of the swatch container, grid or row.
pub fn gallery_justify(alignment: GalleryAlignment) -> Justify {
    match alignment {
        GalleryAlignment::GridLeft => Justify::Start,
        GalleryAlignment::GridCenter => Justify::Center,
        GalleryAlignment::GridRight => Justify::End,
    }
}

/// Rendered grid columns: the configured count, capped at five, never below one.
pub fn swatch_columns(configured: u32) -> u32 {
    configured.clamp(1, MAX_RENDERED_COLUMNS)
}

/// Mobile is a fixed 340x700 frame; desktop is fluid up to 1024px.
pub fn container_sizing(viewport: Viewport) -> ContainerSizing {
    match viewport {
        Viewport::Mobile => ContainerSizing::Fixed {
            size: MOBILE_FRAME,
        },
        Viewport::Desktop => ContainerSizing::Fluid {
            max_width: DESKTOP_MAX_WIDTH,
        },
    }
}

/// Style of the configured primary button.
pub fn button_style(inputs: &StyleInputs) -> StyleBundle {
    let b = &inputs.button;
    StyleBundle::default()
        .background(&b.background)
        .color(&b.text_color)
        .radius(b.radius)
        .padding(Edges::symmetric(b.padding_y, b.padding_x))
        .shadow(button_shadow(b.shadow))
}

/// Outlined white panel used by the side panel and the stacked card body.
pub fn panel_style(inputs: &StyleInputs) -> StyleBundle {
    StyleBundle::default()
        .padding(Edges::uniform(12))
        .radius(4)
        .background(WHITE)
        .border(inputs.stroke_weight, &inputs.stroke_color)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Derived swatch geometry; one value serves both layouts.
pub struct SwatchStyle {
    /// Edge length in pixels.
    pub size: u32,
    /// Corner radius, shared with gallery images.
    pub radius: u32,
    /// Gap between swatches in pixels.
    pub gap: u32,
}

impl SwatchStyle {
    /// Swatch size, image radius and gallery spacing, taken as is.
    pub fn from_inputs(inputs: &StyleInputs) -> Self {
        Self {
            size: inputs.gallery.swatch_size,
            radius: inputs.gallery.image_radius,
            gap: inputs.gallery.spacing,
        }
    }

    /// Style of one swatch filled with `color`.
    pub fn style(&self, color: &str) -> StyleBundle {
        StyleBundle::default()
            .size(Dimension::Px(self.size), Dimension::Px(self.size))
            .radius(self.radius)
            .background(color)
            .border(1, SWATCH_BORDER)
    }

    /// The first `count` palette colours as swatch nodes.
    pub fn swatches(&self, count: usize) -> Vec<RenderNode> {
        PALETTE
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, c)| RenderNode::swatch(format!("swatch-{i}"), c, self.style(c)))
            .collect()
    }
}

/// Block of caption text over a value, both in one vertical stack.
pub(crate) fn labelled(name: &str, caption: RenderNode, value: RenderNode, gap: u32) -> RenderNode {
    RenderNode::container(
        name,
        Arrangement::Stack { gap },
        StyleBundle::default(),
        vec![caption, value],
    )
}

#[cfg(test)]
#[path = "../../tests/unit/project/style.rs"]
mod tests;
