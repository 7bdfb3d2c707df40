use serde::Serialize;

use crate::{
    config::tokens::{LayoutVariant, Viewport},
    foundation::core::{Edges, Size, Vec2},
    foundation::error::{VitrineError, VitrineResult},
    foundation::math::Fnv1a64,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Output of one projection pass: everything a surface needs to paint the preview.
///
/// The tree is plain data. Serializing it is deterministic, so two trees that serialize
/// to the same bytes paint the same pixels.
pub struct RenderTree {
    /// Layout variant that produced the content region.
    pub layout: LayoutVariant,
    /// Device frame.
    pub viewport: Viewport,
    /// Outer container sizing (the only thing the viewport changes).
    pub container: ContainerSizing,
    /// Stylesheets the surface must have loaded for the referenced font families.
    pub stylesheets: Vec<String>,
    /// Page root.
    pub root: RenderNode,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
/// How the preview frame is sized.
pub enum ContainerSizing {
    /// Fills the available width up to `max_width`.
    Fluid {
        /// Upper bound on the width in pixels.
        max_width: f64,
    },
    /// A fixed box, centred horizontally.
    Fixed {
        /// Box dimensions in pixels.
        size: Size,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// A styled node of the render tree.
pub struct RenderNode {
    /// Stable role name (`header`, `swatch-grid`, `thumb-2`, ...).
    pub name: String,
    /// Style attributes applied to this node.
    #[serde(skip_serializing_if = "StyleBundle::is_empty")]
    pub style: StyleBundle,
    /// Container or leaf widget.
    pub kind: NodeKind,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Either a container with children or one of the leaf widgets.
pub enum NodeKind {
    /// Container arranging its children.
    Container {
        /// Child arrangement.
        arrangement: Arrangement,
        /// Children in paint order.
        children: Vec<RenderNode>,
    },
    /// Run of text.
    Text {
        /// Text content.
        text: String,
    },
    /// Image placeholder.
    Image {
        /// Placeholder source URL.
        src: String,
        /// Accessible description.
        alt: String,
    },
    /// Push button.
    Button {
        /// Button caption.
        label: String,
    },
    /// Drop-down selector.
    Select {
        /// Choices in display order.
        options: Vec<String>,
        /// Index of the selected choice.
        selected: usize,
    },
    /// Colour swatch.
    Swatch {
        /// Swatch fill.
        color: String,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
/// Arrangement of a container's children.
pub enum Arrangement {
    /// Vertical stack.
    Stack {
        /// Vertical gap in pixels.
        gap: u32,
    },
    /// Horizontal flex row.
    Row {
        /// Main-axis justification.
        justify: Justify,
        /// Cross-axis alignment.
        align: Align,
        /// Gap in pixels.
        gap: u32,
        /// Whether children wrap onto further rows.
        wrap: bool,
    },
    /// Fractional regions side by side, each spanning `spans[i]` of `total` columns.
    Columns {
        /// Column spans per child.
        spans: Vec<u32>,
        /// Total column count.
        total: u32,
        /// Gap in pixels.
        gap: u32,
    },
    /// Grid with fixed-size tracks.
    Grid {
        /// Number of columns.
        columns: u32,
        /// Width of every column track in pixels.
        track: u32,
        /// Row and column gap in pixels.
        gap: u32,
        /// Justification of the whole grid inside its container.
        justify: Justify,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Main-axis justification.
pub enum Justify {
    /// Pack at the start.
    Start,
    /// Centre.
    Center,
    /// Pack at the end.
    End,
    /// Spread with the free space between children.
    SpaceBetween,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Cross-axis alignment.
pub enum Align {
    /// Align to the start edge.
    Start,
    /// Centre.
    Center,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Concrete drop shadow.
pub struct ShadowSpec {
    /// Offset in pixels.
    pub offset: Vec2,
    /// Blur radius in pixels.
    pub blur: f64,
    /// Shadow colour.
    pub color: String,
}

impl ShadowSpec {
    pub(crate) fn new(dx: f64, dy: f64, blur: f64, color: &str) -> Self {
        Self {
            offset: Vec2::new(dx, dy),
            blur,
            color: color.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Solid border.
pub struct Border {
    /// Stroke width in pixels.
    pub width: u32,
    /// Stroke colour.
    pub color: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
/// Length along one axis.
pub enum Dimension {
    /// Absolute pixels.
    Px(u32),
    /// Fill the parent.
    Fill,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
/// Style attributes of one node. Unset attributes inherit or take surface defaults.
pub struct StyleBundle {
    /// Font family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u32>,
    /// Font size in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    /// Text colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Fill colour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Inner insets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<Edges>,
    /// Space above the node in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<u32>,
    /// Solid outline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    /// Corner radius in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    /// Drop shadow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowSpec>,
    /// Width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
}

impl StyleBundle {
    /// True when no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Family, weight and size together.
    pub fn font(mut self, family: &str, weight: u32, size: u32) -> Self {
        self.font_family = Some(family.to_owned());
        self.font_weight = Some(weight);
        self.font_size = Some(size);
        self
    }

    /// Font weight alone.
    pub fn font_weight(mut self, weight: u32) -> Self {
        self.font_weight = Some(weight);
        self
    }

    /// Font size in pixels.
    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Text colour.
    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_owned());
        self
    }

    /// Fill colour.
    pub fn background(mut self, color: &str) -> Self {
        self.background = Some(color.to_owned());
        self
    }

    /// Uniform or per-side inner insets.
    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = Some(edges);
        self
    }

    /// Space above, in pixels.
    pub fn margin_top(mut self, px: u32) -> Self {
        self.margin_top = Some(px);
        self
    }

    /// Solid border; a zero width leaves the node unbordered.
    pub fn border(mut self, width: u32, color: &str) -> Self {
        self.border = Some(Border {
            width,
            color: color.to_owned(),
        });
        self
    }

    /// Corner radius in pixels.
    pub fn radius(mut self, px: u32) -> Self {
        self.radius = Some(px);
        self
    }

    /// `None` clears it.
    pub fn shadow(mut self, shadow: Option<ShadowSpec>) -> Self {
        self.shadow = shadow;
        self
    }

    /// Width and height.
    pub fn size(mut self, width: Dimension, height: Dimension) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

impl RenderNode {
    /// Container node.
    pub fn container(
        name: impl Into<String>,
        arrangement: Arrangement,
        style: StyleBundle,
        children: Vec<RenderNode>,
    ) -> Self {
        Self {
            name: name.into(),
            style,
            kind: NodeKind::Container {
                arrangement,
                children,
            },
        }
    }

    /// Text run.
    pub fn text(name: impl Into<String>, text: impl Into<String>, style: StyleBundle) -> Self {
        Self {
            name: name.into(),
            style,
            kind: NodeKind::Text { text: text.into() },
        }
    }

    /// Image placeholder.
    pub fn image(
        name: impl Into<String>,
        src: impl Into<String>,
        alt: &str,
        style: StyleBundle,
    ) -> Self {
        Self {
            name: name.into(),
            style,
            kind: NodeKind::Image {
                src: src.into(),
                alt: alt.to_owned(),
            },
        }
    }

    /// Push button with `label` as caption.
    pub fn button(name: impl Into<String>, label: &str, style: StyleBundle) -> Self {
        Self {
            name: name.into(),
            style,
            kind: NodeKind::Button {
                label: label.to_owned(),
            },
        }
    }

    /// Drop-down with the first option selected.
    pub fn select(name: impl Into<String>, options: &[&str], style: StyleBundle) -> Self {
        Self {
            name: name.into(),
            style,
            kind: NodeKind::Select {
                options: options.iter().map(|s| (*s).to_owned()).collect(),
                selected: 0,
            },
        }
    }

    /// Colour swatch.
    pub fn swatch(name: impl Into<String>, color: &str, style: StyleBundle) -> Self {
        Self {
            name: name.into(),
            style,
            kind: NodeKind::Swatch {
                color: color.to_owned(),
            },
        }
    }

    /// Push this node away from its previous sibling.
    pub fn with_margin_top(mut self, px: u32) -> Self {
        self.style.margin_top = Some(px);
        self
    }

    /// Children of a container; empty for widgets.
    pub fn children(&self) -> &[RenderNode] {
        match &self.kind {
            NodeKind::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// Arrangement, for containers.
    pub fn arrangement(&self) -> Option<&Arrangement> {
        match &self.kind {
            NodeKind::Container { arrangement, .. } => Some(arrangement),
            _ => None,
        }
    }

    /// First node named `name` in depth-first pre-order, including `self`.
    pub fn find(&self, name: &str) -> Option<&RenderNode> {
        if self.name == name {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(name))
    }

    /// Every node in depth-first pre-order.
    pub fn walk(&self) -> Vec<&RenderNode> {
        let mut out = vec![self];
        for c in self.children() {
            out.extend(c.walk());
        }
        out
    }
}

impl RenderTree {
    /// Shorthand for `self.root.find(name)`.
    pub fn find(&self, name: &str) -> Option<&RenderNode> {
        self.root.find(name)
    }

    /// Canonical JSON form handed to surfaces.
    pub fn to_json(&self) -> VitrineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| VitrineError::serde(e.to_string()))
    }

    /// Stable 64-bit hash of the canonical form.
    ///
    /// Equal fingerprints mean there is nothing to repaint.
    pub fn fingerprint(&self) -> VitrineResult<u64> {
        let bytes = serde_json::to_vec(self).map_err(|e| VitrineError::serde(e.to_string()))?;
        let mut h = Fnv1a64::new_default();
        h.write_bytes(&bytes);
        Ok(h.finish())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/tree.rs"]
mod tests;
