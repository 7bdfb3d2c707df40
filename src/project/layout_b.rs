use crate::{
    config::tokens::LayoutVariant,
    foundation::core::Edges,
    project::{
        LayoutStrategy,
        style::{
            self, PLACEHOLDER_BG, PRODUCT_PRICE, PRODUCT_TITLE, StyleInputs, SwatchStyle,
            TEXT_MUTED,
        },
        tree::{Align, Arrangement, Dimension, Justify, RenderNode, StyleBundle},
    },
};

const HERO_SRC: &str = "https://picsum.photos/900/520?random=32";
const HERO_HEIGHT: u32 = 360;
const SWATCH_COUNT: usize = 8;

/// Single column: hero image, then a card with title, price, a compact button and swatches.
pub(crate) struct StackedLayout;

impl LayoutStrategy for StackedLayout {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::LayoutB
    }

    fn content(&self, inputs: &StyleInputs) -> RenderNode {
        let hero = RenderNode::image(
            "hero",
            HERO_SRC,
            "product",
            StyleBundle::default()
                .size(Dimension::Fill, Dimension::Px(HERO_HEIGHT))
                .radius(4)
                .background(PLACEHOLDER_BG),
        );

        RenderNode::container(
            "content",
            Arrangement::Stack { gap: 16 },
            StyleBundle::default(),
            vec![hero, body(inputs)],
        )
    }
}

fn body(inputs: &StyleInputs) -> RenderNode {
    let summary = RenderNode::container(
        "summary",
        Arrangement::Stack { gap: 4 },
        StyleBundle::default(),
        vec![
            RenderNode::text(
                "summary-title",
                PRODUCT_TITLE,
                StyleBundle::default().font_weight(600),
            ),
            RenderNode::text(
                "summary-price",
                PRODUCT_PRICE,
                StyleBundle::default().font_size(12).color(TEXT_MUTED),
            ),
        ],
    );

    // Compact button: configured colours and radius, fixed padding, never a shadow.
    let add = RenderNode::button(
        "add-button",
        "Add",
        StyleBundle::default()
            .background(&inputs.button.background)
            .color(&inputs.button.text_color)
            .padding(Edges::symmetric(8, 14))
            .radius(inputs.button.radius),
    );

    let top = RenderNode::container(
        "summary-row",
        Arrangement::Row {
            justify: Justify::SpaceBetween,
            align: Align::Center,
            gap: 0,
            wrap: false,
        },
        StyleBundle::default(),
        vec![summary, add],
    );

    let swatch = SwatchStyle::from_inputs(inputs);
    let colors = style::labelled(
        "colors",
        RenderNode::text(
            "colors-label",
            "Colors",
            StyleBundle::default().font_size(12).color(TEXT_MUTED),
        ),
        RenderNode::container(
            "swatch-row",
            Arrangement::Row {
                justify: style::gallery_justify(inputs.gallery.alignment),
                align: Align::Center,
                gap: swatch.gap,
                wrap: true,
            },
            StyleBundle::default(),
            swatch.swatches(SWATCH_COUNT),
        ),
        8,
    );

    RenderNode::container(
        "body",
        Arrangement::Stack { gap: 16 },
        style::panel_style(inputs),
        vec![top, colors],
    )
}
