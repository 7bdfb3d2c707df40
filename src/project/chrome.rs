//! Page frame shared by every layout: root, card, product header and footer caption.

use crate::{
    foundation::core::Edges,
    project::{
        style::{self, PRODUCT_TITLE, StyleInputs, TEXT_FAINT, TEXT_SUBTLE, WHITE},
        tree::{Align, Arrangement, Justify, RenderNode, ShadowSpec, StyleBundle},
    },
};

const CARD_PADDING: u32 = 18;
const SECTION_GAP: u32 = 24;
const SUBTITLE: &str = "Crafted from reclaimed wood \u{2014} customizable finishes.";

fn card_shadow() -> ShadowSpec {
    ShadowSpec::new(0.0, 8.0, 30.0, "rgba(2,6,23,0.4)")
}

/// Wrap `content` in the page chrome.
///
/// ```text
/// page
/// └── card
///     ├── header  (title block, action row)
///     ├── content
///     └── footer
/// ```
pub(crate) fn page(inputs: &StyleInputs, content: RenderNode) -> RenderNode {
    let root_style = StyleBundle::default()
        .font(&inputs.font_family, inputs.font_weight, inputs.font_size)
        .padding(Edges::uniform(inputs.container_padding))
        .background(WHITE);

    let card_style = StyleBundle::default()
        .radius(inputs.card_radius)
        .background(&inputs.section_bg)
        .border(inputs.stroke_weight, &inputs.stroke_color)
        .padding(Edges::uniform(CARD_PADDING))
        .shadow(Some(card_shadow()));

    let card = RenderNode::container(
        "card",
        Arrangement::Stack { gap: SECTION_GAP },
        card_style,
        vec![header(inputs), content, footer(inputs)],
    );

    RenderNode::container(
        "page",
        Arrangement::Stack { gap: 0 },
        root_style,
        vec![card],
    )
}

fn header(inputs: &StyleInputs) -> RenderNode {
    let title_block = RenderNode::container(
        "title-block",
        Arrangement::Stack { gap: 4 },
        StyleBundle::default(),
        vec![
            RenderNode::text(
                "title",
                PRODUCT_TITLE,
                StyleBundle::default().font_size(18).font_weight(700),
            ),
            RenderNode::text(
                "subtitle",
                SUBTITLE,
                StyleBundle::default()
                    .font_size(14)
                    .font_weight(400)
                    .color(TEXT_SUBTLE),
            ),
        ],
    );

    let action = RenderNode::container(
        "action",
        Arrangement::Row {
            justify: style::button_justify(inputs.button.alignment),
            align: Align::Center,
            gap: 0,
            wrap: false,
        },
        StyleBundle::default(),
        vec![RenderNode::button(
            "primary-button",
            "Add to Cart",
            style::button_style(inputs),
        )],
    );

    RenderNode::container(
        "header",
        Arrangement::Row {
            justify: Justify::SpaceBetween,
            align: Align::Start,
            gap: 16,
            wrap: false,
        },
        StyleBundle::default(),
        vec![title_block, action],
    )
}

fn footer(inputs: &StyleInputs) -> RenderNode {
    RenderNode::text(
        "footer",
        format!("Preview \u{2022} {} \u{2022} Live", inputs.viewport.label()),
        StyleBundle::default().font_size(12).color(TEXT_FAINT),
    )
}
