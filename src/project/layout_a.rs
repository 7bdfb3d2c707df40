use crate::{
    config::tokens::LayoutVariant,
    foundation::core::Edges,
    project::{
        LayoutStrategy,
        style::{
            self, PLACEHOLDER_BG, PRODUCT_PRICE, StyleInputs, SwatchStyle, TEXT_MUTED, TEXT_SUBTLE,
        },
        tree::{Align, Arrangement, Dimension, Justify, RenderNode, ShadowSpec, StyleBundle},
    },
};

const HERO_SRC: &str = "https://picsum.photos/900/520?random=12";
const HERO_HEIGHT: u32 = 320;
const THUMB_COUNT: u32 = 4;
const SWATCH_COUNT: usize = 10;
const FINISHES: [&str; 3] = ["Natural Oak", "Walnut", "Painted White"];

/// Split composition: product imagery on 8 of 12 columns, option panel on the other 4.
pub(crate) struct SplitLayout;

impl LayoutStrategy for SplitLayout {
    fn variant(&self) -> LayoutVariant {
        LayoutVariant::LayoutA
    }

    fn content(&self, inputs: &StyleInputs) -> RenderNode {
        RenderNode::container(
            "content",
            Arrangement::Columns {
                spans: vec![8, 4],
                total: 12,
                gap: 24,
            },
            StyleBundle::default(),
            vec![primary(), aside(inputs)],
        )
    }
}

fn primary() -> RenderNode {
    let hero = RenderNode::image(
        "hero",
        HERO_SRC,
        "product",
        StyleBundle::default()
            .size(Dimension::Fill, Dimension::Px(HERO_HEIGHT))
            .radius(4)
            .background(PLACEHOLDER_BG),
    );

    let thumbs = (1..=THUMB_COUNT)
        .map(|i| {
            RenderNode::image(
                format!("thumb-{i}"),
                format!("https://picsum.photos/80/60?random={}", 20 + i),
                "thumb",
                StyleBundle::default()
                    .size(Dimension::Px(64), Dimension::Px(48))
                    .radius(4)
                    .border(1, "#eee"),
            )
        })
        .collect();

    let strip = RenderNode::container(
        "thumbnails",
        Arrangement::Row {
            justify: Justify::Start,
            align: Align::Start,
            gap: 8,
            wrap: false,
        },
        StyleBundle::default(),
        thumbs,
    );

    RenderNode::container(
        "primary",
        Arrangement::Stack { gap: 12 },
        StyleBundle::default(),
        vec![hero, strip],
    )
}

fn aside(inputs: &StyleInputs) -> RenderNode {
    let swatch = SwatchStyle::from_inputs(inputs);
    let grid = RenderNode::container(
        "swatch-grid",
        Arrangement::Grid {
            columns: style::swatch_columns(inputs.gallery.columns),
            track: swatch.size,
            gap: swatch.gap,
            justify: style::gallery_justify(inputs.gallery.alignment),
        },
        StyleBundle::default().margin_top(12),
        swatch.swatches(SWATCH_COUNT),
    );

    let price = style::labelled(
        "price",
        RenderNode::text(
            "price-label",
            "Price",
            StyleBundle::default().font_size(12).color(TEXT_MUTED),
        ),
        RenderNode::text(
            "price-value",
            PRODUCT_PRICE,
            StyleBundle::default().font_size(18).font_weight(600),
        ),
        4,
    );

    let finish = style::labelled(
        "finish",
        RenderNode::text(
            "finish-label",
            "Finish",
            StyleBundle::default().font_size(12).color(TEXT_SUBTLE),
        ),
        RenderNode::select(
            "finish-select",
            &FINISHES,
            StyleBundle::default()
                .padding(Edges::symmetric(4, 8))
                .radius(4)
                .border(1, "#e5e7eb"),
        ),
        8,
    );

    let panel_style = style::panel_style(inputs).shadow(Some(ShadowSpec::new(
        0.0,
        1.0,
        2.0,
        "rgba(0,0,0,0.05)",
    )));

    RenderNode::container(
        "aside",
        Arrangement::Stack { gap: 0 },
        panel_style,
        vec![
            RenderNode::text(
                "swatch-heading",
                "Choose a color",
                StyleBundle::default().font_size(14).font_weight(600),
            ),
            grid,
            price.with_margin_top(16),
            finish.with_margin_top(12),
        ],
    )
}
