//! Layout projection: configuration snapshot in, render tree out.
//!
//! Projection is pure. The same snapshot always yields a tree that serializes to the same
//! bytes, which is what makes [`RenderTree::fingerprint`] usable for repaint decisions.

pub(crate) mod chrome;
pub(crate) mod layout_a;
pub(crate) mod layout_b;
pub(crate) mod style;
pub(crate) mod tree;

use crate::{
    config::{model::Configuration, tokens::LayoutVariant},
    fonts::{self, FontFamily},
    foundation::error::VitrineResult,
    project::{style::StyleInputs, tree::RenderNode},
};

pub use tree::RenderTree;

/// One page composition. Strategies only build the content region; the page chrome
/// around it is shared.
pub(crate) trait LayoutStrategy {
    fn variant(&self) -> LayoutVariant;
    fn content(&self, inputs: &StyleInputs) -> RenderNode;
}

pub(crate) fn strategy_for(variant: LayoutVariant) -> &'static dyn LayoutStrategy {
    match variant {
        LayoutVariant::LayoutA => &layout_a::SplitLayout,
        LayoutVariant::LayoutB => &layout_b::StackedLayout,
    }
}

/// Project `config` into a render tree.
///
/// Fails with [`VitrineError::MissingLeaf`](crate::VitrineError::MissingLeaf) when a leaf
/// the page reads is absent. Unknown tokens never fail; they resolve to the same
/// fallbacks the editor has always used.
#[tracing::instrument(skip(config))]
pub fn project(config: &Configuration) -> VitrineResult<RenderTree> {
    let inputs = StyleInputs::read(config)?;

    match FontFamily::from_token(&inputs.font_family) {
        Some(family) if !family.has_weight(inputs.font_weight) => tracing::debug!(
            family = family.name(),
            weight = inputs.font_weight,
            "weight not provided by the stylesheet; surface will synthesize it"
        ),
        None => tracing::debug!(
            family = %inputs.font_family,
            "font family not in the catalogue; surface falls back"
        ),
        _ => {}
    }

    let strategy = strategy_for(inputs.layout);
    let content = strategy.content(&inputs);
    Ok(RenderTree {
        layout: strategy.variant(),
        viewport: inputs.viewport,
        container: style::container_sizing(inputs.viewport),
        stylesheets: vec![fonts::stylesheet_url()],
        root: chrome::page(&inputs, content),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/project/mod.rs"]
mod tests;
