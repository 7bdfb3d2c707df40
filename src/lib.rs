//! Vitrine is a live style editor core for a product page preview.
//!
//! It holds a typed, constrained style configuration as immutable snapshots and projects
//! every snapshot into a deterministic render tree:
//!
//! - Edit the configuration through a [`ConfigStore`] (typed [`ConfigField`] selectors or
//!   dotted key paths), export it as `ui-config.json` and import it back
//! - Turn a [`Configuration`] into a [`RenderTree`] with [`project`]
//! - Or drive both through an [`EditorSession`], which also tells the surface when a
//!   repaint is needed
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod config;
/// Font catalogue and the remote stylesheet that serves it.
pub mod fonts;
pub(crate) mod project;
pub(crate) mod session;

pub use crate::foundation::core::{Edges, Size, Vec2};
pub use crate::foundation::error::{VitrineError, VitrineResult};

pub use crate::config::io::{EXPORT_FILE_NAME, FsBlobIo, MemoryBlobIo, TextBlobIo};
pub use crate::config::model::Configuration;
pub use crate::config::schema::{ConfigField, Constraint, MAX_RENDERED_COLUMNS};
pub use crate::config::store::ConfigStore;
pub use crate::config::tokens::{
    ButtonAlignment, ButtonShadow, FONT_WEIGHTS, GalleryAlignment, LayoutVariant, Viewport,
};
pub use crate::fonts::FontFamily;
pub use crate::project::project;
pub use crate::project::style::{PALETTE, SwatchStyle};
pub use crate::project::tree::{
    Align, Arrangement, Border, ContainerSizing, Dimension, Justify, NodeKind, RenderNode,
    RenderTree, ShadowSpec, StyleBundle,
};
pub use crate::session::{EditorSession, ImportOutcome, Notice, Repaint};
