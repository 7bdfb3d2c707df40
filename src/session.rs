use std::sync::Arc;

use serde_json::Value;

use crate::{
    config::{io::TextBlobIo, model::Configuration, schema::ConfigField, store::ConfigStore},
    foundation::error::{VitrineError, VitrineResult},
    project::{self, RenderTree},
};

/// Result of a change that went through: whether the surface needs to repaint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Repaint {
    /// `false` when the new render tree is identical to the previous one.
    pub changed: bool,
    /// Fingerprint of the render tree now current.
    pub fingerprint: u64,
}

/// User-facing message for an import the session refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Short text to show to the user.
    pub message: String,
}

/// What happened to an import request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The configuration was replaced.
    Applied(Repaint),
    /// Nothing changed; show the notice.
    Rejected(Notice),
}

/// Editor session: a store plus the render tree of its current snapshot.
///
/// The session upholds one invariant the bare store does not: its snapshot always
/// projects. Changes that would leave the page without a leaf it reads are refused and
/// the previous state stays in place.
#[derive(Debug)]
pub struct EditorSession {
    store: ConfigStore,
    tree: RenderTree,
    fingerprint: u64,
}

impl EditorSession {
    /// Session over the startup snapshot.
    pub fn new() -> VitrineResult<Self> {
        Self::with_store(ConfigStore::new())
    }

    /// Session over an existing store. Fails if its snapshot does not project.
    pub fn with_store(store: ConfigStore) -> VitrineResult<Self> {
        let tree = project::project(&store.get())?;
        let fingerprint = tree.fingerprint()?;
        Ok(Self {
            store,
            tree,
            fingerprint,
        })
    }

    /// Current snapshot.
    pub fn config(&self) -> Arc<Configuration> {
        self.store.get()
    }

    /// Underlying store, for export and read-only inspection.
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Render tree of the current snapshot.
    pub fn tree(&self) -> &RenderTree {
        &self.tree
    }

    /// Fingerprint of [`Self::tree`].
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Set one leaf and re-project.
    pub fn update(
        &mut self,
        field: ConfigField,
        value: impl Into<Value>,
    ) -> VitrineResult<Repaint> {
        let value = value.into();
        self.guarded(|store| store.set(field, value).map(drop))
    }

    /// Set one leaf addressed by key sequence and re-project.
    pub fn update_path<S: AsRef<str>>(
        &mut self,
        path: &[S],
        value: Value,
    ) -> VitrineResult<Repaint> {
        self.guarded(|store| store.update_field(path, value).map(drop))
    }

    /// Apply a batch atomically and re-project once.
    pub fn apply_batch<I>(&mut self, updates: I) -> VitrineResult<Repaint>
    where
        I: IntoIterator<Item = (ConfigField, Value)>,
    {
        self.guarded(|store| store.apply_batch(updates).map(drop))
    }

    /// Import exported text.
    ///
    /// Bad input (malformed JSON, rejected values, a group that would lose leaves) is
    /// reported as [`ImportOutcome::Rejected`]; store and tree stay as they were.
    #[tracing::instrument(skip(self, text), fields(len = text.len()))]
    pub fn import_text(&mut self, text: &str) -> VitrineResult<ImportOutcome> {
        let next = match self.store.preview_import(text) {
            Ok(next) => next,
            Err(e) if e.is_recoverable() => return Ok(ImportOutcome::Rejected(notice_for(&e))),
            Err(e) => return Err(e),
        };
        let tree = match project::project(&next) {
            Ok(tree) => tree,
            Err(e @ VitrineError::MissingLeaf(_)) => {
                tracing::warn!(error = %e, "import rejected");
                return Ok(ImportOutcome::Rejected(notice_for(&e)));
            }
            Err(e) => return Err(e),
        };
        self.store.replace(next);
        Ok(ImportOutcome::Applied(self.install(tree)?))
    }

    /// Read `name` from `io` and import it. An unreadable blob is a rejected import.
    pub fn import_from(
        &mut self,
        io: &dyn TextBlobIo,
        name: &str,
    ) -> VitrineResult<ImportOutcome> {
        match io.read_text(name) {
            Ok(text) => self.import_text(&text),
            Err(e) if e.is_recoverable() => Ok(ImportOutcome::Rejected(notice_for(&e))),
            Err(e) => Err(e),
        }
    }

    /// Export the current snapshot into `io`.
    pub fn export_to(&self, io: &mut dyn TextBlobIo, name: &str) -> VitrineResult<()> {
        self.store.export_to(io, name)
    }

    fn guarded<F>(&mut self, change: F) -> VitrineResult<Repaint>
    where
        F: FnOnce(&mut ConfigStore) -> VitrineResult<()>,
    {
        let prev = self.store.get();
        change(&mut self.store)?;
        match project::project(&self.store.get()) {
            Ok(tree) => self.install(tree),
            Err(e) => {
                self.store.replace(Configuration::clone(&prev));
                Err(e)
            }
        }
    }

    fn install(&mut self, tree: RenderTree) -> VitrineResult<Repaint> {
        let fingerprint = tree.fingerprint()?;
        let changed = fingerprint != self.fingerprint;
        if changed {
            self.tree = tree;
            self.fingerprint = fingerprint;
        } else {
            tracing::debug!("render tree unchanged; no repaint");
        }
        Ok(Repaint {
            changed,
            fingerprint,
        })
    }
}

fn notice_for(err: &VitrineError) -> Notice {
    let message = match err {
        VitrineError::Parse(_) => "Invalid JSON".to_owned(),
        VitrineError::Validation(detail) => format!("Import rejected: {detail}"),
        VitrineError::MissingLeaf(path) => {
            format!("Import rejected: it would leave {path} undefined")
        }
        other => format!("Import failed: {other}"),
    };
    Notice { message }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
