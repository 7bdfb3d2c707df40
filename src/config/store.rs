use std::sync::Arc;

use serde_json::Value;

use crate::{
    config::{io::TextBlobIo, model::Configuration, schema::ConfigField},
    foundation::error::{VitrineError, VitrineResult},
};

/// Owner of the single live configuration.
///
/// Every accepted change swaps in a fresh [`Arc<Configuration>`]; snapshots handed out
/// earlier keep describing the state they were taken from.
#[derive(Clone, Debug, Default)]
pub struct ConfigStore {
    current: Arc<Configuration>,
}

impl ConfigStore {
    /// A store holding the startup snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store starting from `config` instead of the defaults.
    pub fn with_config(config: Configuration) -> Self {
        Self {
            current: Arc::new(config),
        }
    }

    /// The current snapshot.
    pub fn get(&self) -> Arc<Configuration> {
        Arc::clone(&self.current)
    }

    /// Set one leaf addressed by a typed selector.
    #[tracing::instrument(skip(self, value))]
    pub fn set(
        &mut self,
        field: ConfigField,
        value: impl Into<Value>,
    ) -> VitrineResult<Arc<Configuration>> {
        let next = self.current.updated(field, value.into())?;
        Ok(self.commit(next))
    }

    /// Set one leaf addressed by a key sequence such as `["button", "borderRadius"]`.
    ///
    /// Fails with [`VitrineError::InvalidPath`] when the sequence is not a schema leaf and
    /// with [`VitrineError::Validation`] when the value does not fit the leaf. The store is
    /// unchanged on failure.
    pub fn update_field<S: AsRef<str>>(
        &mut self,
        path: &[S],
        value: Value,
    ) -> VitrineResult<Arc<Configuration>> {
        let field = ConfigField::from_path(path)?;
        self.set(field, value)
    }

    /// Apply updates in order as one atomic change.
    ///
    /// Consecutive writes to the same leaf collapse into the last one. If any update is
    /// rejected, none of them are applied.
    #[tracing::instrument(skip(self, updates))]
    pub fn apply_batch<I>(&mut self, updates: I) -> VitrineResult<Arc<Configuration>>
    where
        I: IntoIterator<Item = (ConfigField, Value)>,
    {
        let mut pending: Vec<(ConfigField, Value)> = Vec::new();
        let mut coalesced = 0usize;
        for (field, value) in updates {
            match pending.last_mut() {
                Some((last, slot)) if *last == field => {
                    *slot = value;
                    coalesced += 1;
                }
                _ => pending.push((field, value)),
            }
        }
        tracing::debug!(applied = pending.len(), coalesced, "applying update batch");

        let mut next = Configuration::clone(&self.current);
        for (field, value) in pending {
            next = next.updated(field, value)?;
        }
        Ok(self.commit(next))
    }

    /// Current snapshot as pretty JSON (2-space indent, schema field order).
    pub fn export_snapshot(&self) -> VitrineResult<String> {
        serde_json::to_string_pretty(self.current.as_ref())
            .map_err(|e| VitrineError::serde(e.to_string()))
    }

    /// What importing `text` would produce, without committing it.
    pub fn preview_import(&self, text: &str) -> VitrineResult<Configuration> {
        let parsed: Value =
            serde_json::from_str(text).map_err(|e| VitrineError::parse(e.to_string()))?;
        let Value::Object(incoming) = parsed else {
            return Err(VitrineError::parse("import must be a JSON object"));
        };
        self.current.merged_shallow(incoming)
    }

    /// Parse `text` and shallow-merge its top-level keys onto the current snapshot.
    ///
    /// Malformed JSON yields [`VitrineError::Parse`]; either way a failed import leaves the
    /// store exactly as it was.
    #[tracing::instrument(skip(self, text), fields(len = text.len()))]
    pub fn import_snapshot(&mut self, text: &str) -> VitrineResult<Arc<Configuration>> {
        let next = self.preview_import(text)?;
        let missing = next.missing_leaves();
        if !missing.is_empty() {
            tracing::warn!(
                missing = missing.len(),
                "import replaced groups partially; some leaves are now undefined"
            );
        }
        Ok(self.commit(next))
    }

    /// Export into `io` under `name`.
    pub fn export_to(&self, io: &mut dyn TextBlobIo, name: &str) -> VitrineResult<()> {
        let text = self.export_snapshot()?;
        io.write_text(name, &text)
    }

    /// Read `name` from `io` and import it.
    pub fn import_from(
        &mut self,
        io: &dyn TextBlobIo,
        name: &str,
    ) -> VitrineResult<Arc<Configuration>> {
        let text = io.read_text(name)?;
        self.import_snapshot(&text)
    }

    /// Swap in a whole snapshot that was already checked elsewhere.
    pub(crate) fn replace(&mut self, config: Configuration) -> Arc<Configuration> {
        self.commit(config)
    }

    fn commit(&mut self, next: Configuration) -> Arc<Configuration> {
        if next == *self.current {
            tracing::debug!("update left configuration unchanged");
        }
        self.current = Arc::new(next);
        Arc::clone(&self.current)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/store.rs"]
mod tests;
