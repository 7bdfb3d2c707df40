use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::error::{VitrineError, VitrineResult};

/// Default blob name for exports.
pub const EXPORT_FILE_NAME: &str = "ui-config.json";

/// Capability to read and write named UTF-8 text blobs.
///
/// The editor only ever needs one blob at a time (the exported configuration); the trait
/// keeps file pickers and download prompts out of the store.
pub trait TextBlobIo {
    /// Read the whole blob as text.
    fn read_text(&self, name: &str) -> VitrineResult<String>;
    /// Create or overwrite the blob.
    fn write_text(&mut self, name: &str, text: &str) -> VitrineResult<()>;
}

/// Blobs as files below a root directory.
#[derive(Clone, Debug)]
pub struct FsBlobIo {
    root: PathBuf,
}

impl FsBlobIo {
    /// Blobs live as files directly under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory blobs are read from and written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> VitrineResult<PathBuf> {
        validate_blob_name(name)?;
        Ok(self.root.join(name))
    }
}

impl TextBlobIo for FsBlobIo {
    fn read_text(&self, name: &str) -> VitrineResult<String> {
        let path = self.path_for(name)?;
        let text = fs::read_to_string(&path)
            .with_context(|| format!("read blob '{}'", path.display()))?;
        Ok(text)
    }

    fn write_text(&mut self, name: &str, text: &str) -> VitrineResult<()> {
        let path = self.path_for(name)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create blob dir '{}'", parent.display()))?;
        }
        fs::write(&path, text).with_context(|| format!("write blob '{}'", path.display()))?;
        Ok(())
    }
}

/// Blobs held in memory; handy for sessions without a filesystem and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryBlobIo {
    blobs: BTreeMap<String, String>,
}

impl MemoryBlobIo {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed or overwrite a blob.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.blobs.insert(name.into(), text.into());
    }

    /// Contents of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.blobs.get(name).map(String::as_str)
    }
}

impl TextBlobIo for MemoryBlobIo {
    fn read_text(&self, name: &str) -> VitrineResult<String> {
        self.get(name)
            .map(str::to_owned)
            .ok_or_else(|| VitrineError::Other(anyhow::anyhow!("no blob named '{name}'")))
    }

    fn write_text(&mut self, name: &str, text: &str) -> VitrineResult<()> {
        validate_blob_name(name)?;
        self.insert(name, text);
        Ok(())
    }
}

fn validate_blob_name(name: &str) -> VitrineResult<()> {
    if name.trim().is_empty() {
        return Err(VitrineError::validation("blob name must be non-empty"));
    }
    let s = name.replace('\\', "/");
    if s.starts_with('/') {
        return Err(VitrineError::validation("blob name must be a relative path"));
    }
    if s.split('/').any(|part| part == "..") {
        return Err(VitrineError::validation("blob name must not contain '..'"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/config/io.rs"]
mod tests;
