use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::json::{self, JsonOpts};

/// A root JSON object together with the file it was loaded from or first
/// saved to, so later saves don't need the path again.
///
/// Derefs to the root map, so the `nested_*` functions take `&doc` and
/// `&mut doc` directly. Not `Clone`: copy the tree with
/// [`deep_clone_object`](crate::deep_clone_object) and the copy starts out
/// with no file.
#[derive(Debug, Default)]
pub struct JsonDocument {
    root: Map<String, Value>,
    origin: Option<PathBuf>,
}

impl JsonDocument {
    pub fn new(root: Map<String, Value>) -> Self {
        Self { root, origin: None }
    }

    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::read_from_file_with(path, JsonOpts::default())
    }

    pub fn read_from_file_with(path: impl AsRef<Path>, opts: JsonOpts) -> Result<Self> {
        let path = path.as_ref();
        let root = json::read_object_file(path, opts)?;
        tracing::debug!(path = %path.display(), entries = root.len(), "read json document");
        Ok(Self {
            root,
            origin: Some(path.to_path_buf()),
        })
    }

    /// Writes `root` (or an empty object) to `path` right away.
    pub fn create_new_file(path: impl AsRef<Path>, root: Option<Map<String, Value>>) -> Result<Self> {
        Self::create_new_file_with(path, root, JsonOpts::default())
    }

    pub fn create_new_file_with(
        path: impl AsRef<Path>,
        root: Option<Map<String, Value>>,
        opts: JsonOpts,
    ) -> Result<Self> {
        let path = path.as_ref();
        let doc = Self {
            root: root.unwrap_or_default(),
            origin: Some(path.to_path_buf()),
        };
        json::write_json_to_file(path, &doc.root, opts)?;
        tracing::debug!(path = %path.display(), entries = doc.root.len(), "created json document");
        Ok(doc)
    }

    /// Saves to `path`, or to the remembered file when `path` is `None`.
    /// The first explicit path given to a document without one is remembered.
    pub fn save_to_file(&mut self, path: Option<&Path>) -> Result<()> {
        self.save_to_file_with(path, JsonOpts::default())
    }

    pub fn save_to_file_with(&mut self, path: Option<&Path>, opts: JsonOpts) -> Result<()> {
        let target = match (path, &self.origin) {
            (Some(p), _) => p.to_path_buf(),
            (None, Some(origin)) => origin.clone(),
            (None, None) => return Err(Error::NoKnownPath),
        };
        json::write_json_to_file(&target, &self.root, opts)?;
        tracing::debug!(path = %target.display(), entries = self.root.len(), "saved json document");
        if self.origin.is_none() {
            self.origin = Some(target);
        }
        Ok(())
    }

    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.root
    }

    pub fn into_root(self) -> Map<String, Value> {
        self.root
    }
}

impl From<Map<String, Value>> for JsonDocument {
    fn from(root: Map<String, Value>) -> Self {
        Self::new(root)
    }
}

impl Deref for JsonDocument {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl DerefMut for JsonDocument {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.root
    }
}

pub fn read_from_file(path: impl AsRef<Path>) -> Result<JsonDocument> {
    JsonDocument::read_from_file(path)
}

pub fn create_new_file(path: impl AsRef<Path>, root: Option<Map<String, Value>>) -> Result<JsonDocument> {
    JsonDocument::create_new_file(path, root)
}

pub fn save_to_file(doc: &mut JsonDocument, path: Option<&Path>) -> Result<()> {
    doc.save_to_file(path)
}
