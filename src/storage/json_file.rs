//! JSON collection file storage
//!
//! Each collection lives in a single pretty-printed JSON document holding one
//! named array:
//!
//! ```json
//! {
//!   "products": [
//!     { "id": 1, "title": "..." }
//!   ]
//! }
//! ```
//!
//! The field name is the entity kind's plural (`products`, `carts`). A missing
//! file or a document without the field loads as an empty collection; any
//! other read or parse failure is returned to the caller. Saves write a
//! sibling temp file and rename it over the target so a crash mid-write never
//! leaves a truncated document behind.

use crate::core::{CollectionStorage, Entity};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tokio::fs;

/// File-backed implementation of `CollectionStorage<T>`
///
/// # Example
///
/// ```rust,ignore
/// use shop::storage::JsonFileStorage;
///
/// let storage = JsonFileStorage::<Product>::new("data/products.json");
/// let products = storage.load().await?;
/// ```
pub struct JsonFileStorage<T: Entity> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Entity> JsonFileStorage<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl<T: Entity> CollectionStorage<T> for JsonFileStorage<T> {
    async fn load(&self) -> Result<Vec<T>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };

        let mut document: Map<String, Value> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", self.path.display()))?;

        match document.remove(T::KIND.plural()) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(items) => serde_json::from_value(items).with_context(|| {
                format!(
                    "decoding '{}' in {}",
                    T::KIND.plural(),
                    self.path.display()
                )
            }),
        }
    }

    async fn save(&self, items: &[T]) -> Result<()> {
        // Serialized straight from the entities so their field order is kept
        let document = BTreeMap::from([(T::KIND.plural(), items)]);
        let body = serde_json::to_string_pretty(&document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let temp = self.temp_path();
        fs::write(&temp, body)
            .await
            .with_context(|| format!("writing {}", temp.display()))?;
        fs::rename(&temp, &self.path)
            .await
            .with_context(|| format!("replacing {}", self.path.display()))?;

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
