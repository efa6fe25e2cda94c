use std::{collections::HashMap, sync::Mutex};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{Error, Result};

/// Named document collections.
#[derive(
    EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "snake_case")]
pub enum Collection {
    Groups,
    MealPlans,
    Session,
}

/// A stored JSON document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

impl Document {
    pub fn new<T: Serialize>(id: impl Into<String>, value: &T) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            data: serde_json::to_value(value)?,
        })
    }

    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(self.data)?)
    }
}

/// Storage for application state: get/save/delete over named collections.
///
/// Implementations keep documents of a collection in insertion order;
/// saving an existing id replaces its data in place.
#[async_trait::async_trait]
pub trait Repository: Send + Sync {
    async fn all(&self, collection: Collection) -> Result<Vec<Document>>;

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>>;

    async fn save(&self, collection: Collection, document: Document) -> Result<()>;

    /// Returns false when nothing was stored under `id`.
    async fn delete(&self, collection: Collection, id: &str) -> Result<bool>;
}

#[async_trait::async_trait]
impl<R: Repository + ?Sized> Repository for std::sync::Arc<R> {
    async fn all(&self, collection: Collection) -> Result<Vec<Document>> {
        (**self).all(collection).await
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>> {
        (**self).get(collection, id).await
    }

    async fn save(&self, collection: Collection, document: Document) -> Result<()> {
        (**self).save(collection, document).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool> {
        (**self).delete(collection, id).await
    }
}

/// Process-local repository, used by tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryRepository {
    collections: Mutex<HashMap<Collection, Vec<Document>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<T>(&self, f: impl FnOnce(&mut HashMap<Collection, Vec<Document>>) -> T) -> Result<T> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|e| Error::Server(format!("memory repository poisoned: {e}")))?;

        Ok(f(&mut collections))
    }
}

#[async_trait::async_trait]
impl Repository for MemoryRepository {
    async fn all(&self, collection: Collection) -> Result<Vec<Document>> {
        self.with(|c| c.get(&collection).cloned().unwrap_or_default())
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>> {
        self.with(|c| {
            c.get(&collection)
                .and_then(|docs| docs.iter().find(|d| d.id == id).cloned())
        })
    }

    async fn save(&self, collection: Collection, document: Document) -> Result<()> {
        self.with(|c| {
            let docs = c.entry(collection).or_default();
            match docs.iter_mut().find(|d| d.id == document.id) {
                Some(existing) => existing.data = document.data,
                None => docs.push(document),
            }
        })
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool> {
        self.with(|c| {
            let Some(docs) = c.get_mut(&collection) else {
                return false;
            };
            let before = docs.len();
            docs.retain(|d| d.id != id);
            docs.len() != before
        })
    }
}
