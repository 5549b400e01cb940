use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId, Document},
    Collection, Database,
};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::repo_types::{Plant, PlantFields, PlantFilter};
use crate::db::PLANTS_COLLECTION;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Storage seam of the catalog. Records are only ever listed or inserted.
#[async_trait]
pub trait PlantRepository: Send + Sync {
    /// Every stored plant matching `filter`, in insertion order.
    async fn list(&self, filter: &PlantFilter) -> Result<Vec<Plant>, RepoError>;
    /// Persist a validated plant and return it with its generated id.
    async fn insert(&self, fields: PlantFields) -> Result<Plant, RepoError>;
}

#[derive(Clone)]
pub struct MongoPlantRepository {
    collection: Collection<Plant>,
}

impl MongoPlantRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Plant>(PLANTS_COLLECTION),
        }
    }
}

#[async_trait]
impl PlantRepository for MongoPlantRepository {
    async fn list(&self, filter: &PlantFilter) -> Result<Vec<Plant>, RepoError> {
        let query = filter.exact_match_document();
        debug!(?query, search = ?filter.search_text, "find plants");

        let cursor = self
            .collection
            .clone_with_type::<Document>()
            .find(query)
            .sort(doc! { "_id": 1 })
            .await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents
            .into_iter()
            .filter_map(decode_plant)
            .filter(|p| filter.name_matches(&p.name))
            .collect())
    }

    async fn insert(&self, fields: PlantFields) -> Result<Plant, RepoError> {
        let plant = fields.into_plant(ObjectId::new());
        self.collection.insert_one(&plant).await?;
        Ok(plant)
    }
}

/// Documents written outside this service may lack a field; those are logged
/// and left out of the listing instead of failing it.
fn decode_plant(document: Document) -> Option<Plant> {
    let id = document.get_object_id("_id").ok();
    match bson::from_document::<Plant>(document) {
        Ok(plant) => Some(plant),
        Err(e) => {
            warn!(error = %e, ?id, "skipping undecodable plant document");
            None
        }
    }
}

/// Process-local repository, used by tests and by `STORAGE=memory` runs.
#[derive(Default)]
pub struct InMemoryPlantRepository {
    plants: RwLock<Vec<Plant>>,
}

impl InMemoryPlantRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.plants.read().await.len()
    }
}

#[async_trait]
impl PlantRepository for InMemoryPlantRepository {
    async fn list(&self, filter: &PlantFilter) -> Result<Vec<Plant>, RepoError> {
        let plants = self.plants.read().await;
        Ok(plants.iter().filter(|p| filter.matches(p)).cloned().collect())
    }

    async fn insert(&self, fields: PlantFields) -> Result<Plant, RepoError> {
        let plant = fields.into_plant(ObjectId::new());
        self.plants.write().await.push(plant.clone());
        Ok(plant)
    }
}
