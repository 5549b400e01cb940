use std::sync::Arc;

use anyhow::Context;

use crate::config::{AppConfig, StorageKind};
use crate::db;
use crate::plants::repo::{InMemoryPlantRepository, MongoPlantRepository, PlantRepository};

/// Application context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub plants: Arc<dyn PlantRepository>,
}

impl AppState {
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let plants: Arc<dyn PlantRepository> = match config.storage {
            StorageKind::Mongo => {
                let mongo = config
                    .mongo
                    .as_ref()
                    .context("mongo storage selected without MONGO_URI")?;
                let db = db::connect(mongo).await?;
                Arc::new(MongoPlantRepository::new(&db))
            }
            StorageKind::Memory => {
                tracing::warn!("using in-memory plant storage; records are lost on exit");
                Arc::new(InMemoryPlantRepository::new())
            }
        };

        Ok(Self::from_parts(Arc::new(config), plants))
    }

    pub fn from_parts(config: Arc<AppConfig>, plants: Arc<dyn PlantRepository>) -> Self {
        Self { config, plants }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        Self::with_repo(Arc::new(InMemoryPlantRepository::new()))
    }

    #[cfg(test)]
    pub fn with_repo(plants: Arc<dyn PlantRepository>) -> Self {
        let config = Arc::new(AppConfig {
            storage: StorageKind::Memory,
            mongo: None,
            host: "127.0.0.1".into(),
            port: 0,
            static_dir: "web".into(),
        });
        Self::from_parts(config, plants)
    }
}
