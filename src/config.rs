use std::path::PathBuf;

use anyhow::{bail, Context};
use serde::Deserialize;

/// Which `PlantRepository` implementation backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Mongo,
    Memory,
}

impl std::str::FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" => Ok(Self::Memory),
            other => bail!("unknown STORAGE value: {other}"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    /// Falls back to the database named in the URI, then to `test`.
    pub database: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub storage: StorageKind,
    pub mongo: Option<MongoConfig>,
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let storage = match var("STORAGE") {
            Some(v) => v.parse::<StorageKind>()?,
            None => StorageKind::Mongo,
        };

        let mongo = match (storage, var("MONGO_URI")) {
            (_, Some(uri)) => Some(MongoConfig {
                uri,
                database: var("MONGO_DB").filter(|s| !s.is_empty()),
            }),
            (StorageKind::Mongo, None) => bail!("MONGO_URI must be set when STORAGE=mongo"),
            (StorageKind::Memory, None) => None,
        };

        let port = match var("PORT") {
            Some(p) => p.parse::<u16>().with_context(|| format!("invalid PORT: {p}"))?,
            None => 3000,
        };

        Ok(Self {
            storage,
            mongo,
            host: var("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("web")),
        })
    }
}
