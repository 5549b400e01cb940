use std::time::Duration;

use anyhow::Context;
use mongodb::{bson::doc, options::ClientOptions, Client, Database};

use crate::config::MongoConfig;

/// Collection holding plant documents.
pub const PLANTS_COLLECTION: &str = "plantas";

/// Connect to MongoDB and make sure the server answers before we start serving.
pub async fn connect(cfg: &MongoConfig) -> anyhow::Result<Database> {
    let mut options = ClientOptions::parse(&cfg.uri)
        .await
        .context("parse MONGO_URI")?;
    options.server_selection_timeout = Some(Duration::from_secs(10));
    options.app_name = Some("plant-catalog".into());

    let client = Client::with_options(options).context("create mongodb client")?;
    let db = match &cfg.database {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database("test")),
    };

    db.run_command(doc! { "ping": 1 })
        .await
        .context("ping mongodb")?;
    tracing::info!(database = %db.name(), "connected to mongodb");

    Ok(db)
}
