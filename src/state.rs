use std::sync::Arc;

use crate::config::AppConfig;
use crate::db;
use crate::people::{
    repo::{PersonRepository, PgPersonRepository},
    services::PersonService,
};

#[derive(Clone)]
pub struct AppState {
    pub people: PersonService,
}

impl AppState {
    /// Connects the pool, applies migrations and wires the Postgres-backed service.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = db::connect(config).await?;
        db::migrate(&pool).await?;
        tracing::info!("database ready");

        let repo = Arc::new(PgPersonRepository::new(pool)) as Arc<dyn PersonRepository>;
        Ok(Self::from_repo(repo))
    }

    pub fn from_repo(repo: Arc<dyn PersonRepository>) -> Self {
        Self {
            people: PersonService::new(repo),
        }
    }
}
