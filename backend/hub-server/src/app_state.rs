use hub_config::Config;
use hub_mutation::MutationContext;

use sqlx::SqlitePool;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub mutation: MutationContext,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            mutation: MutationContext::new(pool, config),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.mutation.pool
    }
}
