use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;

/// Process-wide handles, built once at startup and injected into every
/// handler through [`crate::api::AppState`].
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::from_config(&config.general).await?;

        Ok(Self {
            config: Arc::new(config),
            store,
        })
    }
}
