use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
pub struct StoredLink {
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

/// In-memory state of the development endpoint. Nothing outlives the process.
#[derive(Debug, Clone)]
pub struct AppState {
    pub base_url: String,
    pub links: Arc<RwLock<HashMap<String, StoredLink>>>,
}

impl AppState {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            links: Arc::default(),
        }
    }
}
