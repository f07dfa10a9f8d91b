// src/state.rs
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::{email_store::EmailStore, gemini::ChatModel};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub store: EmailStore,
    pub model: Arc<dyn ChatModel>,
    // Advisory only: overwritten on every match, never used for decisions.
    last_email: RwLock<Option<String>>,
}

impl AppState {
    pub fn new(store: EmailStore, model: Arc<dyn ChatModel>) -> Self {
        Self {
            store,
            model,
            last_email: RwLock::new(None),
        }
    }

    pub async fn remember_email(&self, email: &str) {
        *self.last_email.write().await = Some(email.to_string());
    }

    pub async fn last_email(&self) -> Option<String> {
        self.last_email.read().await.clone()
    }
}
