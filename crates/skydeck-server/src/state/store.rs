//! In-memory state store for sessions and the path history.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use skydeck_core::PathRecord;
use std::sync::Mutex;

use crate::config::Config;
use crate::state::history::PathHistory;

/// A login session issued by the mock auth endpoint.
#[derive(Debug, Clone)]
pub struct Session {
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Application state - thread-safe store for sessions and planned paths.
pub struct AppState {
    config: Config,
    sessions: DashMap<String, Session>,
    history: Mutex<PathHistory>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let history = PathHistory::new(config.history_capacity);
        Self {
            config,
            sessions: DashMap::new(),
            history: Mutex::new(history),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Issue a fresh session token for a logged-in operator.
    pub fn create_session(&self, email: &str) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                email: email.to_string(),
                created_at: Utc::now(),
            },
        );
        token
    }

    pub fn validate_session(&self, token: &str) -> bool {
        self.sessions.contains_key(token)
    }

    /// Append a record to the bounded history.
    pub fn insert_record(&self, record: PathRecord) {
        let mut history = self.history.lock().expect("history lock poisoned");
        history.push(record);
    }

    /// All history records, newest first.
    pub fn list_records(&self) -> Vec<PathRecord> {
        let history = self.history.lock().expect("history lock poisoned");
        history.records()
    }

    pub fn get_record(&self, id: &str) -> Option<PathRecord> {
        let history = self.history.lock().expect("history lock poisoned");
        history.get(id)
    }
}
