//! Uploaded-résumé records and their in-memory store.
//!
//! Records live in process memory only and vanish on restart; the service
//! deliberately has no durable storage for candidate documents.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

/// One parsed upload with its extraction results.
#[derive(Debug, Serialize)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub filename: String,
    pub text: String,
    pub skills: Vec<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl ResumeRecord {
    pub fn new(filename: String, text: String, skills: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename,
            text,
            skills,
            uploaded_at: Utc::now(),
        }
    }

    /// Unicode scalars, not bytes.
    pub fn character_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Concurrent map of résumé id to record. Records are immutable once
/// stored, so readers share them via `Arc`.
#[derive(Clone, Default)]
pub struct ResumeStore {
    records: Arc<RwLock<HashMap<Uuid, Arc<ResumeRecord>>>>,
}

impl ResumeStore {
    pub async fn insert(&self, record: ResumeRecord) -> Arc<ResumeRecord> {
        let record = Arc::new(record);
        self.records
            .write()
            .await
            .insert(record.id, Arc::clone(&record));
        record
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<ResumeRecord>> {
        self.records.read().await.get(&id).map(Arc::clone)
    }
}
