use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use interactions_shared::types::{BookmarkRecord, UserId};
use uuid::Uuid;

use crate::errors::BookmarksRepositoryError;
use crate::interfaces::BookmarksRepository;

/// In-memory bookmark store.
#[derive(Default)]
pub struct MemoryBookmarksRepository {
    rows: Mutex<HashMap<(UserId, Uuid), BookmarkRecord>>,
}

impl MemoryBookmarksRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarksRepository for MemoryBookmarksRepository {
    async fn toggle(
        &self,
        user_id: UserId,
        question_id: Uuid,
    ) -> Result<bool, BookmarksRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let key = (user_id, question_id);
        if rows.remove(&key).is_some() {
            Ok(false)
        } else {
            rows.insert(
                key,
                BookmarkRecord {
                    user_id,
                    question_id,
                    created_at: Utc::now(),
                },
            );
            Ok(true)
        }
    }

    async fn is_saved(
        &self,
        user_id: UserId,
        question_id: Uuid,
    ) -> Result<bool, BookmarksRepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.contains_key(&(user_id, question_id)))
    }

    async fn saved_flags(
        &self,
        user_id: UserId,
        question_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, bool>, BookmarksRepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(question_ids
            .iter()
            .map(|question_id| (*question_id, rows.contains_key(&(user_id, *question_id))))
            .collect())
    }
}
