use std::collections::HashMap;

use async_trait::async_trait;
use interactions_shared::types::UserId;
use uuid::Uuid;

use crate::errors::BookmarksRepositoryError;

/// Defines the interface for storing which questions a user has saved.
#[async_trait]
pub trait BookmarksRepository: Send + Sync {
    /// Flips the saved flag for a question.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user toggling the bookmark.
    /// * `question_id` - The question being saved or unsaved.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - The authoritative saved flag after the write.
    /// * `Err(BookmarksRepositoryError)` - If the write fails.
    async fn toggle(
        &self,
        user_id: UserId,
        question_id: Uuid,
    ) -> Result<bool, BookmarksRepositoryError>;

    /// Reads the saved flag for one question.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose flag is resolved.
    /// * `question_id` - The question being read.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - Whether the user has saved the question.
    /// * `Err(BookmarksRepositoryError)` - If the read fails.
    async fn is_saved(
        &self,
        user_id: UserId,
        question_id: Uuid,
    ) -> Result<bool, BookmarksRepositoryError>;

    /// Reads the saved flags of many questions in one round trip.
    ///
    /// Every requested question appears in the result, unsaved ones with
    /// `false`.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user whose flags are resolved.
    /// * `question_ids` - The questions being read.
    ///
    /// # Returns
    ///
    /// * `Ok(HashMap<Uuid, bool>)` - One entry per requested question.
    /// * `Err(BookmarksRepositoryError)` - If the read fails.
    async fn saved_flags(
        &self,
        user_id: UserId,
        question_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, bool>, BookmarksRepositoryError>;
}
