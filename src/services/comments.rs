//! Comment uniqueness guard.
//!
//! Three dependent steps against the store, each short-circuiting:
//! volcano exists → no prior comment by this identity → insert. The
//! check-then-insert sequence alone has a race window (two concurrent
//! requests can both pass the check), so the comments table also carries a
//! unique key on (volcano_id, user_email); an insert losing that race still
//! comes back as a 409, just via the constraint instead of the check.

use sqlx::PgPool;

use crate::api::extractors::Identity;
use crate::error::AppError;
use crate::repos::comment_repo::{self, CommentRow};
use crate::repos::error::RepoError;
use crate::repos::volcano_repo;

const ALREADY_COMMENTED: &str = "You have already commented on this volcano";

/// The store operations the guard sequences.
///
/// Seam over the sqlx repos so the protocol (404 before 409 before insert,
/// and the race fallback) is testable without a database.
pub trait CommentStore {
    async fn volcano_exists(&self, volcano_id: i32) -> Result<bool, RepoError>;

    async fn find_comment(
        &self,
        volcano_id: i32,
        user_email: &str,
    ) -> Result<Option<CommentRow>, RepoError>;

    async fn insert_comment(
        &self,
        volcano_id: i32,
        user_email: &str,
        comment: &str,
        rating: i32,
    ) -> Result<CommentRow, RepoError>;
}

impl CommentStore for PgPool {
    async fn volcano_exists(&self, volcano_id: i32) -> Result<bool, RepoError> {
        Ok(volcano_repo::get(self, volcano_id).await?.is_some())
    }

    async fn find_comment(
        &self,
        volcano_id: i32,
        user_email: &str,
    ) -> Result<Option<CommentRow>, RepoError> {
        comment_repo::find(self, volcano_id, user_email).await
    }

    async fn insert_comment(
        &self,
        volcano_id: i32,
        user_email: &str,
        comment: &str,
        rating: i32,
    ) -> Result<CommentRow, RepoError> {
        comment_repo::insert(self, volcano_id, user_email, comment, rating).await
    }
}

pub async fn add_comment(
    store: &impl CommentStore,
    volcano_id: i32,
    identity: &Identity,
    comment: &str,
    rating: i32,
) -> Result<CommentRow, AppError> {
    if !store.volcano_exists(volcano_id).await? {
        return Err(AppError::NotFound(format!(
            "Volcano with ID: {volcano_id} not found."
        )));
    }

    if store
        .find_comment(volcano_id, identity.as_str())
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(ALREADY_COMMENTED));
    }

    store
        .insert_comment(volcano_id, identity.as_str(), comment, rating)
        .await
        .map_err(|e| match e {
            RepoError::Conflict => AppError::Conflict(ALREADY_COMMENTED),
            other => other.into(),
        })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// In-memory stand-in for the comments/volcanoes tables.
    /// `insert_conflicts` simulates losing the check-then-insert race: the
    /// prior-comment check sees nothing, but the unique key fires on insert.
    struct MemoryStore {
        volcanoes: Vec<i32>,
        comments: Mutex<Vec<CommentRow>>,
        insert_conflicts: bool,
    }

    impl MemoryStore {
        fn with_volcano(volcano_id: i32) -> Self {
            Self {
                volcanoes: vec![volcano_id],
                comments: Mutex::new(Vec::new()),
                insert_conflicts: false,
            }
        }
    }

    impl CommentStore for MemoryStore {
        async fn volcano_exists(&self, volcano_id: i32) -> Result<bool, RepoError> {
            Ok(self.volcanoes.contains(&volcano_id))
        }

        async fn find_comment(
            &self,
            volcano_id: i32,
            user_email: &str,
        ) -> Result<Option<CommentRow>, RepoError> {
            Ok(self
                .comments
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.volcano_id == volcano_id && c.user_email == user_email)
                .cloned())
        }

        async fn insert_comment(
            &self,
            volcano_id: i32,
            user_email: &str,
            comment: &str,
            rating: i32,
        ) -> Result<CommentRow, RepoError> {
            if self.insert_conflicts {
                return Err(RepoError::Conflict);
            }
            let row = CommentRow {
                volcano_id,
                user_email: user_email.to_string(),
                comment: comment.to_string(),
                rating,
            };
            self.comments.lock().unwrap().push(row.clone());
            Ok(row)
        }
    }

    #[tokio::test]
    async fn first_comment_inserts_second_identical_one_conflicts() {
        let store = MemoryStore::with_volcano(1);
        let identity = Identity::new("u@x.com");

        let row = add_comment(&store, 1, &identity, "Steaming", 4).await.unwrap();
        assert_eq!(row.user_email, "u@x.com");
        assert_eq!(row.rating, 4);

        let second = add_comment(&store, 1, &identity, "Steaming", 4).await;
        assert!(matches!(second, Err(AppError::Conflict(_))));
        // Still exactly one stored comment.
        assert_eq!(store.comments.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn different_identities_may_comment_on_the_same_volcano() {
        let store = MemoryStore::with_volcano(1);

        add_comment(&store, 1, &Identity::new("a@x.com"), "Quiet", 2)
            .await
            .unwrap();
        add_comment(&store, 1, &Identity::new("b@x.com"), "Loud", 5)
            .await
            .unwrap();

        assert_eq!(store.comments.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn missing_volcano_is_not_found() {
        let store = MemoryStore::with_volcano(1);
        let result = add_comment(&store, 99, &Identity::new("u@x.com"), "?", 3).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(store.comments.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn volcano_check_runs_before_the_comment_check() {
        // A stray comment for a volcano that does not exist: the guard must
        // still answer 404, not 409.
        let store = MemoryStore::with_volcano(1);
        store.comments.lock().unwrap().push(CommentRow {
            volcano_id: 99,
            user_email: "u@x.com".to_string(),
            comment: "orphan".to_string(),
            rating: 3,
        });

        let result = add_comment(&store, 99, &Identity::new("u@x.com"), "again", 3).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn losing_the_insert_race_still_answers_conflict() {
        let store = MemoryStore {
            volcanoes: vec![1],
            comments: Mutex::new(Vec::new()),
            insert_conflicts: true,
        };

        let result = add_comment(&store, 1, &Identity::new("u@x.com"), "raced", 3).await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
