use async_trait::async_trait;

use crate::{
    api::{self, Comment, CommentId, Draft, PostId},
    storage::{Storage, StorageError},
    store::CommentStore,
};

/// Seam for the simulated network delay between validation and persistence.
/// The web frontend backs this with a timer; tests use [`NoLatency`]. Real
/// deployments would replace the wait with an actual request while keeping
/// the same state transitions.
#[async_trait(?Send)]
pub trait Latency {
    async fn wait(&self);
}

pub struct NoLatency;

#[async_trait(?Send)]
impl Latency for NoLatency {
    async fn wait(&self) {}
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] api::Error),

    #[error("Comment could not be saved")]
    Store(#[from] StorageError),
}

/// Runs one comment submission: validate, build the record, wait out the
/// simulated latency, persist. Returns the persisted record for the caller
/// to render; nothing is persisted on a validation failure.
///
/// Concurrent submissions are independent, each is keyed by its own
/// generated id and there is no queuing between them.
pub async fn submit_comment<S: Storage, L: Latency>(
    store: &CommentStore<S>,
    latency: &L,
    post_id: &PostId,
    draft: Draft,
) -> Result<Comment, SubmitError> {
    draft.validate()?;
    let comment = Comment::build(post_id.clone(), draft);
    latency.wait().await;
    store.save_comment(&comment)?;
    tracing::debug!(id = %comment.id.0, post = %comment.post_id, "comment persisted");
    Ok(comment)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LikeToggle {
    pub liked: bool,
    pub likes: u32,
}

/// Synchronous 2-state flip for one comment: adjusts the stored counter
/// (floored at zero) and the like marker together. Returns `None` when the
/// comment does not exist.
pub fn toggle_like<S: Storage>(
    store: &CommentStore<S>,
    id: &CommentId,
) -> Result<Option<LikeToggle>, StorageError> {
    let mut comment = match store.comment_by_id(id) {
        None => return Ok(None),
        Some(c) => c,
    };
    let toggle = match store.is_liked(id) {
        true => {
            comment.likes = comment.likes.saturating_sub(1);
            store.remove_like(id)?;
            LikeToggle {
                liked: false,
                likes: comment.likes,
            }
        }
        false => {
            comment.likes += 1;
            store.add_like(id)?;
            LikeToggle {
                liked: true,
                likes: comment.likes,
            }
        }
    };
    store.update_comment(&comment)?;
    Ok(Some(toggle))
}

/// Mention prefix placed in the message field when replying. UI convenience
/// only, replies have no data-model effect.
pub fn reply_prefill(name: &str) -> String {
    format!("@{} ", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    fn store_with_comment() -> (CommentStore<MemoryStorage>, CommentId) {
        let store = CommentStore::new(MemoryStorage::new());
        let c = Comment::build(
            PostId(String::from("foo")),
            Draft {
                name: String::from("Al"),
                email: String::from("a@b.com"),
                message: String::from("Hello there friend"),
            },
        );
        store.save_comment(&c).unwrap();
        (store, c.id)
    }

    #[test]
    fn like_unlike_restores_original_state() {
        let (store, id) = store_with_comment();

        let liked = toggle_like(&store, &id).unwrap().unwrap();
        assert_eq!(liked, LikeToggle { liked: true, likes: 1 });
        assert!(store.is_liked(&id));

        let unliked = toggle_like(&store, &id).unwrap().unwrap();
        assert_eq!(unliked, LikeToggle { liked: false, likes: 0 });
        assert!(!store.is_liked(&id));
        assert_eq!(store.comment_by_id(&id).unwrap().likes, 0);
    }

    #[test]
    fn unlike_floors_counter_at_zero() {
        let (store, id) = store_with_comment();
        // Marker present but counter already zero, as can happen after a
        // lost cross-tab update
        store.add_like(&id).unwrap();
        let toggled = toggle_like(&store, &id).unwrap().unwrap();
        assert_eq!(toggled, LikeToggle { liked: false, likes: 0 });
    }

    #[test]
    fn toggling_missing_comment_does_nothing() {
        let store = CommentStore::new(MemoryStorage::new());
        assert_eq!(toggle_like(&store, &CommentId(String::from("ghost"))).unwrap(), None);
        assert!(store.liked_comments().is_empty());
    }

    #[test]
    fn reply_prefill_mentions_the_author() {
        assert_eq!(reply_prefill("Jane Doe"), "@Jane Doe ");
    }
}
