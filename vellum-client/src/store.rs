use std::collections::HashSet;

use crate::{
    api::{Comment, CommentId, PostId},
    storage::{Storage, StorageError},
};

pub const KEY_COMMENTS: &str = "blogComments";
pub const KEY_LIKED: &str = "likedComments";

/// Owner of the persisted comment collection and the like-marker set.
///
/// Both collections are read-modify-write over full-collection JSON values
/// with no transaction: the last full write wins, so two concurrent page
/// contexts can lose an update. The persistence medium is
/// single-writer-at-a-time; this is accepted, not worked around.
pub struct CommentStore<S> {
    storage: S,
}

impl<S: Storage> CommentStore<S> {
    pub fn new(storage: S) -> CommentStore<S> {
        CommentStore { storage }
    }

    fn read_comments(&self) -> Vec<Comment> {
        match self.storage.get(KEY_COMMENTS) {
            Ok(Some(comments)) => comments,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read comment collection, treating as empty");
                Vec::new()
            }
        }
    }

    fn read_liked(&self) -> Vec<CommentId> {
        match self.storage.get(KEY_LIKED) {
            Ok(Some(liked)) => liked,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read like markers, treating as empty");
                Vec::new()
            }
        }
    }

    /// Every comment ever saved, in storage (insertion) order.
    pub fn all_comments(&self) -> Vec<Comment> {
        self.read_comments()
    }

    /// Comments for one post, newest first. The sort is stable so comments
    /// sharing a timestamp keep their storage order.
    pub fn comments_for_post(&self, post: &PostId) -> Vec<Comment> {
        let mut comments: Vec<_> = self
            .read_comments()
            .into_iter()
            .filter(|c| c.post_id == *post)
            .collect();
        comments.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        comments
    }

    pub fn comment_by_id(&self, id: &CommentId) -> Option<Comment> {
        self.read_comments().into_iter().find(|c| c.id == *id)
    }

    /// Appends to the persisted collection.
    pub fn save_comment(&self, comment: &Comment) -> Result<(), StorageError> {
        let mut comments = self.read_comments();
        comments.push(comment.clone());
        self.storage.set(KEY_COMMENTS, &comments)
    }

    /// Replaces the record whose id matches; no-op if there is none.
    pub fn update_comment(&self, updated: &Comment) -> Result<(), StorageError> {
        let mut comments = self.read_comments();
        match comments.iter_mut().find(|c| c.id == updated.id) {
            None => Ok(()),
            Some(slot) => {
                *slot = updated.clone();
                self.storage.set(KEY_COMMENTS, &comments)
            }
        }
    }

    /// Records that this browser likes `id`. Idempotent.
    pub fn add_like(&self, id: &CommentId) -> Result<(), StorageError> {
        let mut liked = self.read_liked();
        if !liked.contains(id) {
            liked.push(id.clone());
            self.storage.set(KEY_LIKED, &liked)?;
        }
        Ok(())
    }

    /// Removes the like marker for `id`. Idempotent.
    pub fn remove_like(&self, id: &CommentId) -> Result<(), StorageError> {
        let mut liked = self.read_liked();
        let before = liked.len();
        liked.retain(|l| l != id);
        if liked.len() != before {
            self.storage.set(KEY_LIKED, &liked)?;
        }
        Ok(())
    }

    pub fn liked_comments(&self) -> HashSet<CommentId> {
        self.read_liked().into_iter().collect()
    }

    pub fn is_liked(&self, id: &CommentId) -> bool {
        self.read_liked().contains(id)
    }
}
