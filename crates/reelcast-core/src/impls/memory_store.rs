//! In-memory post store.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

use crate::domain::Post;
use crate::ports::{PostStore, StoreError};

/// In-memory [`PostStore`] for tests and embedded use.
///
/// Whole-set semantics match the durable stores: `save_all` swaps the
/// vector, and concurrent load-then-save callers are last-writer-wins.
#[derive(Debug, Default)]
pub struct InMemoryPostStore {
    posts: Mutex<Vec<Post>>,
    saves: AtomicUsize,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save_all` calls so far (for testing).
    #[cfg(test)]
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn load_all(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.lock().await.clone())
    }

    async fn save_all(&self, posts: &[Post]) -> Result<(), StoreError> {
        *self.posts.lock().await = posts.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_post;

    #[tokio::test]
    async fn starts_empty_and_roundtrips() {
        let store = InMemoryPostStore::new();
        assert!(store.load_all().await.unwrap().is_empty());

        let posts = vec![sample_post(), sample_post()];
        store.save_all(&posts).await.unwrap();

        assert_eq!(store.load_all().await.unwrap(), posts);
        assert_eq!(store.saves(), 1);
    }

    #[tokio::test]
    async fn save_all_replaces_the_whole_set() {
        let store = InMemoryPostStore::new();
        store.save_all(&[sample_post(), sample_post()]).await.unwrap();

        let smaller = vec![sample_post()];
        store.save_all(&smaller).await.unwrap();

        assert_eq!(store.load_all().await.unwrap(), smaller);
    }
}
