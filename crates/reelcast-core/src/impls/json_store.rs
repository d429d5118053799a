//! JSON-file post store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::Post;
use crate::ports::{PostStore, StoreError};

/// [`PostStore`] backed by a single pretty-printed JSON file.
///
/// - A missing file loads as the empty set; only genuine I/O failure is an
///   error.
/// - Writes go to a sibling temp file first and are renamed into place, so
///   a crash mid-write never truncates the previous generation.
/// - A mutex serializes this process's load/save pairs; across processes
///   the file stays last-writer-wins.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl PostStore for JsonFileStore {
    async fn load_all(&self) -> Result<Vec<Post>, StoreError> {
        let _guard = self.lock.lock().await;
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_slice(&data)?)
    }

    async fn save_all(&self, posts: &[Post]) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let data = serde_json::to_vec_pretty(posts)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, &data).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostStatus;
    use crate::testing::sample_post;
    use ulid::Ulid;

    fn scratch_path() -> PathBuf {
        std::env::temp_dir().join(format!("reelcast-store-{}.json", Ulid::new()))
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty() {
        let store = JsonFileStore::new(scratch_path());
        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn roundtrips_posts_through_the_file() {
        let path = scratch_path();
        let store = JsonFileStore::new(&path);

        let mut posts = vec![sample_post(), sample_post()];
        posts[1].mark_failed();
        store.save_all(&posts).await.unwrap();

        // Re-open to prove the data came from disk, not a cache.
        let reopened = JsonFileStore::new(&path);
        let loaded = reopened.load_all().await.unwrap();
        assert_eq!(loaded, posts);
        assert_eq!(loaded[1].status, PostStatus::Failed);

        tokio::fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn save_replaces_the_previous_generation() {
        let path = scratch_path();
        let store = JsonFileStore::new(&path);

        store.save_all(&[sample_post(), sample_post()]).await.unwrap();
        let smaller = vec![sample_post()];
        store.save_all(&smaller).await.unwrap();

        assert_eq!(store.load_all().await.unwrap(), smaller);
        tokio::fs::remove_file(&path).await.unwrap();
    }
}
