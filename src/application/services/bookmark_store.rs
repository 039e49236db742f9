// src/application/services/bookmark_store.rs
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::application::services::persistence::{load_list, save_list, unique_millis};
use crate::domain::bookmark::Bookmark;
use crate::domain::notification::Notification;
use crate::domain::search::{ResourceType, SearchResult};
use crate::domain::services::notifier::Notifier;
use crate::domain::services::storage::{KeyValueStorage, BOOKMARKS_KEY};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, instrument};

/// Result of [`BookmarkStore::add`]
#[derive(Debug, Clone, PartialEq)]
pub enum AddBookmarkOutcome {
    Added(Bookmark),
    AlreadyBookmarked,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BookmarkStats {
    pub total: usize,
    pub videos: usize,
    pub documentation: usize,
}

/// Deduplicated, persisted collection of bookmarked resources.
///
/// Every mutation updates the in-memory list first and then writes the full
/// list back to storage. A failed write is returned to the caller, but the
/// in-memory change stays applied.
#[derive(Debug)]
pub struct BookmarkStore {
    storage: Arc<dyn KeyValueStorage>,
    notifier: Arc<dyn Notifier>,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    #[instrument(skip_all, level = "debug")]
    pub fn load(storage: Arc<dyn KeyValueStorage>, notifier: Arc<dyn Notifier>) -> Self {
        let bookmarks = load_list(storage.as_ref(), BOOKMARKS_KEY);
        Self {
            storage,
            notifier,
            bookmarks,
        }
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn get(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    pub fn is_bookmarked(&self, link: &str, resource_type: ResourceType) -> bool {
        self.bookmarks.iter().any(|b| b.has_key(link, resource_type))
    }

    pub fn stats(&self) -> BookmarkStats {
        let videos = self
            .bookmarks
            .iter()
            .filter(|b| b.resource_type == ResourceType::Video)
            .count();
        BookmarkStats {
            total: self.bookmarks.len(),
            videos,
            documentation: self.bookmarks.len() - videos,
        }
    }

    #[instrument(skip(self, item), level = "debug",
               fields(link = %item.link(), resource_type = %item.resource_type()))]
    pub fn add(&mut self, item: &SearchResult) -> ApplicationResult<AddBookmarkOutcome> {
        let resource_type = item.resource_type();
        if self.is_bookmarked(item.link(), resource_type) {
            debug!("Already bookmarked, skipping write");
            self.notifier.notify(Notification::info("Already bookmarked!"));
            return Ok(AddBookmarkOutcome::AlreadyBookmarked);
        }

        let now = Utc::now();
        let millis = unique_millis(now, |m| {
            let candidate = Bookmark::generate_id(resource_type, m);
            self.bookmarks.iter().any(|b| b.id == candidate)
        });
        let bookmark =
            Bookmark::from_search_result(item, Bookmark::generate_id(resource_type, millis), now)?;

        self.bookmarks.push(bookmark.clone());
        self.persist()?;
        self.notifier
            .notify(Notification::success("Added to bookmarks!"));
        Ok(AddBookmarkOutcome::Added(bookmark))
    }

    /// Removes the bookmark with `id`. Returns whether an entry was removed;
    /// an unknown id leaves the list as it was.
    #[instrument(skip(self), level = "debug")]
    pub fn remove(&mut self, id: &str) -> ApplicationResult<bool> {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);
        let removed = self.bookmarks.len() != before;

        self.persist()?;
        self.notifier
            .notify(Notification::success("Removed from bookmarks!"));
        Ok(removed)
    }

    #[instrument(skip(self), level = "debug")]
    pub fn clear_all(&mut self) -> ApplicationResult<()> {
        self.bookmarks.clear();
        self.persist()?;
        self.notifier
            .notify(Notification::success("All bookmarks cleared!"));
        Ok(())
    }

    fn persist(&self) -> ApplicationResult<()> {
        save_list(self.storage.as_ref(), BOOKMARKS_KEY, &self.bookmarks).map_err(|e| {
            self.notifier
                .notify(Notification::error(format!("Could not save bookmarks: {}", e)));
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::Severity;
    use crate::domain::search::{DocumentationResult, VideoResult};
    use crate::infrastructure::storage::MemoryStorage;
    use crate::util::testing::{init_test_env, FailingStorage, RecordingNotifier};

    fn video(link: &str, title: &str) -> SearchResult {
        SearchResult::Video(VideoResult {
            id: "1".to_string(),
            title: title.to_string(),
            description: None,
            thumbnail: None,
            channel: None,
            link: link.to_string(),
        })
    }

    fn doc(link: &str) -> SearchResult {
        SearchResult::Documentation(DocumentationResult {
            id: "1".to_string(),
            title: "Docs".to_string(),
            description: None,
            site: Some("MDN Web Docs".to_string()),
            icon: None,
            link: link.to_string(),
        })
    }

    fn new_store() -> (BookmarkStore, Arc<MemoryStorage>, Arc<RecordingNotifier>) {
        let _ = init_test_env();
        let storage = Arc::new(MemoryStorage::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let store = BookmarkStore::load(storage.clone(), notifier.clone());
        (store, storage, notifier)
    }

    #[test]
    fn given_new_item_when_add_then_generated_id_and_persisted() {
        let (mut store, storage, notifier) = new_store();

        let outcome = store.add(&video("https://x.com/a", "A")).unwrap();

        let AddBookmarkOutcome::Added(bm) = outcome else {
            panic!("expected Added");
        };
        assert!(bm.id.starts_with("video_"));
        assert_eq!(store.bookmarks().len(), 1);
        assert_eq!(storage.write_count(), 1);
        assert_eq!(notifier.last().unwrap().severity, Severity::Success);
    }

    #[test]
    fn given_same_link_and_type_when_add_twice_then_single_entry_and_info() {
        let (mut store, storage, notifier) = new_store();

        store.add(&video("https://x.com/a", "A")).unwrap();
        let outcome = store.add(&video("https://x.com/a", "A again")).unwrap();

        assert_eq!(outcome, AddBookmarkOutcome::AlreadyBookmarked);
        assert_eq!(store.bookmarks().len(), 1);
        assert_eq!(storage.write_count(), 1, "duplicate must not write");
        let last = notifier.last().unwrap();
        assert_eq!(last.severity, Severity::Info);
        assert_eq!(last.message, "Already bookmarked!");
    }

    #[test]
    fn given_same_link_different_type_when_add_then_both_kept() {
        let (mut store, _, _) = new_store();

        store.add(&video("https://x.com/a", "A")).unwrap();
        store.add(&doc("https://x.com/a")).unwrap();

        assert_eq!(store.bookmarks().len(), 2);
        assert!(store.is_bookmarked("https://x.com/a", ResourceType::Documentation));
    }

    #[test]
    fn given_rapid_adds_when_ids_generated_then_unique() {
        let (mut store, _, _) = new_store();

        for i in 0..5 {
            store.add(&video(&format!("https://x.com/{}", i), "v")).unwrap();
        }

        let mut ids: Vec<_> = store.bookmarks().iter().map(|b| b.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn given_unknown_id_when_remove_then_list_unchanged() {
        let (mut store, _, _) = new_store();
        store.add(&video("https://x.com/a", "A")).unwrap();
        store.add(&video("https://x.com/b", "B")).unwrap();
        let before = store.bookmarks().to_vec();

        let removed = store.remove("video_0").unwrap();

        assert!(!removed);
        assert_eq!(store.bookmarks(), before.as_slice());
    }

    #[test]
    fn given_bookmarks_when_remove_middle_then_order_preserved() {
        let (mut store, _, _) = new_store();
        for link in ["https://x.com/a", "https://x.com/b", "https://x.com/c"] {
            store.add(&video(link, "t")).unwrap();
        }
        let middle = store.bookmarks()[1].id.clone();

        assert!(store.remove(&middle).unwrap());

        let links: Vec<_> = store.bookmarks().iter().map(|b| b.link.as_str()).collect();
        assert_eq!(links, vec!["https://x.com/a", "https://x.com/c"]);
    }

    #[test]
    fn given_bookmarks_when_clear_all_then_empty_list_persisted() {
        let (mut store, storage, _) = new_store();
        store.add(&video("https://x.com/a", "A")).unwrap();

        store.clear_all().unwrap();

        assert!(store.bookmarks().is_empty());
        assert_eq!(storage.get(BOOKMARKS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn given_persisted_bookmarks_when_reload_then_field_for_field_equal() {
        let (mut store, storage, notifier) = new_store();
        store.add(&video("https://x.com/a", "A")).unwrap();
        store.add(&doc("https://developer.mozilla.org/a")).unwrap();

        let reloaded = BookmarkStore::load(storage, notifier);

        assert_eq!(reloaded.bookmarks(), store.bookmarks());
    }

    #[test]
    fn given_corrupt_storage_when_load_then_empty() {
        let _ = init_test_env();
        let storage = Arc::new(MemoryStorage::new());
        storage.set(BOOKMARKS_KEY, "[{\"id\": 1").unwrap();

        let store = BookmarkStore::load(storage, Arc::new(RecordingNotifier::new()));
        assert!(store.bookmarks().is_empty());
    }

    #[test]
    fn given_failing_storage_when_add_then_memory_updated_and_error_reported() {
        let _ = init_test_env();
        let notifier = Arc::new(RecordingNotifier::new());
        let mut store = BookmarkStore::load(Arc::new(FailingStorage), notifier.clone());

        let result = store.add(&video("https://x.com/a", "A"));

        assert!(result.unwrap_err().is_storage());
        assert_eq!(store.bookmarks().len(), 1);
        assert_eq!(notifier.last().unwrap().severity, Severity::Error);
    }

    #[test]
    fn given_mixed_bookmarks_when_stats_then_counts_by_type() {
        let (mut store, _, _) = new_store();
        store.add(&video("https://x.com/a", "A")).unwrap();
        store.add(&video("https://x.com/b", "B")).unwrap();
        store.add(&doc("https://x.com/c")).unwrap();

        assert_eq!(
            store.stats(),
            BookmarkStats {
                total: 3,
                videos: 2,
                documentation: 1
            }
        );
    }
}
