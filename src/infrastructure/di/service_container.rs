// src/infrastructure/di/service_container.rs
use crate::application::{BookmarkStore, DailyGoalStore, SearchService, TaskStore};
use crate::config::{NotificationTarget, Settings};
use crate::domain::services::notifier::Notifier;
use crate::domain::services::search_source::SearchSource;
use crate::domain::services::storage::KeyValueStorage;
use crate::infrastructure::notifier::{LogNotifier, TerminalNotifier};
use crate::infrastructure::search::{DocumentationSource, YoutubeSource};
use crate::infrastructure::storage::{FileStorage, MemoryStorage};
use std::sync::Arc;
use tracing::debug;

/// Production service container - single source of truth for service creation
pub struct ServiceContainer {
    pub storage: Arc<dyn KeyValueStorage>,
    pub notifier: Arc<dyn Notifier>,
    pub bookmark_store: BookmarkStore,
    pub task_store: TaskStore,
    pub daily_goal: DailyGoalStore,
    pub search_service: Arc<SearchService>,
}

impl ServiceContainer {
    /// Create all services with explicit dependency injection
    pub fn new(config: &Settings, color: bool) -> Self {
        let storage = Self::create_storage(config);
        let notifier = Self::create_notifier(config, color);
        Self::with_parts(config, storage, notifier)
    }

    /// Same wiring with caller-supplied storage and notifier (used by tests)
    pub fn with_parts(
        config: &Settings,
        storage: Arc<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let bookmark_store = BookmarkStore::load(storage.clone(), notifier.clone());
        let task_store = TaskStore::load(storage.clone(), notifier.clone());
        let daily_goal = DailyGoalStore::new(storage.clone());
        let search_service = Arc::new(Self::create_search_service(config));

        Self {
            storage,
            notifier,
            bookmark_store,
            task_store,
            daily_goal,
            search_service,
        }
    }

    /// Container backed by memory only; nothing survives the process
    pub fn ephemeral(config: &Settings, color: bool) -> Self {
        Self::with_parts(
            config,
            Arc::new(MemoryStorage::new()),
            Self::create_notifier(config, color),
        )
    }

    fn create_storage(config: &Settings) -> Arc<dyn KeyValueStorage> {
        let dir = config.storage_path();
        debug!("Using storage directory {}", dir.display());
        Arc::new(FileStorage::new(dir))
    }

    fn create_notifier(config: &Settings, color: bool) -> Arc<dyn Notifier> {
        match config.notifications {
            NotificationTarget::Terminal => Arc::new(TerminalNotifier::new(color)),
            NotificationTarget::Log => Arc::new(LogNotifier),
        }
    }

    fn create_search_service(config: &Settings) -> SearchService {
        let videos: Arc<dyn SearchSource> = Arc::new(YoutubeSource::new(config.youtube.clone()));
        let docs: Arc<dyn SearchSource> = Arc::new(DocumentationSource::new());
        SearchService::new(videos, docs)
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("storage", &self.storage)
            .field("notifier", &"Arc<dyn Notifier>")
            .field("bookmarks", &self.bookmark_store.bookmarks().len())
            .field("tasks", &self.task_store.tasks().len())
            .field("search_service", &"Arc<SearchService>")
            .finish()
    }
}
