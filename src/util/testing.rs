// src/util/testing.rs
//! Shared test fixtures: logging setup, environment guard and doubles for
//! storage, notifications and search sources.

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};

use async_trait::async_trait;
use tokio::sync::Notify;
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::notification::Notification;
use crate::domain::search::SearchResult;
use crate::domain::services::notifier::Notifier;
use crate::domain::services::search_source::SearchSource;
use crate::domain::services::storage::KeyValueStorage;

#[derive(Debug)]
pub struct TestEnv {
    pub initialized: bool,
}

static TEST_ENV: OnceLock<TestEnv> = OnceLock::new();

/// Initializes the global test environment (logging) exactly once.
pub fn init_test_env() -> &'static TestEnv {
    TEST_ENV.get_or_init(|| {
        setup_test_logging();
        info!("Test environment initialized");
        TestEnv { initialized: true }
    })
}

/// Logging setup only runs once; subsequent calls do nothing if `tracing` is already set.
fn setup_test_logging() {
    debug!("Attempting logger init from testing.rs");
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    let noisy_modules = ["reqwest", "hyper_util", "mio", "want"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

const GUARDED_VARS: [&str; 3] = [
    "LEARNIFY_STORAGE_DIR",
    "LEARNIFY_YOUTUBE_API_KEY",
    "LEARNIFY_YOUTUBE_MAX_RESULTS",
];

/// Restores the learnify environment variables when dropped
#[derive(Debug, Clone)]
pub struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            saved: GUARDED_VARS
                .iter()
                .map(|name| (*name, env::var(name).ok()))
                .collect(),
        }
    }
}

impl Drop for EnvGuard {
    #[instrument(level = "trace")]
    fn drop(&mut self) {
        for (name, value) in &self.saved {
            match value {
                Some(val) => env::set_var(name, val),
                None => env::remove_var(name),
            }
        }
    }
}

/// Notifier that keeps every notification for later inspection
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<Notification> {
        self.seen.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.all().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notification);
        }
    }
}

/// Storage whose writes always fail, e.g. a full disk
#[derive(Debug, Default)]
pub struct FailingStorage;

impl KeyValueStorage for FailingStorage {
    fn get(&self, _key: &str) -> DomainResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> DomainResult<()> {
        Err(DomainError::Storage(format!("quota exceeded writing {}", key)))
    }
}

/// Search source returning fixed results, or always failing
#[derive(Debug)]
pub struct StaticSource {
    results: Option<Vec<SearchResult>>,
}

impl StaticSource {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results: Some(results),
        }
    }

    pub fn failing() -> Self {
        Self { results: None }
    }
}

#[async_trait]
impl SearchSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn search(&self, _query: &str) -> DomainResult<Vec<SearchResult>> {
        self.results
            .clone()
            .ok_or_else(|| DomainError::SearchFailed("static source offline".to_string()))
    }
}

/// Search source whose first call blocks until [`GatedSource::release`]
#[derive(Debug)]
pub struct GatedSource {
    results: Vec<SearchResult>,
    calls: AtomicUsize,
    gate: Notify,
}

impl GatedSource {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            calls: AtomicUsize::new(0),
            gate: Notify::new(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl SearchSource for GatedSource {
    fn name(&self) -> &str {
        "gated"
    }

    async fn search(&self, _query: &str) -> DomainResult<Vec<SearchResult>> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.gate.notified().await;
        }
        Ok(self.results.clone())
    }
}
