//! Data-fetching cache shared through context.
//!
//! DESIGN
//! ======
//! `QueryClient` is a cheaply cloneable handle over a keyed JSON cache. The
//! app root constructs exactly one with default options and installs it as
//! the outermost context layer. Nothing populates it at startup.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

const DEFAULT_GC_TIME_SECS: u64 = 300;
const DEFAULT_RETRY: u32 = 3;

/// Default options for queries run against the cache.
///
/// The handle only stores and reports these values. Nothing in this crate
/// fetches, so no code path consults them; they exist for callers that build
/// queries on top of the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryClientConfig {
    /// Age after which cached data is considered stale.
    pub stale_time: Duration,
    /// How long unused entries are retained.
    pub gc_time: Duration,
    /// Retry attempts for a failed fetch.
    pub retry: u32,
    pub refetch_on_window_focus: bool,
}

impl Default for QueryClientConfig {
    fn default() -> Self {
        Self {
            stale_time: Duration::ZERO,
            gc_time: Duration::from_secs(DEFAULT_GC_TIME_SECS),
            retry: DEFAULT_RETRY,
            refetch_on_window_focus: true,
        }
    }
}

/// Handle to the query cache. Clones share the same entries.
#[derive(Clone, Default)]
pub struct QueryClient {
    config: QueryClientConfig,
    entries: Arc<Mutex<HashMap<String, serde_json::Value>>>,
}

impl QueryClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: QueryClientConfig) -> Self {
        Self { config, entries: Arc::default() }
    }

    #[must_use]
    pub fn config(&self) -> QueryClientConfig {
        self.config
    }

    /// Store `data` under `key`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns an error if `data` cannot be serialized to JSON.
    pub fn set_query_data<T: Serialize>(&self, key: &str, data: &T) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(data)?;
        self.lock().insert(key.to_owned(), value);
        Ok(())
    }

    /// Read the entry under `key` as `T`.
    ///
    /// Returns `None` if nothing is cached or the entry has a different shape.
    pub fn get_query_data<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.lock().get(key).cloned()?;
        serde_json::from_value(value).ok()
    }

    /// Drop the entry under `key`. Returns whether one existed.
    pub fn invalidate(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, serde_json::Value>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Install `client` as context for the current owner.
pub fn provide_query_client(client: QueryClient) {
    provide_context(client);
}

/// Fetch the `QueryClient` installed by the nearest `QueryClientProvider`.
///
/// # Panics
///
/// Panics if called outside a `QueryClientProvider`.
pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}

/// Cache-context provider.
#[component]
pub fn QueryClientProvider(client: QueryClient, children: Children) -> impl IntoView {
    provide_query_client(client);
    children()
}
