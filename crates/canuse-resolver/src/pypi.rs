//! Metadata provider backed by the package index's JSON API.
//!
//! One `GET {index}/{name}/json` answers both provider questions: the
//! `requires_dist` list yields the runtime dependencies and the trove
//! classifiers yield portability. Responses are memoized for the lifetime of
//! the provider, so the two questions about the same package cost one
//! request.

use crate::{just_name, MetadataProvider, Result};
use async_trait::async_trait;
use canuse_graph::ProjectId;
use dashmap::DashMap;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_INDEX_URL: &str = "https://pypi.org/pypi";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const RETRY_ATTEMPTS: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Classifier prefix marking a package as supporting the target platform.
///
/// Matches the bare `:: 3` classifier as well as the versioned and
/// `:: 3 :: Only` forms.
const PORTABLE_CLASSIFIER: &str = "Programming Language :: Python :: 3";

/// [`MetadataProvider`] over the index JSON API, with per-run memoization.
///
/// Transient transport failures are retried a fixed number of times with a
/// linear backoff; a lookup that exhausts its retries is reported as "not
/// found", which is the only failure signal the resolver understands.
pub struct PyPiProvider {
    client: reqwest::Client,
    index_url: String,
    cache: DashMap<ProjectId, Option<Arc<PackageMetadata>>>,
}

#[derive(Debug)]
struct PackageMetadata {
    dependencies: Vec<ProjectId>,
    portable: bool,
}

impl PyPiProvider {
    /// Provider against the default public index.
    pub fn new() -> Result<Self> {
        Self::with_index_url(DEFAULT_INDEX_URL)
    }

    /// Provider against a custom index base URL (mirrors, test servers).
    pub fn with_index_url(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("canuse/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let mut index_url = url.into();
        while index_url.ends_with('/') {
            index_url.pop();
        }
        Ok(Self {
            client,
            index_url,
            cache: DashMap::new(),
        })
    }

    async fn metadata(&self, id: &ProjectId) -> Option<Arc<PackageMetadata>> {
        if let Some(hit) = self.cache.get(id) {
            return hit.value().clone();
        }
        let fetched = self.fetch(id).await.map(Arc::new);
        // Two concurrent misses may both fetch; the second insert is a no-op
        // semantically since responses for one name agree within a run.
        self.cache.insert(id.clone(), fetched.clone());
        fetched
    }

    async fn fetch(&self, id: &ProjectId) -> Option<PackageMetadata> {
        let url = format!("{}/{}/json", self.index_url, id);
        for attempt in 1..=RETRY_ATTEMPTS {
            match self.client.get(&url).send().await {
                Ok(response) if response.status() == reqwest::StatusCode::NOT_FOUND => {
                    debug!(package = %id, "not known to the index");
                    return None;
                }
                Ok(response) => match response.error_for_status() {
                    Ok(response) => match response.json::<IndexResponse>().await {
                        Ok(payload) => return Some(payload.into_metadata()),
                        Err(err) => {
                            warn!(package = %id, attempt, error = %err, "malformed index response")
                        }
                    },
                    Err(err) => {
                        warn!(package = %id, attempt, error = %err, "index returned error status")
                    }
                },
                Err(err) => warn!(package = %id, attempt, error = %err, "index request failed"),
            }
            if attempt < RETRY_ATTEMPTS {
                tokio::time::sleep(RETRY_BACKOFF * attempt).await;
            }
        }
        warn!(package = %id, "lookup exhausted retries; treating as not found");
        None
    }
}

#[async_trait]
impl MetadataProvider for PyPiProvider {
    async fn lookup_dependencies(&self, id: &ProjectId) -> Option<Vec<ProjectId>> {
        self.metadata(id).await.map(|meta| meta.dependencies.clone())
    }

    async fn is_portable(&self, id: &ProjectId) -> bool {
        self.metadata(id).await.map_or(true, |meta| meta.portable)
    }
}

#[derive(Debug, Deserialize)]
struct IndexResponse {
    info: IndexInfo,
}

#[derive(Debug, Default, Deserialize)]
struct IndexInfo {
    #[serde(default)]
    requires_dist: Option<Vec<String>>,
    #[serde(default)]
    classifiers: Vec<String>,
}

impl IndexResponse {
    fn into_metadata(self) -> PackageMetadata {
        let mut dependencies = Vec::new();
        let mut seen = FxHashSet::default();
        for raw in self.info.requires_dist.unwrap_or_default() {
            // Entries gated behind an extras marker are optional, not
            // runtime, dependencies.
            if required_only_for_extra(&raw) {
                continue;
            }
            if let Some(dep) = just_name(&raw) {
                if seen.insert(dep.clone()) {
                    dependencies.push(dep);
                }
            }
        }
        let portable = self
            .info
            .classifiers
            .iter()
            .any(|classifier| classifier.starts_with(PORTABLE_CLASSIFIER));
        PackageMetadata {
            dependencies,
            portable,
        }
    }
}

fn required_only_for_extra(spec: &str) -> bool {
    spec.split_once(';')
        .is_some_and(|(_, marker)| marker.contains("extra"))
}
