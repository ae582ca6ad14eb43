//! Model discovery and candidate ordering.
//!
//! The upstream provider's set of valid model identifiers changes
//! independently of this service's deploys. The resolver pays the discovery
//! cost once per process and caches the winner; a failed discovery degrades
//! to a static default that stands until restart.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::model::ModelCandidate;
use crate::ports::{GenAiPort, UpstreamModel};

/// Safe identifier used when discovery fails or returns nothing usable.
pub const DEFAULT_MODEL: &str = "gemini-pro";

// Identifier fragments marking usable tiers, fastest first.
const TIER_PREFERENCE: [&str; 2] = ["flash", "pro"];

/// Process-wide cache holding at most one resolved candidate.
///
/// Owned and injectable rather than an ambient singleton, so tests can
/// substitute a fresh or pre-populated cache and assert discovery counts.
/// Written at most once; duplicate concurrent discoveries race to an
/// equivalent value, so no further coordination is needed.
#[derive(Debug, Default)]
pub struct ModelCache {
    cell: OnceCell<ModelCandidate>,
}

impl ModelCache {
    /// An empty cache; the first `resolve_preferred` call fills it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache pre-populated with a resolved candidate.
    #[must_use]
    pub fn preset(candidate: ModelCandidate) -> Self {
        Self {
            cell: OnceCell::new_with(Some(candidate)),
        }
    }

    /// The cached candidate, if resolution has happened.
    #[must_use]
    pub fn get(&self) -> Option<&ModelCandidate> {
        self.cell.get()
    }
}

/// Where the fallback chain's candidates come from.
///
/// A deployment-mode choice: a fixed ordered list, or runtime discovery
/// against the provider's model listing.
#[derive(Debug, Clone)]
pub enum ModelSource {
    /// Try exactly these candidates, in order.
    Static(Vec<ModelCandidate>),
    /// Discover the preferred candidate at runtime.
    Discovery,
}

/// Discovers which upstream model to prefer and supplies the ordered
/// candidate list for the fallback chain.
pub struct ModelResolver {
    source: ModelSource,
    cache: ModelCache,
    port: Arc<dyn GenAiPort>,
}

impl ModelResolver {
    /// Create a resolver with a fresh cache.
    #[must_use]
    pub fn new(source: ModelSource, port: Arc<dyn GenAiPort>) -> Self {
        Self::with_cache(source, port, ModelCache::new())
    }

    /// Create a resolver with an injected cache.
    #[must_use]
    pub fn with_cache(source: ModelSource, port: Arc<dyn GenAiPort>, cache: ModelCache) -> Self {
        Self {
            source,
            cache,
            port,
        }
    }

    /// Best-effort preferred candidate, cached for the process lifetime.
    ///
    /// The first call attempts upstream discovery; transport failure or an
    /// empty listing caches the static default instead. Either way the
    /// stored value is served on every subsequent call — discovery is not
    /// retried within the process lifetime.
    pub async fn resolve_preferred(&self) -> ModelCandidate {
        self.cache
            .cell
            .get_or_init(|| async { self.discover().await })
            .await
            .clone()
    }

    /// The ordered candidate list the orchestrator iterates.
    ///
    /// Static mode returns the configured list untouched. Discovery mode
    /// puts the discovered candidate first and appends the static default
    /// when it differs, so one fallback step remains available.
    pub async fn candidate_order(&self) -> Vec<ModelCandidate> {
        match &self.source {
            ModelSource::Static(list) => list.clone(),
            ModelSource::Discovery => {
                let preferred = self.resolve_preferred().await;
                let default = ModelCandidate::new(DEFAULT_MODEL);
                if preferred.normalized() == default.normalized() {
                    vec![preferred]
                } else {
                    vec![preferred, default]
                }
            }
        }
    }

    async fn discover(&self) -> ModelCandidate {
        match self.port.list_models().await {
            Ok(models) => match pick_preferred(&models) {
                Some(name) => {
                    tracing::info!(model = %name, "discovered usable upstream model");
                    ModelCandidate::new(name)
                }
                None => {
                    tracing::warn!(
                        default = DEFAULT_MODEL,
                        "model listing contained no usable entry, caching default"
                    );
                    ModelCandidate::new(DEFAULT_MODEL)
                }
            },
            Err(error) => {
                tracing::warn!(
                    %error,
                    default = DEFAULT_MODEL,
                    "model discovery failed, caching default"
                );
                ModelCandidate::new(DEFAULT_MODEL)
            }
        }
    }
}

/// First generation-capable model by tier preference, fast tier first.
fn pick_preferred(models: &[UpstreamModel]) -> Option<&str> {
    TIER_PREFERENCE.iter().find_map(|tier| {
        models
            .iter()
            .find(|m| m.supports_generation() && m.name.contains(tier))
            .map(|m| m.name.as_str())
    })
}
