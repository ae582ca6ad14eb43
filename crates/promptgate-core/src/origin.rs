//! Origin admission policy.
//!
//! Decides whether an inbound request's declared `Origin` is trusted enough
//! to serve. The policy is a single composable predicate over three sets
//! (exact allow-list, trusted domain suffixes, local-development prefixes)
//! so that tightening or loosening admission is a configuration change, not
//! a rewrite.

/// Admission policy for inbound origins.
///
/// Admission is a pure function of the origin string and the configured
/// sets; it keeps no state across calls. An absent origin is always admitted
/// to cover non-browser callers (health checks, curl, server-to-server).
#[derive(Debug, Clone, Default)]
pub struct OriginPolicy {
    allowed_origins: Vec<String>,
    trusted_suffixes: Vec<String>,
    dev_prefixes: Vec<String>,
}

impl OriginPolicy {
    /// Create a policy from its three rule sets.
    #[must_use]
    pub fn new(
        allowed_origins: Vec<String>,
        trusted_suffixes: Vec<String>,
        dev_prefixes: Vec<String>,
    ) -> Self {
        Self {
            allowed_origins,
            trusted_suffixes,
            dev_prefixes,
        }
    }

    /// Decide whether the declared origin is admissible.
    ///
    /// Every decision is logged with the origin value and outcome; logging
    /// never blocks the decision itself.
    pub fn admits(&self, origin: Option<&str>) -> bool {
        let Some(origin) = origin else {
            tracing::debug!("request without origin header admitted");
            return true;
        };

        let admitted = self.matches_exact(origin)
            || self.matches_suffix(origin)
            || self.matches_prefix(origin);

        if admitted {
            tracing::debug!(origin, "origin admitted");
        } else {
            tracing::info!(origin, "origin rejected");
        }

        admitted
    }

    fn matches_exact(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }

    fn matches_suffix(&self, origin: &str) -> bool {
        let host = host_of(origin);
        self.trusted_suffixes.iter().any(|suffix| {
            let suffix = suffix.trim_start_matches('.');
            host == suffix || host.ends_with(&format!(".{suffix}"))
        })
    }

    fn matches_prefix(&self, origin: &str) -> bool {
        self.dev_prefixes.iter().any(|p| origin.starts_with(p))
    }
}

/// Extract the host component from an origin value like `https://a.b:443`.
fn host_of(origin: &str) -> &str {
    let rest = origin.split_once("://").map_or(origin, |(_, rest)| rest);
    rest.split(|c| c == ':' || c == '/').next().unwrap_or(rest)
}
