//! Server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::sync::Arc;

use anyhow::Result;
use promptgate_core::ports::GenAiPort;
use promptgate_core::{ChatService, ModelCandidate, ModelResolver, ModelSource, OriginPolicy, PromptCatalog};
use promptgate_genai::{DefaultGenAiClient, GenAiClientConfig};

/// Port the gateway listens on when none is configured.
pub const DEFAULT_PORT: u16 = 10000;

// Origin policy defaults for the hosted front-end.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://www.finovatools.com",
    "https://finovatools.com",
    "http://localhost:5500",
    "http://127.0.0.1:5500",
];
const DEFAULT_TRUSTED_SUFFIXES: &[&str] = &["finovatools.com"];
const DEFAULT_DEV_PREFIXES: &[&str] = &["http://localhost:", "http://127.0.0.1:"];

/// Server configuration for the web adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Upstream API credential. Never logged.
    pub api_key: String,
    /// Fixed candidate list; `None` selects runtime discovery.
    pub static_models: Option<Vec<String>>,
    /// Exact origins admitted by the CORS layer.
    pub allowed_origins: Vec<String>,
    /// Domain suffixes whose subdomains are admitted.
    pub trusted_suffixes: Vec<String>,
    /// Local-development origin prefixes.
    pub dev_prefixes: Vec<String>,
}

impl ServerConfig {
    /// Create config with default origin policy and discovery mode.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: String::new(),
            static_models: None,
            allowed_origins: owned(DEFAULT_ALLOWED_ORIGINS),
            trusted_suffixes: owned(DEFAULT_TRUSTED_SUFFIXES),
            dev_prefixes: owned(DEFAULT_DEV_PREFIXES),
        }
    }

    /// Read configuration from the environment, falling back to defaults.
    ///
    /// `PROMPTGATE_STATIC_MODELS` (comma-separated) selects static mode;
    /// leaving it unset selects discovery mode.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::with_defaults();
        Self {
            port: std::env::var("PROMPTGATE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            api_key: std::env::var("GEMINI_API_KEY")
                .map(|k| k.trim().to_string())
                .unwrap_or_default(),
            static_models: std::env::var("PROMPTGATE_STATIC_MODELS")
                .ok()
                .as_deref()
                .and_then(parse_csv),
            allowed_origins: csv_or("PROMPTGATE_ALLOWED_ORIGINS", defaults.allowed_origins),
            trusted_suffixes: csv_or("PROMPTGATE_TRUSTED_SUFFIXES", defaults.trusted_suffixes),
            dev_prefixes: csv_or("PROMPTGATE_DEV_PREFIXES", defaults.dev_prefixes),
        }
    }

    fn origin_policy(&self) -> OriginPolicy {
        OriginPolicy::new(
            self.allowed_origins.clone(),
            self.trusted_suffixes.clone(),
            self.dev_prefixes.clone(),
        )
    }

    fn model_source(&self) -> ModelSource {
        match &self.static_models {
            Some(list) => ModelSource::Static(list.iter().map(ModelCandidate::new).collect()),
            None => ModelSource::Discovery,
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Split a comma-separated value, dropping empty entries.
///
/// Returns `None` when nothing remains, so a blank variable behaves like an
/// unset one.
fn parse_csv(value: &str) -> Option<Vec<String>> {
    let entries: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(ToString::to_string)
        .collect();
    if entries.is_empty() { None } else { Some(entries) }
}

fn csv_or(name: &str, fallback: Vec<String>) -> Vec<String> {
    std::env::var(name)
        .ok()
        .as_deref()
        .and_then(parse_csv)
        .unwrap_or(fallback)
}

/// Application context for the web adapter.
///
/// Holds the initialized services the router and handlers need.
pub struct GatewayContext {
    /// The chat orchestration service.
    pub chat: ChatService,
    /// The origin admission policy enforced at the CORS layer.
    pub policy: OriginPolicy,
}

/// Bootstrap the gateway with the production upstream client.
#[must_use]
pub fn bootstrap(config: &ServerConfig) -> GatewayContext {
    if config.api_key.is_empty() {
        tracing::warn!("GEMINI_API_KEY is not set; upstream calls will be rejected");
    }

    let client = DefaultGenAiClient::new(
        &GenAiClientConfig::new().with_api_key(config.api_key.clone()),
    );
    bootstrap_with_port(config, Arc::new(client))
}

/// Bootstrap the gateway around an injected upstream port.
///
/// Tests use this to substitute a scripted port.
#[must_use]
pub fn bootstrap_with_port(config: &ServerConfig, port: Arc<dyn GenAiPort>) -> GatewayContext {
    let source = config.model_source();
    tracing::info!(
        mode = match source {
            ModelSource::Static(_) => "static",
            ModelSource::Discovery => "discovery",
        },
        "wiring chat gateway"
    );

    let resolver = ModelResolver::new(source, port.clone());
    let chat = ChatService::new(PromptCatalog::with_defaults(), resolver, port);

    GatewayContext {
        chat,
        policy: config.origin_policy(),
    }
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config);
    let app = crate::routes::create_router(ctx);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("promptgate listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
