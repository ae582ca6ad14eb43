//! Generation orchestration.
//!
//! Drives one inbound chat request through the fallback chain: resolve the
//! persona instruction, obtain the candidate order, and try candidates in
//! order until one succeeds or the chain is exhausted.

use std::sync::Arc;

use thiserror::Error;

use crate::model::ModelCandidate;
use crate::ports::{GenAiPort, GenAiPortError};
use crate::prompts::PromptCatalog;
use crate::resolver::ModelResolver;

/// One immutable generation attempt against a named candidate.
#[derive(Debug)]
pub struct GenerationRequest<'a> {
    pub system_instruction: &'a str,
    pub user_message: &'a str,
    pub target: &'a ModelCandidate,
}

impl GenerationRequest<'_> {
    /// The combined prompt body: instruction first, user message second,
    /// with an explicit separator so the model can tell role from content.
    #[must_use]
    pub fn combined_prompt(&self) -> String {
        format!(
            "System: {}\nUser: {}",
            self.system_instruction, self.user_message
        )
    }
}

/// Why a generation attempt (or the whole chain) failed.
#[derive(Debug, Error)]
pub enum GenerationFailure {
    /// A single upstream call failed.
    #[error("upstream call failed: {0}")]
    Upstream(#[from] GenAiPortError),

    /// Every candidate in the chain failed.
    #[error("all {attempts} model candidates failed")]
    Exhausted {
        /// How many candidates were attempted
        attempts: usize,
    },
}

/// Outcome of a generation attempt.
///
/// A closed sum type: the orchestrator and the HTTP layer branch on this,
/// never on raw upstream status codes.
#[derive(Debug)]
pub enum GenerationOutcome {
    /// The model produced a reply (possibly the provider's placeholder).
    Success {
        /// The generated reply text
        reply: String,
    },
    /// The attempt failed; the cause is logged, never surfaced to callers.
    Failure {
        /// What went wrong
        cause: GenerationFailure,
    },
}

/// Orchestrates persona resolution and the candidate fallback chain for one
/// chat request.
pub struct ChatService {
    catalog: PromptCatalog,
    resolver: ModelResolver,
    port: Arc<dyn GenAiPort>,
}

impl ChatService {
    #[must_use]
    pub fn new(catalog: PromptCatalog, resolver: ModelResolver, port: Arc<dyn GenAiPort>) -> Self {
        Self {
            catalog,
            resolver,
            port,
        }
    }

    /// The persona catalog this service resolves contexts against.
    #[must_use]
    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    /// Answer one chat message under the persona selected by `context`.
    pub async fn respond(&self, message: &str, context: &str) -> GenerationOutcome {
        let instruction = self.catalog.resolve(context);
        self.try_generate(instruction, message).await
    }

    /// Try candidates in the configured order until one succeeds.
    ///
    /// Each candidate gets exactly one attempt. The first success stops the
    /// chain; exhaustion collapses into one aggregated failure.
    pub async fn try_generate(
        &self,
        system_instruction: &str,
        user_message: &str,
    ) -> GenerationOutcome {
        let candidates = self.resolver.candidate_order().await;
        let attempts = candidates.len();

        for candidate in &candidates {
            let request = GenerationRequest {
                system_instruction,
                user_message,
                target: candidate,
            };

            match self.invoke_candidate(&request).await {
                outcome @ GenerationOutcome::Success { .. } => return outcome,
                GenerationOutcome::Failure { .. } => {}
            }
        }

        GenerationOutcome::Failure {
            cause: GenerationFailure::Exhausted { attempts },
        }
    }

    /// Issue one generation call and normalize the result.
    async fn invoke_candidate(&self, request: &GenerationRequest<'_>) -> GenerationOutcome {
        let model = request.target.normalized();
        match self.port.generate(&model, &request.combined_prompt()).await {
            Ok(reply) => {
                tracing::debug!(model = %request.target, "generation attempt succeeded");
                GenerationOutcome::Success { reply }
            }
            Err(cause) => {
                tracing::warn!(
                    model = %request.target,
                    error = %cause,
                    "generation attempt failed, advancing to next candidate"
                );
                GenerationOutcome::Failure {
                    cause: cause.into(),
                }
            }
        }
    }
}
