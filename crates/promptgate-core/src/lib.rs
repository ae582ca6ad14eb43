#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod chat;
pub mod model;
pub mod origin;
pub mod ports;
pub mod prompts;
pub mod resolver;

// Re-export commonly used types for convenience
pub use chat::{ChatService, GenerationFailure, GenerationOutcome, GenerationRequest};
pub use model::ModelCandidate;
pub use origin::OriginPolicy;
pub use ports::{GenAiPort, GenAiPortError, GenAiPortResult, UpstreamModel};
pub use prompts::PromptCatalog;
pub use resolver::{DEFAULT_MODEL, ModelCache, ModelResolver, ModelSource};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
