//! Port traits the core uses to reach infrastructure.

mod genai;

pub use genai::{GenAiPort, GenAiPortError, GenAiPortResult, UpstreamModel};
