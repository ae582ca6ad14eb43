//! Shared application state for the web adapter.

use std::sync::Arc;

use crate::bootstrap::GatewayContext;

/// Shared application state handed to every handler.
pub type AppState = Arc<GatewayContext>;
