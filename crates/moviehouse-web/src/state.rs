//! Shared application state type.
//!
//! Defines the `AppState` type used across all handlers and routers.

use crate::bootstrap::WebContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// This is an Arc-wrapped `WebContext` containing the repositories and
/// the renderer the handlers need.
pub type AppState = Arc<WebContext>;
