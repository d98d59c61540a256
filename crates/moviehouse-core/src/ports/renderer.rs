//! Renderer trait definition.
//!
//! The rendering collaborator maps a template name plus an argument
//! mapping to an HTML string. The engine behind it is an adapter detail.

use thiserror::Error;

/// Errors from the rendering collaborator.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The named template is not registered.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// The engine failed while rendering.
    #[error("Render error: {0}")]
    Render(String),
}

/// Template-to-HTML rendering collaborator.
///
/// `args` is a JSON object mapping the names the template uses to
/// entities, sequences, or strings. Using `serde_json::Value` keeps
/// engine types out of this signature.
pub trait Renderer: Send + Sync {
    /// Render the named template with the given argument mapping.
    fn render(&self, template: &str, args: &serde_json::Value) -> Result<String, RenderError>;
}
