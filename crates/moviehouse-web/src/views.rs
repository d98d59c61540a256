//! Tera-backed implementation of the `Renderer` port.
//!
//! Templates are embedded at compile time so the binary has no runtime
//! template directory to resolve.

use moviehouse_core::{RenderError, Renderer};
use tera::Tera;

/// Template name for the movie/comment list page.
pub const LIST_TEMPLATE: &str = "list.html";
/// Template name for the error page.
pub const ERROR_TEMPLATE: &str = "error.html";
/// Template name for the empty new-movie form.
pub const NEW_MOVIE_FORM_TEMPLATE: &str = "new_movie_form.html";
/// Template name for the pre-populated edit form.
pub const EDIT_MOVIE_FORM_TEMPLATE: &str = "edit_movie_form.html";

/// `Renderer` implementation backed by an embedded tera template set.
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Build the renderer with all embedded templates registered.
    ///
    /// # Errors
    ///
    /// Returns an error if any embedded template fails to parse, which
    /// is a build-content defect rather than a runtime condition.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            (LIST_TEMPLATE, include_str!("../templates/list.html")),
            (ERROR_TEMPLATE, include_str!("../templates/error.html")),
            (
                NEW_MOVIE_FORM_TEMPLATE,
                include_str!("../templates/new_movie_form.html"),
            ),
            (
                EDIT_MOVIE_FORM_TEMPLATE,
                include_str!("../templates/edit_movie_form.html"),
            ),
        ])
        .map_err(|e| RenderError::Render(e.to_string()))?;

        Ok(Self { tera })
    }
}

impl Renderer for TeraRenderer {
    fn render(&self, template: &str, args: &serde_json::Value) -> Result<String, RenderError> {
        if !self.tera.get_template_names().any(|name| name == template) {
            return Err(RenderError::TemplateNotFound(template.to_string()));
        }

        let context =
            tera::Context::from_value(args.clone()).map_err(|e| RenderError::Render(e.to_string()))?;

        self.tera
            .render(template, &context)
            .map_err(|e| RenderError::Render(e.to_string()))
    }
}
