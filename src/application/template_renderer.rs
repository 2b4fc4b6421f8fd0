// Renderer trait for turning a template id and context into a document
use crate::domain::page::PageContext;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template '{template}' not found")]
    NotFound { template: String },

    #[error("failed to render template '{template}': {message}")]
    Failed { template: String, message: String },
}

pub trait TemplateRenderer: Send + Sync {
    /// Render `template` with `context`, returning the full output document
    fn render(&self, template: &str, context: &PageContext) -> Result<String, RenderError>;
}
