// Dashboard service - Use case for rendering the dashboard home page
use crate::application::template_renderer::{RenderError, TemplateRenderer};
use crate::domain::page::Page;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    renderer: Arc<dyn TemplateRenderer>,
}

impl DashboardService {
    pub fn new(renderer: Arc<dyn TemplateRenderer>) -> Self {
        Self { renderer }
    }

    pub fn render_dashboard(&self) -> Result<String, RenderError> {
        let page = Page::dashboard();
        self.renderer.render(&page.template, &page.context)
    }
}
