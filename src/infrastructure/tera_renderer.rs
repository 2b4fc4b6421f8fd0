// Tera-backed implementation of the template renderer
use crate::application::template_renderer::{RenderError, TemplateRenderer};
use crate::domain::page::PageContext;
use anyhow::Context as _;
use std::error::Error as _;
use tera::{Context, ErrorKind, Tera};

pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Load every `*.html` below `dir`. Template ids are paths relative to `dir`.
    pub fn from_dir(dir: &str) -> anyhow::Result<Self> {
        let glob = format!("{}/**/*.html", dir.trim_end_matches('/'));
        let tera = Tera::new(&glob).with_context(|| format!("loading templates from {glob}"))?;
        tracing::info!(
            templates = tera.get_template_names().count(),
            dir,
            "templates loaded"
        );
        Ok(Self { tera })
    }

    #[cfg(test)]
    pub fn from_raw<'a>(
        templates: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> anyhow::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)
            .context("parsing in-memory templates")?;
        Ok(Self { tera })
    }
}

impl TemplateRenderer for TeraRenderer {
    fn render(&self, template: &str, context: &PageContext) -> Result<String, RenderError> {
        let mut ctx = Context::new();
        for (key, value) in context {
            ctx.insert(key.as_str(), value);
        }

        self.tera.render(template, &ctx).map_err(|e| match e.kind {
            ErrorKind::TemplateNotFound(_) => RenderError::NotFound {
                template: template.to_string(),
            },
            _ => RenderError::Failed {
                template: template.to_string(),
                message: describe(&e),
            },
        })
    }
}

/// Tera nests the useful detail in the source chain
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::Page;

    const BASE: &str = "<html><head><title>{% block title %}{% endblock %}</title></head>\
        <body>{% block body %}{% endblock %}</body></html>";
    const DASHBOARD: &str = "{% extends \"base.html\" %}\
        {% block title %}Hello {{ controller_name }}!{% endblock %}\
        {% block body %}<h1>Hello {{ controller_name }}!</h1>{% endblock %}";

    fn renderer() -> TeraRenderer {
        TeraRenderer::from_raw([("base.html", BASE), ("dashboard/dashboard.html", DASHBOARD)])
            .unwrap()
    }

    #[test]
    fn test_renders_dashboard_through_base_layout() {
        let page = Page::dashboard();
        let html = renderer().render(&page.template, &page.context).unwrap();
        assert!(html.starts_with("<html>"));
        assert!(html.contains("<title>Hello DashHomeController!</title>"));
        assert!(html.contains("<h1>Hello DashHomeController!</h1>"));
    }

    #[test]
    fn test_unknown_template_is_not_found() {
        let err = renderer()
            .render("missing.html", &PageContext::new())
            .unwrap_err();
        assert!(matches!(err, RenderError::NotFound { ref template } if template == "missing.html"));
    }

    #[test]
    fn test_undefined_variable_fails() {
        let err = renderer()
            .render("dashboard/dashboard.html", &PageContext::new())
            .unwrap_err();
        match err {
            RenderError::Failed { template, message } => {
                assert_eq!(template, "dashboard/dashboard.html");
                assert!(message.contains("controller_name"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_html_values_are_escaped() {
        let page = Page::dashboard().with("controller_name", "<script>");
        let html = renderer().render(&page.template, &page.context).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_loads_project_templates_from_disk() {
        let dir = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");
        let renderer = TeraRenderer::from_dir(dir).unwrap();
        let page = Page::dashboard();
        let html = renderer.render(&page.template, &page.context).unwrap();
        assert!(html.contains("DashHomeController"));
    }
}
