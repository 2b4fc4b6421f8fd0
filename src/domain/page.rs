// Page domain model
use std::collections::BTreeMap;

pub const DASHBOARD_TEMPLATE: &str = "dashboard/dashboard.html";
pub const DASHBOARD_CONTROLLER: &str = "DashHomeController";

/// Key/value context handed to the template engine.
///
/// Ordered so that rendering the same page twice yields the same bytes.
pub type PageContext = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub template: String,
    pub context: PageContext,
}

impl Page {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            context: PageContext::new(),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// The dashboard home page: one template, one fixed variable.
    pub fn dashboard() -> Self {
        Self::new(DASHBOARD_TEMPLATE).with("controller_name", DASHBOARD_CONTROLLER)
    }
}
