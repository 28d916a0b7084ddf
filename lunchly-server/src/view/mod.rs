//! View rendering
//!
//! Handlers never build HTML themselves: they hand a template name and a JSON
//! context to a [`Renderer`]. [`HtmlRenderer`] is the built-in implementation;
//! tests swap in their own.

mod html;

pub use html::HtmlRenderer;

use serde_json::Value;
use thiserror::Error;

/// Rendering failures
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Template {template} failed: {message}")]
    Template { template: String, message: String },
}

/// Turns a template name plus data context into a page body
pub trait Renderer: Send + Sync {
    fn render(&self, template: &str, context: &Value) -> Result<String, RenderError>;
}

/// Pages the router can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    CustomerList,
    CustomerNewForm,
    CustomerDetail,
    CustomerEditForm,
    Error,
}

impl View {
    pub const ALL: [View; 5] = [
        View::CustomerList,
        View::CustomerNewForm,
        View::CustomerDetail,
        View::CustomerEditForm,
        View::Error,
    ];

    pub const fn template(&self) -> &'static str {
        match self {
            View::CustomerList => "customer_list.html",
            View::CustomerNewForm => "customer_new_form.html",
            View::CustomerDetail => "customer_detail.html",
            View::CustomerEditForm => "customer_edit_form.html",
            View::Error => "error.html",
        }
    }

    pub fn from_template(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.template() == name)
    }
}
