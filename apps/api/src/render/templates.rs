//! Layout dispatch and HTML rendering.
//!
//! Rendering is a pure function of the Document: the same input always
//! produces byte-identical output (durations are computed against an
//! injected reference date; the convenience wrapper passes today). Output
//! is one fixed-size A4 page; overflow is an accepted visual artifact.

use chrono::{Local, NaiveDate};
use minijinja::Environment;
use thiserror::Error;

use crate::models::document::Document;
use crate::render::context::build_context;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// The closed set of layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Modern,
    Classic,
    Minimal,
}

impl Template {
    /// Resolves a stored template tag. Unknown or missing tags render the
    /// modern layout; an unrecognized choice is never an error.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "classic" => Template::Classic,
            "minimal" => Template::Minimal,
            _ => Template::Modern,
        }
    }

    fn template_name(&self) -> &'static str {
        match self {
            Template::Modern => "modern.html",
            Template::Classic => "classic.html",
            Template::Minimal => "minimal.html",
        }
    }
}

/// Holds the compiled layout templates. Built once at startup and shared
/// read-only through `AppState`.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.add_template("modern.html", include_str!("../../templates/modern.html"))
            .expect("modern template must compile");
        env.add_template("classic.html", include_str!("../../templates/classic.html"))
            .expect("classic template must compile");
        env.add_template("minimal.html", include_str!("../../templates/minimal.html"))
            .expect("minimal template must compile");
        TemplateRenderer { env }
    }

    /// Renders the document with durations measured against today.
    pub fn render(&self, doc: &Document) -> Result<String, RenderError> {
        self.render_at(doc, Local::now().date_naive())
    }

    pub fn render_at(&self, doc: &Document, today: NaiveDate) -> Result<String, RenderError> {
        let template = Template::from_tag(&doc.config.template_id);
        let ctx = build_context(doc, today);
        let html = self.env.get_template(template.template_name())?.render(&ctx)?;
        Ok(html)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
