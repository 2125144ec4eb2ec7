// Template rendering: a pure function from Document to one A4 HTML page.
// Per-field display rules live in `context`; the minijinja templates carry
// layout geometry only.

pub mod context;
pub mod dates;
pub mod templates;

pub use templates::{RenderError, Template, TemplateRenderer};
