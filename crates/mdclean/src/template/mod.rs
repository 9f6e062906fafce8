//! Template context and substitution engine.

mod context;
mod engine;

pub use context::TemplateContext;
pub use engine::TemplateEngine;
