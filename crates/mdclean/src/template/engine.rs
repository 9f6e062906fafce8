//! Single-pass `{key}` placeholder substitution.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::{DiagnosticSink, TracingSink};

use super::context::TemplateContext;

/// Simple placeholder: one opening brace, at least one non-brace character,
/// one closing brace. Inner braces are structurally impossible, so nested
/// spans can never match.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}]+)\}").expect("placeholder pattern is valid"));

/// Substitutes well-formed `{key}` tokens against a [`TemplateContext`].
///
/// Never fails: malformed spans pass through verbatim, unresolved keys pass
/// through with one diagnostic per occurrence.
pub struct TemplateEngine {
    sink: Arc<dyn DiagnosticSink>,
}

impl TemplateEngine {
    /// Create an engine with the default diagnostic sink.
    pub fn new() -> Self {
        Self {
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Resolve every well-formed placeholder in `text` against `context`.
    ///
    /// Single pass: substituted values are never re-scanned, so values
    /// containing brace characters cannot trigger further expansion.
    pub fn substitute(&self, text: &str, context: &TemplateContext) -> String {
        let mut output = String::with_capacity(text.len());
        let mut last_end = 0;

        for m in PLACEHOLDER.find_iter(text) {
            // A doubled brace on either side makes the span malformed; leave
            // the whole region untouched by not advancing past it.
            let doubled_open = m.start() > 0 && text.as_bytes()[m.start() - 1] == b'{';
            let doubled_close = text.as_bytes().get(m.end()) == Some(&b'}');
            if doubled_open || doubled_close {
                continue;
            }

            // Identifier taken verbatim between the braces, no trimming.
            let token = m.as_str();
            let key = &token[1..token.len() - 1];

            output.push_str(&text[last_end..m.start()]);
            match context.resolve(key) {
                Some(value) => output.push_str(&value),
                None => {
                    self.sink.warn(&format!(
                        "no value found for template '{key}', retaining as-is"
                    ));
                    output.push_str(token);
                }
            }
            last_end = m.end();
        }

        output.push_str(&text[last_end..]);
        output
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
