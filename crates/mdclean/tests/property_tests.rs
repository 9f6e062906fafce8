//! Property-based tests for the substitution engine.
//!
//! These use proptest to verify the engine's invariants: no panics on any
//! input, determinism, idempotence on brace-free text, and structural
//! invisibility of doubled braces.

use proptest::prelude::*;

use mdclean::{TemplateContext, TemplateEngine};

/// Text with no brace characters at all.
fn brace_free_text() -> impl Strategy<Value = String> {
    "[^{}]{0,200}"
}

/// Identifiers that are valid placeholder keys.
fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,20}"
}

/// Arbitrary text, braces included.
fn any_text() -> impl Strategy<Value = String> {
    ".{0,200}"
}

proptest! {
    #[test]
    fn substitution_never_panics(text in any_text(), key in identifier(), value in any_text()) {
        let engine = TemplateEngine::new();
        let context = TemplateContext::new().with_value(key, value);
        let _ = engine.substitute(&text, &context);
    }

    #[test]
    fn brace_free_text_is_unchanged(text in brace_free_text(), key in identifier()) {
        let engine = TemplateEngine::new();
        let context = TemplateContext::new().with_value(key, "anything");
        prop_assert_eq!(engine.substitute(&text, &context), text);
    }

    #[test]
    fn substitution_is_deterministic(text in any_text(), key in identifier(), value in brace_free_text()) {
        let engine = TemplateEngine::new();
        let context = TemplateContext::new().with_value(key, value);
        let first = engine.substitute(&text, &context);
        let second = engine.substitute(&text, &context);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn known_key_is_resolved(prefix in brace_free_text(), suffix in brace_free_text(), key in identifier(), value in brace_free_text()) {
        let engine = TemplateEngine::new();
        let context = TemplateContext::new().with_value(key.clone(), value.clone());
        let text = format!("{prefix}{{{key}}}{suffix}");
        prop_assert_eq!(engine.substitute(&text, &context), format!("{prefix}{value}{suffix}"));
    }

    #[test]
    fn unknown_key_is_retained(key in identifier()) {
        let engine = TemplateEngine::new();
        let context = TemplateContext::new();
        let text = format!("before {{{key}}} after");
        prop_assert_eq!(engine.substitute(&text, &context), text);
    }

    #[test]
    fn doubled_braces_are_invisible(key in identifier(), value in brace_free_text()) {
        let engine = TemplateEngine::new();
        let context = TemplateContext::new().with_value(key.clone(), value);
        let text = format!("literal {{{{{key}}}}} only");
        prop_assert_eq!(engine.substitute(&text, &context), text);
    }

    #[test]
    fn empty_context_never_modifies_input(text in any_text()) {
        let engine = TemplateEngine::new();
        let context = TemplateContext::new();
        prop_assert_eq!(engine.substitute(&text, &context), text);
    }
}
