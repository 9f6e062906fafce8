//! mdclean: encoding-aware text cleaner with safe `{key}` substitution.
//!
//! mdclean reads a text file of unknown or uncertain byte encoding, normalizes
//! its content to plain ASCII, and resolves `{key}` placeholders against a
//! caller-supplied context mapping.
//!
//! # Core Principles
//!
//! - **Best-effort output**: content-level ambiguities (unknown encoding,
//!   unresolved placeholder) degrade with a diagnostic instead of failing
//! - **Bounded cost**: encoding inference reads at most the configured byte
//!   budget
//! - **No surprise expansion**: substitution is single-pass and literal brace
//!   sequences like `{{name}}` pass through untouched
//!
//! # Example
//!
//! ```no_run
//! use mdclean::{Cleaner, TemplateContext};
//!
//! let cleaner = Cleaner::new()
//!     .with_context(TemplateContext::new().with_value("who", "World"));
//! let cleaned = cleaner.clean("notes.md").unwrap();
//!
//! println!("{cleaned}");
//! ```

pub mod diagnostics;
pub mod encoding;
pub mod error;
pub mod template;
pub mod transliterate;

mod cleaner;

pub use crate::cleaner::{Cleaner, CleanerConfig, clean_file};
pub use diagnostics::{DiagnosticSink, MemorySink, TracingSink};
pub use encoding::{
    ChardetDetector, DetectionBudget, DetectionOutcome, EncodingResolver, RequestedEncoding,
    TextDetector,
};
pub use error::{MdcleanError, Result};
pub use template::{TemplateContext, TemplateEngine};
