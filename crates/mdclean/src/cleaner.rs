//! Main Cleaner struct and public API.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::diagnostics::DiagnosticSink;
use crate::encoding::{DetectionBudget, EncodingResolver, RequestedEncoding};
use crate::error::{MdcleanError, Result};
use crate::template::{TemplateContext, TemplateEngine};
use crate::transliterate::transliterate;

/// Configuration for a cleaning pass.
#[derive(Debug, Clone, Default)]
pub struct CleanerConfig {
    /// Byte budget for encoding inference (default 1024 bytes).
    pub detection_bytes: DetectionBudget,
    /// Encoding to validate before falling back to detection (default utf-8).
    pub encoding: RequestedEncoding,
    /// Context mapping for `{key}` placeholder resolution.
    pub context: TemplateContext,
}

/// The main cleaning pipeline: resolve encoding, decode, transliterate to
/// ASCII, substitute templates.
///
/// Each call to [`clean`](Cleaner::clean) opens and closes its own file
/// handles, so concurrent calls on different files are independent.
pub struct Cleaner {
    config: CleanerConfig,
    resolver: EncodingResolver,
    templates: TemplateEngine,
}

impl Cleaner {
    /// Create a Cleaner with default configuration.
    pub fn new() -> Self {
        Self::with_config(CleanerConfig::default())
    }

    /// Create a Cleaner with custom configuration.
    pub fn with_config(config: CleanerConfig) -> Self {
        let resolver =
            EncodingResolver::new(config.detection_bytes, config.encoding.clone());
        Self {
            config,
            resolver,
            templates: TemplateEngine::new(),
        }
    }

    /// Set the context mapping used to resolve placeholders.
    pub fn with_context(mut self, context: TemplateContext) -> Self {
        self.config.context = context;
        self
    }

    /// Route diagnostics to a custom sink instead of `tracing`.
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        let sink: Arc<dyn DiagnosticSink> = Arc::new(sink);
        self.resolver = EncodingResolver::new(
            self.config.detection_bytes,
            self.config.encoding.clone(),
        )
        .with_sink(sink.clone());
        self.templates = TemplateEngine::new().with_sink(sink);
        self
    }

    /// Clean one file: returns its content decoded, transliterated to ASCII,
    /// with well-formed `{key}` placeholders resolved against the context.
    pub fn clean(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();

        let encoding = self.resolver.resolve(path)?;

        let bytes = fs::read(path).map_err(|e| MdcleanError::file_access(path, e))?;
        // Best-effort decode: malformed sequences become replacement
        // characters rather than failing the whole document.
        let (decoded, _, _) = encoding.decode(&bytes);

        let ascii = transliterate(&decoded);
        Ok(self.templates.substitute(&ascii, &self.config.context))
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot convenience: clean a file with the default configuration and an
/// empty context.
pub fn clean_file(path: impl AsRef<Path>) -> Result<String> {
    Cleaner::new().clean(path)
}
