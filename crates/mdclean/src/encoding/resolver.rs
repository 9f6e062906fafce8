//! Encoding resolution: explicit-encoding probe plus budgeted chunked detection.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use encoding_rs::{Encoding, UTF_8};

use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{MdcleanError, Result};

use super::detector::{ChardetDetector, TextDetector};

/// Default number of bytes read for encoding inference.
pub const DEFAULT_DETECTION_BYTES: u64 = 1024;

/// Fixed read size for the detection loop; the last chunk is clamped so the
/// remaining budget is never exceeded.
const CHUNK_SIZE: u64 = 1024;

/// Byte budget for encoding inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionBudget {
    /// Use the full file size.
    Auto,
    /// Read at most this many bytes.
    Bytes(u64),
}

impl Default for DetectionBudget {
    fn default() -> Self {
        Self::Bytes(DEFAULT_DETECTION_BYTES)
    }
}

/// Caller-asserted encoding, or automatic detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedEncoding {
    /// Skip the probe and go straight to detection.
    Auto,
    /// Validate this label against a bounded probe before trusting it.
    Named(String),
}

impl RequestedEncoding {
    /// Explicitly request a named encoding.
    pub fn named(label: impl Into<String>) -> Self {
        Self::Named(label.into())
    }
}

impl Default for RequestedEncoding {
    fn default() -> Self {
        Self::Named("utf-8".to_string())
    }
}

/// Resolves the character encoding of a file.
///
/// An explicitly requested encoding is validated against a bounded probe and
/// used as-is when it decodes cleanly (the zero-detection-cost path).
/// Otherwise the file is read in budget-clamped chunks and fed to a streaming
/// statistical detector, falling back to UTF-8 when nothing usable comes out.
pub struct EncodingResolver {
    budget: DetectionBudget,
    requested: RequestedEncoding,
    sink: Arc<dyn DiagnosticSink>,
}

impl EncodingResolver {
    /// Create a resolver with the default diagnostic sink.
    pub fn new(budget: DetectionBudget, requested: RequestedEncoding) -> Self {
        Self {
            budget,
            requested,
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Resolve the encoding of `path` using the chardet backend.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<&'static Encoding> {
        self.resolve_with(path, &mut ChardetDetector::new())
    }

    /// Resolve using a caller-supplied detector.
    pub fn resolve_with(
        &self,
        path: impl AsRef<Path>,
        detector: &mut dyn TextDetector,
    ) -> Result<&'static Encoding> {
        let path = path.as_ref();

        if let RequestedEncoding::Named(label) = &self.requested {
            match Encoding::for_label(label.as_bytes()) {
                Some(encoding) => {
                    let probe = self.read_probe(path)?;
                    if probe_decodes(encoding, &probe) {
                        return Ok(encoding);
                    }
                    self.sink.warn(&format!(
                        "'{}' does not decode as {}, trying automatic detection",
                        path.display(),
                        encoding.name()
                    ));
                }
                None => {
                    self.sink.warn(&format!(
                        "unsupported encoding '{}' for '{}', trying automatic detection",
                        label,
                        path.display()
                    ));
                }
            }
        }

        self.detect(path, detector)
    }

    /// Read up to the effective budget from the start of the file.
    fn read_probe(&self, path: &Path) -> Result<Vec<u8>> {
        let file = File::open(path).map_err(|e| MdcleanError::file_access(path, e))?;
        let limit = self.effective_budget(path, &file)?;

        let mut probe = Vec::new();
        file.take(limit)
            .read_to_end(&mut probe)
            .map_err(|e| MdcleanError::file_access(path, e))?;
        Ok(probe)
    }

    /// Chunked detection loop: feed budget-clamped chunks in file order until
    /// the detector converges, the budget runs out, or the file ends.
    fn detect(&self, path: &Path, detector: &mut dyn TextDetector) -> Result<&'static Encoding> {
        let mut file = File::open(path).map_err(|e| MdcleanError::file_access(path, e))?;
        let mut remaining = self.effective_budget(path, &file)?;

        let mut buf = vec![0u8; CHUNK_SIZE as usize];
        while remaining > 0 && !detector.done() {
            let want = remaining.min(CHUNK_SIZE) as usize;
            let read = file
                .read(&mut buf[..want])
                .map_err(|e| MdcleanError::file_access(path, e))?;
            if read == 0 {
                break;
            }
            detector.feed(&buf[..read]);
            remaining -= read as u64;
        }

        let outcome = detector.finish()?;
        let Some(charset) = outcome.encoding.filter(|c| !c.is_empty()) else {
            self.sink.warn(&format!(
                "no confident encoding detected for '{}', assuming utf-8",
                path.display()
            ));
            return Ok(UTF_8);
        };

        match Encoding::for_label(charset.as_bytes()) {
            Some(encoding) => Ok(encoding),
            None => {
                self.sink.warn(&format!(
                    "detected encoding '{}' for '{}' is not supported, assuming utf-8",
                    charset,
                    path.display()
                ));
                Ok(UTF_8)
            }
        }
    }

    /// Concrete byte budget: the file size for `Auto`, the given count otherwise.
    fn effective_budget(&self, path: &Path, file: &File) -> Result<u64> {
        match self.budget {
            DetectionBudget::Bytes(n) => Ok(n),
            DetectionBudget::Auto => {
                let metadata = file
                    .metadata()
                    .map_err(|e| MdcleanError::file_access(path, e))?;
                Ok(metadata.len())
            }
        }
    }
}

/// Check whether the probe bytes decode cleanly under `encoding`.
///
/// Uses an incremental decoder with `last = false` so a multibyte sequence cut
/// off at the probe boundary stays pending instead of counting as an error:
/// only the probed bytes are validated, never the rest of the file.
fn probe_decodes(encoding: &'static Encoding, probe: &[u8]) -> bool {
    let mut decoder = encoding.new_decoder();
    let capacity = decoder
        .max_utf8_buffer_length(probe.len())
        .unwrap_or(probe.len() * 3 + 16);
    let mut out = String::with_capacity(capacity);
    let (_, _, had_errors) = decoder.decode_to_string(probe, &mut out, false);
    !had_errors
}
