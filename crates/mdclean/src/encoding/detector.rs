//! Streaming detector interface and the chardet-backed implementation.

use crate::error::Result;

/// Final verdict of an encoding detector.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionOutcome {
    /// Detected charset label, or `None` when the detector has no usable guess.
    pub encoding: Option<String>,
    /// Detector confidence in the guess (0.0-1.0).
    pub confidence: f32,
}

impl DetectionOutcome {
    /// Outcome for "nothing usable detected".
    pub fn unknown() -> Self {
        Self {
            encoding: None,
            confidence: 0.0,
        }
    }
}

/// Minimal capability interface for a stateful streaming detector.
///
/// The resolver only depends on this trait, so its chunk loop, early-stop and
/// finalize behavior can be exercised with scripted detectors and the real
/// statistical backend can be swapped out.
pub trait TextDetector {
    /// Feed the next chunk of raw file bytes, in file order.
    fn feed(&mut self, chunk: &[u8]);

    /// True once the detector has converged on a confident result and needs
    /// no further input.
    fn done(&self) -> bool;

    /// Finalize and return the best-guess outcome for whatever input was seen.
    fn finish(&mut self) -> Result<DetectionOutcome>;
}

/// Detector backed by the `chardet` universal charset detector.
///
/// The backend is one-shot, so fed chunks are accumulated (the caller's byte
/// budget bounds the buffer) and analyzed at [`finish`](TextDetector::finish).
/// `done` is always false for this backend: it benefits from every byte the
/// budget allows.
#[derive(Debug, Default)]
pub struct ChardetDetector {
    buffer: Vec<u8>,
}

impl ChardetDetector {
    /// Create a detector with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextDetector for ChardetDetector {
    fn feed(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
    }

    fn done(&self) -> bool {
        false
    }

    fn finish(&mut self) -> Result<DetectionOutcome> {
        if self.buffer.is_empty() {
            return Ok(DetectionOutcome::unknown());
        }

        let (charset, confidence, _language) = chardet::detect(&self.buffer);
        self.buffer.clear();

        if charset.is_empty() {
            return Ok(DetectionOutcome::unknown());
        }

        // Normalize chardet's charset name to a WHATWG label where possible;
        // keep the raw name when no mapping exists.
        let label = chardet::charset2encoding(&charset);
        let encoding = if label.is_empty() {
            charset
        } else {
            label.to_string()
        };

        Ok(DetectionOutcome {
            encoding: Some(encoding),
            confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_unknown() {
        let mut detector = ChardetDetector::new();
        let outcome = detector.finish().unwrap();
        assert_eq!(outcome, DetectionOutcome::unknown());
    }

    #[test]
    fn test_ascii_bytes_yield_a_guess() {
        let mut detector = ChardetDetector::new();
        detector.feed(b"The quick brown fox jumps over the lazy dog.\n");
        let outcome = detector.finish().unwrap();
        assert!(outcome.encoding.is_some());
        assert!(outcome.confidence > 0.0);
    }

    #[test]
    fn test_chunks_accumulate_across_feeds() {
        // Splitting input across feeds must not change the verdict.
        let text = "Ein schöner Tag im Müllerhäuschen über der Straße.\n".repeat(20);
        let bytes = text.as_bytes();

        let mut whole = ChardetDetector::new();
        whole.feed(bytes);
        let one_shot = whole.finish().unwrap();

        let mut chunked = ChardetDetector::new();
        for chunk in bytes.chunks(7) {
            chunked.feed(chunk);
        }
        let streamed = chunked.finish().unwrap();

        assert_eq!(one_shot, streamed);
    }

    #[test]
    fn test_chardet_backend_never_converges_early() {
        let mut detector = ChardetDetector::new();
        detector.feed(b"hello");
        assert!(!detector.done());
    }
}
