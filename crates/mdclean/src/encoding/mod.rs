//! Encoding detection and resolution.

mod detector;
mod resolver;

pub use detector::{ChardetDetector, DetectionOutcome, TextDetector};
pub use resolver::{
    DEFAULT_DETECTION_BYTES, DetectionBudget, EncodingResolver, RequestedEncoding,
};
