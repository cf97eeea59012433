//! Scan analysis: validation, upstream proxying and result normalization.

pub mod classifier;
pub mod model;
pub mod normalize;
pub mod proxy;

pub use classifier::{ClassifierClient, DEFAULT_AI_URL};
pub use model::{AnalysisRequest, AnalysisResult, ScanBody, UpstreamPayload, MAX_INPUT_CHARS};
pub use proxy::AnalysisProxy;
