//! Forwards scan requests to the classifier under a retry policy.

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use super::classifier::ClassifierClient;
use super::model::{AnalysisRequest, AnalysisResult, ScanBody};
use super::normalize::normalize;
use crate::error::AnalyzeError;
use crate::retry::{call_with_retry, RetryPolicy};

/// Validates scan input, calls the classifier and normalizes its answer.
///
/// Holds no per-request state; share it behind an `Arc`.
#[derive(Clone)]
pub struct AnalysisProxy {
    classifier: ClassifierClient,
    policy: RetryPolicy,
}

impl AnalysisProxy {
    pub fn new(classifier: ClassifierClient) -> Self {
        Self::with_policy(classifier, RetryPolicy::default())
    }

    pub fn with_policy(classifier: ClassifierClient, policy: RetryPolicy) -> Self {
        Self { classifier, policy }
    }

    pub fn classifier(&self) -> &ClassifierClient {
        &self.classifier
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Analyze an inbound `{ text?, url? }` body.
    ///
    /// Validation errors are returned before any network call. Dropping the
    /// returned future aborts the in-flight upstream request.
    pub async fn analyze(&self, body: &ScanBody) -> Result<AnalysisResult, AnalyzeError> {
        let request = AnalysisRequest::from_body(body)?;
        let span = info_span!("analyze", request_id = %Uuid::new_v4());
        self.analyze_request(&request).instrument(span).await
    }

    pub async fn analyze_request(&self, request: &AnalysisRequest) -> Result<AnalysisResult, AnalyzeError> {
        info!(
            endpoint = %self.classifier.endpoint(),
            preview = %request.preview(),
            "Forwarding request to classifier"
        );

        let payload = call_with_retry(&self.policy, |_attempt| self.classifier.predict(request.input())).await?;
        let result = normalize(payload, request.input())?;

        info!(
            prediction = %result.prediction,
            confidence = result.confidence,
            "Analysis complete"
        );

        Ok(result)
    }
}
