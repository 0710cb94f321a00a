use async_trait::async_trait;
use aws_sdk_rekognition::{
    error::DisplayErrorContext,
    operation::detect_labels::builders::DetectLabelsFluentBuilder,
    types::{Image, Label, S3Object},
};

use crate::error::{LabelError, Result};

pub const DEFAULT_MAX_LABELS: i32 = 10;
pub const DEFAULT_MIN_CONFIDENCE: f32 = 80.0;

/// A single label-detection request against an object already stored in S3.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRequest {
    bucket: String,
    key: String,
    max_labels: i32,
    min_confidence: f32,
}

impl LabelRequest {
    pub fn new(
        bucket: impl Into<String>,
        key: impl Into<String>,
        max_labels: i32,
        min_confidence: f32,
    ) -> Result<Self> {
        let bucket = bucket.into();
        let key = key.into();

        if bucket.is_empty() {
            return Err(LabelError::InvalidRequest("bucket must not be empty".into()));
        }
        if key.is_empty() {
            return Err(LabelError::InvalidRequest("key must not be empty".into()));
        }
        if max_labels < 1 {
            return Err(LabelError::InvalidRequest(format!(
                "max labels must be at least 1, got {max_labels}"
            )));
        }
        if !(0.0..=100.0).contains(&min_confidence) {
            return Err(LabelError::InvalidRequest(format!(
                "min confidence must be between 0 and 100, got {min_confidence}"
            )));
        }

        Ok(Self {
            bucket,
            key,
            max_labels,
            min_confidence,
        })
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn max_labels(&self) -> i32 {
        self.max_labels
    }

    pub fn min_confidence(&self) -> f32 {
        self.min_confidence
    }

    pub fn location(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelResult {
    pub name: String,
    pub confidence: f32,
    pub parents: Vec<String>,
}

impl From<&Label> for LabelResult {
    fn from(label: &Label) -> Self {
        Self {
            name: label.name().unwrap_or_default().to_string(),
            confidence: label.confidence().unwrap_or_default(),
            parents: label
                .parents()
                .iter()
                .filter_map(|parent| parent.name())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Source of labels for a request. Results come back in the order the
/// detector ranked them.
#[async_trait]
pub trait LabelDetector {
    async fn detect_labels(&self, request: &LabelRequest) -> Result<Vec<LabelResult>>;
}

pub struct RekognitionDetector {
    client: aws_sdk_rekognition::Client,
}

impl RekognitionDetector {
    pub fn new(client: aws_sdk_rekognition::Client) -> Self {
        Self { client }
    }

    fn build_call(&self, request: &LabelRequest) -> DetectLabelsFluentBuilder {
        let location = S3Object::builder()
            .bucket(request.bucket())
            .name(request.key())
            .build();

        self.client
            .detect_labels()
            .image(Image::builder().s3_object(location).build())
            .max_labels(request.max_labels())
            .min_confidence(request.min_confidence())
    }
}

#[async_trait]
impl LabelDetector for RekognitionDetector {
    #[tracing::instrument(skip_all, fields(location = %request.location()))]
    async fn detect_labels(&self, request: &LabelRequest) -> Result<Vec<LabelResult>> {
        tracing::debug!(
            max_labels = request.max_labels(),
            min_confidence = request.min_confidence(),
            "calling DetectLabels"
        );

        let response = self
            .build_call(request)
            .send()
            .await
            .map_err(|err| LabelError::Service(DisplayErrorContext(&err).to_string()))?;

        let labels: Vec<LabelResult> = response.labels().iter().map(LabelResult::from).collect();
        tracing::debug!(count = labels.len(), "received labels");

        Ok(labels)
    }
}
