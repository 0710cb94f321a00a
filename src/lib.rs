pub mod cli;
pub mod error;
pub mod labels;
pub mod report;
pub mod session;

use std::io::Write;

pub use error::{LabelError, Result};
pub use labels::{LabelDetector, LabelRequest, LabelResult, RekognitionDetector};
pub use session::{create_rekognition_client, SessionConfig};

/// Detects labels for `request` and writes the report to `out`. Returns the
/// number of labels reported.
pub async fn run<D, W>(detector: &D, request: &LabelRequest, out: &mut W) -> Result<usize>
where
    D: LabelDetector + ?Sized,
    W: Write,
{
    let labels = detector.detect_labels(request).await?;
    report::write_report(out, request, &labels)?;
    Ok(labels.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    enum Reply {
        Labels(Vec<LabelResult>),
        Failure(&'static str),
    }

    struct MockDetector {
        reply: Reply,
        seen: Mutex<Vec<LabelRequest>>,
    }

    impl MockDetector {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LabelDetector for MockDetector {
        async fn detect_labels(&self, request: &LabelRequest) -> Result<Vec<LabelResult>> {
            self.seen.lock().unwrap().push(request.clone());
            match &self.reply {
                Reply::Labels(labels) => Ok(labels.clone()),
                Reply::Failure(message) => Err(LabelError::Service(message.to_string())),
            }
        }
    }

    fn label(name: &str, confidence: f32, parents: &[&str]) -> LabelResult {
        LabelResult {
            name: name.to_string(),
            confidence,
            parents: parents.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn prints_dog_scenario() {
        let detector = MockDetector::new(Reply::Labels(vec![
            label("Dog", 98.321, &["Animal"]),
            label("Animal", 97.0, &[]),
        ]));
        let request = LabelRequest::new("photos", "dog.jpg", 10, 80.0).unwrap();
        let mut out = Vec::new();

        let count = run(&detector, &request, &mut out).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Labels for s3://photos/dog.jpg:\n- Dog: 98.32% (parents: Animal)\n- Animal: 97.00%\n"
        );
    }

    #[tokio::test]
    async fn one_line_per_label_in_service_order() {
        let detector = MockDetector::new(Reply::Labels(vec![
            label("Zebra", 81.0, &[]),
            label("Apple", 99.0, &[]),
            label("Zebra", 81.0, &[]),
        ]));
        let request = LabelRequest::new("b", "k", 10, 80.0).unwrap();
        let mut out = Vec::new();

        run(&detector, &request, &mut out).await.unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().skip(1).collect();
        assert_eq!(
            lines,
            vec!["- Zebra: 81.00%", "- Apple: 99.00%", "- Zebra: 81.00%"]
        );
    }

    #[tokio::test]
    async fn empty_result_is_not_an_error() {
        let detector = MockDetector::new(Reply::Labels(Vec::new()));
        let request = LabelRequest::new("b", "k", 10, 80.0).unwrap();
        let mut out = Vec::new();

        let count = run(&detector, &request, &mut out).await.unwrap();

        assert_eq!(count, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "No labels found.\n");
    }

    #[tokio::test]
    async fn failure_produces_no_partial_output() {
        let detector = MockDetector::new(Reply::Failure("AccessDeniedException: denied"));
        let request = LabelRequest::new("b", "k", 10, 80.0).unwrap();
        let mut out = Vec::new();

        let err = run(&detector, &request, &mut out).await.unwrap_err();

        assert!(matches!(err, LabelError::Service(_)));
        assert_eq!(err.to_string(), "AccessDeniedException: denied");
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn request_reaches_detector_unchanged() {
        let detector = MockDetector::new(Reply::Labels(Vec::new()));
        let request = LabelRequest::new("photos", "dog.jpg", 5, 42.5).unwrap();

        run(&detector, &request, &mut Vec::new()).await.unwrap();

        let seen = detector.seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[request]);
        assert_eq!(seen[0].max_labels(), 5);
        assert_eq!(seen[0].min_confidence(), 42.5);
    }
}
