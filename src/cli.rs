use clap::Parser;

use crate::error::Result;
use crate::labels::{LabelRequest, DEFAULT_MAX_LABELS, DEFAULT_MIN_CONFIDENCE};
use crate::session::SessionConfig;

/// Generate labels for an S3 image using Amazon Rekognition.
#[derive(Parser, Debug)]
#[command(name = "rekognition-labels", version)]
pub struct Cli {
    /// S3 bucket name
    #[arg(long)]
    pub bucket: String,

    /// S3 object key (path/filename.jpg)
    #[arg(long)]
    pub key: String,

    /// Maximum labels to return
    #[arg(
        long,
        default_value_t = DEFAULT_MAX_LABELS,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    pub max_labels: i32,

    /// Minimum confidence threshold, 0 to 100
    #[arg(long, default_value_t = DEFAULT_MIN_CONFIDENCE, value_parser = parse_confidence)]
    pub min_confidence: f32,

    /// AWS profile name to use
    #[arg(long)]
    pub profile: Option<String>,

    /// AWS region to use
    #[arg(long)]
    pub region: Option<String>,

    /// Log request details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn request(&self) -> Result<LabelRequest> {
        LabelRequest::new(
            self.bucket.clone(),
            self.key.clone(),
            self.max_labels,
            self.min_confidence,
        )
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig::new(self.profile.clone(), self.region.clone())
    }
}

fn parse_confidence(value: &str) -> std::result::Result<f32, String> {
    let confidence: f32 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if (0.0..=100.0).contains(&confidence) {
        Ok(confidence)
    } else {
        Err(format!("{confidence} is not between 0 and 100"))
    }
}
