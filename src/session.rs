use aws_config::{retry::RetryConfig, BehaviorVersion, ConfigLoader, Region, SdkConfig};

/// Optional profile/region pair selecting which credentials and which regional
/// endpoint the client is built against. `None` in both fields leaves the
/// ambient default chain in charge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub profile: Option<String>,
    pub region: Option<String>,
}

impl SessionConfig {
    pub fn new(profile: Option<String>, region: Option<String>) -> Self {
        Self { profile, region }
    }

    /// Resolves the SDK configuration for this session. A named profile also
    /// supplies the region unless one is given explicitly.
    pub async fn load(&self) -> SdkConfig {
        self.loader().load().await
    }

    fn loader(&self) -> ConfigLoader {
        let mut loader = aws_config::defaults(BehaviorVersion::v2024_03_28())
            .retry_config(RetryConfig::disabled());

        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }

        loader
    }
}

pub async fn create_rekognition_client(session: &SessionConfig) -> aws_sdk_rekognition::Client {
    let config = session.load().await;
    aws_sdk_rekognition::Client::new(&config)
}
