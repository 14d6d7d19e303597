use crate::image_input::blob::ImageBlob;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub confidence: Option<f32>,
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("classification service responded with status {0}")]
    Status(u16),
    #[error("classifier unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ImageClassifier {
    async fn classify(&self, image: &ImageBlob) -> Result<Vec<Classification>, ClassifyError>;
}
