use crate::image_classifier::interface::{Classification, ClassifyError, ImageClassifier};
use crate::image_input::blob::ImageBlob;
use crate::library::logger::interface::Logger;
use async_trait::async_trait;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

/// Offline stand-in for the backend. Some labels are deliberately outside the
/// sortable set so the gateway fallback gets exercised.
const LABELS: [&str; 6] = ["cardboard", "Plastic", "GLASS", "plastic", "metal", "paper"];

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }
}

#[async_trait]
impl ImageClassifier for ImageClassifierFake {
    async fn classify(&self, image: &ImageBlob) -> Result<Vec<Classification>, ClassifyError> {
        let _ = self.logger.info(&format!(
            "Classifying {} with fake classifier...",
            image.file_name()
        ));

        let (label, confidence) = {
            let mut rng = rand::rng();
            let index_dist = Uniform::new(0, LABELS.len())
                .map_err(|e| ClassifyError::Unavailable(e.to_string()))?;
            let confidence_dist = Uniform::new(0.0f32, 1.0)
                .map_err(|e| ClassifyError::Unavailable(e.to_string()))?;
            (
                LABELS[index_dist.sample(&mut rng)],
                confidence_dist.sample(&mut rng),
            )
        };

        Ok(vec![Classification {
            label: label.to_string(),
            confidence: Some(confidence),
        }])
    }
}
