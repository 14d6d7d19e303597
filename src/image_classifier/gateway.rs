use crate::image_classifier::fallback::FallbackPolicy;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_input::blob::ImageBlob;
use crate::library::logger::interface::Logger;
use crate::waste_category::Category;
use std::sync::Arc;

/// Turns an image into exactly one [`Category`]. Never fails: unusable answers
/// and classifier errors are logged and replaced by the fallback policy.
pub struct ClassificationGateway {
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    fallback: Arc<dyn FallbackPolicy + Send + Sync>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ClassificationGateway {
    pub fn new(
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        fallback: Arc<dyn FallbackPolicy + Send + Sync>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            image_classifier,
            fallback,
            logger: logger.with_namespace("gateway"),
        }
    }

    pub async fn classify(&self, image: &ImageBlob) -> Category {
        match self.image_classifier.classify(image).await {
            Ok(classifications) => {
                let label = classifications.first().map(|c| c.label.as_str());
                match label.and_then(Category::from_label) {
                    Some(category) => category,
                    None => {
                        let category = self.fallback.choose();
                        let _ = self.logger.warn(&format!(
                            "Invalid or no category received ({:?}), falling back to {}",
                            label, category
                        ));
                        category
                    }
                }
            }
            Err(e) => {
                let category = self.fallback.choose();
                let _ = self.logger.error(&format!(
                    "Classification error: {}, falling back to {}",
                    e, category
                ));
                category
            }
        }
    }
}
