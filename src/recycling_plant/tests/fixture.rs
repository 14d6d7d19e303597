use crate::config::Config;
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::image_classifier::fallback::FixedFallback;
use crate::image_classifier::gateway::ClassificationGateway;
use crate::image_classifier::interface::{Classification, ClassifyError, ImageClassifier};
use crate::image_input::blob::ImageBlob;
use crate::library::logger::impl_tracing::LoggerTracing;
use crate::library::logger::interface::Logger;
use crate::recycling_plant::main::{PlantError, RecyclingPlant};
use crate::waste_category::Category;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

pub const FALLBACK: Category = Category::Glass;

#[allow(dead_code)]
pub struct Fixture {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub device_display: DeviceDisplayFake,
    pub plant: RecyclingPlant,
}

impl Fixture {
    pub fn new(image_classifier: Arc<dyn ImageClassifier + Send + Sync>) -> Self {
        Self::with_config(Config::default(), image_classifier)
    }

    pub fn with_config(
        config: Config,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerTracing::new());
        let device_display = DeviceDisplayFake::new(config.display_width);
        let gateway = Arc::new(ClassificationGateway::new(
            image_classifier,
            Arc::new(FixedFallback(FALLBACK)),
            logger.clone(),
        ));
        let plant = RecyclingPlant::new(
            config.clone(),
            logger.clone(),
            gateway,
            Arc::new(Mutex::new(device_display.clone())),
        );

        Self {
            config,
            logger,
            device_display,
            plant,
        }
    }

    pub fn start(&self) -> JoinHandle<Result<(), PlantError>> {
        let plant = self.plant.clone();
        tokio::spawn(async move { plant.run().await })
    }
}

pub fn image(file_name: &str) -> ImageBlob {
    ImageBlob::new(vec![0xff, 0xd8, 0xff, 0xe0, 0x00], "image/jpeg", file_name)
}

/// Labels an image with its file stem, so `plastic.jpg` classifies as "plastic".
pub struct ImageClassifierByName;

#[async_trait]
impl ImageClassifier for ImageClassifierByName {
    async fn classify(&self, image: &ImageBlob) -> Result<Vec<Classification>, ClassifyError> {
        let label = image
            .file_name()
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string();
        Ok(vec![Classification {
            label,
            confidence: Some(1.0),
        }])
    }
}

/// Answers with `label` after `delay`.
pub struct ImageClassifierSlow {
    pub delay: Duration,
    pub label: &'static str,
}

#[async_trait]
impl ImageClassifier for ImageClassifierSlow {
    async fn classify(&self, _image: &ImageBlob) -> Result<Vec<Classification>, ClassifyError> {
        tokio::time::sleep(self.delay).await;
        Ok(vec![Classification {
            label: self.label.to_string(),
            confidence: None,
        }])
    }
}
