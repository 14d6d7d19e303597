use crate::image_classifier::interface::{Classification, ClassifyError, ImageClassifier};
use crate::image_input::blob::ImageBlob;
use crate::library::logger::interface::Logger;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Predictions stay untyped so one odd field cannot sink the whole answer.
#[derive(Debug, Deserialize)]
struct PredictionResponse {
    #[serde(default)]
    predictions: Vec<Value>,
}

fn to_classification(prediction: &Value) -> Classification {
    Classification {
        label: prediction
            .get("class_name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        confidence: prediction
            .get("confidence")
            .and_then(Value::as_f64)
            .map(|confidence| confidence as f32),
    }
}

/// Posts the image as multipart field `image` and reads `predictions[].class_name`.
pub struct ImageClassifierHttp {
    client: reqwest::Client,
    classify_url: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierHttp {
    pub fn new(
        client: reqwest::Client,
        classify_url: impl Into<String>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            client,
            classify_url: classify_url.into(),
            logger: logger.with_namespace("image_classifier").with_namespace("http"),
        }
    }
}

#[async_trait]
impl ImageClassifier for ImageClassifierHttp {
    async fn classify(&self, image: &ImageBlob) -> Result<Vec<Classification>, ClassifyError> {
        let _ = self.logger.info(&format!(
            "Posting {} ({} bytes) to {}",
            image.file_name(),
            image.bytes().len(),
            self.classify_url
        ));

        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.file_name().to_string())
            .mime_str(image.mime())?;
        let form = Form::new().part("image", part);

        let response = self
            .client
            .post(&self.classify_url)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClassifyError::Status(response.status().as_u16()));
        }

        let body: PredictionResponse = response.json().await?;

        Ok(body.predictions.iter().map(to_classification).collect())
    }
}
