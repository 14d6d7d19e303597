use crate::image_classifier::gateway::ClassificationGateway;
use crate::library::logger::interface::Logger;
use crate::recycling_plant::core::{Effect, Event};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// Turns effects into tasks that post their outcome back as events.
#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    gateway: Arc<ClassificationGateway>,
    event_sender: UnboundedSender<Event>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        gateway: Arc<ClassificationGateway>,
        event_sender: UnboundedSender<Event>,
    ) -> Self {
        Self {
            logger,
            gateway,
            event_sender,
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let event_sender = self.event_sender.clone();

        match effect {
            Effect::Schedule { after, event } => {
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = event_sender.send(event);
                });
            }
            Effect::Classify { id, image } => {
                let gateway = Arc::clone(&self.gateway);
                let logger = Arc::clone(&self.logger);
                tokio::spawn(async move {
                    let category = gateway.classify(&image).await;
                    let _ = logger.info(&format!("Item {} classified as {}", id, category));
                    let _ = event_sender.send(Event::ClassifyDone { id, category });
                });
            }
        }
    }
}
