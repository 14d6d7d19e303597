use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::gateway::ClassificationGateway;
use crate::image_input::blob::ImageBlob;
use crate::library::logger::interface::Logger;
use crate::recycling_plant::core::{Event, ItemId, Model};
use crate::recycling_plant::render::Render;
use crate::recycling_plant::run_effect::RunEffect;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, watch};

#[derive(Debug, thiserror::Error)]
pub enum PlantError {
    #[error("the plant event loop is already running")]
    AlreadyRunning,
    #[error("the plant event loop has stopped")]
    Stopped,
}

/// Owns the item timeline. `run` is the only place the model changes; everything
/// else talks to it through events and reads published snapshots.
#[derive(Clone)]
pub struct RecyclingPlant {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub render: Render,
    pub run_effect: RunEffect,
    pub event_sender: mpsc::UnboundedSender<Event>,
    pub(super) event_receiver: Arc<Mutex<Option<mpsc::UnboundedReceiver<Event>>>>,
    model: Arc<watch::Sender<Model>>,
}

impl RecyclingPlant {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        gateway: Arc<ClassificationGateway>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    ) -> Self {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();
        let (model, _) = watch::channel(Model::default());
        let logger = logger.with_namespace("plant");

        Self {
            render: Render::new(device_display),
            run_effect: RunEffect::new(logger.clone(), gateway, event_sender.clone()),
            config,
            logger,
            event_sender,
            event_receiver: Arc::new(Mutex::new(Some(event_receiver))),
            model: Arc::new(model),
        }
    }

    /// Queues a new item and returns its id without waiting for any step.
    pub fn submit(&self, image: ImageBlob) -> ItemId {
        let id = ItemId::new();
        if self
            .event_sender
            .send(Event::Submitted { id, image })
            .is_err()
        {
            let _ = self
                .logger
                .error(&format!("Item {} submitted after the plant stopped", id));
        }
        id
    }

    pub fn snapshot(&self) -> Model {
        self.model.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Model> {
        self.model.subscribe()
    }

    pub(super) fn publish(&self, model: Model) {
        self.model.send_replace(model);
    }

    pub(super) fn take_receiver(&self) -> Result<mpsc::UnboundedReceiver<Event>, PlantError> {
        self.event_receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or(PlantError::AlreadyRunning)
    }

    /// Resolves once at least `total` items have been counted into a bin.
    pub async fn wait_for_sorted(&self, total: u64) -> Result<Model, PlantError> {
        let mut receiver = self.subscribe();
        let model = receiver
            .wait_for(|model| model.counters.total() >= total)
            .await
            .map_err(|_| PlantError::Stopped)?;
        Ok(model.clone())
    }
}
