use super::core::Effect;
use super::main::{PlantError, RecyclingPlant};
use crate::recycling_plant::core::{init, transition};

impl RecyclingPlant {
    pub async fn run(&self) -> Result<(), PlantError> {
        let mut event_receiver = self.take_receiver()?;

        let (mut current_model, effects) = init();
        self.publish(current_model.clone());
        self.run_effects(effects);

        while let Some(event) = event_receiver.recv().await {
            let _ = self.logger.info(&format!("event: {:?}", event));

            let (new_model, effects) = transition(&self.config, current_model, event);

            if !effects.is_empty() {
                let _ = self.logger.info(&format!("effects: {:?}", effects));
            }

            current_model = new_model;
            self.publish(current_model.clone());

            if let Err(e) = self.render.render(&current_model) {
                let _ = self.logger.error(&format!("Render failed: {}", e));
            }

            self.run_effects(effects);
        }

        Ok(())
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run_effect.run_effect(effect);
        }
    }
}
