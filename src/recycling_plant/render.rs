use super::core::{Model, Status};
use crate::device_display::interface::DeviceDisplay;
use crate::waste_category::Category;
use std::sync::{Arc, Mutex};

const TRACK: char = '_';
const NARROW_BINS_BELOW: usize = 40;

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>) -> Self {
        Self { device_display }
    }

    pub fn render(&self, model: &Model) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self.device_display.lock().map_err(|e| e.to_string())?;
        let width = device_display.chars_per_line();

        device_display.clear()?;
        device_display.write_line(0, &conveyor_line(model, width))?;
        device_display.write_line(1, &bins_line(model, width))?;
        device_display.flush()?;

        Ok(())
    }
}

pub fn conveyor_line(model: &Model, width: usize) -> String {
    let mut track = vec![TRACK; width];
    if width == 0 {
        return String::new();
    }

    for item in &model.items {
        let column = item.position as usize * (width - 1) / 100;
        track[column] = match (item.status, item.category) {
            (Status::Dropping, _) => 'v',
            (_, Some(category)) => category.glyph(),
            (_, None) => 'o',
        };
    }

    track.into_iter().collect()
}

pub fn bins_line(model: &Model, width: usize) -> String {
    let active = model.active_bins();

    Category::ALL
        .into_iter()
        .map(|category| {
            let name = if width < NARROW_BINS_BELOW {
                category.glyph().to_string()
            } else {
                category.as_str().to_string()
            };
            let count = model.counters.get(category);
            if active.contains(&category) {
                format!("*{} {}*", name, count)
            } else {
                format!("{} {}", name, count)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}
