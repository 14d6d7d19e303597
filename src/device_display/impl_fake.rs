use crate::device_display::interface::DeviceDisplay;
use std::error::Error;
use std::sync::{Arc, Mutex};

/// Keeps every flushed frame so tests can inspect what was drawn.
#[derive(Clone)]
pub struct DeviceDisplayFake {
    width: usize,
    lines: Vec<String>,
    frames: Arc<Mutex<Vec<Vec<String>>>>,
}

impl DeviceDisplayFake {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            lines: vec![String::new(); 2],
            frames: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn frames(&self) -> Vec<Vec<String>> {
        self.frames.lock().expect("frames lock").clone()
    }

    pub fn last_frame(&self) -> Option<Vec<String>> {
        self.frames().last().cloned()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.lines = vec![String::new(); 2];
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }
        self.lines[line as usize] = text.chars().take(self.width).collect();
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.frames
            .lock()
            .map_err(|e| e.to_string())?
            .push(self.lines.clone());
        Ok(())
    }

    fn chars_per_line(&self) -> usize {
        self.width
    }
}
