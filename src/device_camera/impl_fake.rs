use crate::device_camera::interface::DeviceCamera;
use crate::image_input::blob::ImageBlob;
use crate::library::logger::interface::Logger;
use std::io::Cursor;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

const FRAME_WIDTH: u32 = 64;
const FRAME_HEIGHT: u32 = 48;

/// Produces synthetic JPEG frames: a random tint over a horizontal gradient.
pub struct DeviceCameraFake {
    started: AtomicBool,
    frame_count: AtomicU64,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            started: AtomicBool::new(false),
            frame_count: AtomicU64::new(0),
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Starting camera...")?;
        self.started.store(true, Ordering::SeqCst);
        self.logger.info("Camera started")?;
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Stopping camera...")?;
        self.started.store(false, Ordering::SeqCst);
        self.logger.info("Camera stopped")?;
        Ok(())
    }

    fn capture_frame(&self) -> Result<ImageBlob, Box<dyn std::error::Error + Send + Sync>> {
        if !self.started.load(Ordering::SeqCst) {
            return Err("camera not started".into());
        }

        let tint: [u8; 3] = rand::random();
        let frame = image::RgbImage::from_fn(FRAME_WIDTH, FRAME_HEIGHT, |x, _y| {
            let shade = (x * 255 / FRAME_WIDTH) as u8;
            image::Rgb([
                tint[0].saturating_add(shade / 2),
                tint[1].saturating_add(shade / 3),
                tint[2].saturating_add(shade / 4),
            ])
        });

        let mut bytes = Vec::new();
        frame.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)?;

        let index = self.frame_count.fetch_add(1, Ordering::SeqCst);
        self.logger
            .info(&format!("Frame {} captured ({} bytes)", index, bytes.len()))?;

        Ok(ImageBlob::new(
            bytes,
            "image/jpeg",
            format!("frame-{}.jpg", index),
        ))
    }
}
