use crate::image_input::blob::ImageBlob;

pub trait DeviceCamera {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn capture_frame(&self) -> Result<ImageBlob, Box<dyn std::error::Error + Send + Sync>>;
}
