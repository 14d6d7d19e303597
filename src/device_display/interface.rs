use std::error::Error;

/// Fixed-size text display the plant is rendered onto.
pub trait DeviceDisplay: Send + Sync {
    /// Clear all text from the display
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Write text to a specific line (0-based). Text longer than
    /// `chars_per_line` is truncated.
    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Push the buffered lines out to the device
    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn num_lines(&self) -> u8 {
        2
    }

    fn chars_per_line(&self) -> usize;
}
