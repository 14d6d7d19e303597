use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

pub struct DeviceDisplayConsole {
    display_buffer: Vec<Vec<char>>,
    width: usize,
}

impl DeviceDisplayConsole {
    pub fn new(width: usize) -> Self {
        Self {
            display_buffer: vec![vec![' '; width]; 2],
            width,
        }
    }

    fn render_display(&self) {
        println!("┌{}┐", "─".repeat(self.width));
        for row in &self.display_buffer {
            print!("│");
            for &c in row {
                print!("{}", c);
            }
            println!("│");
        }
        println!("└{}┘", "─".repeat(self.width));
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.display_buffer = vec![vec![' '; self.width]; 2];
        Ok(())
    }

    fn write_line(&mut self, line: u8, text: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        if line >= self.num_lines() {
            return Err("Invalid line number".into());
        }

        let row = &mut self.display_buffer[line as usize];
        row.fill(' ');
        for (i, c) in text.chars().take(self.width).enumerate() {
            row[i] = c;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.render_display();
        Ok(())
    }

    fn chars_per_line(&self) -> usize {
        self.width
    }
}
