use std::io::{self, Write};

use tracing::warn;

use super::{Frame, Renderer};

/// Draws frames as plain text on stdout.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn new() -> Self {
        Self
    }

    fn write(&self, text: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl Renderer for TerminalRenderer {
    fn draw(&self, frame: &Frame) {
        self.write(&frame.to_string());
    }

    fn notice(&self, message: &str) {
        self.write(&format!("! {message}\n"));
    }
}
