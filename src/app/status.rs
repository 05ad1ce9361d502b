#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Press Ctrl+S to send your message.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn issues_remaining(&mut self, count: usize) {
        self.message = format!("{count} issue(s) remaining");
    }

    pub fn sending(&mut self) {
        self.message = "Sending your message…".to_string();
    }

    pub fn sent(&mut self) {
        self.message = "Message sent. Thanks for reaching out!".to_string();
    }

    pub fn send_failed(&mut self, reason: &str) {
        self.message = format!("Send failed: {reason}. Your input was kept.");
    }

    pub fn pending_exit(&mut self) {
        self.message = "Unsent message. Press Ctrl+Q again to quit anyway.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
