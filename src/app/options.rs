use std::time::Duration;

#[derive(Debug, Clone)]
pub struct UiOptions {
    /// How long the event loop waits for input before polling the in-flight
    /// submission again.
    pub tick_rate: Duration,
    pub confirm_exit: bool,
    pub show_help: bool,
    /// Whether the form is wiped after a successful send. Keeping the values
    /// is equally valid; this is a presentation decision, not a core rule.
    pub clear_on_success: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            confirm_exit: true,
            show_help: true,
            clear_on_success: true,
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_confirm_exit(mut self, confirm: bool) -> Self {
        self.confirm_exit = confirm;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    pub fn with_clear_on_success(mut self, clear: bool) -> Self {
        self.clear_on_success = clear;
        self
    }
}
