/// Settings for starting a `ReservationSystem`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Capacity of the reservation service's request channel.
    pub buffer_size: usize,
    /// Filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        // mpsc::channel panics on zero capacity
        self.buffer_size = buffer_size.max(1);
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }
}
