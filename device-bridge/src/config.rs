use std::time::Duration;

const DEFAULT_MAIN_ACTIVITY_CLASS: &str = "dev/dioxus/main/MainActivity";

/// Configuration for reaching the host activity
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Fully qualified class name in slash format (e.g., "com/example/myapp/MainActivity")
    pub main_activity_class: String,
    /// How long to wait for the location lookup to answer
    pub result_timeout: Duration,
    /// Delay between two polls of a result slot
    pub poll_interval: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            main_activity_class: DEFAULT_MAIN_ACTIVITY_CLASS.to_string(),
            result_timeout: Duration::from_secs(120),
            poll_interval: Duration::from_millis(100),
        }
    }
}
