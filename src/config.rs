use std::env;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    /// Artificial pacing for the initial load, in milliseconds. Purely
    /// cosmetic (drives the consumer's spinner); it gates no correctness.
    pub load_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            load_delay_ms: env::var("LOAD_DELAY_MS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .expect("LOAD_DELAY_MS must be a number"),
        }
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}
