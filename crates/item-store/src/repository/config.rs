//! Store Configuration

use std::time::Duration;

use crate::domain::{sample_items, Item};

/// Slot key used by the demo
pub const DEFAULT_STORAGE_KEY: &str = "crudItems";

/// Delay before a list resolves
pub const DEFAULT_LIST_DELAY: Duration = Duration::from_millis(500);

/// Delay before a create, update or delete resolves
pub const DEFAULT_WRITE_DELAY: Duration = Duration::from_millis(300);

/// Tunables of the simulated backend
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Name of the persistent slot
    pub storage_key: String,
    pub list_delay: Duration,
    pub write_delay: Duration,
    /// Items written on the first list of an empty slot
    pub seed: Vec<Item>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            list_delay: DEFAULT_LIST_DELAY,
            write_delay: DEFAULT_WRITE_DELAY,
            seed: sample_items(),
        }
    }
}

impl StoreConfig {
    /// Default configuration with all delays removed
    pub fn instant() -> Self {
        Self::default().with_delays(Duration::ZERO, Duration::ZERO)
    }

    pub fn with_delays(mut self, list_delay: Duration, write_delay: Duration) -> Self {
        self.list_delay = list_delay;
        self.write_delay = write_delay;
        self
    }

    pub fn with_seed(mut self, seed: Vec<Item>) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.storage_key, "crudItems");
        assert_eq!(config.list_delay, Duration::from_millis(500));
        assert_eq!(config.write_delay, Duration::from_millis(300));
        assert_eq!(config.seed.len(), 2);
    }

    #[test]
    fn test_instant_keeps_key_and_seed() {
        let config = StoreConfig::instant();
        assert!(config.list_delay.is_zero());
        assert!(config.write_delay.is_zero());
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.seed, sample_items());
    }
}
