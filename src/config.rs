//! Configuration for deckstore
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a deckstore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Registry Configuration
    // -------------------------------------------------------------------------
    /// Number of independently locked registry shards
    pub registry_shards: usize,

    /// Max number of live decks (None = unbounded)
    pub max_decks: Option<usize>,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            registry_shards: 16,
            max_decks: None,
            listen_addr: "0.0.0.0:8089".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of registry shards
    pub fn registry_shards(mut self, shards: usize) -> Self {
        self.config.registry_shards = shards;
        self
    }

    /// Cap the number of live decks
    pub fn max_decks(mut self, max: Option<usize>) -> Self {
        self.config.max_decks = max;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
