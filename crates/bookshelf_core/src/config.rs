//! Catalog runtime configuration.
//!
//! # Responsibility
//! - Hold the knobs a composition root chooses at startup.
//! - Provide defaults that reproduce the stock catalog behavior.

use crate::import::csv_import::{ColumnMapping, ImportOptions};
use std::time::Duration;

/// Simulated backend round-trip applied to every service call.
pub const DEFAULT_LATENCY_MS: u64 = 300;

/// Startup configuration for a catalog session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Delay awaited by every service operation before it returns.
    pub latency: Duration,
    /// Seed the store with the sample catalog.
    pub seed_sample_catalog: bool,
    pub import: ImportOptions,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
            seed_sample_catalog: true,
            import: ImportOptions::default(),
        }
    }
}

impl CatalogConfig {
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_sample_catalog(mut self, seed: bool) -> Self {
        self.seed_sample_catalog = seed;
        self
    }

    pub fn with_column_mapping(mut self, columns: ColumnMapping) -> Self {
        self.import.columns = columns;
        self
    }

    /// Configuration for tests: no latency, empty store.
    pub fn immediate() -> Self {
        Self::default()
            .with_latency(Duration::ZERO)
            .with_sample_catalog(false)
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogConfig, DEFAULT_LATENCY_MS};
    use crate::import::csv_import::ColumnMapping;
    use std::time::Duration;

    #[test]
    fn defaults_match_stock_behavior() {
        let config = CatalogConfig::default();
        assert_eq!(config.latency, Duration::from_millis(DEFAULT_LATENCY_MS));
        assert!(config.seed_sample_catalog);
        assert_eq!(config.import.columns, ColumnMapping::Positional);
    }

    #[test]
    fn immediate_disables_latency_and_seeding() {
        let config = CatalogConfig::immediate().with_column_mapping(ColumnMapping::ByHeader);
        assert_eq!(config.latency, Duration::ZERO);
        assert!(!config.seed_sample_catalog);
        assert_eq!(config.import.columns, ColumnMapping::ByHeader);
    }
}
