//! Bulletproof configuration

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use zkp_core::{GeneratorSet, ZkpResult, DEFAULT_GENERATOR_COUNT};

/// Configuration for bulletproof generation and verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulletproofConfig {
    /// Number of vector generators to derive; at least twice the range bits
    pub generator_count: usize,
}

impl Default for BulletproofConfig {
    fn default() -> Self {
        Self {
            generator_count: DEFAULT_GENERATOR_COUNT,
        }
    }
}

impl BulletproofConfig {
    /// Build the generator set described by this config, reusing the shared
    /// cache for the default size
    pub fn generators(&self) -> ZkpResult<Arc<GeneratorSet>> {
        if self.generator_count == DEFAULT_GENERATOR_COUNT {
            GeneratorSet::shared()
        } else {
            Ok(Arc::new(GeneratorSet::new(self.generator_count)?))
        }
    }
}

/// Optional inputs to proof generation
#[derive(Debug, Clone, Copy, Default)]
pub struct ProveOptions<'a> {
    /// Data the proof is bound to, e.g. a transaction id
    pub extra_commit: Option<&'a [u8]>,
    /// Up to 16 bytes recoverable by rewinding
    pub message: Option<&'a [u8]>,
    /// Lower bound of the proven range
    pub min_value: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_shared_set() {
        let config = BulletproofConfig::default();
        let a = config.generators().unwrap();
        let b = GeneratorSet::shared().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_custom_count() {
        let config = BulletproofConfig { generator_count: 256 };
        assert_eq!(config.generators().unwrap().vector_length(), 128);
    }

    #[test]
    fn test_config_json() {
        let config: BulletproofConfig = serde_json::from_str(r#"{"generator_count":256}"#).unwrap();
        assert_eq!(config.generator_count, 256);
        let json = serde_json::to_string(&BulletproofConfig::default()).unwrap();
        assert_eq!(json, r#"{"generator_count":128}"#);
    }
}
