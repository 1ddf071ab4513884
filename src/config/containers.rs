//! Validation of container configuration.

use super::{ConfigResult, Validate};
use crate::data_structures::trie_map::TrieMapConfig;
use crate::data_structures::worklists::WorkListConfig;
use crate::error::config::ConfigError;

impl Validate for TrieMapConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie_map.max_depth".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.initial_node_capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie_map.initial_node_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

impl Validate for WorkListConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.stack_initial_capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "worklists.stack_initial_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.fifo_capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "worklists.fifo_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
