//! Pool sizing
//!
//! The simulated program always runs with [`POOL_SIZE`] and [`MIN_BLOCK`].
//! [`PoolConfig`] lets library users build smaller or larger pools.

use crate::error::{BuddyError, Result};
use serde::{Deserialize, Serialize};

/// Size of the whole pool, in units (K)
pub const POOL_SIZE: u64 = 1024;

/// Smallest request the pool will satisfy, in units (K)
pub const MIN_BLOCK: u64 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Total pool size; must be a power of two
    pub total_size: u64,

    /// Minimum request size; must be a power of two no larger than `total_size`
    pub min_block: u64,
}

impl PoolConfig {
    pub fn new(total_size: u64, min_block: u64) -> Self {
        PoolConfig {
            total_size,
            min_block,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.total_size.is_power_of_two() {
            return Err(BuddyError::InvalidConfig(format!(
                "pool size {} is not a power of two",
                self.total_size
            )));
        }
        if !self.min_block.is_power_of_two() {
            return Err(BuddyError::InvalidConfig(format!(
                "minimum block {} is not a power of two",
                self.min_block
            )));
        }
        if self.min_block > self.total_size {
            return Err(BuddyError::InvalidConfig(format!(
                "minimum block {} exceeds pool size {}",
                self.min_block, self.total_size
            )));
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        PoolConfig::new(POOL_SIZE, MIN_BLOCK)
    }
}
