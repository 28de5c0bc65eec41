//! Buddy pool
//!
//! The pool is kept as a left-to-right list of blocks whose sizes always sum
//! to the pool size.
//!
//! - Requests pick the smallest free block that fits (leftmost on ties) and
//!   halve it toward the low address until one more halving would be too small.
//! - Releases free the block, then coalesce it with an adjacent free block of
//!   the same size, right neighbor first, until nothing merges.

use crate::allocator::block::{Block, BlockId, Occupant};
use crate::allocator::ids::IdGenerator;
use crate::allocator::PoolAllocator;
use crate::config::PoolConfig;
use crate::error::{BuddyError, Result};
use serde::Serialize;
use tracing::{debug, info, trace};

#[derive(Debug, Clone)]
pub struct BuddyPool {
    /// Blocks ordered by address
    blocks: Vec<Block>,

    config: PoolConfig,

    ids: IdGenerator,
}

impl BuddyPool {
    /// Create a pool with the fixed 1024K size and 64K minimum
    pub fn new() -> Self {
        Self::from_valid_config(PoolConfig::default())
    }

    pub fn with_config(config: PoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: PoolConfig) -> Self {
        info!(
            "Creating buddy pool of {}K (minimum request {}K)",
            config.total_size, config.min_block
        );
        BuddyPool {
            blocks: vec![Block::free(config.total_size)],
            config,
            ids: IdGenerator::new(),
        }
    }

    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Current blocks, lowest address first
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Identifier the next successful request will receive
    pub fn next_id(&self) -> BlockId {
        self.ids.peek()
    }

    /// Block currently allocated to `id`
    pub fn lookup(&self, id: &str) -> Option<&Block> {
        self.position_of(id).map(|i| &self.blocks[i])
    }

    /// Allocate a block for `size` units and return its identifier
    ///
    /// Leaves the pool untouched on error.
    pub fn allocate(&mut self, size: u64) -> Result<BlockId> {
        if size < self.config.min_block {
            return Err(BuddyError::BelowMinimum {
                requested: size,
                minimum: self.config.min_block,
            });
        }

        let index = self
            .best_fit(size)
            .ok_or(BuddyError::OutOfSpace { requested: size })?;

        let index = self.split_down(index, size);
        let id = self.ids.mint();
        self.blocks[index].occupant = Occupant::Allocated(id.clone());

        debug!(
            "Allocated {} ({}K) for a {}K request",
            id, self.blocks[index].size, size
        );
        Ok(id)
    }

    /// Free the block allocated to `id` and coalesce around it
    ///
    /// Leaves the pool untouched on error.
    pub fn free(&mut self, id: &str) -> Result<()> {
        let index = self
            .position_of(id)
            .ok_or_else(|| BuddyError::UnknownId(id.to_string()))?;

        self.blocks[index].occupant = Occupant::Free;
        let merged = self.coalesce(index);

        debug!(
            "Released {} into a free block of {}K",
            id, self.blocks[merged].size
        );
        Ok(())
    }

    /// Smallest free block of at least `size`, leftmost on ties
    fn best_fit(&self, size: u64) -> Option<usize> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| block.is_free() && block.size >= size)
            .min_by_key(|(_, block)| block.size)
            .map(|(index, _)| index)
    }

    /// Halve the free block at `index` while the half still holds `size`.
    ///
    /// The left half keeps the position and is split further; every right
    /// half is inserted right after it. Returns the index of the final block,
    /// which is always `index`.
    fn split_down(&mut self, index: usize, size: u64) -> usize {
        while self.blocks[index].size / 2 >= size {
            let half = self.blocks[index].size / 2;
            trace!("Splitting block {} into two {}K halves", index, half);
            self.blocks[index].size = half;
            self.blocks.insert(index + 1, Block::free(half));
        }
        index
    }

    /// Merge the free block at `index` with equal free neighbors until none
    /// remain. Returns the index of the resulting block.
    fn coalesce(&mut self, mut index: usize) -> usize {
        loop {
            let right = self
                .right_neighbor(index)
                .filter(|&r| self.can_merge(index, r));
            if let Some(right) = right {
                trace!("Merging block {} with right neighbor", index);
                self.blocks[index].size *= 2;
                self.blocks.remove(right);
                continue;
            }

            let left = self
                .left_neighbor(index)
                .filter(|&l| self.can_merge(l, index));
            if let Some(left) = left {
                trace!("Merging block {} with left neighbor", index);
                self.blocks[left].size *= 2;
                self.blocks.remove(index);
                index = left;
                continue;
            }

            return index;
        }
    }

    fn can_merge(&self, a: usize, b: usize) -> bool {
        self.blocks[a].is_buddy_of(&self.blocks[b])
    }

    fn left_neighbor(&self, index: usize) -> Option<usize> {
        index.checked_sub(1)
    }

    fn right_neighbor(&self, index: usize) -> Option<usize> {
        let right = index + 1;
        (right < self.blocks.len()).then_some(right)
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|block| block.occupant.holds(id))
    }

    fn largest_free(&self) -> u64 {
        self.blocks
            .iter()
            .filter(|block| block.is_free())
            .map(|block| block.size)
            .max()
            .unwrap_or(0)
    }

    /// Snapshot of pool usage
    pub fn stats(&self) -> PoolStats {
        let free_size = self.free_size();
        let free_block_count = self.blocks.iter().filter(|b| b.is_free()).count();

        PoolStats {
            total_size: self.config.total_size,
            free_size,
            used_size: self.config.total_size - free_size,
            block_count: self.blocks.len(),
            free_block_count,
            allocated_count: self.blocks.len() - free_block_count,
            largest_free: self.largest_free(),
            fragmentation: self.fragmentation_score(),
        }
    }
}

impl Default for BuddyPool {
    fn default() -> Self {
        Self::new()
    }
}

impl PoolAllocator for BuddyPool {
    fn request(&mut self, size: u64) -> bool {
        match self.allocate(size) {
            Ok(_) => true,
            Err(e) => {
                debug!("Request for {}K failed: {}", size, e);
                false
            }
        }
    }

    fn release(&mut self, id: &str) -> bool {
        match self.free(id) {
            Ok(()) => true,
            Err(e) => {
                debug!("Release of {} failed: {}", id, e);
                false
            }
        }
    }

    fn total_size(&self) -> u64 {
        self.config.total_size
    }

    fn free_size(&self) -> u64 {
        self.blocks
            .iter()
            .filter(|block| block.is_free())
            .map(|block| block.size)
            .sum()
    }

    fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn fragmentation_score(&self) -> f64 {
        // Ideal = the largest free block is all of the free space
        let free = self.free_size();
        if free == 0 {
            return 0.0;
        }
        1.0 - self.largest_free() as f64 / free as f64
    }
}

/// Statistics about pool usage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolStats {
    pub total_size: u64,
    pub free_size: u64,
    pub used_size: u64,
    pub block_count: usize,
    pub free_block_count: usize,
    pub allocated_count: usize,
    pub largest_free: u64,
    pub fragmentation: f64,
}

impl PoolStats {
    /// Pretty-printed JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
