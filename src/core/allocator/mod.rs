//! Partition allocators for the simulated memory pool
//!
//! The pool is an ordered run of power-of-two blocks:
//! - [`block`] - Blocks, occupants and identifiers
//! - [`ids`] - Sequential identifier labels
//! - [`buddy`] - Best-fit buddy pool with split and coalesce

pub mod block;
pub mod buddy;
pub mod ids;

use crate::command::Command;

/// Allocator trait
///
/// The driver only needs a success flag per command; the reason for a
/// failure is an allocator concern.
pub trait PoolAllocator {
    /// Allocate a block that can hold `size` units
    fn request(&mut self, size: u64) -> bool;

    /// Free the block allocated to `id`
    fn release(&mut self, id: &str) -> bool;

    /// Total size of the pool
    fn total_size(&self) -> u64;

    /// Sum of all free block sizes
    fn free_size(&self) -> u64;

    /// Number of blocks currently in the pool
    fn block_count(&self) -> usize;

    /// Calculate fragmentation score (0.0 = all free space contiguous)
    fn fragmentation_score(&self) -> f64;

    /// Apply a parsed command
    fn process(&mut self, command: &Command) -> bool {
        match command {
            Command::Request { size } => self.request(*size),
            Command::Release { id } => self.release(id),
        }
    }
}
