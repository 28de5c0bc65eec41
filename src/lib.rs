//! # buddy-pool - Buddy Allocator Simulation
//!
//! `buddy-pool` models a fixed 1024K memory pool managed by a buddy allocator.
//! The pool is split into power-of-two blocks on demand and coalesced again
//! when blocks are released:
//!
//! - **Best fit**: requests take the smallest free block that fits, leftmost on ties
//! - **Split left**: the chosen block is halved toward the low address
//! - **Coalesce**: released blocks merge with equal free neighbors, right first
//! - **Text layout**: the pool renders as a bordered row of cells
//!
//! ## Quick Start
//!
//! ```rust
//! use buddy_pool::{BuddyPool, Command, PoolAllocator};
//!
//! let mut pool = BuddyPool::new();
//!
//! let cmd: Command = "Request 100K".parse().unwrap();
//! assert!(pool.process(&cmd));
//!
//! // 1024 -> 512 -> 256 -> 128, the first 128 goes to A
//! let sizes: Vec<u64> = pool.blocks().iter().map(|b| b.size).collect();
//! assert_eq!(sizes, vec![128, 128, 256, 512]);
//!
//! assert!(pool.release("A"));
//! assert_eq!(pool.block_count(), 1);
//! println!("{}", pool);
//! ```
//!
//! ## Running a command stream
//!
//! ```rust
//! use buddy_pool::{simulate, BuddyPool};
//!
//! # fn main() -> buddy_pool::Result<()> {
//! let input = "Request 240K\nRequest 64K\nRelease A\n";
//! let mut pool = BuddyPool::new();
//! let mut out = Vec::new();
//!
//! let summary = simulate(input.as_bytes(), &mut out, &mut pool)?;
//! assert_eq!(summary.commands, 3);
//! # Ok(())
//! # }
//! ```

pub mod core;

// Re-export core modules internally so crate:: paths in core still work
#[allow(unused_imports)]
pub(crate) use self::core::{allocator, command, config, driver, error, render};

pub use crate::core::{
    allocator::{
        block::{Block, BlockId, Occupant},
        buddy::{BuddyPool, PoolStats},
        PoolAllocator,
    },
    command::Command,
    config::{PoolConfig, MIN_BLOCK, POOL_SIZE},
    driver::{simulate, simulate_file, RunSummary},
    error::{BuddyError, ParseError, Result},
    render::{layout, Layout},
};
