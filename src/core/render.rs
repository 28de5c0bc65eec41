//! Text layout of the pool
//!
//! ```text
//! --------------------------------------------------
//! | A    128K |      128K |      256K |      512K  |
//! --------------------------------------------------
//! ```

use crate::allocator::block::Block;
use crate::allocator::buddy::BuddyPool;
use std::fmt::{self, Write};

/// Bordered row of cells over a slice of blocks
///
/// The border is as wide as the cell row, so labels longer than one letter
/// widen their cell and the border with it.
pub struct Layout<'a>(pub &'a [Block]);

/// Render blocks as a bordered row of cells; each line ends in `\n`
pub fn layout(blocks: &[Block]) -> String {
    Layout(blocks).to_string()
}

pub fn write_layout<W: Write>(out: &mut W, blocks: &[Block]) -> fmt::Result {
    let row = cell_row(blocks);
    let border = "-".repeat(row.chars().count());

    writeln!(out, "{}", border)?;
    writeln!(out, "{}", row)?;
    writeln!(out, "{}", border)
}

fn cell_row(blocks: &[Block]) -> String {
    let mut row: String = blocks
        .iter()
        .map(|block| {
            let size = format!("{}K", block.size);
            format!("| {}   {:>5} ", block.occupant, size)
        })
        .collect();
    row.push_str(" |");
    row
}

impl fmt::Display for Layout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_layout(f, self.0)
    }
}

impl fmt::Display for BuddyPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_layout(f, self.blocks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_pool() {
        let pool = BuddyPool::new();
        let expected = "\
--------------
|     1024K  |
--------------
";
        assert_eq!(pool.to_string(), expected);
    }

    #[test]
    fn test_split_pool() {
        let mut pool = BuddyPool::new();
        pool.allocate(100).unwrap();
        let expected = "\
--------------------------------------------------
| A    128K |      128K |      256K |      512K  |
--------------------------------------------------
";
        assert_eq!(pool.to_string(), expected);
    }

    #[test]
    fn test_border_width_tracks_cell_count() {
        let mut pool = BuddyPool::new();
        assert_eq!(layout(pool.blocks()).lines().next().unwrap().len(), 14);

        pool.allocate(64).unwrap();
        let text = pool.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].len(), 14 + 4 * 12);
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_border_aligns_with_long_labels() {
        let mut pool = BuddyPool::new();
        // A..P fill the pool; freeing A..L leaves room for Q..Z, AA and AB
        for _ in 0..16 {
            pool.allocate(64).unwrap();
        }
        for id in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"] {
            pool.free(id).unwrap();
        }
        for _ in 0..12 {
            pool.allocate(64).unwrap();
        }
        assert!(pool.lookup("AB").is_some());

        let text = pool.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("| AA     64K | AB     64K |"));
        assert_eq!(lines[0].len(), lines[1].len());
        assert_eq!(lines[2], lines[0]);
        assert!(lines[0].len() > 14 + 15 * 12);
    }

    #[test]
    fn test_layout_matches_display() {
        let mut pool = BuddyPool::new();
        pool.allocate(64).unwrap();
        assert_eq!(layout(pool.blocks()), pool.to_string());
    }
}
