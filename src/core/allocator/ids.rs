//! Sequential identifier labels
//!
//! Labels follow spreadsheet-column numbering: `A..Z`, then `AA..ZZ`,
//! then `AAA..`. Labels are never reused within one pool.

use super::block::BlockId;

#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator { next: 0 }
    }

    /// Label that the next call to [`IdGenerator::mint`] returns
    pub fn peek(&self) -> BlockId {
        BlockId::new(label(self.next))
    }

    pub fn mint(&mut self) -> BlockId {
        let id = self.peek();
        self.next += 1;
        id
    }

    /// Number of labels handed out so far
    pub fn issued(&self) -> u64 {
        self.next
    }
}

/// Bijective base-26 label for a zero-based index
fn label(index: u64) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    // Only ASCII capitals are pushed
    letters.into_iter().map(char::from).collect()
}
