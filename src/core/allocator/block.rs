//! Blocks and their occupants

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier handed out for an allocated block
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(String);

impl BlockId {
    pub(crate) fn new(label: String) -> Self {
        BlockId(label)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for BlockId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BlockId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Owner marker of a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupant {
    Free,
    Allocated(BlockId),
}

impl Occupant {
    pub fn is_free(&self) -> bool {
        matches!(self, Occupant::Free)
    }

    /// True if the block is allocated to `id`
    pub fn holds(&self, id: &str) -> bool {
        match self {
            Occupant::Allocated(owner) => owner == id,
            Occupant::Free => false,
        }
    }
}

/// Renders the free sentinel as a single space
impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occupant::Free => f.write_str(" "),
            Occupant::Allocated(id) => write!(f, "{}", id),
        }
    }
}

/// A contiguous region of the pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub size: u64,
    pub occupant: Occupant,
}

impl Block {
    pub fn free(size: u64) -> Self {
        Block {
            size,
            occupant: Occupant::Free,
        }
    }

    pub fn is_free(&self) -> bool {
        self.occupant.is_free()
    }

    /// Two blocks can coalesce when both are free and equally sized
    pub fn is_buddy_of(&self, other: &Block) -> bool {
        self.is_free() && other.is_free() && self.size == other.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_block() {
        let block = Block::free(256);
        assert!(block.is_free());
        assert_eq!(block.occupant.to_string(), " ");
    }

    #[test]
    fn test_occupant_holds() {
        let occupant = Occupant::Allocated(BlockId::new("C".into()));
        assert!(occupant.holds("C"));
        assert!(!occupant.holds("D"));
        assert!(!Occupant::Free.holds(" "));
    }

    #[test]
    fn test_buddy_relation() {
        let a = Block::free(128);
        let b = Block::free(128);
        let c = Block::free(256);
        let d = Block {
            size: 128,
            occupant: Occupant::Allocated(BlockId::new("A".into())),
        };

        assert!(a.is_buddy_of(&b));
        assert!(!a.is_buddy_of(&c));
        assert!(!a.is_buddy_of(&d));
    }
}
