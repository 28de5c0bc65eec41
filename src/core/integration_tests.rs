//! Integration tests across the core modules
//!
//! Tests the interaction between:
//! - Command parsing
//! - The buddy pool
//! - Rendering
//! - The file-driven command loop

#[cfg(test)]
mod tests {
    use crate::core::allocator::buddy::BuddyPool;
    use crate::core::allocator::PoolAllocator;
    use crate::core::command::Command;
    use crate::core::driver::simulate_file;
    use crate::core::error::BuddyError;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_parsed_commands_drive_pool() {
        let mut pool = BuddyPool::new();

        for line in ["Request 100K", "Request 240K", "Request 64K", "Release B"] {
            let cmd = Command::parse(line).unwrap();
            assert!(pool.process(&cmd), "{line}");
        }

        let sizes: Vec<u64> = pool.blocks().iter().map(|b| b.size).collect();
        assert_eq!(sizes, vec![128, 64, 64, 256, 512]);
        assert_eq!(pool.free_size(), 1024 - 128 - 64);
    }

    #[test]
    fn test_simulate_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.txt");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Request 1024K").unwrap();
        writeln!(file, "Release A").unwrap();
        drop(file);

        let mut pool = BuddyPool::new();
        let mut out = Vec::new();
        let summary = simulate_file(&path, &mut out, &mut pool).unwrap();

        assert_eq!(summary.commands, 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("| A   1024K  |"));
        assert!(text.ends_with("|     1024K  |\n--------------\n\n"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut pool = BuddyPool::new();
        let mut out = Vec::new();

        let result = simulate_file(temp_dir.path().join("absent.txt"), &mut out, &mut pool);
        assert!(matches!(result, Err(BuddyError::Io(_))));
        assert!(out.is_empty());
    }
}
