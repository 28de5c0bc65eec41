//! Buddy allocator simulator
//!
//! Reads `Request <size>K` / `Release <id>` lines and prints the pool layout
//! after each command.

use buddy_pool::{simulate_file, BuddyPool};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "buddy-sim")]
#[command(about = "Simulate a buddy allocator over a 1024K memory pool")]
struct Args {
    /// File with one command per line
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print final pool statistics as JSON to stderr
    #[arg(long)]
    stats: bool,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `RUST_LOG` directives when set, otherwise the `-v` level
fn env_filter(verbose: u8, rust_log: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(log_level(verbose).into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the layout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(env_filter(
            args.verbose,
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        ))
        .init();

    let mut pool = BuddyPool::new();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let summary = simulate_file(&args.input, &mut out, &mut pool)
        .inspect_err(|e| error!("Stopping on {:?}: {}", args.input, e))?;

    info!("Finished {} commands", summary.commands);

    if args.stats {
        eprintln!("{}", pool.stats().to_json()?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_sets_level_without_rust_log() {
        assert_eq!(env_filter(0, None).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(env_filter(2, None).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(env_filter(9, Some("")).max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn test_rust_log_overrides_verbosity() {
        assert_eq!(
            env_filter(0, Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            env_filter(3, Some("error")).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
    }
}
