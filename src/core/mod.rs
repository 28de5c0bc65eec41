//! Buddy pool implementation
//!
//! - [`error`] - Error types
//! - [`command`] - `Request`/`Release` input lines
//! - [`config`] - Pool sizing
//! - [`allocator`] - The pool and its allocation policy
//! - [`render`] - Bordered text layout
//! - [`driver`] - Command loop

pub mod allocator;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod render;

#[cfg(test)]
mod integration_tests;
