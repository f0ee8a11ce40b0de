//! Common test utilities with tracing setup.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//!
//! #[test]
//! fn my_test() {
//!     common::init_tracing();
//!     // ... test code
//! }
//! ```
//!
//! Library events only appear when the crate is built with `--features tracing`.
//!
//! # Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Filter directives (e.g., `ordtree=debug,ordtree::tree=trace`)
//! - `ORDTREE_LOG_DIR`: Log directory (default: `logs/`)
//! - `ORDTREE_LOG_CONSOLE`: Set to "0" to disable console output
//!
//! # Log Files
//!
//! Logs are written to `logs/ordtree.jsonl` as newline-delimited JSON.
//!
//! ```bash
//! # Follow fixup decisions for one test run
//! RUST_LOG=ordtree=trace cargo test --features tracing --test scenario_tests
//! cat logs/ordtree.jsonl | jq 'select(.fields.message | startswith("fixup"))'
//! ```

#![allow(dead_code)]

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Once;

use ordtree::{Comparator, OrderedTree};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Ensures tracing is only initialized once across all tests.
static INIT: Once = Once::new();

/// Initialize the tracing subscriber with file and console logging.
///
/// Safe to call multiple times - only the first call takes effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        setup_tracing();
    });
}

/// Configuration for tracing setup.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Directory for log files.
    pub log_dir: PathBuf,
    /// Log file name.
    pub log_file: String,
    /// Enable console output.
    pub console_enabled: bool,
    /// Default log level if RUST_LOG is not set.
    pub default_level: Level,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file: "ordtree.jsonl".to_string(),
            console_enabled: true,
            default_level: Level::INFO,
        }
    }
}

impl TracingConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("ORDTREE_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        if env::var("ORDTREE_LOG_CONSOLE").is_ok_and(|v| v == "0") {
            config.console_enabled = false;
        }

        config
    }
}

/// Create an EnvFilter from RUST_LOG or use default level.
fn make_filter(default_level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("{default_level}")))
}

fn setup_tracing() {
    let config = TracingConfig::from_env();

    // === Console Layer ===
    let console_layer = config.console_enabled.then(|| {
        tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_line_number(true)
            .compact()
            .with_filter(make_filter(config.default_level))
    });

    // === File Layer (NDJSON format) ===
    // Skipped when the log directory cannot be created (read-only checkouts).
    let file_layer = std::fs::create_dir_all(&config.log_dir)
        .and_then(|()| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(config.log_dir.join(&config.log_file))
        })
        .ok()
        .map(|file| {
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Mutex::new(file))
                .with_target(true)
                .with_line_number(true)
                .json()
                .with_filter(make_filter(config.default_level))
        });

    // try_init: another test binary helper may already have installed one
    let _ = Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

// ============================================================================
//  Shared assertions
// ============================================================================

/// Upper bound on the height of a red-black tree with `n` nodes.
pub fn height_bound(n: usize) -> f64 {
    2.0 * ((n + 1) as f64).log2()
}

/// Panic with the violation if the tree is not a valid red-black tree.
pub fn assert_valid<T, C: Comparator<T>>(tree: &OrderedTree<T, C>) {
    if let Err(violation) = tree.validate() {
        panic!("invariant violated after {} inserts: {violation}", tree.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_init() {
        init_tracing();
        tracing::info!("Tracing initialized successfully");
        tracing::debug!(value = 42, "Debug event");
    }

    #[test]
    fn test_height_bound() {
        assert!((height_bound(0) - 0.0).abs() < f64::EPSILON);
        assert!((height_bound(1) - 2.0).abs() < f64::EPSILON);
        assert!(height_bound(1000) < 20.0);
    }
}
