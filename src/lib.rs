//! Kukui Library
//!
//! Generic containers for algorithms that work over sequences and pending
//! work items:
//!
//! - [`data_structures::trie_map`]: a map keyed by element sequences, stored
//!   as a trie with pluggable per-node branch storage
//! - [`data_structures::worklists`]: an array stack, a circular FIFO queue and
//!   a linked FIFO queue behind a common worklist interface
//!
//! The containers are single-threaded. Each operation that can fail returns
//! a container-specific error, all of which convert into
//! [`error::KukuiError`].

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for kukui.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing error reporter and loads the default configuration
/// into the global slot.
pub fn init() -> error::KukuiResult<()> {
    let reporter = error::TracingErrorReporter::new();
    error::set_error_reporter(std::sync::Arc::new(reporter));

    config::init_default_config()?;

    Ok(())
}
