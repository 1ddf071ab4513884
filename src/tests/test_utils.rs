//! Test utilities and fixtures for kukui.
//!
//! This module provides reusable strategies and fixtures for property-based
//! and configuration tests.

use proptest::strategy::{BoxedStrategy, Strategy};
use tempfile::TempDir;

/// Maximum key length for generated test data.
const MAX_KEY_LENGTH: usize = 8;

/// Maximum number of keys generated for a single map.
const MAX_KEY_COUNT: usize = 40;

/// Create a temporary directory for test files.
///
/// # Returns
///
/// A result containing the temporary directory or an error if creation fails.
pub fn create_test_dir() -> std::io::Result<TempDir> {
    tempfile::tempdir()
}

/// Generate a strategy for trie keys.
///
/// Keys are drawn from a four-letter alphabet so that generated sets share
/// prefixes often. The empty key is included.
pub fn key_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(proptest::char::range('a', 'd'), 0..=MAX_KEY_LENGTH)
        .prop_map(|chars| chars.into_iter().collect::<String>())
        .boxed()
}

/// Generate a strategy for a list of trie keys, possibly with repeats.
pub fn keys_strategy() -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(key_strategy(), 0..MAX_KEY_COUNT).boxed()
}

/// Test fixture for tests that need files or environment variables.
///
/// Environment variables set through the fixture are removed on drop.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after tests
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: create_test_dir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    ///
    /// # Parameters
    ///
    /// * `key` - The name of the environment variable.
    /// * `value` - The value to set.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key_str = key.into();
        std::env::set_var(&key_str, value.into());
        self.env_vars.push(key_str);
    }

    /// Create a temporary file within the fixture directory.
    ///
    /// # Parameters
    ///
    /// * `contents` - The contents to write to the file.
    /// * `extension` - The file extension to use, including the dot.
    ///
    /// # Returns
    ///
    /// A result containing the path to the file or an error.
    pub fn create_file<C: AsRef<[u8]>>(
        &self,
        contents: C,
        extension: &str,
    ) -> std::io::Result<std::path::PathBuf> {
        let mut file = tempfile::Builder::new()
            .suffix(extension)
            .tempfile_in(&self.temp_dir)?;
        std::io::Write::write_all(&mut file, contents.as_ref())?;
        Ok(file.into_temp_path().keep()?)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
