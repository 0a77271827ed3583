//! Testing utilities for collector client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use collector_client::testing::load_fixture;
//!
//! let fixture = load_fixture("configuration/configuration.json");
//! ```

use std::path::Path;

/// Load a JSON fixture file from the crate's `fixtures/` directory.
///
/// # Panics
///
/// Panics if the file is missing or not valid JSON; fixtures are test
/// assets, so failing loudly is the right behavior.
pub fn load_fixture(relative_path: &str) -> serde_json::Value {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(relative_path);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("fixture {} is not valid JSON: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_fixture_parses_json() {
        let fixture = load_fixture("configuration/configuration.json");
        assert!(fixture.get("inputs").is_some());
    }
}
