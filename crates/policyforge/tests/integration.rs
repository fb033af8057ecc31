//! # Integration Tests for `policyforge`
//!
//! ## Test Organization
//!
//! - `common/` - Shared fixtures and proptest strategies
//! - `e2e/` - End-to-end tests
//!   - `preset_fixture_test` - Every preset against its golden document
//!   - `build_flow_test` - Configuration files through `build`
//!   - `render_properties_test` - Renderer properties
//!   - `binary_test` - The compiled binary's exit codes and streams
//! - `unit/` - CLI parsing and dispatch details
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test integration
//! cargo test --test integration preset_fixture
//! ```

#![allow(clippy::expect_used)]

mod common;
mod e2e;
mod unit;

#[cfg(test)]
mod tests {
    use super::common;

    #[test]
    fn test_fixture_loading() {
        let fixture = common::load_fixture("presets/deny-all.json").expect("fixture should load");
        assert_eq!(fixture["effect"], "EFFECT_DENY");
        assert!(fixture.get("condition").is_none());
    }

    #[test]
    fn test_missing_fixture() {
        let result = common::load_fixture("presets/does-not-exist.json");
        assert!(matches!(result, Err(common::FixtureError::NotFound(_))));
    }

    #[test]
    fn test_temp_data_dir_creation() {
        let temp_dir = common::temp_data_dir();
        let path = temp_dir.path();
        assert!(path.is_dir());

        let test_file = path.join("test.json");
        std::fs::write(&test_file, "{}").expect("Should be able to write to temp dir");
        assert!(test_file.exists());
    }
}
