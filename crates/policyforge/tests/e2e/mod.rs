//! End-to-end tests for `policyforge`.

pub mod binary_test;
pub mod build_flow_test;
pub mod preset_fixture_test;
pub mod render_properties_test;
