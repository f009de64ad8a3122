//! Cross-layer integration tests for tinycall
//!
//! Tests that drive the whole pipeline through the root crate.

mod properties;
