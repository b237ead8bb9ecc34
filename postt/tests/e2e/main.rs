//! End-to-End Tests for postt
//!
//! These tests run the built binary against the fixtures in `e2e/fixtures`.

mod cli_tests;
