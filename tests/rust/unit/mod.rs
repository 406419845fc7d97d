//! Unit tests - Tests that exercise single components through the public API
//!
//! These tests do not touch the filesystem beyond temporary files.

mod config_tests;
mod quantifier_tests;
