//! Integration tests - Tests that compile complete patterns and documents
//!
//! These tests verify that builders, the naming environment and clauses work
//! together to produce the expected Cypher text and parameters.

mod document_tests;
mod pattern_scenario_tests;
