//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `state.rs` - Storage and selection-cursor behavior
//! - `movegen.rs` - Step/jump generation and edge suppression
//! - `proptest.rs` - Property-based tests

mod movegen;
