//! Testing infrastructure for vartrace integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for declarative test setup
//! - `fixtures`: Run-log builders for sample data generation

pub mod fixtures;
pub mod world;

pub use fixtures::RunLogBuilder;
pub use world::TestWorld;
