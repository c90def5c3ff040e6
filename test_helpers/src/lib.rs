//! Test helpers shared across crates.
//!
//! This crate currently provides temporary project trees used to exercise
//! configuration discovery against a real filesystem.

pub mod tree;
