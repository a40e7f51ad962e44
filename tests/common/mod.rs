//! Consolidated test utilities for page-window
//!
//! Integration tests run the real binary against an isolated config
//! directory and temporary item files.

pub mod assertions;
pub mod fixtures;
