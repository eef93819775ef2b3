//! Common test utilities for sln2csproj CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp solution directory
//! - Fixtures: Reusable solution and project file contents

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
