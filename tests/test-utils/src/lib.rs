//! Test utilities and fixtures for amount formatting tests
//!
//! This module provides:
//! - Token fixtures for common scales
//! - Amount factories and proptest strategies
//! - Assertions on rendered amounts
//! - Test logging setup

pub mod assertions;
pub mod factories;
pub mod fixtures;
pub mod helpers;

pub use assertions::*;
pub use factories::*;
pub use fixtures::*;
pub use helpers::*;
