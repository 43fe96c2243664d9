//! Shared test utilities for the autodata crates.
//!
//! This crate provides:
//! - Proptest generators for descriptors and generation requests
//! - Mock fixtures and customization sources that record what happens
//! - Sample constructible types and request builders

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod mocks;

pub use generators::*;
