//! Auto-generated arguments for data-driven tests.
//!
//! This crate provides:
//! - `AutoData`, a data-source generator for test methods with one to five
//!   parameters, resolving every argument from a lazily built fixture
//! - The data source generator and the parameter customization resolver
//! - `FavorArrays` and `FavorLists` constructor-preference attributes
//! - Tracing setup for test binaries

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod attribute;
pub mod customize;
pub mod error;
pub mod favor;
pub mod generator;
pub mod lazy;
pub mod metadata;
pub mod tracing_config;

pub use attribute::{AutoData, DataSourceGeneratorAttribute};
pub use error::{AutoDataError, AutoDataResult};
pub use favor::{FavorArrays, FavorLists};
pub use generator::generate_data_sources;
pub use lazy::{FixtureFactory, LazyFixture};
pub use metadata::{DataGeneratorMetadata, DataGeneratorType, ParameterMetadata};

pub use autodata_specimen as specimen;
