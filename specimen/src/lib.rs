//! Specimen-generation engine used by the `autodata` adapter.
//!
//! This crate provides:
//! - The `Fixture` contract and a proptest-backed `DefaultFixture`
//! - Parameter and property descriptors built by explicit registration
//! - Customizations and constructor-selection queries
//! - The parameter customization-source contract and its comparer

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod constructor;
pub mod context;
pub mod customization;
pub mod descriptor;
pub mod error;
pub mod fixture;
pub mod types;

pub use config::FixtureConfig;
pub use constructor::{
    ArgumentKind, ArrayFavoringConstructorQuery, Construct, Constructor, ConstructorQuery,
    ConstructorSignature, GreedyConstructorQuery, ListFavoringConstructorQuery,
    ModestConstructorQuery,
};
pub use context::SpecimenContext;
pub use customization::{
    ConstructorCustomization, Customization, CustomizationPriority, CustomizeAttributeComparer,
    ParameterCustomizationSource,
};
pub use descriptor::{ParameterAttribute, ParameterInfo, PropertyInfo};
pub use error::{SpecimenError, SpecimenResult};
pub use fixture::{DefaultFixture, Fixture};
pub use types::{Specimen, TypeKey};
