//! Parameter and property descriptors.
//!
//! Descriptors are built by explicit registration: the constructor used
//! decides how the engine produces a value for the declared type.

use std::fmt;
use std::sync::Arc;

use proptest::arbitrary::Arbitrary;

use crate::constructor::Construct;
use crate::context::SpecimenContext;
use crate::customization::ParameterCustomizationSource;
use crate::error::SpecimenResult;
use crate::types::{Specimen, TypeKey};

/// Build hook producing a specimen for a descriptor's declared type.
pub type BuildFn = fn(&mut SpecimenContext<'_>) -> SpecimenResult<Specimen>;

/// An attribute attached to a test-method parameter.
pub trait ParameterAttribute: fmt::Debug + Send + Sync {
    /// This attribute as a customization source, if it is one.
    fn as_customization_source(&self) -> Option<&dyn ParameterCustomizationSource> {
        None
    }
}

/// Descriptor of one formal parameter of a test method.
#[derive(Clone)]
pub struct ParameterInfo {
    name: String,
    position: usize,
    parameter_type: TypeKey,
    build: BuildFn,
    attributes: Vec<Arc<dyn ParameterAttribute>>,
}

impl ParameterInfo {
    /// Descriptor for a parameter generated through proptest's `Arbitrary`.
    #[must_use]
    pub fn of<T>(name: impl Into<String>, position: usize) -> Self
    where
        T: Arbitrary + Send + 'static,
    {
        Self::with_build(name, position, TypeKey::of::<T>(), build_arbitrary::<T>)
    }

    /// Descriptor for a parameter built through one of `T`'s constructors.
    #[must_use]
    pub fn constructed<T: Construct>(name: impl Into<String>, position: usize) -> Self {
        Self::with_build(name, position, TypeKey::of::<T>(), build_constructed::<T>)
    }

    /// Descriptor with a custom build hook.
    #[must_use]
    pub fn with_build(
        name: impl Into<String>,
        position: usize,
        parameter_type: TypeKey,
        build: BuildFn,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            parameter_type,
            build,
            attributes: Vec::new(),
        }
    }

    /// Attach an attribute. Declaration order is preserved.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl ParameterAttribute + 'static) -> Self {
        self.attributes.push(Arc::new(attribute));
        self
    }

    /// Parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zero-based position in the method signature.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Declared type.
    #[must_use]
    pub const fn parameter_type(&self) -> TypeKey {
        self.parameter_type
    }

    /// Attached attributes in declaration order.
    #[must_use]
    pub fn attributes(&self) -> &[Arc<dyn ParameterAttribute>] {
        &self.attributes
    }

    /// Attached attributes that act as customization sources.
    pub fn customization_sources(&self) -> impl Iterator<Item = &dyn ParameterCustomizationSource> {
        self.attributes
            .iter()
            .filter_map(|attribute| attribute.as_customization_source())
    }

    pub(crate) fn build(&self, context: &mut SpecimenContext<'_>) -> SpecimenResult<Specimen> {
        (self.build)(context)
    }
}

impl fmt::Debug for ParameterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterInfo")
            .field("name", &self.name)
            .field("position", &self.position)
            .field("parameter_type", &self.parameter_type)
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}

fn build_arbitrary<T>(context: &mut SpecimenContext<'_>) -> SpecimenResult<Specimen>
where
    T: Arbitrary + Send + 'static,
{
    context.create::<T>().map(|value| Box::new(value) as Specimen)
}

fn build_constructed<T: Construct>(context: &mut SpecimenContext<'_>) -> SpecimenResult<Specimen> {
    context.construct::<T>().map(|value| Box::new(value) as Specimen)
}

/// Descriptor of a property bound by a data generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    /// Property name
    pub name: String,
    /// Declared type
    pub property_type: TypeKey,
}

impl PropertyInfo {
    /// Create a property descriptor for type `T`.
    #[must_use]
    pub fn of<T: 'static>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            property_type: TypeKey::of::<T>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Marker;

    impl ParameterAttribute for Marker {}

    #[test]
    fn test_descriptor_accessors() {
        let parameter = ParameterInfo::of::<u8>("count", 2).with_attribute(Marker);
        assert_eq!(parameter.name(), "count");
        assert_eq!(parameter.position(), 2);
        assert_eq!(parameter.parameter_type(), TypeKey::of::<u8>());
        assert_eq!(parameter.attributes().len(), 1);
    }

    #[test]
    fn test_plain_attributes_are_not_customization_sources() {
        let parameter = ParameterInfo::of::<u8>("count", 0).with_attribute(Marker);
        assert_eq!(parameter.customization_sources().count(), 0);
    }
}
