//! Customizations and the parameter customization-source contract.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::constructor::ConstructorQuery;
use crate::descriptor::{ParameterAttribute, ParameterInfo};
use crate::error::SpecimenResult;
use crate::fixture::Fixture;
use crate::types::TypeKey;

/// An instruction that changes how a fixture resolves specimens from now on.
pub trait Customization: fmt::Debug + Send + Sync {
    /// Apply this customization to `fixture`.
    fn customize(&self, fixture: &mut dyn Fixture);

    /// Concrete customization, for inspection.
    fn as_any(&self) -> &dyn Any;
}

/// Associates a constructor query with a target type.
#[derive(Debug, Clone)]
pub struct ConstructorCustomization {
    target: TypeKey,
    query: Arc<dyn ConstructorQuery>,
}

impl ConstructorCustomization {
    /// Create a customization selecting constructors of `target` with `query`.
    #[must_use]
    pub fn new(target: TypeKey, query: impl ConstructorQuery + 'static) -> Self {
        Self {
            target,
            query: Arc::new(query),
        }
    }

    /// Type whose constructor selection is changed.
    #[must_use]
    pub const fn target(&self) -> TypeKey {
        self.target
    }

    /// Query installed for the target type.
    #[must_use]
    pub fn query(&self) -> &Arc<dyn ConstructorQuery> {
        &self.query
    }
}

impl Customization for ConstructorCustomization {
    fn customize(&self, fixture: &mut dyn Fixture) {
        fixture.register_constructor_query(self.target, Arc::clone(&self.query));
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Relative application order of parameter customizations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CustomizationPriority {
    /// Applied before normal customizations
    Early,
    /// Default order
    #[default]
    Normal,
    /// Applied after everything else, e.g. customizations that pin a value
    Late,
}

/// A parameter attribute that supplies a customization for its parameter.
pub trait ParameterCustomizationSource: ParameterAttribute {
    /// Customization for `parameter`.
    ///
    /// # Errors
    ///
    /// Returns `SpecimenError::ArgumentNull` when `parameter` is `None`.
    fn get_customization(
        &self,
        parameter: Option<&ParameterInfo>,
    ) -> SpecimenResult<Box<dyn Customization>>;

    /// Application order relative to other sources on the same parameter.
    fn priority(&self) -> CustomizationPriority {
        CustomizationPriority::Normal
    }
}

/// Orders customization sources by priority.
///
/// Equal priorities compare equal, so a stable sort keeps declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomizeAttributeComparer;

impl CustomizeAttributeComparer {
    /// Compare two sources.
    #[must_use]
    pub fn compare(
        &self,
        x: &dyn ParameterCustomizationSource,
        y: &dyn ParameterCustomizationSource,
    ) -> Ordering {
        x.priority().cmp(&y.priority())
    }

    /// Stable-sort `sources` into application order.
    pub fn sort(&self, sources: &mut [&dyn ParameterCustomizationSource]) {
        sources.sort_by(|x, y| self.compare(*x, *y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructor::ArrayFavoringConstructorQuery;
    use crate::error::SpecimenError;

    #[derive(Debug)]
    struct Labelled {
        label: &'static str,
        priority: CustomizationPriority,
    }

    impl ParameterAttribute for Labelled {
        fn as_customization_source(&self) -> Option<&dyn ParameterCustomizationSource> {
            Some(self)
        }
    }

    impl ParameterCustomizationSource for Labelled {
        fn get_customization(
            &self,
            parameter: Option<&ParameterInfo>,
        ) -> SpecimenResult<Box<dyn Customization>> {
            let parameter = parameter.ok_or(SpecimenError::argument_null("parameter"))?;
            Ok(Box::new(ConstructorCustomization::new(
                parameter.parameter_type(),
                ArrayFavoringConstructorQuery,
            )))
        }

        fn priority(&self) -> CustomizationPriority {
            self.priority
        }
    }

    #[test]
    fn test_priority_order() {
        assert!(CustomizationPriority::Early < CustomizationPriority::Normal);
        assert!(CustomizationPriority::Normal < CustomizationPriority::Late);
        assert_eq!(CustomizationPriority::default(), CustomizationPriority::Normal);
    }

    #[test]
    fn test_comparer_sort_is_stable() {
        let late = Labelled {
            label: "late",
            priority: CustomizationPriority::Late,
        };
        let first = Labelled {
            label: "first",
            priority: CustomizationPriority::Normal,
        };
        let early = Labelled {
            label: "early",
            priority: CustomizationPriority::Early,
        };
        let second = Labelled {
            label: "second",
            priority: CustomizationPriority::Normal,
        };

        let mut sources: Vec<&dyn ParameterCustomizationSource> =
            vec![&late, &first, &early, &second];
        CustomizeAttributeComparer.sort(&mut sources);

        let labels: Vec<_> = sources.iter().map(|source| format!("{source:?}")).collect();
        assert!(labels[0].contains("early"));
        assert!(labels[1].contains("first"));
        assert!(labels[2].contains("second"));
        assert!(labels[3].contains("late"));
    }

    #[test]
    fn test_constructor_customization_targets_parameter_type() {
        let parameter = ParameterInfo::of::<u16>("port", 0);
        let customization = Labelled {
            label: "x",
            priority: CustomizationPriority::Normal,
        }
        .get_customization(Some(&parameter))
        .unwrap();
        let concrete = customization
            .as_any()
            .downcast_ref::<ConstructorCustomization>()
            .unwrap();
        assert_eq!(concrete.target(), TypeKey::of::<u16>());
    }
}
