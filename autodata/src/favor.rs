//! Constructor-preference attributes.
//!
//! Attached to a parameter, these bias construction of the parameter's
//! declared type toward constructors taking array or list arguments.

use autodata_specimen::{
    ArrayFavoringConstructorQuery, ConstructorCustomization, Customization,
    ListFavoringConstructorQuery, ParameterAttribute, ParameterCustomizationSource, ParameterInfo,
    SpecimenError, SpecimenResult,
};

/// Prefer constructors with array arguments for the parameter's type.
#[derive(Debug, Clone, Copy, Default)]
pub struct FavorArrays;

impl ParameterAttribute for FavorArrays {
    fn as_customization_source(&self) -> Option<&dyn ParameterCustomizationSource> {
        Some(self)
    }
}

impl ParameterCustomizationSource for FavorArrays {
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
}

/// Prefer constructors with list arguments for the parameter's type.
#[derive(Debug, Clone, Copy, Default)]
pub struct FavorLists;

impl ParameterAttribute for FavorLists {
    fn as_customization_source(&self) -> Option<&dyn ParameterCustomizationSource> {
        Some(self)
    }
}

impl ParameterCustomizationSource for FavorLists {
    fn get_customization(
        &self,
        parameter: Option<&ParameterInfo>,
    ) -> SpecimenResult<Box<dyn Customization>> {
        let parameter = parameter.ok_or(SpecimenError::argument_null("parameter"))?;
        Ok(Box::new(ConstructorCustomization::new(
            parameter.parameter_type(),
            ListFavoringConstructorQuery,
        )))
    }
}
