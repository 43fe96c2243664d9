//! Applies parameter-level customizations to a fixture.

use autodata_specimen::{
    CustomizeAttributeComparer, Fixture, ParameterCustomizationSource, ParameterInfo,
};
use tracing::debug;

use crate::error::AutoDataResult;

/// Apply every customization source attached to `parameter`, in comparer
/// order, to `fixture`.
///
/// Parameters without customization sources leave the fixture untouched.
///
/// # Errors
///
/// Propagates failures from a source's `get_customization`.
pub fn customize_fixture(
    parameter: &ParameterInfo,
    fixture: &mut dyn Fixture,
) -> AutoDataResult<()> {
    let mut sources: Vec<&dyn ParameterCustomizationSource> =
        parameter.customization_sources().collect();
    CustomizeAttributeComparer.sort(&mut sources);

    for source in sources {
        let customization = source.get_customization(Some(parameter))?;
        debug!(
            parameter = parameter.name(),
            position = parameter.position(),
            ?customization,
            "customizing fixture"
        );
        fixture.customize(customization.as_ref());
    }
    Ok(())
}
