//! Turns parameter metadata into concrete values.

use autodata_specimen::{Fixture, Specimen};
use tracing::trace;

use crate::customize::customize_fixture;
use crate::error::{AutoDataError, AutoDataResult};
use crate::metadata::ParameterMetadata;

/// Produce one value per metadata entry, in order.
///
/// Inlined entries are emitted unchanged. Generated entries first apply
/// their parameter's customizations to `fixture`, then resolve a fresh
/// specimen, so customizations of entry `i` are in effect for entry `i` and
/// every later entry.
///
/// # Errors
///
/// Fixture and customization failures propagate unchanged. A specimen whose
/// runtime type differs from the declared type yields
/// `AutoDataError::InvalidState`.
pub fn generate_data_sources(
    metadata: Vec<ParameterMetadata>,
    fixture: &mut dyn Fixture,
) -> AutoDataResult<Vec<Specimen>> {
    let mut specimens = Vec::with_capacity(metadata.len());

    for (index, entry) in metadata.into_iter().enumerate() {
        match entry {
            ParameterMetadata::Inlined(value) => {
                trace!(index, "using inlined value");
                specimens.push(value);
            }
            ParameterMetadata::Generated(parameter) => {
                customize_fixture(&parameter, fixture)?;

                trace!(index, parameter = parameter.name(), "resolving specimen");
                let specimen = fixture.resolve(&parameter)?;
                if !parameter.parameter_type().matches(&specimen) {
                    return Err(AutoDataError::invalid_state(format!(
                        "fixture produced a value of another type for parameter '{}' ({})",
                        parameter.name(),
                        parameter.parameter_type()
                    )));
                }
                specimens.push(specimen);
            }
        }
    }

    Ok(specimens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodata_specimen::{DefaultFixture, FixtureConfig, ParameterInfo};

    #[test]
    fn test_inlined_and_generated_are_aligned() {
        let mut fixture = DefaultFixture::new(FixtureConfig::default().with_seed(3));
        let metadata = vec![
            ParameterMetadata::inlined("fixed".to_string()),
            ParameterMetadata::Generated(ParameterInfo::of::<u32>("count", 1)),
            ParameterMetadata::inlined(7_i8),
        ];

        let specimens = generate_data_sources(metadata, &mut fixture).unwrap();
        assert_eq!(specimens.len(), 3);
        assert_eq!(specimens[0].downcast_ref::<String>().unwrap(), "fixed");
        assert!(specimens[1].downcast_ref::<u32>().is_some());
        assert_eq!(specimens[2].downcast_ref::<i8>(), Some(&7));
    }

    #[test]
    fn test_empty_metadata() {
        let mut fixture = DefaultFixture::new(FixtureConfig::default());
        assert!(generate_data_sources(Vec::new(), &mut fixture).unwrap().is_empty());
    }
}
