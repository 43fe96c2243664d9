//! The `AutoData` data-source generator.
//!
//! `AutoData<(T1, ..., Tn)>` supplies one argument tuple for a test method
//! with `n` parameters (1 to 5), each argument resolved from a fixture that
//! is built on first use and kept for the generator's lifetime.
//!
//! With a single declared type, an empty descriptor list is an error; with
//! two to five declared types it yields no tuples.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use autodata_specimen::{DefaultFixture, Fixture, ParameterInfo, Specimen, TypeKey};

use crate::error::{AutoDataError, AutoDataResult};
use crate::generator::generate_data_sources;
use crate::lazy::{FixtureFactory, LazyFixture};
use crate::metadata::{DataGeneratorMetadata, ParameterMetadata};

/// The host's contract for programmatic test-argument sources.
pub trait DataSourceGeneratorAttribute {
    /// One set of test-method arguments.
    type Output;

    /// Produce argument sets for the test method described by `metadata`.
    ///
    /// # Errors
    ///
    /// Returns an error when `metadata` does not fit this generator or a
    /// value cannot be produced.
    fn generate_data_sources(
        &self,
        metadata: &DataGeneratorMetadata,
    ) -> AutoDataResult<Vec<Self::Output>>;
}

/// Supplies auto-generated arguments for a test method whose parameter types
/// are the tuple `T`.
pub struct AutoData<T> {
    fixture: LazyFixture,
    declared: PhantomData<fn() -> T>,
}

impl<T> AutoData<T> {
    /// Generator backed by a `DefaultFixture`.
    #[must_use]
    pub fn new() -> Self {
        Self::from_lazy(LazyFixture::new(Arc::new(|| {
            Box::new(DefaultFixture::default()) as Box<dyn Fixture>
        })))
    }

    /// Generator whose fixture is built on demand by `fixture_factory`.
    ///
    /// # Errors
    ///
    /// Returns `AutoDataError::ArgumentNull` when `fixture_factory` is `None`.
    pub fn with_fixture_factory(fixture_factory: Option<FixtureFactory>) -> AutoDataResult<Self> {
        let factory = fixture_factory.ok_or(AutoDataError::ArgumentNull("fixture_factory"))?;
        Ok(Self::from_lazy(LazyFixture::new(factory)))
    }

    /// Generator whose fixture is built on demand by `factory`.
    #[must_use]
    pub fn with_fixture<F, X>(factory: F) -> Self
    where
        F: Fn() -> X + Send + Sync + 'static,
        X: Fixture + 'static,
    {
        Self::from_lazy(LazyFixture::new(Arc::new(move || {
            Box::new(factory()) as Box<dyn Fixture>
        })))
    }

    /// Whether the fixture has been built.
    #[must_use]
    pub fn is_fixture_created(&self) -> bool {
        self.fixture.is_created()
    }

    /// Run `f` with exclusive access to the fixture, building it if needed.
    ///
    /// The fixture lock is held while `f` runs. Calling
    /// `generate_data_sources` or `with_fixture_mut` on the same generator
    /// from inside `f` deadlocks.
    pub fn with_fixture_mut<R>(&self, f: impl FnOnce(&mut dyn Fixture) -> R) -> R {
        self.fixture.with(f)
    }

    const fn from_lazy(fixture: LazyFixture) -> Self {
        Self {
            fixture,
            declared: PhantomData,
        }
    }

    fn generate(&self, parameters: &[ParameterInfo]) -> AutoDataResult<Vec<Specimen>> {
        let metadata: Vec<ParameterMetadata> = parameters
            .iter()
            .cloned()
            .map(ParameterMetadata::Generated)
            .collect();
        self.fixture.with(|fixture| generate_data_sources(metadata, fixture))
    }
}

impl<T> Default for AutoData<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for AutoData<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoData")
            .field("declared", &std::any::type_name::<T>())
            .field("fixture", &self.fixture)
            .finish()
    }
}

fn require_parameters(metadata: &DataGeneratorMetadata) -> AutoDataResult<&[ParameterInfo]> {
    metadata
        .parameter_infos
        .as_deref()
        .ok_or(AutoDataError::ArgumentNull("parameter_infos"))
}

fn validate_declared(parameters: &[ParameterInfo], declared: &[TypeKey]) -> AutoDataResult<()> {
    if parameters.len() != declared.len() {
        return Err(AutoDataError::argument(format!(
            "parameter_infos length ({}) can not differ from the number of declared types ({})",
            parameters.len(),
            declared.len()
        )));
    }

    for (parameter, expected) in parameters.iter().zip(declared) {
        if parameter.parameter_type() != *expected {
            return Err(AutoDataError::argument(format!(
                "parameter '{}' at position {} is declared as {} but the generator expects {}",
                parameter.name(),
                parameter.position(),
                parameter.parameter_type(),
                expected
            )));
        }
    }
    Ok(())
}

fn take<T: 'static>(
    specimens: &mut impl Iterator<Item = Specimen>,
    position: usize,
) -> AutoDataResult<T> {
    let specimen = specimens.next().ok_or_else(|| {
        AutoDataError::invalid_state(format!("no specimen produced for position {position}"))
    })?;
    specimen.downcast::<T>().map(|value| *value).map_err(|_| {
        AutoDataError::invalid_state(format!(
            "specimen at position {position} is not a {}",
            std::any::type_name::<T>()
        ))
    })
}

impl<T1: 'static> DataSourceGeneratorAttribute for AutoData<(T1,)> {
    type Output = (T1,);

    fn generate_data_sources(
        &self,
        metadata: &DataGeneratorMetadata,
    ) -> AutoDataResult<Vec<Self::Output>> {
        let parameters = require_parameters(metadata)?;
        if parameters.is_empty() {
            return Err(AutoDataError::argument("parameter_infos cannot be empty"));
        }
        validate_declared(parameters, &[TypeKey::of::<T1>()])?;

        let mut specimens = self.generate(parameters)?.into_iter();
        Ok(vec![(take::<T1>(&mut specimens, 0)?,)])
    }
}

macro_rules! impl_auto_data {
    ($($ty:ident => $position:tt),+) => {
        impl<$($ty: 'static),+> DataSourceGeneratorAttribute for AutoData<($($ty,)+)> {
            type Output = ($($ty,)+);

            fn generate_data_sources(
                &self,
                metadata: &DataGeneratorMetadata,
            ) -> AutoDataResult<Vec<Self::Output>> {
                let parameters = require_parameters(metadata)?;
                if parameters.is_empty() {
                    return Ok(Vec::new());
                }
                validate_declared(parameters, &[$(TypeKey::of::<$ty>()),+])?;

                let mut specimens = self.generate(parameters)?.into_iter();
                Ok(vec![($(take::<$ty>(&mut specimens, $position)?,)+)])
            }
        }
    };
}

impl_auto_data!(T1 => 0, T2 => 1);
impl_auto_data!(T1 => 0, T2 => 1, T3 => 2);
impl_auto_data!(T1 => 0, T2 => 1, T3 => 2, T4 => 3);
impl_auto_data!(T1 => 0, T2 => 1, T3 => 2, T4 => 3, T5 => 4);

#[cfg(test)]
mod tests {
    use super::*;
    use autodata_specimen::FixtureConfig;

    struct AutoDataTests;

    fn metadata(parameter_infos: Option<Vec<ParameterInfo>>) -> DataGeneratorMetadata {
        DataGeneratorMetadata::for_parameters::<AutoDataTests>(parameter_infos)
            .with_session_id("TestSessionId")
    }

    #[test]
    fn test_null_fixture_factory_fails() {
        assert_eq!(
            AutoData::<(i32,)>::with_fixture_factory(None).unwrap_err(),
            AutoDataError::ArgumentNull("fixture_factory")
        );
        assert!(AutoData::<(i32, i32)>::with_fixture_factory(None).is_err());
        assert!(AutoData::<(i32, i32, i32)>::with_fixture_factory(None).is_err());
        assert!(AutoData::<(i32, i32, i32, i32)>::with_fixture_factory(None).is_err());
        assert!(AutoData::<(i32, i32, i32, i32, i32)>::with_fixture_factory(None).is_err());
    }

    #[test]
    fn test_single_null_parameter_infos_fails() {
        let sut = AutoData::<(i32,)>::new();
        let err = sut.generate_data_sources(&metadata(None)).unwrap_err();
        assert_eq!(err, AutoDataError::ArgumentNull("parameter_infos"));
        assert!(!sut.is_fixture_created());
    }

    #[test]
    fn test_single_empty_parameter_infos_fails() {
        let sut = AutoData::<(i32,)>::new();
        let err = sut.generate_data_sources(&metadata(Some(Vec::new()))).unwrap_err();
        assert!(matches!(err, AutoDataError::Argument(_)));
    }

    #[test]
    fn test_single_wrong_count_fails() {
        let sut = AutoData::<(i32,)>::new();
        let parameters = vec![
            ParameterInfo::of::<i32>("first", 0),
            ParameterInfo::of::<i32>("second", 1),
        ];
        let err = sut.generate_data_sources(&metadata(Some(parameters))).unwrap_err();
        assert!(matches!(err, AutoDataError::Argument(_)));
    }

    #[test]
    fn test_single_wrong_type_fails() {
        let sut = AutoData::<(i32,)>::new();
        for parameter in [
            ParameterInfo::of::<String>("argument", 0),
            ParameterInfo::of::<bool>("argument", 0),
            ParameterInfo::of::<f64>("argument", 0),
        ] {
            let err = sut
                .generate_data_sources(&metadata(Some(vec![parameter])))
                .unwrap_err();
            assert!(matches!(err, AutoDataError::Argument(_)));
        }
    }

    #[test]
    fn test_multi_empty_parameter_infos_yields_nothing() {
        let empty = || metadata(Some(Vec::new()));
        assert!(AutoData::<(i32, i32)>::new().generate_data_sources(&empty()).unwrap().is_empty());
        assert!(
            AutoData::<(i32, i32, i32)>::new()
                .generate_data_sources(&empty())
                .unwrap()
                .is_empty()
        );
        assert!(
            AutoData::<(i32, i32, i32, i32)>::new()
                .generate_data_sources(&empty())
                .unwrap()
                .is_empty()
        );
        assert!(
            AutoData::<(i32, i32, i32, i32, i32)>::new()
                .generate_data_sources(&empty())
                .unwrap()
                .is_empty()
        );
    }

    #[test]
    fn test_multi_null_parameter_infos_fails() {
        let expected = AutoDataError::ArgumentNull("parameter_infos");
        let absent = || metadata(None);
        assert_eq!(
            AutoData::<(i32, u8)>::new().generate_data_sources(&absent()).unwrap_err(),
            expected
        );
        assert_eq!(
            AutoData::<(i32, u8, bool)>::new()
                .generate_data_sources(&absent())
                .unwrap_err(),
            expected
        );
        assert_eq!(
            AutoData::<(i32, u8, bool, i64)>::new()
                .generate_data_sources(&absent())
                .unwrap_err(),
            expected
        );
        assert_eq!(
            AutoData::<(i32, u8, bool, i64, u16)>::new()
                .generate_data_sources(&absent())
                .unwrap_err(),
            expected
        );
    }

    #[test]
    fn test_fixture_lock_released_after_with_fixture_mut() {
        let sut = AutoData::<(i32,)>::new();
        let configured = sut.with_fixture_mut(|_fixture| true);
        assert!(configured);

        let parameters = vec![ParameterInfo::of::<i32>("value", 0)];
        let results = sut.generate_data_sources(&metadata(Some(parameters))).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(sut.with_fixture_mut(|_fixture| 7), 7);
    }

    #[test]
    fn test_single_int_yields_one_tuple() {
        let sut = AutoData::<(i32,)>::new();
        let parameters = vec![ParameterInfo::of::<i32>("value", 0)];

        let results = sut.generate_data_sources(&metadata(Some(parameters))).unwrap();
        assert_eq!(results.len(), 1);
        let (_value,): (i32,) = results[0];
        assert!(sut.is_fixture_created());
    }

    #[test]
    fn test_five_arguments_are_positional() {
        let sut = AutoData::<(u8, String, bool, i64, Vec<u16>)>::with_fixture(|| {
            DefaultFixture::new(FixtureConfig::default().with_seed(1))
        });
        let parameters = vec![
            ParameterInfo::of::<u8>("a", 0),
            ParameterInfo::of::<String>("b", 1),
            ParameterInfo::of::<bool>("c", 2),
            ParameterInfo::of::<i64>("d", 3),
            ParameterInfo::of::<Vec<u16>>("e", 4),
        ];

        let results = sut.generate_data_sources(&metadata(Some(parameters))).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_multi_swapped_types_fail() {
        let sut = AutoData::<(i32, String)>::new();
        let parameters = vec![
            ParameterInfo::of::<String>("name", 0),
            ParameterInfo::of::<i32>("count", 1),
        ];
        let err = sut.generate_data_sources(&metadata(Some(parameters))).unwrap_err();
        assert!(err.is_contract_violation());
    }
}
