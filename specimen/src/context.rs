//! Resolution context handed to build hooks and constructors.

use std::any::type_name;
use std::collections::HashMap;
use std::sync::Arc;

use proptest::arbitrary::{Arbitrary, any};
use proptest::collection;
use proptest::strategy::{Strategy, ValueTree};
use proptest::test_runner::TestRunner;
use tracing::trace;

use crate::config::FixtureConfig;
use crate::constructor::{Construct, ConstructorQuery, ConstructorSignature, ModestConstructorQuery};
use crate::descriptor::ParameterInfo;
use crate::error::{SpecimenError, SpecimenResult};
use crate::types::{Specimen, TypeKey};

/// Resolves specimens against a fixture's generator and constructor queries.
///
/// Tracks the construction path so recursive type graphs fail instead of
/// overflowing the stack.
pub struct SpecimenContext<'a> {
    runner: &'a mut TestRunner,
    queries: &'a HashMap<TypeKey, Arc<dyn ConstructorQuery>>,
    config: &'a FixtureConfig,
    path: Vec<TypeKey>,
}

impl<'a> SpecimenContext<'a> {
    /// Create a context over a fixture's parts.
    pub fn new(
        runner: &'a mut TestRunner,
        queries: &'a HashMap<TypeKey, Arc<dyn ConstructorQuery>>,
        config: &'a FixtureConfig,
    ) -> Self {
        Self {
            runner,
            queries,
            config,
            path: Vec::new(),
        }
    }

    /// Resolve a specimen for `parameter`.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the parameter's build hook.
    pub fn resolve(&mut self, parameter: &ParameterInfo) -> SpecimenResult<Specimen> {
        trace!(
            parameter = parameter.name(),
            parameter_type = parameter.parameter_type().name(),
            "resolving parameter"
        );
        parameter.build(self)
    }

    /// Generate an arbitrary `T`.
    ///
    /// # Errors
    ///
    /// Returns `SpecimenError::Generation` if the strategy rejects generation.
    pub fn create<T>(&mut self) -> SpecimenResult<T>
    where
        T: Arbitrary + 'static,
    {
        self.generate(any::<T>())
    }

    /// Generate `repeat_count` arbitrary values of `T`.
    ///
    /// # Errors
    ///
    /// Returns `SpecimenError::Generation` if the strategy rejects generation.
    pub fn create_many<T>(&mut self) -> SpecimenResult<Vec<T>>
    where
        T: Arbitrary + 'static,
    {
        self.generate(collection::vec(any::<T>(), self.config.repeat_count))
    }

    /// Build `T` through the constructor selected by its query.
    ///
    /// # Errors
    ///
    /// Returns `SpecimenError::Recursion` when `T` already appears on the
    /// construction path `max_recursion_depth` times, and
    /// `SpecimenError::NoConstructor` when the query selects nothing.
    pub fn construct<T: Construct>(&mut self) -> SpecimenResult<T> {
        let key = TypeKey::of::<T>();
        let depth = self.path.iter().filter(|entry| **entry == key).count();
        if depth >= self.config.max_recursion_depth {
            let mut path: Vec<_> = self.path.iter().map(TypeKey::name).collect();
            path.push(key.name());
            return Err(SpecimenError::Recursion { path });
        }

        let constructors = T::constructors();
        let signatures: Vec<ConstructorSignature> = constructors
            .iter()
            .map(|constructor| constructor.signature.clone())
            .collect();
        let index = match self.queries.get(&key) {
            Some(query) => query.select(&signatures),
            None => ModestConstructorQuery.select(&signatures),
        };
        let constructor = index
            .and_then(|index| constructors.into_iter().nth(index))
            .ok_or(SpecimenError::no_constructor(key.name()))?;
        trace!(
            target_type = key.name(),
            constructor = constructor.signature.name,
            "selected constructor"
        );

        self.path.push(key);
        let result = (constructor.build)(self);
        self.path.pop();
        result
    }

    /// Configuration of the owning fixture.
    #[must_use]
    pub const fn config(&self) -> &FixtureConfig {
        self.config
    }

    fn generate<S: Strategy>(&mut self, strategy: S) -> SpecimenResult<S::Value> {
        strategy
            .new_tree(&mut *self.runner)
            .map(|tree| tree.current())
            .map_err(|reason| {
                SpecimenError::generation(type_name::<S::Value>(), reason.to_string())
            })
    }
}
