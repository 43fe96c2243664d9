//! The fixture contract and its proptest-backed default implementation.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};
use tracing::debug;

use crate::config::FixtureConfig;
use crate::constructor::ConstructorQuery;
use crate::context::SpecimenContext;
use crate::customization::Customization;
use crate::descriptor::ParameterInfo;
use crate::error::SpecimenResult;
use crate::types::{Specimen, TypeKey};

/// A stateful specimen generator that accepts customizations.
pub trait Fixture: Send + fmt::Debug {
    /// Apply a customization; the effect persists for later resolutions.
    fn customize(&mut self, customization: &dyn Customization);

    /// Install the constructor query used for `target`.
    fn register_constructor_query(&mut self, target: TypeKey, query: Arc<dyn ConstructorQuery>);

    /// Resolve a fresh specimen for `parameter`.
    ///
    /// # Errors
    ///
    /// Returns an error when the declared type cannot be produced.
    fn resolve(&mut self, parameter: &ParameterInfo) -> SpecimenResult<Specimen>;
}

/// Fixture generating values through proptest's `Arbitrary` implementations
/// and registered constructors.
pub struct DefaultFixture {
    config: FixtureConfig,
    runner: TestRunner,
    queries: HashMap<TypeKey, Arc<dyn ConstructorQuery>>,
    customizations: usize,
}

impl DefaultFixture {
    /// Create a fixture with the given configuration.
    ///
    /// A `max_recursion_depth` of 0 is raised to 1.
    #[must_use]
    pub fn new(mut config: FixtureConfig) -> Self {
        config.max_recursion_depth = config.max_recursion_depth.max(1);
        let runner = match config.seed {
            Some(seed) => {
                let mut bytes = [0u8; 32];
                bytes[..8].copy_from_slice(&seed.to_le_bytes());
                TestRunner::new_with_rng(
                    Config::default(),
                    TestRng::from_seed(RngAlgorithm::ChaCha, &bytes),
                )
            }
            None => TestRunner::new(Config::default()),
        };
        debug!(seed = ?config.seed, repeat_count = config.repeat_count, "created fixture");

        Self {
            config,
            runner,
            queries: HashMap::new(),
            customizations: 0,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Constructor query registered for `target`, if any.
    #[must_use]
    pub fn constructor_query(&self, target: TypeKey) -> Option<&Arc<dyn ConstructorQuery>> {
        self.queries.get(&target)
    }

    /// Number of customizations applied so far.
    #[must_use]
    pub const fn customization_count(&self) -> usize {
        self.customizations
    }
}

impl Default for DefaultFixture {
    fn default() -> Self {
        Self::new(FixtureConfig::from_env())
    }
}

impl fmt::Debug for DefaultFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultFixture")
            .field("config", &self.config)
            .field("queries", &self.queries)
            .field("customizations", &self.customizations)
            .finish_non_exhaustive()
    }
}

impl Fixture for DefaultFixture {
    fn customize(&mut self, customization: &dyn Customization) {
        debug!(?customization, "applying customization");
        customization.customize(self);
        self.customizations += 1;
    }

    fn register_constructor_query(&mut self, target: TypeKey, query: Arc<dyn ConstructorQuery>) {
        self.queries.insert(target, query);
    }

    fn resolve(&mut self, parameter: &ParameterInfo) -> SpecimenResult<Specimen> {
        SpecimenContext::new(&mut self.runner, &self.queries, &self.config).resolve(parameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructor::{
        ArgumentKind, ArrayFavoringConstructorQuery, Construct, Constructor,
    };
    use crate::customization::ConstructorCustomization;

    #[derive(Debug)]
    struct Shelf {
        via: &'static str,
    }

    impl Construct for Shelf {
        fn constructors() -> Vec<Constructor<Self>> {
            vec![
                Constructor::new("empty", Vec::new(), |_| Ok(Self { via: "empty" })),
                Constructor::new("from_array", [ArgumentKind::Array], |ctx| {
                    let _items: Box<[u8]> = ctx.create_many::<u8>()?.into_boxed_slice();
                    Ok(Self { via: "from_array" })
                }),
            ]
        }
    }

    #[test]
    fn test_resolve_arbitrary_specimen() {
        let mut fixture = DefaultFixture::new(FixtureConfig::default());
        let specimen = fixture.resolve(&ParameterInfo::of::<i32>("value", 0)).unwrap();
        assert!(specimen.downcast_ref::<i32>().is_some());
    }

    #[test]
    fn test_seeded_fixtures_agree() {
        let parameter = ParameterInfo::of::<u64>("value", 0);
        let mut first = DefaultFixture::new(FixtureConfig::default().with_seed(42));
        let mut second = DefaultFixture::new(FixtureConfig::default().with_seed(42));

        let a = *first.resolve(&parameter).unwrap().downcast::<u64>().unwrap();
        let b = *second.resolve(&parameter).unwrap().downcast::<u64>().unwrap();
        assert_eq!(a, b);
    }

    #[derive(Debug)]
    struct Leaf {
        _value: u8,
    }

    impl Construct for Leaf {
        fn constructors() -> Vec<Constructor<Self>> {
            vec![Constructor::new("new", [ArgumentKind::Scalar], |ctx| {
                Ok(Self {
                    _value: ctx.create::<u8>()?,
                })
            })]
        }
    }

    #[test]
    fn test_zero_recursion_depth_is_raised() {
        let config: FixtureConfig = serde_json::from_str(r#"{"max_recursion_depth": 0}"#).unwrap();
        assert_eq!(config.max_recursion_depth, 0);

        let mut fixture = DefaultFixture::new(config);
        assert_eq!(fixture.config().max_recursion_depth, 1);

        let specimen = fixture.resolve(&ParameterInfo::constructed::<Leaf>("leaf", 0)).unwrap();
        assert!(specimen.downcast_ref::<Leaf>().is_some());
    }

    #[test]
    fn test_customization_persists() {
        let parameter = ParameterInfo::constructed::<Shelf>("shelf", 0);
        let mut fixture = DefaultFixture::new(FixtureConfig::default());

        let before = fixture.resolve(&parameter).unwrap().downcast::<Shelf>().unwrap();
        assert_eq!(before.via, "empty");

        fixture.customize(&ConstructorCustomization::new(
            TypeKey::of::<Shelf>(),
            ArrayFavoringConstructorQuery,
        ));
        assert_eq!(fixture.customization_count(), 1);
        assert!(fixture.constructor_query(TypeKey::of::<Shelf>()).is_some());

        for _ in 0..3 {
            let after = fixture.resolve(&parameter).unwrap().downcast::<Shelf>().unwrap();
            assert_eq!(after.via, "from_array");
        }
    }
}
