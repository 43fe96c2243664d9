//! Mock fixtures and customization sources for testing.

use std::any::Any;
use std::sync::{Arc, Mutex, PoisonError};

use autodata_specimen::{
    ConstructorQuery, Customization, CustomizationPriority, DefaultFixture, Fixture,
    FixtureConfig, ParameterAttribute, ParameterCustomizationSource, ParameterInfo, Specimen,
    SpecimenError, SpecimenResult, TypeKey,
};

/// Something a `RecordingFixture` observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureEvent {
    /// A customization was applied; carries its label or debug text
    Customized(String),
    /// A specimen was resolved for the named parameter
    Resolved {
        /// Parameter name
        name: String,
        /// Parameter position
        position: usize,
    },
}

/// Shared, cloneable log of fixture events.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<FixtureEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&self, event: FixtureEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// All events so far.
    #[must_use]
    pub fn events(&self) -> Vec<FixtureEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Labels of applied customizations, in application order.
    #[must_use]
    pub fn customizations(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                FixtureEvent::Customized(label) => Some(label),
                FixtureEvent::Resolved { .. } => None,
            })
            .collect()
    }

    /// Number of resolved specimens.
    #[must_use]
    pub fn resolution_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, FixtureEvent::Resolved { .. }))
            .count()
    }
}

/// Fixture that delegates to a `DefaultFixture` and records every call.
#[derive(Debug)]
pub struct RecordingFixture {
    inner: DefaultFixture,
    log: EventLog,
}

impl RecordingFixture {
    /// Create a recording fixture writing to `log`.
    #[must_use]
    pub fn new(log: EventLog) -> Self {
        Self {
            inner: DefaultFixture::new(FixtureConfig::default()),
            log,
        }
    }

    /// Create a recording fixture over a configured inner fixture.
    #[must_use]
    pub fn with_config(log: EventLog, config: FixtureConfig) -> Self {
        Self {
            inner: DefaultFixture::new(config),
            log,
        }
    }
}

impl Fixture for RecordingFixture {
    fn customize(&mut self, customization: &dyn Customization) {
        let label = customization
            .as_any()
            .downcast_ref::<LabelledCustomization>()
            .map_or_else(|| format!("{customization:?}"), |c| c.label.clone());
        self.log.push(FixtureEvent::Customized(label));
        self.inner.customize(customization);
    }

    fn register_constructor_query(&mut self, target: TypeKey, query: Arc<dyn ConstructorQuery>) {
        self.inner.register_constructor_query(target, query);
    }

    fn resolve(&mut self, parameter: &ParameterInfo) -> SpecimenResult<Specimen> {
        self.log.push(FixtureEvent::Resolved {
            name: parameter.name().to_string(),
            position: parameter.position(),
        });
        self.inner.resolve(parameter)
    }
}

/// Fixture whose every resolution fails with the given error.
#[derive(Debug, Clone)]
pub struct FailingFixture {
    error: SpecimenError,
}

impl FailingFixture {
    /// Create a fixture failing with `error`.
    #[must_use]
    pub const fn new(error: SpecimenError) -> Self {
        Self { error }
    }
}

impl Fixture for FailingFixture {
    fn customize(&mut self, _customization: &dyn Customization) {}

    fn register_constructor_query(&mut self, _target: TypeKey, _query: Arc<dyn ConstructorQuery>) {}

    fn resolve(&mut self, _parameter: &ParameterInfo) -> SpecimenResult<Specimen> {
        Err(self.error.clone())
    }
}

/// Fixture that ignores declared types and always produces a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct MistypedFixture;

impl Fixture for MistypedFixture {
    fn customize(&mut self, _customization: &dyn Customization) {}

    fn register_constructor_query(&mut self, _target: TypeKey, _query: Arc<dyn ConstructorQuery>) {}

    fn resolve(&mut self, _parameter: &ParameterInfo) -> SpecimenResult<Specimen> {
        Ok(Box::new("not what was declared".to_string()))
    }
}

/// Customization that only carries a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledCustomization {
    /// Label recorded by `RecordingFixture`
    pub label: String,
}

impl Customization for LabelledCustomization {
    fn customize(&self, _fixture: &mut dyn Fixture) {}

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Customization source yielding a `LabelledCustomization`.
#[derive(Debug, Clone)]
pub struct RecordingAttribute {
    label: String,
    priority: CustomizationPriority,
}

impl RecordingAttribute {
    /// Create a source with normal priority.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            priority: CustomizationPriority::Normal,
        }
    }

    /// Set the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: CustomizationPriority) -> Self {
        self.priority = priority;
        self
    }
}

impl ParameterAttribute for RecordingAttribute {
    fn as_customization_source(&self) -> Option<&dyn ParameterCustomizationSource> {
        Some(self)
    }
}

impl ParameterCustomizationSource for RecordingAttribute {
    fn get_customization(
        &self,
        parameter: Option<&ParameterInfo>,
    ) -> SpecimenResult<Box<dyn Customization>> {
        parameter.ok_or(SpecimenError::argument_null("parameter"))?;
        Ok(Box::new(LabelledCustomization {
            label: self.label.clone(),
        }))
    }

    fn priority(&self) -> CustomizationPriority {
        self.priority
    }
}

/// Attribute that is not a customization source.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainAttribute;

impl ParameterAttribute for PlainAttribute {}
