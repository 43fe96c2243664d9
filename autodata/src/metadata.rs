//! Parameter metadata and the generation request passed in by the host.

use std::collections::HashMap;

use autodata_specimen::{ParameterInfo, PropertyInfo, Specimen, TypeKey};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How one test-method parameter obtains its value.
#[derive(Debug)]
pub enum ParameterMetadata {
    /// Resolve a fresh specimen for the descriptor from the fixture
    Generated(ParameterInfo),
    /// Use the supplied value as-is
    Inlined(Specimen),
}

impl ParameterMetadata {
    /// Inline a literal value.
    #[must_use]
    pub fn inlined<T: Send + 'static>(value: T) -> Self {
        Self::Inlined(Box::new(value))
    }

    /// Inline `inline_data` unless it is absent or equal to `T::default()`,
    /// in which case the parameter is generated.
    #[must_use]
    pub fn from_inline_data<T>(parameter: ParameterInfo, inline_data: Option<T>) -> Self
    where
        T: Default + PartialEq + Send + 'static,
    {
        match inline_data {
            Some(value) if value != T::default() => Self::inlined(value),
            _ => Self::Generated(parameter),
        }
    }

    /// Whether this entry is resolved from the fixture.
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

/// Binding context of a data generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataGeneratorType {
    /// Supplies test-method arguments
    #[default]
    Parameters,
    /// Supplies a property value
    Property,
}

/// Generation request handed to a data-source generator by the host.
#[derive(Debug, Clone)]
pub struct DataGeneratorMetadata {
    /// Declaring test type
    pub test_class_type: TypeKey,
    /// Session-scoped auxiliary objects
    pub test_object_bag: HashMap<String, Option<serde_json::Value>>,
    /// Descriptors of the test-method parameters; `None` when absent
    pub parameter_infos: Option<Vec<ParameterInfo>>,
    /// Bound property, for property generation
    pub property_info: Option<PropertyInfo>,
    /// Binding context
    pub generator_type: DataGeneratorType,
    /// Test session identifier
    pub test_session_id: String,
}

impl DataGeneratorMetadata {
    /// Parameter-binding request for test type `C` with a fresh session id.
    #[must_use]
    pub fn for_parameters<C: 'static>(parameter_infos: Option<Vec<ParameterInfo>>) -> Self {
        Self {
            test_class_type: TypeKey::of::<C>(),
            test_object_bag: HashMap::new(),
            parameter_infos,
            property_info: None,
            generator_type: DataGeneratorType::Parameters,
            test_session_id: Uuid::new_v4().to_string(),
        }
    }

    /// Set the session identifier.
    #[must_use]
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.test_session_id = session_id.into();
        self
    }
}
