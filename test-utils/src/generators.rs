//! Shared proptest generators for generation requests.

use std::collections::HashMap;

use autodata::{DataGeneratorMetadata, DataGeneratorType};
use autodata_specimen::{ParameterInfo, TypeKey};
use proptest::prelude::*;
use uuid::Uuid;

use crate::fixtures::SampleTests;

/// Generate valid parameter names.
pub fn parameter_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
}

/// Generate test session identifiers.
pub fn session_id_strategy() -> impl Strategy<Value = String> {
    any::<u128>().prop_map(|bits| Uuid::from_u128(bits).to_string())
}

/// Generate inline values that differ from `i32::default()`.
pub fn inline_value_strategy() -> impl Strategy<Value = i32> {
    any::<i32>().prop_filter("inline values must not be the default", |value| *value != 0)
}

/// Generate session-scoped object bags.
pub fn object_bag_strategy() -> impl Strategy<Value = HashMap<String, Option<serde_json::Value>>> {
    prop::collection::hash_map(
        parameter_name_strategy(),
        prop::option::of(any::<i64>().prop_map(serde_json::Value::from)),
        0..4,
    )
}

/// Generate `count` byte-typed parameter descriptors with generated names.
pub fn byte_parameters_strategy(
    count: impl Into<prop::collection::SizeRange>,
) -> impl Strategy<Value = Vec<ParameterInfo>> {
    prop::collection::vec(parameter_name_strategy(), count).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(position, name)| ParameterInfo::of::<u8>(name, position))
            .collect()
    })
}

/// Generate parameter-binding requests for `parameters` with arbitrary
/// session context.
pub fn metadata_strategy(
    parameters: Vec<ParameterInfo>,
) -> impl Strategy<Value = DataGeneratorMetadata> {
    (object_bag_strategy(), session_id_strategy()).prop_map(move |(bag, session_id)| {
        DataGeneratorMetadata {
            test_class_type: TypeKey::of::<SampleTests>(),
            test_object_bag: bag,
            parameter_infos: Some(parameters.clone()),
            property_info: None,
            generator_type: DataGeneratorType::Parameters,
            test_session_id: session_id,
        }
    })
}
