//! Sample types and requests for use in tests.

use autodata::DataGeneratorMetadata;
use autodata_specimen::{ArgumentKind, Construct, Constructor, ParameterInfo};

/// Marker type standing in for a declaring test class.
#[derive(Debug)]
pub struct SampleTests;

/// Which constructor built a `Basket`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketOrigin {
    /// Label only
    Label,
    /// Label and a boxed slice of items
    Array,
    /// Label and a list of items
    List,
}

/// A type with scalar, array and list constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basket {
    /// Basket label
    pub label: String,
    /// Items, empty when built from the label only
    pub items: Vec<i32>,
    /// Constructor used
    pub origin: BasketOrigin,
}

impl Basket {
    /// Create an empty basket.
    #[must_use]
    pub fn with_label(label: String) -> Self {
        Self {
            label,
            items: Vec::new(),
            origin: BasketOrigin::Label,
        }
    }

    /// Create a basket from a boxed slice.
    #[must_use]
    pub fn from_array(label: String, items: Box<[i32]>) -> Self {
        Self {
            label,
            items: items.into_vec(),
            origin: BasketOrigin::Array,
        }
    }

    /// Create a basket from a list.
    #[must_use]
    pub const fn from_list(label: String, items: Vec<i32>) -> Self {
        Self {
            label,
            items,
            origin: BasketOrigin::List,
        }
    }
}

impl Construct for Basket {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![
            Constructor::new("with_label", [ArgumentKind::Scalar], |ctx| {
                Ok(Self::with_label(ctx.create()?))
            }),
            Constructor::new("from_array", [ArgumentKind::Scalar, ArgumentKind::Array], |ctx| {
                let label = ctx.create()?;
                let items = ctx.create_many()?.into_boxed_slice();
                Ok(Self::from_array(label, items))
            }),
            Constructor::new("from_list", [ArgumentKind::Scalar, ArgumentKind::List], |ctx| {
                let label = ctx.create()?;
                let items = ctx.create_many()?;
                Ok(Self::from_list(label, items))
            }),
        ]
    }
}

/// A type whose only constructor requires another instance of itself.
#[derive(Debug)]
pub struct Chain {
    /// Payload
    pub value: u8,
    /// Next link
    pub next: Box<Chain>,
}

impl Construct for Chain {
    fn constructors() -> Vec<Constructor<Self>> {
        vec![Constructor::new(
            "new",
            [ArgumentKind::Scalar, ArgumentKind::Scalar],
            |ctx| {
                Ok(Self {
                    value: ctx.create()?,
                    next: Box::new(ctx.construct()?),
                })
            },
        )]
    }
}

/// Parameter-binding request for `SampleTests` with a fixed session id.
#[must_use]
pub fn sample_metadata(parameter_infos: Option<Vec<ParameterInfo>>) -> DataGeneratorMetadata {
    DataGeneratorMetadata::for_parameters::<SampleTests>(parameter_infos)
        .with_session_id("TestSessionId")
}
