//! Constructor registration and constructor-selection queries.
//!
//! Types that cannot be produced through `Arbitrary` alone implement
//! [`Construct`] and list their constructors. A [`ConstructorQuery`] picks
//! one of them from the signatures; fixtures hold one query per type.

use std::cmp::Reverse;
use std::fmt;

use crate::context::SpecimenContext;
use crate::error::SpecimenResult;

/// Shape of a constructor argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// A single value
    Scalar,
    /// A fixed or boxed slice, e.g. `Box<[T]>` or `[T; N]`
    Array,
    /// A growable list, e.g. `Vec<T>`
    List,
}

/// Name and argument shapes of one constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorSignature {
    /// Constructor name
    pub name: &'static str,
    /// Argument shapes in declaration order
    pub arguments: Vec<ArgumentKind>,
}

impl ConstructorSignature {
    /// Create a signature.
    #[must_use]
    pub fn new(name: &'static str, arguments: impl Into<Vec<ArgumentKind>>) -> Self {
        Self {
            name,
            arguments: arguments.into(),
        }
    }

    /// Number of arguments.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    /// Number of arguments of the given kind.
    #[must_use]
    pub fn count_of(&self, kind: ArgumentKind) -> usize {
        self.arguments.iter().filter(|argument| **argument == kind).count()
    }
}

/// A registered constructor for `T`.
pub struct Constructor<T> {
    /// Signature seen by constructor queries
    pub signature: ConstructorSignature,
    /// Builds a value, resolving arguments through the context
    pub build: fn(&mut SpecimenContext<'_>) -> SpecimenResult<T>,
}

impl<T> Constructor<T> {
    /// Create a constructor.
    #[must_use]
    pub fn new(
        name: &'static str,
        arguments: impl Into<Vec<ArgumentKind>>,
        build: fn(&mut SpecimenContext<'_>) -> SpecimenResult<T>,
    ) -> Self {
        Self {
            signature: ConstructorSignature::new(name, arguments),
            build,
        }
    }
}

impl<T> fmt::Debug for Constructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A type the engine builds through one of its registered constructors.
pub trait Construct: Sized + Send + 'static {
    /// All constructors, in declaration order.
    fn constructors() -> Vec<Constructor<Self>>;
}

/// Selects a constructor from candidate signatures.
pub trait ConstructorQuery: fmt::Debug + Send + Sync {
    /// Index of the selected candidate, or `None` when nothing qualifies.
    fn select(&self, candidates: &[ConstructorSignature]) -> Option<usize>;
}

/// Prefers the constructor with the fewest arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModestConstructorQuery;

impl ConstructorQuery for ModestConstructorQuery {
    fn select(&self, candidates: &[ConstructorSignature]) -> Option<usize> {
        candidates
            .iter()
            .enumerate()
            .min_by_key(|(_, signature)| signature.arity())
            .map(|(index, _)| index)
    }
}

/// Prefers the constructor with the most arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyConstructorQuery;

impl ConstructorQuery for GreedyConstructorQuery {
    fn select(&self, candidates: &[ConstructorSignature]) -> Option<usize> {
        candidates
            .iter()
            .enumerate()
            .min_by_key(|(_, signature)| Reverse(signature.arity()))
            .map(|(index, _)| index)
    }
}

/// Prefers constructors taking array arguments, then the fewest arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayFavoringConstructorQuery;

impl ConstructorQuery for ArrayFavoringConstructorQuery {
    fn select(&self, candidates: &[ConstructorSignature]) -> Option<usize> {
        favoring(candidates, ArgumentKind::Array)
    }
}

/// Prefers constructors taking list arguments, then the fewest arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFavoringConstructorQuery;

impl ConstructorQuery for ListFavoringConstructorQuery {
    fn select(&self, candidates: &[ConstructorSignature]) -> Option<usize> {
        favoring(candidates, ArgumentKind::List)
    }
}

// min_by_key keeps the first of equal keys, so ties resolve to declaration order.
fn favoring(candidates: &[ConstructorSignature], kind: ArgumentKind) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .min_by_key(|(_, signature)| (Reverse(signature.count_of(kind)), signature.arity()))
        .map(|(index, _)| index)
}
