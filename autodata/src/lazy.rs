//! Lazily constructed, once-published fixture.

use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use autodata_specimen::Fixture;
use tracing::{debug, trace};

/// Builds the fixture owned by a data-source generator.
pub type FixtureFactory = Arc<dyn Fn() -> Box<dyn Fixture> + Send + Sync>;

/// A fixture built on first use.
///
/// Concurrent first accesses may each run the factory, but only the first
/// published fixture is kept; every caller observes that one. Later
/// customizations and resolutions go through a mutex.
pub struct LazyFixture {
    factory: FixtureFactory,
    cell: OnceLock<Mutex<Box<dyn Fixture>>>,
}

impl LazyFixture {
    /// Create a cell that will build its fixture with `factory`.
    #[must_use]
    pub fn new(factory: FixtureFactory) -> Self {
        Self {
            factory,
            cell: OnceLock::new(),
        }
    }

    /// Whether the fixture has been published.
    #[must_use]
    pub fn is_created(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The published fixture, building it if necessary.
    pub fn get(&self) -> &Mutex<Box<dyn Fixture>> {
        if let Some(fixture) = self.cell.get() {
            return fixture;
        }

        let candidate = Mutex::new((self.factory)());
        if self.cell.set(candidate).is_ok() {
            debug!("published fixture");
        } else {
            trace!("discarding fixture built by a losing initializer");
        }
        // The cell is set at this point; the initializer never runs.
        self.cell.get_or_init(|| Mutex::new((self.factory)()))
    }

    /// Run `f` with exclusive access to the fixture.
    ///
    /// The fixture lock is held until `f` returns and is not reentrant:
    /// calling `with` on the same cell from inside `f` deadlocks.
    pub fn with<R>(&self, f: impl FnOnce(&mut dyn Fixture) -> R) -> R {
        let mut guard = self.get().lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut **guard)
    }
}

impl fmt::Debug for LazyFixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyFixture")
            .field("created", &self.is_created())
            .finish_non_exhaustive()
    }
}
