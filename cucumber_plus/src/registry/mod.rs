//! Aggregated test results keyed by feature-file elements.
//!
//! Test frameworks deliver results in batches. Each [`TestRegistry::refresh`]
//! replaces everything previously recorded for the scenarios the batch
//! touches and keeps results of every other scenario. The registry holds one
//! immutable snapshot at a time; a refresh builds the next snapshot on the
//! side and publishes it with a single swap, so readers see either the old
//! or the new state in full.
//!
//! # Examples
//!
//! ```
//! use cucumber_plus::{ElementId, ScenarioMap, TestRegistry, TestResult, TestRun, TestStatus};
//!
//! let scenarios: ScenarioMap = [ElementId::new("a.feature", 2)].into_iter().collect();
//! let step = ElementId::new("a.feature", 3);
//! let registry = TestRegistry::new();
//!
//! let mut first = TestResult::new();
//! first.set(&scenarios, step.clone(), TestRun::new(1, "step", TestStatus::Failed));
//! registry.refresh(&first);
//!
//! let mut second = TestResult::new();
//! second.set(&scenarios, step.clone(), TestRun::new(2, "step", TestStatus::Passed));
//! registry.refresh(&second);
//!
//! assert_eq!(registry.status(&step), Some(TestStatus::Passed));
//! ```

mod batch;
mod element;
mod run;

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use tracing::debug;

pub use batch::{TestItem, TestResult};
pub use element::{ElementId, ScenarioIndex, ScenarioMap};
pub use run::{TestRun, TestStatus};

/// Holds the published snapshot of test results.
#[derive(Debug)]
pub struct TestRegistry<R> {
    active: RwLock<Arc<TestResult<R>>>,
}

impl<R> Default for TestRegistry<R> {
    fn default() -> Self {
        Self {
            active: RwLock::new(Arc::new(TestResult::default())),
        }
    }
}

impl<R: Eq + Hash + Clone> TestRegistry<R> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `incoming` into a copy of the current snapshot and publishes it.
    ///
    /// Entries bound to a scenario referenced by `incoming` are dropped from
    /// the copy first. Entries without a scenario are never dropped. Refreshes
    /// are serialised; lookups proceed while the copy is built.
    pub fn refresh(&self, incoming: &TestResult<R>) {
        let current = self.active.upgradable_read();
        let mut next = TestResult::clone(&current);
        let involved = incoming.scenarios();
        let previous = next.len();
        next.discard_scenarios(&involved);
        let kept = next.len();
        next.absorb(incoming);
        debug!(
            scenarios = involved.len(),
            dropped = previous.saturating_sub(kept),
            elements = next.len(),
            "published test results"
        );
        *RwLockUpgradableReadGuard::upgrade(current) = Arc::new(next);
    }

    /// Results currently recorded for `element`, empty when unknown.
    #[must_use]
    pub fn lookup(&self, element: &ElementId) -> HashSet<R> {
        self.snapshot().get(element)
    }

    /// The currently published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<TestResult<R>> {
        Arc::clone(&self.active.read())
    }

    /// Publishes an empty snapshot.
    pub fn clear(&self) {
        *self.active.write() = Arc::new(TestResult::default());
    }
}

impl TestRegistry<TestRun> {
    /// Worst status recorded for `element`, `None` when it has no results.
    #[must_use]
    pub fn status(&self, element: &ElementId) -> Option<TestStatus> {
        self.snapshot()
            .item(element)?
            .results()
            .iter()
            .map(TestRun::status)
            .max()
    }
}
