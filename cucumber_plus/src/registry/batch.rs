//! Element to result mappings exchanged with the registry.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use super::element::{ElementId, ScenarioIndex};

/// Results recorded against one element.
#[derive(Debug, Clone)]
pub struct TestItem<R> {
    scenario: Option<ElementId>,
    results: HashSet<R>,
}

impl<R> TestItem<R> {
    fn new(scenario: Option<ElementId>) -> Self {
        Self {
            scenario,
            results: HashSet::new(),
        }
    }

    /// Scenario the element was bound to when the item was created.
    #[must_use]
    pub const fn scenario(&self) -> Option<&ElementId> {
        self.scenario.as_ref()
    }

    /// Results accumulated for the element.
    #[must_use]
    pub const fn results(&self) -> &HashSet<R> {
        &self.results
    }
}

/// A batch of results keyed by element, or a published registry snapshot.
///
/// # Examples
///
/// ```
/// use cucumber_plus::{ElementId, ScenarioMap, TestResult};
///
/// let scenarios: ScenarioMap = [ElementId::new("cart.feature", 4)].into_iter().collect();
/// let step = ElementId::new("cart.feature", 6);
///
/// let mut batch = TestResult::new();
/// batch.set(&scenarios, step.clone(), "run-1/passed");
/// batch.set(&scenarios, step.clone(), "run-1/passed");
///
/// assert_eq!(batch.get(&step).len(), 1);
/// assert_eq!(
///     batch.item(&step).and_then(|item| item.scenario()),
///     Some(&ElementId::new("cart.feature", 4))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TestResult<R> {
    tests: HashMap<ElementId, TestItem<R>>,
}

impl<R> Default for TestResult<R> {
    fn default() -> Self {
        Self {
            tests: HashMap::new(),
        }
    }
}

impl<R: Eq + Hash + Clone> TestResult<R> {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `result` for `element`.
    ///
    /// The enclosing scenario is looked up through `index` when the element
    /// is seen for the first time and kept for the lifetime of the item.
    pub fn set(&mut self, index: &impl ScenarioIndex, element: ElementId, result: R) {
        match self.tests.entry(element) {
            Entry::Occupied(mut entry) => {
                entry.get_mut().results.insert(result);
            }
            Entry::Vacant(entry) => {
                let scenario = index.scenario_of(entry.key());
                entry.insert(TestItem::new(scenario)).results.insert(result);
            }
        }
    }

    /// Results recorded for `element`, empty when it has none.
    #[must_use]
    pub fn get(&self, element: &ElementId) -> HashSet<R> {
        self.item(element)
            .map(|item| item.results.clone())
            .unwrap_or_default()
    }

    /// The item recorded for `element`.
    #[must_use]
    pub fn item(&self, element: &ElementId) -> Option<&TestItem<R>> {
        self.tests.get(element)
    }

    /// Iterates over recorded elements and their items.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, &TestItem<R>)> {
        self.tests.iter()
    }

    /// Number of elements with results.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Whether no element has results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Distinct scenarios referenced by the items of this batch.
    pub(crate) fn scenarios(&self) -> HashSet<&ElementId> {
        self.tests
            .values()
            .filter_map(|item| item.scenario.as_ref())
            .collect()
    }

    /// Drops every item bound to one of `scenarios`.
    pub(crate) fn discard_scenarios(&mut self, scenarios: &HashSet<&ElementId>) {
        self.tests.retain(|_, item| {
            item.scenario
                .as_ref()
                .is_none_or(|scenario| !scenarios.contains(scenario))
        });
    }

    /// Adds every result of `other`.
    ///
    /// Elements new to this batch keep the scenario bound in `other`.
    pub(crate) fn absorb(&mut self, other: &Self) {
        for (element, incoming) in &other.tests {
            self.tests
                .entry(element.clone())
                .or_insert_with(|| TestItem::new(incoming.scenario.clone()))
                .results
                .extend(incoming.results.iter().cloned());
        }
    }
}
