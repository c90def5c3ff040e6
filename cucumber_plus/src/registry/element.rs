//! Stable identifiers for syntax elements of feature files.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

/// A syntax element located by its feature file and 1-based line.
///
/// Scenarios, backgrounds, outlines, steps and example rows are all
/// identified this way; the identifier survives re-parsing as long as the
/// element does not move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId {
    file: Utf8PathBuf,
    line: u32,
}

impl ElementId {
    /// Identifies the element starting at `line` of `file`.
    #[must_use]
    pub fn new(file: impl Into<Utf8PathBuf>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Feature file containing the element.
    #[must_use]
    pub fn file(&self) -> &Utf8Path {
        &self.file
    }

    /// Line the element starts on.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Finds the scenario-holding element enclosing another element.
///
/// Lookups are non-strict: a scenario, background or outline resolves to
/// itself.
pub trait ScenarioIndex {
    /// Returns the enclosing scenario of `element`, if it has one.
    fn scenario_of(&self, element: &ElementId) -> Option<ElementId>;
}

impl<F> ScenarioIndex for F
where
    F: Fn(&ElementId) -> Option<ElementId>,
{
    fn scenario_of(&self, element: &ElementId) -> Option<ElementId> {
        self(element)
    }
}

/// Scenario header lines per feature file.
///
/// An element belongs to the closest scenario header at or above its line.
/// Elements above the first header, such as the feature description, have no
/// scenario.
///
/// # Examples
///
/// ```
/// use cucumber_plus::{ElementId, ScenarioIndex, ScenarioMap};
///
/// let mut map = ScenarioMap::default();
/// map.insert(ElementId::new("login.feature", 3));
/// map.insert(ElementId::new("login.feature", 9));
///
/// let step = ElementId::new("login.feature", 11);
/// assert_eq!(map.scenario_of(&step), Some(ElementId::new("login.feature", 9)));
/// assert_eq!(map.scenario_of(&ElementId::new("login.feature", 1)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScenarioMap {
    headers: HashMap<Utf8PathBuf, BTreeSet<u32>>,
}

impl ScenarioMap {
    /// Registers `scenario` as a scenario-holding element.
    pub fn insert(&mut self, scenario: ElementId) {
        self.headers
            .entry(scenario.file)
            .or_default()
            .insert(scenario.line);
    }
}

impl FromIterator<ElementId> for ScenarioMap {
    fn from_iter<I: IntoIterator<Item = ElementId>>(iter: I) -> Self {
        let mut map = Self::default();
        for scenario in iter {
            map.insert(scenario);
        }
        map
    }
}

impl ScenarioIndex for ScenarioMap {
    fn scenario_of(&self, element: &ElementId) -> Option<ElementId> {
        let line = *self
            .headers
            .get(element.file())?
            .range(..=element.line())
            .next_back()?;
        Some(ElementId::new(element.file(), line))
    }
}
