//! Result references produced by test runs.

use std::fmt;

use serde::Serialize;

/// Outcome of a single test node.
///
/// Variants are ordered by severity so the worst of several outcomes is
/// their maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TestStatus {
    /// The test was skipped.
    Ignored,
    /// The test passed.
    Passed,
    /// The test has not finished yet.
    Running,
    /// The test failed or errored.
    Failed,
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ignored => "ignored",
            Self::Passed => "passed",
            Self::Running => "running",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Opaque reference to one test node of one run.
///
/// Two references are the same result only when run, test name and status
/// all match, so re-reporting an identical node does not duplicate it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TestRun {
    run: u64,
    name: String,
    status: TestStatus,
}

impl TestRun {
    /// Creates a reference to test `name` of run `run`.
    #[must_use]
    pub fn new(run: u64, name: impl Into<String>, status: TestStatus) -> Self {
        Self {
            run,
            name: name.into(),
            status,
        }
    }

    /// Identifier of the run that produced the result.
    #[must_use]
    pub const fn run(&self) -> u64 {
        self.run
    }

    /// Name of the test node.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reported outcome.
    #[must_use]
    pub const fn status(&self) -> TestStatus {
        self.status
    }
}
