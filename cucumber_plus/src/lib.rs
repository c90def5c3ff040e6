//! Export configuration and test-result aggregation for Cucumber+.
//!
//! Two independent pieces live here:
//!
//! - [`ConfigResolver`] walks from a feature file up to its source root,
//!   reading a `.cucumber+` folder at every level, and merges the property
//!   files and stylesheets it finds into a [`ConfigDto`]. The root folder is
//!   provisioned with bundled defaults which are refreshed whenever their
//!   content changes.
//! - [`TestRegistry`] keeps the latest test results per feature-file
//!   element. Each refresh replaces the results of the scenarios it reports
//!   and keeps everything else.
//!
//! The host project model and editor buffers are reached through the
//! [`ProjectIndex`] and [`DocumentSync`] traits.

mod ancestry;
mod defaults;
mod error;
mod events;
mod file;
pub mod logging;
mod project;
mod registry;
mod resolver;
mod result_ext;
pub mod settings;
mod style;

pub use ancestry::{Levels, common_ancestor};
pub use defaults::{BundledDefaults, DefaultFile, content_hash};
pub use error::{ConfigError, ConfigResult, ResolutionError};
pub use events::ConfigEvent;
pub use file::{
    CONFIG_FOLDER, CSS_DEFAULT_FILENAME, CSS_FILENAME, ConfigFolder, PROPERTIES_DEFAULT_FILENAME,
    PROPERTIES_FILENAME, Properties,
};
pub use project::{DocumentSync, NoPendingDocuments, ProjectIndex, SourceRoots};
pub use registry::{
    ElementId, ScenarioIndex, ScenarioMap, TestItem, TestRegistry, TestResult, TestRun,
    TestStatus,
};
pub use resolver::{ConfigResolver, ConfigResolverBuilder, Resolution};
pub use result_ext::{GatheringExt, IoResultExt};
pub use style::{BODY_FONT_SIZE, ConfigDto, DatePattern, NOW_TOKEN, PROPERTY_KEYS, PdfStyle};
