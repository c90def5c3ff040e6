//! Helpers for reading configuration folders and their files.

mod layout;
mod properties;

pub use layout::{
    CONFIG_FOLDER, CSS_DEFAULT_FILENAME, CSS_FILENAME, ConfigFolder, PROPERTIES_DEFAULT_FILENAME,
    PROPERTIES_FILENAME,
};
pub use properties::Properties;

#[cfg(test)]
mod tests;
