//! Collection and merging of configuration layers.

use figment::Figment;
use tracing::debug;

use crate::ancestry::Levels;
use crate::file::{
    CSS_DEFAULT_FILENAME, CSS_FILENAME, ConfigFolder, PROPERTIES_DEFAULT_FILENAME,
    PROPERTIES_FILENAME, Properties,
};
use crate::style::ConfigDto;
use crate::{ConfigResult, GatheringExt};

/// Layers found between a target and its source root.
#[derive(Debug, Default)]
pub(crate) struct Cascade {
    /// Property files, innermost first. The root default file comes last.
    layers: Vec<Properties>,
    stylesheet: Option<String>,
}

impl Cascade {
    /// Walks `levels` and reads every configuration folder on the way.
    pub(crate) fn collect(levels: Levels<'_>) -> ConfigResult<Self> {
        let root = levels.root();
        let mut cascade = Self::default();
        for level in levels {
            let Some(folder) = ConfigFolder::open(level)? else {
                continue;
            };
            cascade.push_properties(&folder, PROPERTIES_FILENAME)?;
            cascade.offer_stylesheet(&folder, CSS_FILENAME)?;
            if level == root {
                cascade.push_properties(&folder, PROPERTIES_DEFAULT_FILENAME)?;
                cascade.offer_stylesheet(&folder, CSS_DEFAULT_FILENAME)?;
            }
        }
        Ok(cascade)
    }

    fn push_properties(&mut self, folder: &ConfigFolder, name: &str) -> ConfigResult<()> {
        if let Some(bytes) = folder.read(name)? {
            let properties = Properties::from_latin1(&bytes);
            debug!(
                file = %folder.file_path(name),
                keys = properties.len(),
                "collected properties layer"
            );
            self.layers.push(properties);
        }
        Ok(())
    }

    fn offer_stylesheet(&mut self, folder: &ConfigFolder, name: &str) -> ConfigResult<()> {
        if self.stylesheet.is_none() {
            self.stylesheet = folder.read_text(name)?;
            if self.stylesheet.is_some() {
                debug!(file = %folder.file_path(name), "selected stylesheet");
            }
        }
        Ok(())
    }

    /// Number of property layers collected.
    pub(crate) const fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Merges the layers so the innermost definition of each key wins.
    pub(crate) fn into_config(self) -> ConfigResult<ConfigDto> {
        let figment = self
            .layers
            .iter()
            .rev()
            .fold(Figment::new(), |figment, layer| figment.merge(layer.provider()));
        let mut config: ConfigDto = figment.extract().into_gathering()?;
        config.css = self.stylesheet.unwrap_or_default();
        Ok(config)
    }
}
