//! Provisioning of the root configuration folder.

use camino::Utf8Path;
use tracing::info;

use super::{BundledDefaults, DefaultFile, content_hash};
use crate::events::ConfigEvent;
use crate::file::ConfigFolder;
use crate::ConfigResult;

/// Ensures `root/.cucumber+` exists and its default files match `bundled`.
///
/// A freshly created folder yields a single [`ConfigEvent::FolderCreated`].
/// An existing folder is only written to when a default file is missing or
/// its hash differs from the bundled bytes; an up-to-date folder yields no
/// events and no writes.
pub(crate) fn provision(
    root: &Utf8Path,
    bundled: &BundledDefaults,
) -> ConfigResult<Vec<ConfigEvent>> {
    let mut events = Vec::new();
    let folder = match ConfigFolder::open(root)? {
        Some(folder) => folder,
        None => {
            let folder = ConfigFolder::create(root)?;
            for file in DefaultFile::ALL {
                folder.write(file.file_name(), bundled.contents(file))?;
            }
            info!(folder = %folder.path(), "created configuration folder");
            events.push(ConfigEvent::FolderCreated(folder.path().to_owned()));
            folder
        }
    };
    for file in DefaultFile::ALL {
        if let Some(event) = sync_default(&folder, bundled, file)? {
            events.push(event);
        }
    }
    Ok(events)
}

fn sync_default(
    folder: &ConfigFolder,
    bundled: &BundledDefaults,
    file: DefaultFile,
) -> ConfigResult<Option<ConfigEvent>> {
    let name = file.file_name();
    let expected = bundled.contents(file);
    let event = match folder.read(name)? {
        None => ConfigEvent::DefaultFileAdded(folder.file_path(name)),
        Some(current) if content_hash(&current) != bundled.hash(file) => {
            ConfigEvent::DefaultFileUpdated(folder.file_path(name))
        }
        Some(_) => return Ok(None),
    };
    folder.write(name, expected)?;
    info!(file = %event.target(), "{event}");
    Ok(Some(event))
}
