//! Tests for configuration folder access.

use anyhow::{Context, Result, anyhow, ensure};
use rstest::{fixture, rstest};
use test_helpers::tree::ProjectTree;

use super::{CONFIG_FOLDER, ConfigFolder, PROPERTIES_FILENAME};

#[fixture]
fn tree() -> Result<ProjectTree> {
    ProjectTree::new()
}

#[rstest]
fn open_returns_none_without_folder(tree: Result<ProjectTree>) -> Result<()> {
    let tree = tree?;
    let folder = ConfigFolder::open(tree.root()).map_err(|e| anyhow!("{e}"))?;
    ensure!(folder.is_none(), "no folder expected in an empty tree");
    Ok(())
}

#[rstest]
fn open_ignores_plain_file_with_folder_name(tree: Result<ProjectTree>) -> Result<()> {
    let tree = tree?;
    tree.write(CONFIG_FOLDER, "not a directory")?;
    let folder = ConfigFolder::open(tree.root()).map_err(|e| anyhow!("{e}"))?;
    ensure!(folder.is_none(), "a plain file must not be treated as a folder");
    Ok(())
}

#[rstest]
fn create_then_write_and_read(tree: Result<ProjectTree>) -> Result<()> {
    let tree = tree?;
    let folder = ConfigFolder::create(tree.root()).map_err(|e| anyhow!("{e}"))?;
    ensure!(folder.path() == tree.path(CONFIG_FOLDER), "unexpected folder path");
    ensure!(!folder.has_file(PROPERTIES_FILENAME), "file should not exist yet");

    folder
        .write(PROPERTIES_FILENAME, b"topLeft=x")
        .map_err(|e| anyhow!("{e}"))?;
    let text = folder
        .read_text(PROPERTIES_FILENAME)
        .map_err(|e| anyhow!("{e}"))?
        .context("file written above")?;
    ensure!(text == "topLeft=x", "unexpected content {text:?}");
    ensure!(
        tree.read(&format!("{CONFIG_FOLDER}/{PROPERTIES_FILENAME}"))? == "topLeft=x",
        "write must land inside the folder"
    );
    Ok(())
}

#[rstest]
fn read_missing_file_is_none(tree: Result<ProjectTree>) -> Result<()> {
    let tree = tree?;
    tree.mkdir(CONFIG_FOLDER)?;
    let folder = ConfigFolder::open(tree.root())
        .map_err(|e| anyhow!("{e}"))?
        .context("folder exists")?;
    ensure!(
        folder.read("missing.css").map_err(|e| anyhow!("{e}"))?.is_none(),
        "missing file should read as None"
    );
    Ok(())
}

#[rstest]
fn create_fails_when_folder_exists(tree: Result<ProjectTree>) -> Result<()> {
    let tree = tree?;
    tree.mkdir(CONFIG_FOLDER)?;
    let err = ConfigFolder::create(tree.root()).err().context("expected failure")?;
    ensure!(
        matches!(*err, crate::ConfigError::File { .. }),
        "expected file error, got {err}"
    );
    Ok(())
}
