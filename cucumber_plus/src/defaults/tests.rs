//! Tests for default-file provisioning.

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use test_helpers::tree::ProjectTree;

use super::{BundledDefaults, DefaultFile, content_hash, provision};
use crate::events::ConfigEvent;
use crate::file::{CONFIG_FOLDER, CSS_DEFAULT_FILENAME, CSS_FILENAME, PROPERTIES_DEFAULT_FILENAME};

#[fixture]
fn tree() -> Result<ProjectTree> {
    ProjectTree::new()
}

fn in_folder(name: &str) -> String {
    format!("{CONFIG_FOLDER}/{name}")
}

#[test]
fn content_hash_is_sha256_hex() {
    assert_eq!(
        content_hash(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[rstest]
#[case(DefaultFile::Properties, "cucumber+.default.properties")]
#[case(DefaultFile::Stylesheet, "cucumber+.default.css")]
fn default_file_names(#[case] file: DefaultFile, #[case] expected: &str) {
    assert_eq!(file.file_name(), expected);
}

#[test]
fn bundled_properties_define_date_format() {
    let bundled = BundledDefaults::default();
    let text = String::from_utf8_lossy(bundled.contents(DefaultFile::Properties));
    assert!(text.contains("dateFormat="));
}

#[rstest]
fn first_provision_creates_folder_with_bundled_bytes(tree: Result<ProjectTree>) -> Result<()> {
    let tree = tree?;
    let bundled = BundledDefaults::default();
    let events = provision(tree.root(), &bundled).map_err(|e| anyhow!("{e}"))?;

    ensure!(
        events == vec![ConfigEvent::FolderCreated(tree.path(CONFIG_FOLDER))],
        "unexpected events {events:?}"
    );
    ensure!(tree.exists(CONFIG_FOLDER), "configuration folder missing");
    for file in DefaultFile::ALL {
        let on_disk = std::fs::read(tree.path(&in_folder(file.file_name())))?;
        ensure!(on_disk == bundled.contents(file), "{} differs", file.file_name());
    }
    Ok(())
}

#[rstest]
fn second_provision_is_silent(tree: Result<ProjectTree>) -> Result<()> {
    let tree = tree?;
    let bundled = BundledDefaults::default();
    provision(tree.root(), &bundled).map_err(|e| anyhow!("{e}"))?;
    let before = tree.modified(&in_folder(CSS_DEFAULT_FILENAME))?;

    let events = provision(tree.root(), &bundled).map_err(|e| anyhow!("{e}"))?;
    ensure!(events.is_empty(), "expected no events, got {events:?}");
    ensure!(
        tree.modified(&in_folder(CSS_DEFAULT_FILENAME))? == before,
        "default stylesheet was rewritten"
    );
    Ok(())
}

#[rstest]
fn missing_default_is_added(tree: Result<ProjectTree>) -> Result<()> {
    let tree = tree?;
    tree.mkdir(CONFIG_FOLDER)?;
    tree.write(&in_folder(CSS_DEFAULT_FILENAME), "body {}")?;
    let bundled = BundledDefaults::new(b"topLeft=x".to_vec(), b"body {}".to_vec());

    let events = provision(tree.root(), &bundled).map_err(|e| anyhow!("{e}"))?;
    ensure!(
        events
            == vec![ConfigEvent::DefaultFileAdded(
                tree.path(&in_folder(PROPERTIES_DEFAULT_FILENAME))
            )],
        "unexpected events {events:?}"
    );
    ensure!(
        tree.read(&in_folder(PROPERTIES_DEFAULT_FILENAME))? == "topLeft=x",
        "missing default not written"
    );
    Ok(())
}

#[rstest]
fn upgraded_default_overwrites_only_default_files(tree: Result<ProjectTree>) -> Result<()> {
    let tree = tree?;
    provision(tree.root(), &BundledDefaults::default()).map_err(|e| anyhow!("{e}"))?;
    tree.write(&in_folder(CSS_FILENAME), "h1 { color: red; }")?;

    let upgraded = BundledDefaults::new(
        BundledDefaults::default()
            .contents(DefaultFile::Properties)
            .to_vec(),
        b"body { margin: 0; }".to_vec(),
    );
    let events = provision(tree.root(), &upgraded).map_err(|e| anyhow!("{e}"))?;

    ensure!(
        events
            == vec![ConfigEvent::DefaultFileUpdated(
                tree.path(&in_folder(CSS_DEFAULT_FILENAME))
            )],
        "unexpected events {events:?}"
    );
    ensure!(
        tree.read(&in_folder(CSS_DEFAULT_FILENAME))? == "body { margin: 0; }",
        "default stylesheet not upgraded"
    );
    ensure!(
        tree.read(&in_folder(CSS_FILENAME))? == "h1 { color: red; }",
        "user stylesheet must be left alone"
    );
    Ok(())
}
