//! End-to-end resolution against temporary project trees.

use anyhow::{Context, Result, anyhow, ensure};
use camino::Utf8PathBuf;
use cucumber_plus::{
    BundledDefaults, CONFIG_FOLDER, ConfigEvent, ConfigResolver, ConfigResult, DefaultFile,
    PROPERTY_KEYS, Resolution, ResolutionError,
};
use rstest::{fixture, rstest};
use test_helpers::tree::ProjectTree;

const ROOT: &str = "src/test/resources";

struct Project {
    tree: ProjectTree,
    root: Utf8PathBuf,
}

impl Project {
    fn resolver(&self) -> ConfigResolver {
        self.resolver_with(BundledDefaults::default())
    }

    fn resolver_with(&self, defaults: BundledDefaults) -> ConfigResolver {
        ConfigResolver::builder()
            .source_roots([self.root.clone()])
            .bundled_defaults(defaults)
            .build()
    }
}

/// Tree-relative path of `name` in the configuration folder at `level`.
fn config_file(level: &str, name: &str) -> String {
    if level.is_empty() {
        format!("{ROOT}/{CONFIG_FOLDER}/{name}")
    } else {
        format!("{ROOT}/{level}/{CONFIG_FOLDER}/{name}")
    }
}

#[fixture]
fn project() -> Result<Project> {
    let tree = ProjectTree::new()?;
    let root = tree.mkdir(ROOT)?;
    Ok(Project { tree, root })
}

fn ok<T>(result: ConfigResult<T>) -> Result<T> {
    result.map_err(|e| anyhow!("{e}"))
}

fn resolution_error(result: ConfigResult<Resolution>) -> Result<ResolutionError> {
    let err = result.err().context("expected resolution to fail")?;
    err.as_resolution()
        .cloned()
        .with_context(|| format!("expected a resolution error, got {err}"))
}

#[rstest]
fn innermost_folder_wins_per_key(project: Result<Project>) -> Result<()> {
    let project = project?;
    let feature = project
        .tree
        .write(&format!("{ROOT}/shop/cart/checkout.feature"), "Feature: Checkout")?;
    project.tree.write(
        &config_file("", "cucumber+.properties"),
        "topLeft=root\ntopCenter=root\ntopRight=root",
    )?;
    project.tree.write(
        &config_file("shop", "cucumber+.properties"),
        "topCenter=shop\ntopRight=shop",
    )?;
    project.tree.write(
        &config_file("shop/cart", "cucumber+.properties"),
        "topRight=cart",
    )?;
    let defaults = BundledDefaults::new(b"bottomLeft=default".to_vec(), Vec::new());

    let config = ok(project.resolver_with(defaults).resolve_file(&feature))?.config;
    ensure!(config.top_left == "root", "topLeft: {:?}", config.top_left);
    ensure!(config.top_center == "shop", "topCenter: {:?}", config.top_center);
    ensure!(config.top_right == "cart", "topRight: {:?}", config.top_right);
    ensure!(config.bottom_left == "default", "defaults fill unset keys");
    ensure!(config.bottom_center.is_empty(), "undefined keys resolve to empty");
    Ok(())
}

#[rstest]
fn every_key_maps_to_its_field(project: Result<Project>) -> Result<()> {
    let project = project?;
    let feature = project.tree.write(&format!("{ROOT}/a.feature"), "Feature: A")?;
    let text: String = PROPERTY_KEYS
        .iter()
        .map(|key| format!("{key}=v-{key}\n"))
        .collect();
    project
        .tree
        .write(&config_file("", "cucumber+.properties"), text)?;

    let config = ok(project.resolver().resolve_file(&feature))?.config;
    let json = serde_json::to_value(&config)?;
    for key in PROPERTY_KEYS {
        let value = json.get(key).and_then(|v| v.as_str());
        ensure!(value == Some(format!("v-{key}").as_str()), "{key} resolved to {value:?}");
    }
    Ok(())
}

#[rstest]
fn nearest_stylesheet_wins_without_merging(project: Result<Project>) -> Result<()> {
    let project = project?;
    let feature = project
        .tree
        .write(&format!("{ROOT}/shop/cart/checkout.feature"), "Feature: Checkout")?;
    project
        .tree
        .write(&config_file("", "cucumber+.css"), "h1 { color: blue; }")?;
    project
        .tree
        .write(&config_file("shop", "cucumber+.css"), "h1 { color: green; }")?;

    let config = ok(project.resolver().resolve_file(&feature))?.config;
    ensure!(config.css == "h1 { color: green; }", "css: {:?}", config.css);
    Ok(())
}

#[rstest]
fn root_default_stylesheet_is_the_fallback(project: Result<Project>) -> Result<()> {
    let project = project?;
    let feature = project.tree.write(&format!("{ROOT}/a.feature"), "Feature: A")?;
    let bundled = BundledDefaults::default();

    let config = ok(project.resolver().resolve_file(&feature))?.config;
    ensure!(
        config.css.as_bytes() == bundled.contents(DefaultFile::Stylesheet),
        "expected the bundled stylesheet"
    );
    Ok(())
}

#[rstest]
fn first_resolution_provisions_bundled_defaults(project: Result<Project>) -> Result<()> {
    let project = project?;
    let feature = project.tree.write(&format!("{ROOT}/a.feature"), "Feature: A")?;
    let bundled = BundledDefaults::default();

    let resolution = ok(project.resolver().resolve_file(&feature))?;
    ensure!(
        resolution.events == vec![ConfigEvent::FolderCreated(project.root.join(CONFIG_FOLDER))],
        "unexpected events {:?}",
        resolution.events
    );
    for file in DefaultFile::ALL {
        let on_disk = std::fs::read(project.tree.path(&config_file("", file.file_name())))?;
        ensure!(on_disk == bundled.contents(file), "{} differs", file.file_name());
    }
    ensure!(resolution.config.date_format == "dd/MM/yyyy", "bundled date format expected");
    Ok(())
}

#[rstest]
fn second_resolution_writes_nothing(project: Result<Project>) -> Result<()> {
    let project = project?;
    let feature = project.tree.write(&format!("{ROOT}/a.feature"), "Feature: A")?;
    let resolver = project.resolver();
    let first = ok(resolver.resolve_file(&feature))?;

    let stamps = DefaultFile::ALL
        .iter()
        .map(|file| project.tree.modified(&config_file("", file.file_name())))
        .collect::<Result<Vec<_>>>()?;
    let second = ok(resolver.resolve_file(&feature))?;
    let after = DefaultFile::ALL
        .iter()
        .map(|file| project.tree.modified(&config_file("", file.file_name())))
        .collect::<Result<Vec<_>>>()?;

    ensure!(second.events.is_empty(), "unexpected events {:?}", second.events);
    ensure!(stamps == after, "default files were rewritten");
    ensure!(first.config == second.config, "configuration must be stable");
    Ok(())
}

#[rstest]
fn upgrade_refreshes_defaults_and_keeps_user_files(project: Result<Project>) -> Result<()> {
    let project = project?;
    let feature = project.tree.write(&format!("{ROOT}/a.feature"), "Feature: A")?;
    ok(project.resolver().resolve_file(&feature))?;
    let user_props = config_file("", "cucumber+.properties");
    let user_css = config_file("", "cucumber+.css");
    project.tree.write(&user_props, "topLeft=mine")?;
    project.tree.write(&user_css, "body { margin: 1cm; }")?;

    let upgraded = BundledDefaults::new(
        b"dateFormat=yyyy\nbottomCenter=v2".to_vec(),
        b"body { margin: 2cm; }".to_vec(),
    );
    let resolution = ok(project.resolver_with(upgraded).resolve_file(&feature))?;

    let expected: Vec<ConfigEvent> = DefaultFile::ALL
        .iter()
        .map(|file| {
            let path = project.tree.path(&config_file("", file.file_name()));
            ConfigEvent::DefaultFileUpdated(path)
        })
        .collect();
    ensure!(resolution.events == expected, "unexpected events {:?}", resolution.events);
    ensure!(
        project.tree.read(&config_file("", "cucumber+.default.css"))? == "body { margin: 2cm; }",
        "default stylesheet not upgraded"
    );
    ensure!(project.tree.read(&user_props)? == "topLeft=mine", "user properties changed");
    ensure!(project.tree.read(&user_css)? == "body { margin: 1cm; }", "user stylesheet changed");
    ensure!(resolution.config.bottom_center == "v2", "new defaults must apply");
    ensure!(resolution.config.top_left == "mine", "user value must still win");
    Ok(())
}

#[rstest]
fn deleted_default_is_restored(project: Result<Project>) -> Result<()> {
    let project = project?;
    let feature = project.tree.write(&format!("{ROOT}/a.feature"), "Feature: A")?;
    let resolver = project.resolver();
    ok(resolver.resolve_file(&feature))?;
    let default_props = config_file("", "cucumber+.default.properties");
    std::fs::remove_file(project.tree.path(&default_props))?;

    let resolution = ok(resolver.resolve_file(&feature))?;
    ensure!(
        resolution.events == vec![ConfigEvent::DefaultFileAdded(project.tree.path(&default_props))],
        "unexpected events {:?}",
        resolution.events
    );
    ensure!(project.tree.exists(&default_props), "default file must be restored");
    Ok(())
}

#[rstest]
fn files_resolve_through_common_ancestor(project: Result<Project>) -> Result<()> {
    let project = project?;
    let x = project.tree.write(&format!("{ROOT}/a/x.feature"), "Feature: X")?;
    let y = project.tree.write(&format!("{ROOT}/b/y.feature"), "Feature: Y")?;
    project
        .tree
        .write(&config_file("a", "cucumber+.properties"), "topLeft=a")?;
    project
        .tree
        .write(&config_file("", "cucumber+.properties"), "topLeft=root")?;

    let resolver = project.resolver();
    let combined = ok(resolver.resolve(&[x, y]))?.config;
    let direct = ok(resolver.resolve_file(&project.root))?.config;
    ensure!(combined.top_left == "root", "sibling folders must not apply");
    ensure!(combined == direct, "common ancestor must resolve like a single target");
    Ok(())
}

#[rstest]
fn single_element_selection_resolves_the_file(project: Result<Project>) -> Result<()> {
    let project = project?;
    let x = project.tree.write(&format!("{ROOT}/a/x.feature"), "Feature: X")?;
    project
        .tree
        .write(&config_file("a", "cucumber+.properties"), "topLeft=a")?;
    let config = ok(project.resolver().resolve(&[x]))?.config;
    ensure!(config.top_left == "a", "topLeft: {:?}", config.top_left);
    Ok(())
}

#[rstest]
fn files_from_different_roots_are_not_same_project() -> Result<()> {
    let first = ProjectTree::new()?;
    let second = ProjectTree::new()?;
    let x = first.write("src/x.feature", "Feature: X")?;
    let y = second.write("src/y.feature", "Feature: Y")?;
    let resolver = ConfigResolver::builder()
        .source_roots([first.path("src"), second.path("src")])
        .build();

    let err = resolution_error(resolver.resolve(&[x, y]))?;
    ensure!(err == ResolutionError::NotSameProject, "unexpected error {err}");
    ensure!(!first.exists("src/.cucumber+"), "nothing may be provisioned");
    Ok(())
}

#[rstest]
fn file_outside_source_roots_is_rejected(project: Result<Project>) -> Result<()> {
    let project = project?;
    let stray = project.tree.write("docs/readme.feature", "Feature: Docs")?;
    let err = resolution_error(project.resolver().resolve_file(&stray))?;
    ensure!(
        err == ResolutionError::NoSourceRoot { path: stray },
        "unexpected error {err}"
    );
    ensure!(
        !project.tree.exists(&format!("{ROOT}/{CONFIG_FOLDER}")),
        "nothing may be provisioned"
    );
    Ok(())
}
