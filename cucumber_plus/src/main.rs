//! Command-line front end for the Cucumber+ export configuration.
//!
//! `cucumber-plus resolve` provisions the configuration folder of a source
//! root, resolves the cascading configuration for the given feature files
//! and prints the resulting style together with the provisioning events as
//! JSON on stdout.

use std::io::Write;
use std::process::ExitCode;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};

use cucumber_plus::logging::init_logging;
use cucumber_plus::settings::{LogLevel, Settings};
use cucumber_plus::{ConfigEvent, ConfigResolver, ConfigResult, IoResultExt, PdfStyle};

/// Cascading export configuration for Cucumber feature files.
#[derive(Parser, Debug)]
#[command(name = "cucumber-plus", version, about)]
struct Args {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the export style for one or more feature files.
    Resolve {
        /// Directory treated as a source root; repeat for several roots.
        #[arg(long = "source-root", required = true)]
        source_roots: Vec<Utf8PathBuf>,
        /// Feature files (or directories) to export.
        #[arg(required = true)]
        files: Vec<Utf8PathBuf>,
    },
}

#[derive(Serialize)]
struct Output<'a> {
    style: &'a PdfStyle,
    events: &'a [ConfigEvent],
}

fn main() -> ExitCode {
    let args = Args::parse();
    let settings = match Settings::from_env() {
        Ok(settings) => settings.apply_overrides(args.log_level),
        Err(e) => {
            init_logging(&Settings::default());
            error!(error = %e, "invalid settings");
            return ExitCode::from(2);
        }
    };
    init_logging(&settings);

    let result = match &args.command {
        Command::Resolve {
            source_roots,
            files,
        } => resolve(source_roots, files),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "resolution failed");
            ExitCode::FAILURE
        }
    }
}

fn canonical(path: &Utf8Path) -> ConfigResult<Utf8PathBuf> {
    path.canonicalize_utf8().with_path(path)
}

fn resolve(source_roots: &[Utf8PathBuf], files: &[Utf8PathBuf]) -> ConfigResult<()> {
    let roots = source_roots
        .iter()
        .map(|root| canonical(root))
        .collect::<ConfigResult<Vec<_>>>()?;
    let targets = files
        .iter()
        .map(|file| canonical(file))
        .collect::<ConfigResult<Vec<_>>>()?;

    let resolver = ConfigResolver::builder().source_roots(roots).build();
    let resolution = resolver.resolve(&targets)?;
    for event in &resolution.events {
        info!(path = %event.target(), "{event}");
    }
    let style = resolution.config.build_styles_now()?;

    let output = Output {
        style: &style,
        events: &resolution.events,
    };
    let stdout_path = Utf8Path::new("<stdout>");
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &output)
        .map_err(std::io::Error::from)
        .with_path(stdout_path)?;
    writeln!(stdout).with_path(stdout_path)
}
