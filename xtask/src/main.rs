// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Developer workflows for the Taikan workspace:
//!
//! - `cargo xtask ci`: lint, build and test
//! - `cargo xtask test`: library and doc tests, optionally for one crate
//! - `cargo xtask serve`: run the HTTP server against the demo catalog,
//!   a catalog file, or in offline (fallback) mode
//!
//! Nothing here needs external services. In offline mode every search is
//! served from the built-in fallback dataset.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{fmt::Debug, io, path::PathBuf, process::Output};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Package run by `cargo xtask serve`.
const SERVER_PACKAGE: &str = "taikan-server";

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test)
    CI,

    /// Build every crate and target
    #[command(visible_alias = "b")]
    Build,

    /// Lint formatting, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy with warnings denied
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Build the docs of every workspace crate with warnings denied
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check formatting
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Fix formatting
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run lib and doc tests
    #[command(visible_alias = "t")]
    Test {
        /// Only test this package, e.g. `taikan-catalog`
        #[arg(short, long)]
        package: Option<String>,
    },

    /// Run the HTTP server
    #[command(visible_alias = "s")]
    Serve {
        /// Port to bind the server to
        #[arg(short, long, default_value_t = 3000)]
        port: u16,

        /// JSON catalog file to serve instead of the demo catalog
        #[arg(short, long, conflicts_with = "offline")]
        catalog: Option<PathBuf>,

        /// Serve every search from the fallback dataset
        #[arg(long)]
        offline: bool,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::FixFormatting => fix_format(),
            Self::Test { package } => test(package.as_deref()),
            Self::Serve {
                port,
                catalog,
                offline,
            } => serve(port, catalog.as_ref(), offline),
        }
    }
}

/// Run CI checks (lint, build, test)
fn ci() -> Result<()> {
    lint()?;
    build()?;
    test(None)?;
    Ok(())
}

/// Build every crate and target
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Lint formatting, clippy, and docs
fn lint() -> Result<()> {
    lint_format()?;
    lint_clippy()?;
    lint_docs()?;
    Ok(())
}

/// Run clippy with warnings denied
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that the docs of every workspace crate build without warnings
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        tracing::info!(package = package.name.as_str(), "checking docs");
        cmd(
            "cargo",
            ["doc", "--no-deps", "--package", package.name.as_str()],
        )
        .env("RUSTDOCFLAGS", "-D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Check formatting
fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Fix formatting
fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Run lib tests, then doc tests, for one package or the whole workspace
fn test(package: Option<&str>) -> Result<()> {
    let mut libs: Vec<&str> = vec!["test", "--all-targets"];
    let mut docs: Vec<&str> = vec!["test", "--doc"];
    if let Some(name) = package {
        libs.extend(["--package", name]);
        docs.extend(["--package", name]);
    }

    run_cargo(libs)?;
    // doc tests last; they are the slowest
    run_cargo(docs)
}

/// Run the HTTP server with the given catalog options
fn serve(port: u16, catalog: Option<&PathBuf>, offline: bool) -> Result<()> {
    let mut args: Vec<String> = vec![
        String::from("run"),
        String::from("--package"),
        String::from(SERVER_PACKAGE),
        String::from("--"),
        String::from("--port"),
        port.to_string(),
    ];
    if let Some(path) = catalog {
        let path: PathBuf = path
            .canonicalize()
            .wrap_err_with(|| format!("catalog file not found: {}", path.display()))?;
        args.push(String::from("--catalog"));
        args.push(path.display().to_string());
    }
    if offline {
        args.push(String::from("--offline"));
    }

    tracing::info!(port, offline, "starting {SERVER_PACKAGE}");
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// Logs a `duct::Expression` before running it.
trait ExpressionExt {
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
