// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, eyre, Result};
use gclient::env::Environment;
use gclient::facade::{self, ConfigSource, PassThroughOptions};
use gclient::scm::SubversionDriver;
use gclient::sync::SyncOptions;

#[derive(Debug, Parser)]
#[command(
    name = "gclient",
    about = "Resolve and synchronize multi-module Subversion workspaces declared by .gclient/DEPS manifests"
)]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

// Ensure this list is kept up to date with USAGE below.
#[derive(Debug, Subcommand)]
enum Command {
    /// Create the workspace file from a URL or a literal manifest
    Config {
        /// Solution URL; the solution name is derived from its last path segment
        url: Option<String>,
        /// Literal .gclient manifest text, instead of a bare URL
        #[arg(long)]
        spec: Option<String>,
    },
    /// Resolve the workspace and bring every entry up to date
    #[command(alias = "update")]
    Sync {
        /// Reissue an update even when the working copy already matches
        #[arg(long)]
        force: bool,
        /// Permit relocating a working copy whose repository root moved
        #[arg(long)]
        relocate: bool,
        /// Pin to REV (every solution) or SOLUTION@REV (one solution)
        #[arg(long)]
        revision: Option<String>,
        /// Emit additional diagnostics, including no-op entries
        #[arg(long)]
        verbose: bool,
        /// Extra arguments forwarded verbatim to the SCM driver
        #[arg(last = true)]
        extra: Vec<String>,
    },
    /// Show SCM status for every resolved entry
    Status {
        #[arg(long)]
        verbose: bool,
        #[arg(last = true)]
        extra: Vec<String>,
    },
    /// Show SCM diff for every resolved entry
    Diff {
        #[arg(long)]
        verbose: bool,
        #[arg(last = true)]
        extra: Vec<String>,
    },
    /// Revert local changes across every resolved entry
    Revert,
    /// Print usage information, optionally for a single subcommand
    Help {
        subcommand: Option<String>,
    },
}

/// One-line usage per verb, printed by the `help` subcommand. Kept as a
/// flat table (rather than asking clap to render it) because `gclient help
/// <verb>` is a two-word form clap's own `--help` flag doesn't produce.
const USAGE: &[(&str, &str)] = &[
    ("config", "config (<url> | --spec <text>)"),
    (
        "sync",
        "sync|update [--force] [--relocate] [--revision REV|SOLUTION@REV] [--verbose] [-- <extra>]",
    ),
    ("status", "status [--verbose] [-- <extra>]"),
    ("diff", "diff [--verbose] [-- <extra>]"),
    ("revert", "revert"),
    ("help", "help [subcommand]"),
];

impl Args {
    fn exec(&self) -> Result<i32> {
        let cwd = std::env::current_dir()?;
        let cwd = Utf8PathBuf::from_path_buf(cwd)
            .map_err(|p| eyre!("current directory is not valid UTF-8: {}", p.display()))?;

        let mut env = Environment::new(
            Box::new(|line: &str| println!("{line}")),
            Box::new(SubversionDriver::new()),
        );

        let code = match &self.cmd {
            Command::Config { url, spec } => {
                let source = match (url, spec) {
                    (Some(url), None) => ConfigSource::Url(url.clone()),
                    (None, Some(spec)) => ConfigSource::Spec(spec.clone()),
                    (None, None) => bail!("config requires a URL or --spec <text>"),
                    (Some(_), Some(_)) => bail!("config takes a URL or --spec <text>, not both"),
                };
                facade::config(&cwd, source, &mut env)?
            }
            Command::Sync {
                force,
                relocate,
                revision,
                verbose,
                extra,
            } => {
                let root = facade::find_workspace_root(&cwd)?;
                let opts = SyncOptions {
                    force: *force,
                    relocate: *relocate,
                    revision: revision.clone(),
                    verbose: *verbose,
                    extra_args: extra.clone(),
                };
                facade::sync(&root, &opts, &mut env)?
            }
            Command::Status { verbose, extra } => {
                let root = facade::find_workspace_root(&cwd)?;
                let opts = PassThroughOptions {
                    verbose: *verbose,
                    extra_args: extra.clone(),
                };
                facade::status(&root, &opts, &mut env)?
            }
            Command::Diff { verbose, extra } => {
                let root = facade::find_workspace_root(&cwd)?;
                let opts = PassThroughOptions {
                    verbose: *verbose,
                    extra_args: extra.clone(),
                };
                facade::diff(&root, &opts, &mut env)?
            }
            Command::Revert => {
                let root = facade::find_workspace_root(&cwd)?;
                facade::revert(&root, &mut env)?
            }
            Command::Help { subcommand } => print_help(subcommand.as_deref())?,
        };
        Ok(code)
    }
}

fn print_help(subcommand: Option<&str>) -> Result<i32> {
    match subcommand {
        None => {
            for (name, usage) in USAGE {
                println!("{:<8} {}", name, usage);
            }
            Ok(0)
        }
        Some(name) => match USAGE.iter().find(|(n, _)| *n == name) {
            Some((_, usage)) => {
                println!("{}", usage);
                Ok(0)
            }
            None => bail!("gclient help: unknown subcommand \"{}\"", name),
        },
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    std::process::exit(args.exec()?)
}
