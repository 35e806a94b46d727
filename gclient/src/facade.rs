// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The thin dispatch surface the CLI crate calls into (component C7):
//! `config`, `sync`/`update`, `status`, `diff`, `revert`, plus workspace
//! discovery.

use crate::env::Environment;
use crate::errors::Error;
use crate::manifest::eval_workspace;
use crate::model::WorkspaceConfig;
use crate::resolver;
use crate::sync::{self, SyncOptions};
use camino::{Utf8Path, Utf8PathBuf};

/// Where `config` gets its workspace contents from.
#[derive(Clone, Debug)]
pub enum ConfigSource {
    /// A bare solution URL; the solution name is derived from the URL's
    /// last path segment.
    Url(String),
    /// A literal `.gclient` manifest body, written verbatim.
    Spec(String),
}

/// Options shared by the read-only pass-through verbs (`status`, `diff`).
/// `revert` builds its own fixed set rather than taking one of these.
#[derive(Clone, Debug, Default)]
pub struct PassThroughOptions {
    /// Emit additional diagnostics.
    pub verbose: bool,
    /// Extra arguments forwarded verbatim to the SCM driver.
    pub extra_args: Vec<String>,
}

/// The filename `.gclient`/`.gclient_entries` discovery and writes use,
/// overridable via `GCLIENT_FILE` (the original's own override hook).
fn client_filename() -> String {
    std::env::var("GCLIENT_FILE").unwrap_or_else(|_| ".gclient".to_string())
}

/// Walks upward from `start` looking for the workspace file, returning the
/// directory it was found in. Fails with `UsageError` if none is found by
/// the filesystem root.
pub fn find_workspace_root(start: &Utf8Path) -> Result<Utf8PathBuf, Error> {
    let filename = client_filename();
    let mut dir = start.to_path_buf();
    loop {
        if dir.join(filename.as_str()).is_file() {
            return Ok(dir);
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => return Err(Error::UsageError("client not configured".to_string())),
        }
    }
}

/// Creates the workspace file at `root_dir`. Fails with `UsageError` if one
/// already exists there.
pub fn config(root_dir: &Utf8Path, source: ConfigSource, env: &mut Environment) -> Result<i32, Error> {
    let path = root_dir.join(client_filename());
    if path.is_file() {
        return Err(Error::UsageError(format!("\"{}\" already exists", path)));
    }

    let text = match source {
        ConfigSource::Spec(text) => text,
        ConfigSource::Url(url) => {
            let name = url.rsplit('/').next().filter(|s| !s.is_empty()).unwrap_or(&url);
            format!(
                "solutions = [\n  {{ \"name\": \"{name}\", \"url\": \"{url}\", \"custom_deps\": {{}} }},\n]\n",
                name = name,
                url = url,
            )
        }
    };

    std::fs::write(path.as_std_path(), text)?;
    env.log(&format!("created {}", path));
    Ok(0)
}

/// Loads, resolves, and applies the workspace at `root_dir`. The `update`
/// CLI verb is an alias for this same operation.
pub fn sync(root_dir: &Utf8Path, opts: &SyncOptions, env: &mut Environment) -> Result<i32, Error> {
    let cfg = load_workspace(root_dir)?;
    let plan = resolver::resolve(&cfg, env)?;
    let plan = match &opts.revision {
        Some(revision) => {
            let solution_names: Vec<String> =
                cfg.solutions.iter().map(|s| s.name.clone()).collect();
            crate::sync::pin_revisions(plan, &solution_names, revision)
        }
        None => plan,
    };
    sync::apply(&plan, opts, root_dir, env)
}

/// Drives `svn status` across every resolved entry.
pub fn status(root_dir: &Utf8Path, opts: &PassThroughOptions, env: &mut Environment) -> Result<i32, Error> {
    pass_through(root_dir, "status", opts, env)
}

/// Drives `svn diff` across every resolved entry.
pub fn diff(root_dir: &Utf8Path, opts: &PassThroughOptions, env: &mut Environment) -> Result<i32, Error> {
    pass_through(root_dir, "diff", opts, env)
}

/// Drives `svn revert --recursive *.*` across every resolved entry.
pub fn revert(root_dir: &Utf8Path, env: &mut Environment) -> Result<i32, Error> {
    let opts = PassThroughOptions {
        verbose: false,
        extra_args: vec!["--recursive".to_string(), "*.*".to_string()],
    };
    pass_through(root_dir, "revert", &opts, env)
}

fn pass_through(
    root_dir: &Utf8Path,
    verb: &str,
    opts: &PassThroughOptions,
    env: &mut Environment,
) -> Result<i32, Error> {
    let cfg = load_workspace(root_dir)?;
    let plan = resolver::resolve(&cfg, env)?;

    let mut aggregate: Option<i32> = None;
    for entry in plan.iter() {
        if opts.verbose {
            env.log(&format!("{} {}", verb, entry.relpath));
        }
        let (driver, log) = env.driver_and_log();
        let code = driver.status_diff(verb, &entry.relpath, root_dir, &opts.extra_args, log)?;
        if code != 0 && aggregate.is_none() {
            aggregate = Some(code);
        }
    }
    Ok(aggregate.unwrap_or(0))
}

fn load_workspace(root_dir: &Utf8Path) -> Result<WorkspaceConfig, Error> {
    let path = root_dir.join(client_filename());
    let text = std::fs::read_to_string(path.as_std_path())
        .map_err(|_| Error::UsageError("client not configured".to_string()))?;
    Ok(eval_workspace(&text, root_dir.to_path_buf())?)
}
