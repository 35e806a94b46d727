// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Materializes a [`Plan`] against the working-copy tree (component C5):
//! per-entry checkout/update/switch/relocate decisions, revision pinning,
//! and orphan bookkeeping against the entries journal.

use crate::env::Environment;
use crate::errors::Error;
use crate::journal::{self, EntriesJournal};
use crate::model::RepoCoord;
use crate::resolver::{Plan, ResolvedEntry, ResolvedTarget};
use crate::scm::InfoTarget;
use camino::Utf8Path;

/// Options recognized by [`apply`], mirroring the `sync`/`update` CLI verb.
#[derive(Clone, Debug, Default)]
pub struct SyncOptions {
    /// Reissue an update even when the working copy already matches.
    pub force: bool,
    /// Permit `Relocate` when a target moves to a different repository
    /// root; otherwise such entries are skipped with a warning.
    pub relocate: bool,
    /// `REV` (pins every solution) or `SOLUTION@REV` (pins one solution).
    pub revision: Option<String>,
    /// Emit additional diagnostics, including no-op entries.
    pub verbose: bool,
    /// Extra arguments forwarded verbatim to the SCM driver.
    pub extra_args: Vec<String>,
}

/// Rewrites every *solution* target's revision per `opts.revision`.
/// Dependency revisions always come from `DEPS` verbatim and are never
/// touched here. `solution_names` distinguishes solution entries from
/// dependency entries within the plan.
pub fn pin_revisions(plan: Plan, solution_names: &[String], revision: &str) -> Plan {
    let (only_solution, rev) = match revision.split_once('@') {
        Some((name, rev)) => (Some(name), rev),
        None => (None, revision),
    };

    let entries = plan
        .0
        .into_iter()
        .map(|entry| {
            if !solution_names.iter().any(|n| n == &entry.relpath) {
                return entry;
            }
            if matches!(only_solution, Some(name) if name != entry.relpath) {
                return entry;
            }
            match entry.target {
                ResolvedTarget::Direct(coord) => ResolvedEntry {
                    relpath: entry.relpath,
                    target: ResolvedTarget::Direct(coord.with_revision(rev)),
                },
                target => ResolvedEntry {
                    relpath: entry.relpath,
                    target,
                },
            }
        })
        .collect();
    Plan(entries)
}

/// Applies `plan` to the working-copy tree rooted at `root_dir`, then
/// rewrites the entries journal. Returns the aggregated exit code: the
/// first nonzero per-entry code observed, or 0 if every entry succeeded.
pub fn apply(
    plan: &Plan,
    opts: &SyncOptions,
    root_dir: &Utf8Path,
    env: &mut Environment,
) -> Result<i32, Error> {
    let journal_path = root_dir.join(".gclient_entries");
    let previous = journal::read(&journal_path)?;

    let mut aggregate: Option<i32> = None;
    let mut note = |code: i32| {
        if code != 0 && aggregate.is_none() {
            aggregate = Some(code);
        }
    };

    for entry in plan.iter() {
        let target = match &entry.target {
            ResolvedTarget::Direct(coord) => coord,
            ResolvedTarget::Skipped => continue,
        };
        let code = apply_entry(&entry.relpath, target, opts, root_dir, env)?;
        note(code);
    }

    write_journal(&journal_path, plan, &previous, root_dir, env)?;

    Ok(aggregate.unwrap_or(0))
}

fn apply_entry(
    relpath: &str,
    target: &RepoCoord,
    opts: &SyncOptions,
    root_dir: &Utf8Path,
    env: &mut Environment,
) -> Result<i32, Error> {
    let entry_dir = root_dir.join(relpath);

    if entry_dir.join(".git").exists() {
        env.log(&format!(
            "{}: found .git directory; skipping",
            relpath
        ));
        return Ok(0);
    }

    if !entry_dir.exists() {
        let (driver, log) = env.driver_and_log();
        return driver.checkout(
            &target.url,
            relpath,
            root_dir,
            &opts.extra_args,
            log,
        );
    }

    let (driver, log) = env.driver_and_log();
    let from = driver
        .info(InfoTarget::Relpath(relpath), root_dir, log)?
        .ok_or_else(|| {
            Error::MetadataError(format!("Info({}) returned no URL", relpath))
        })?;

    let mut from_url = from.url;
    let from_root = from.repo_root;
    let from_uuid = from.repo_uuid;
    let from_rev = from.revision;
    let to_url = target.url.clone();
    let to_rev = target.revision.clone();

    if from_url != to_url {
        let (driver, log) = env.driver_and_log();
        let to_info = driver
            .info(InfoTarget::Url(&to_url), root_dir, log)?
            .ok_or_else(|| {
                Error::MetadataError(format!("Info({}) returned no URL", to_url))
            })?;

        if from_root != to_info.repo_root {
            if from_uuid != to_info.repo_uuid {
                env.log(&format!(
                    "{}: can not relocate to URL with different Repository UUID",
                    relpath
                ));
                return Ok(0);
            }
            if !opts.relocate {
                env.log(&format!("{}: use the --relocate option to switch", relpath));
                return Ok(0);
            }
            let (driver, log) = env.driver_and_log();
            let code = driver.relocate(&from_root, &to_info.repo_root, relpath, root_dir, log)?;
            from_url = from_url.replacen(&from_root, &to_info.repo_root, 1);
            if code != 0 {
                return Ok(code);
            }
        }
    }

    if from_url == to_url {
        let revision_matches = matches!(&to_rev, Some(rev) if rev == &from_rev);
        if revision_matches && !opts.force {
            if opts.verbose {
                env.log(&format!("{} at {}", to_url, from_rev));
            }
            return Ok(0);
        }
        let (driver, log) = env.driver_and_log();
        return driver.update(relpath, root_dir, to_rev.as_deref(), &opts.extra_args, log);
    }

    let (driver, log) = env.driver_and_log();
    driver.switch(&to_url, relpath, root_dir, to_rev.as_deref(), &opts.extra_args, log)
}

fn write_journal(
    journal_path: &Utf8Path,
    plan: &Plan,
    previous: &EntriesJournal,
    root_dir: &Utf8Path,
    env: &mut Environment,
) -> Result<(), Error> {
    let mut next: Vec<String> = plan.iter().map(|e| e.relpath.clone()).collect();

    for relpath in &previous.0 {
        if next.iter().any(|r| r == relpath) {
            continue;
        }
        if root_dir.join(relpath).exists() {
            env.log(&format!(
                "{}: no longer part of this workspace; remove it manually",
                relpath
            ));
            next.push(relpath.clone());
        }
    }

    journal::write(journal_path, &EntriesJournal(next))
}
