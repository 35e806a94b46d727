// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The abstract contract the resolver and sync engine drive (component
//! C4). One concrete binding ([`subversion::SubversionDriver`]) is
//! provided; nothing else in this crate assumes Subversion specifically.

mod subversion;

pub use subversion::SubversionDriver;

use crate::errors::Error;
use camino::Utf8Path;

/// What `Info` returns for a working copy or a remote URL that exists.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InfoRecord {
    /// The URL the working copy (or remote path) currently points at.
    pub url: String,
    /// The root URL of the repository the URL belongs to.
    pub repo_root: String,
    /// The repository's UUID.
    pub repo_uuid: String,
    /// The revision the working copy is at (or, for a remote URL, HEAD or
    /// the pinned revision that was queried).
    pub revision: String,
}

/// Abstract contract consumed by the sync engine (component C5). A
/// concrete binding composes each operation as a subprocess invocation
/// against a specific SCM; it MUST echo the command it is about to run
/// through the environment's log sink and return the child's exit code
/// rather than treating a nonzero exit as a Rust-level error (the sync
/// engine is the one that decides what a nonzero code means).
pub trait ScmDriver {
    /// Looks up metadata for an existing working copy (`relpath` under
    /// `root_dir`) or a remote `url`. Returns `Ok(None)` if the target
    /// doesn't exist (distinct from encountering an I/O error actually
    /// running the driver).
    fn info(
        &mut self,
        target: InfoTarget<'_>,
        root_dir: &Utf8Path,
        log: &mut dyn FnMut(&str),
    ) -> Result<Option<InfoRecord>, Error>;

    /// Checks out `url` fresh at `relpath` under `root_dir`.
    fn checkout(
        &mut self,
        url: &str,
        relpath: &str,
        root_dir: &Utf8Path,
        extra_args: &[String],
        log: &mut dyn FnMut(&str),
    ) -> Result<i32, Error>;

    /// Updates the working copy at `relpath`, optionally pinning to
    /// `revision`.
    fn update(
        &mut self,
        relpath: &str,
        root_dir: &Utf8Path,
        revision: Option<&str>,
        extra_args: &[String],
        log: &mut dyn FnMut(&str),
    ) -> Result<i32, Error>;

    /// Switches the working copy at `relpath` to `url`, optionally pinning
    /// to `revision`.
    fn switch(
        &mut self,
        url: &str,
        relpath: &str,
        root_dir: &Utf8Path,
        revision: Option<&str>,
        extra_args: &[String],
        log: &mut dyn FnMut(&str),
    ) -> Result<i32, Error>;

    /// Rewrites a working copy's repository-root metadata in place because
    /// the upstream server moved, without touching its contents.
    fn relocate(
        &mut self,
        from_root: &str,
        to_root: &str,
        relpath: &str,
        root_dir: &Utf8Path,
        log: &mut dyn FnMut(&str),
    ) -> Result<i32, Error>;

    /// Drives a read-only pass-through verb (`status`, `diff`, `revert`)
    /// for a single entry.
    fn status_diff(
        &mut self,
        verb: &str,
        relpath: &str,
        root_dir: &Utf8Path,
        extra_args: &[String],
        log: &mut dyn FnMut(&str),
    ) -> Result<i32, Error>;
}

/// What to query with [`ScmDriver::info`]: an existing working copy by its
/// relpath, or a remote URL.
#[derive(Clone, Copy, Debug)]
pub enum InfoTarget<'a> {
    /// `relpath` under the workspace root.
    Relpath(&'a str),
    /// A remote (or repo-root-relative) URL.
    Url(&'a str),
}
