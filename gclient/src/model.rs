// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed representation of solutions, dependency entries, `From`
//! indirections, and platform overlays (component C2 of the design).

use camino::Utf8PathBuf;
use indexmap::IndexMap;
use std::fmt;

/// A repository coordinate: a URL (absolute, or repo-relative if it begins
/// with exactly one `/`) plus an optional pinned revision.
///
/// Serializes as `url[@revision]`, matching the wire form `gclient`/`DEPS`
/// entries and `svn info` both use.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepoCoord {
    /// The URL, or a repo-relative path beginning with `/`.
    pub url: String,
    /// The pinned revision, if any. Opaque to this crate.
    pub revision: Option<String>,
}

impl RepoCoord {
    /// Constructs a coordinate from a bare URL with no revision.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            revision: None,
        }
    }

    /// Parses `url[@revision]`, splitting on the last `@` in the string.
    ///
    /// Note that some SVN URLs legitimately contain `@` as a path
    /// character (escaped as `%40` in practice); this crate, like the
    /// original implementation, treats the *last* `@` as the revision
    /// separator and does not attempt to disambiguate further.
    pub fn parse(s: &str) -> Self {
        match s.rsplit_once('@') {
            Some((url, revision)) if !revision.is_empty() => Self {
                url: url.to_string(),
                revision: Some(revision.to_string()),
            },
            _ => Self::new(s),
        }
    }

    /// Returns true if this coordinate's URL is repo-relative: it begins
    /// with exactly one `/` and has no scheme.
    pub fn is_repo_relative(&self) -> bool {
        is_repo_relative_url(&self.url)
    }

    /// Returns a copy of this coordinate with its revision replaced.
    pub fn with_revision(&self, revision: impl Into<String>) -> Self {
        Self {
            url: self.url.clone(),
            revision: Some(revision.into()),
        }
    }

    /// Returns a copy of this coordinate with `old_root` replaced by
    /// `new_root` as a URL prefix, used when rewriting a relocated working
    /// copy's recorded URL (§4.5's "treat the working copy's `fromURL` as
    /// textually rewritten" step).
    pub fn with_root_replaced(&self, old_root: &str, new_root: &str) -> Self {
        Self {
            url: self.url.replacen(old_root, new_root, 1),
            revision: self.revision.clone(),
        }
    }
}

/// Returns true if `url` begins with exactly one `/` and has no scheme
/// (e.g. `//host/path` or `scheme://host` are not repo-relative; `/trunk/x`
/// is).
pub fn is_repo_relative_url(url: &str) -> bool {
    url.starts_with('/') && !url.starts_with("//")
}

impl fmt::Display for RepoCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.revision {
            Some(rev) => write!(f, "{}@{}", self.url, rev),
            None => write!(f, "{}", self.url),
        }
    }
}

/// A `From("module_name")` indirection: "use the value that `module_name`'s
/// own manifest assigns to this same key."
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Indirection {
    /// The name of the solution or managed module to chase.
    pub module_name: String,
}

/// A dependency entry, normalized from the raw manifest `Value`.
///
/// `Excluded` only ever arises from a `custom_deps` override of `None`; it
/// is never present in a base `DEPS` file's `deps`/`deps_os` mapping.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DepValue {
    /// A direct repository coordinate.
    DirectURL(RepoCoord),
    /// `From(...)`, to be chased during resolution.
    Via(Indirection),
    /// Explicitly excluded by a `custom_deps` override of `None`.
    Excluded,
}

/// One of the three platforms a `DEPS` file's `deps_os` table may key on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PlatformKey {
    /// `deps_os["win"]`.
    Win,
    /// `deps_os["mac"]`.
    Mac,
    /// `deps_os["unix"]`.
    Unix,
}

impl PlatformKey {
    /// Canonicalizes a raw platform string (e.g. `std::env::consts::OS`, or
    /// Python's `sys.platform` values the original format was authored
    /// against) into one of the three overlay keys, per §4.1's table.
    /// Anything not explicitly listed falls through to `Unix`.
    pub fn canonicalize(raw: &str) -> Self {
        match raw {
            "win32" | "win" | "windows" => PlatformKey::Win,
            "darwin" | "mac" | "macos" => PlatformKey::Mac,
            _ => PlatformKey::Unix,
        }
    }

    /// The key as it appears in a `deps_os` mapping.
    pub fn as_str(self) -> &'static str {
        match self {
            PlatformKey::Win => "win",
            PlatformKey::Mac => "mac",
            PlatformKey::Unix => "unix",
        }
    }

    /// Canonicalizes the platform this binary is actually running on.
    pub fn host() -> Self {
        Self::canonicalize(std::env::consts::OS)
    }
}

/// A `DEPS` file's evaluated contents: the base `deps` mapping, plus the
/// per-platform overlays in `deps_os`. A missing `DEPS` file is equivalent
/// to an empty `DepsManifest` (both mappings empty).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DepsManifest {
    /// relpath -> dependency value.
    pub deps: IndexMap<String, DepValue>,
    /// platform -> (relpath -> dependency value), overlaid on `deps`.
    pub deps_os: IndexMap<PlatformKey, IndexMap<String, DepValue>>,
}

impl DepsManifest {
    /// Merges the base `deps` with the overlay for `platform`, with overlay
    /// entries winning key-by-key (§3 invariant 6).
    pub fn merged_for_platform(&self, platform: PlatformKey) -> IndexMap<String, DepValue> {
        let mut merged = self.deps.clone();
        if let Some(overlay) = self.deps_os.get(&platform) {
            for (relpath, value) in overlay {
                merged.insert(relpath.clone(), value.clone());
            }
        }
        merged
    }
}

/// A top-level managed module declared in the workspace file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    /// The non-empty relpath this solution is checked out at; unique within
    /// a workspace.
    pub name: String,
    /// Where to check this solution out from.
    pub url: RepoCoord,
    /// Per-relpath overrides/additions on top of this solution's own
    /// `DEPS` file. A value of `Excluded` omits the path from the plan
    /// entirely, even if `DEPS` also names it.
    pub custom_deps: IndexMap<String, DepValue>,
}

/// The parsed, immutable contents of a `.gclient` file.
#[derive(Clone, Debug)]
pub struct WorkspaceConfig {
    /// The directory `.gclient` was found in.
    pub root_dir: Utf8PathBuf,
    /// Declared solutions, in file order.
    pub solutions: Vec<Solution>,
    /// The raw manifest text, kept for diagnostic display.
    pub raw_source: String,
}

impl WorkspaceConfig {
    /// Returns the solution with the given name, if declared.
    pub fn solution(&self, name: &str) -> Option<&Solution> {
        self.solutions.iter().find(|s| s.name == name)
    }

    /// Returns true if `name` is a declared solution name.
    pub fn is_solution_name(&self, name: &str) -> bool {
        self.solution(name).is_some()
    }
}
