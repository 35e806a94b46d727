// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Produces the final path -> target map from a workspace configuration
//! (component C3): applies `custom_deps` overrides, chases `From(...)`
//! indirections, expands repo-relative URLs, and detects conflicts.

use crate::env::Environment;
use crate::errors::Error;
use crate::manifest::eval_deps;
use crate::model::{
    is_repo_relative_url, DepValue, DepsManifest, Indirection, PlatformKey, RepoCoord, Solution,
    WorkspaceConfig,
};
use crate::scm::InfoTarget;
use indexmap::IndexMap;

/// What a resolved relpath ultimately checks out to.
///
/// The resolver itself never produces `Skipped`: a `custom_deps` exclusion
/// drops its relpath from the plan entirely (§3 invariant 5). `Skipped`
/// exists so the sync engine can describe an *orphaned* journal entry —
/// one that no longer has a real target but whose path should keep being
/// tracked until its directory is gone — with the same entry type rather
/// than a parallel one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolvedTarget {
    /// The relpath resolves to this repository coordinate.
    Direct(RepoCoord),
    /// No longer part of the plan, but still tracked (orphan bookkeeping).
    Skipped,
}

/// One entry in a [`Plan`]: a workspace-relative, slash-separated path and
/// what it should check out to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedEntry {
    /// Slash-separated path relative to the workspace root.
    pub relpath: String,
    /// What this path resolves to.
    pub target: ResolvedTarget,
}

/// The ordered result of [`resolve`]: solutions first in declared order,
/// then dependencies in lexicographic order of relpath.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Plan(pub Vec<ResolvedEntry>);

impl Plan {
    /// Iterates the plan's entries in their defined order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedEntry> {
        self.0.iter()
    }

    /// Number of entries in the plan.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the plan has no entries (an empty workspace).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Resolves a [`WorkspaceConfig`] into a [`Plan`], per §4.3 of the design.
pub fn resolve(cfg: &WorkspaceConfig, env: &mut Environment) -> Result<Plan, Error> {
    // Step 2: solutions are checked out at their own name as relpath.
    let mut entries: IndexMap<String, DepValue> = IndexMap::new();
    for solution in &cfg.solutions {
        if entries.contains_key(&solution.name) {
            return Err(Error::ConflictError(
                "solution specified more than once".to_string(),
            ));
        }
        entries.insert(
            solution.name.clone(),
            DepValue::DirectURL(solution.url.clone()),
        );
    }

    // Steps 3-4: evaluate each solution's DEPS, apply overlay + overrides,
    // and aggregate into `entries`. `origins` remembers which solution's
    // DEPS/custom_deps produced each entry, so a later indirection chase
    // can expand a repo-relative URL against the *referencing* solution's
    // own repo root rather than the indirection target's.
    let mut origins: IndexMap<String, String> = IndexMap::new();
    // `From(solution)` entries skipped below because their target is a
    // declared solution, kept so we can verify afterwards that the target
    // solution's own DEPS actually bound the relpath (a `From` targeting a
    // solution whose DEPS doesn't bind the relpath is a resolver error,
    // not a silent drop).
    let mut solution_refs: Vec<(String, String)> = Vec::new();
    let platform = PlatformKey::host();
    for solution in &cfg.solutions {
        let manifest = load_deps(cfg, &solution.name, env)?;
        let merged = merge_with_custom_deps(&manifest, &solution.custom_deps, platform);

        for (relpath, value) in merged {
            match value {
                DepValue::Excluded => continue,
                DepValue::Via(ref indirection) if cfg.is_solution_name(&indirection.module_name) => {
                    // Covered by that solution's own pass, if it actually
                    // binds `relpath` (checked once step 4 is complete).
                    solution_refs.push((relpath.clone(), indirection.module_name.clone()));
                    continue;
                }
                DepValue::DirectURL(coord) => {
                    let resolved = expand_if_relative(env, cfg, &solution.url, coord)?;
                    merge_entry(
                        &mut entries,
                        &mut origins,
                        cfg,
                        &solution.name,
                        relpath,
                        DepValue::DirectURL(resolved),
                    )?;
                }
                DepValue::Via(indirection) => {
                    merge_entry(
                        &mut entries,
                        &mut origins,
                        cfg,
                        &solution.name,
                        relpath,
                        DepValue::Via(indirection),
                    )?;
                }
            }
        }
    }

    for (relpath, module_name) in solution_refs {
        if !entries.contains_key(&relpath) {
            return Err(Error::MissingIndirectionTarget {
                relpath,
                module_name,
            });
        }
    }

    // Step 5: chase remaining `From(...)` indirections (hop limit of 1).
    let pending: Vec<String> = entries
        .iter()
        .filter(|(_, v)| matches!(v, DepValue::Via(_)))
        .map(|(k, _)| k.clone())
        .collect();

    for relpath in pending {
        let indirection = match entries.get(&relpath) {
            Some(DepValue::Via(indirection)) => indirection.clone(),
            _ => continue,
        };
        // Every `Via` still pending here targets a managed module, not a
        // solution (solution-targeted `From`s were filtered out above and
        // checked separately), so the referencing solution is the one to
        // expand a relative URL against, never the target module itself.
        let referencing_solution = origins
            .get(&relpath)
            .and_then(|name| cfg.solution(name))
            .ok_or_else(|| Error::MissingIndirectionTarget {
                relpath: relpath.clone(),
                module_name: indirection.module_name.clone(),
            })?;
        let resolved = chase_indirection(
            cfg,
            env,
            &relpath,
            &indirection,
            &referencing_solution.url,
        )?;
        entries.insert(relpath, resolved);
    }

    // Step 6: assemble the plan. Solutions first in declared order, then
    // the remaining dependency entries sorted lexicographically.
    let mut plan = Vec::with_capacity(entries.len());
    for solution in &cfg.solutions {
        if let Some(DepValue::DirectURL(coord)) = entries.get(&solution.name) {
            plan.push(ResolvedEntry {
                relpath: solution.name.clone(),
                target: ResolvedTarget::Direct(coord.clone()),
            });
        }
    }

    let mut dep_relpaths: Vec<&String> = entries
        .keys()
        .filter(|k| !cfg.is_solution_name(k))
        .collect();
    dep_relpaths.sort();

    for relpath in dep_relpaths {
        match &entries[relpath] {
            DepValue::DirectURL(coord) => plan.push(ResolvedEntry {
                relpath: relpath.clone(),
                target: ResolvedTarget::Direct(coord.clone()),
            }),
            DepValue::Excluded => {}
            DepValue::Via(indirection) => {
                // Only reachable if `chase_indirection` above didn't fully
                // normalize; defensive, should not happen.
                return Err(Error::MissingIndirectionTarget {
                    relpath: relpath.clone(),
                    module_name: indirection.module_name.clone(),
                });
            }
        }
    }

    Ok(Plan(plan))
}

fn merge_with_custom_deps(
    manifest: &DepsManifest,
    custom_deps: &IndexMap<String, DepValue>,
    platform: PlatformKey,
) -> IndexMap<String, DepValue> {
    let mut merged = manifest.merged_for_platform(platform);
    for (relpath, value) in custom_deps {
        merged.insert(relpath.clone(), value.clone());
    }
    merged
}

fn merge_entry(
    entries: &mut IndexMap<String, DepValue>,
    origins: &mut IndexMap<String, String>,
    cfg: &WorkspaceConfig,
    solution_name: &str,
    relpath: String,
    value: DepValue,
) -> Result<(), Error> {
    match entries.get(&relpath) {
        None => {
            origins.insert(relpath.clone(), solution_name.to_string());
            entries.insert(relpath, value);
            Ok(())
        }
        Some(existing) if existing == &value => Ok(()),
        Some(_) if cfg.is_solution_name(&relpath) => Err(Error::ConflictError(format!(
            "dependency conflicts with specified solution: \"{}\"",
            relpath
        ))),
        Some(_) => Err(Error::ConflictError(format!(
            "solutions have conflicting versions of dependency \"{}\"",
            relpath
        ))),
    }
}

/// Expands a repo-relative `DEPS` URL against the repository root of the
/// solution whose manifest produced it; leaves absolute URLs untouched.
/// Raises `RelativeURLError` for anything that's neither absolute nor
/// repo-relative.
fn expand_if_relative(
    env: &mut Environment,
    cfg: &WorkspaceConfig,
    owning_solution_url: &RepoCoord,
    coord: RepoCoord,
) -> Result<RepoCoord, Error> {
    if is_repo_relative_url(&coord.url) {
        let repo_root = query_repo_root(env, cfg, &owning_solution_url.url)?;
        return Ok(RepoCoord {
            url: format!("{}{}", repo_root.trim_end_matches('/'), coord.url),
            revision: coord.revision,
        });
    }
    if has_scheme(&coord.url) {
        return Ok(coord);
    }
    Err(Error::RelativeURLError(format!(
        "relative DEPS entry \"{}\" must begin with a slash",
        coord.url
    )))
}

fn has_scheme(url: &str) -> bool {
    url.contains("://")
}

fn query_repo_root(
    env: &mut Environment,
    cfg: &WorkspaceConfig,
    url: &str,
) -> Result<String, Error> {
    let (driver, log) = env.driver_and_log();
    let info = driver
        .info(InfoTarget::Url(url), &cfg.root_dir, log)?
        .ok_or_else(|| Error::MetadataError(format!("no info available for URL: {}", url)))?;
    Ok(info.repo_root)
}

/// Resolves what `indirection` (declared by `referencing_url`'s solution,
/// under `relpath`) actually binds to in the target module's own DEPS.
/// A repo-relative URL found there is expanded against `referencing_url`
/// — the *referencing* solution's repo root, not the target module's —
/// matching the original implementation's relative-URL expansion, which
/// always anchors to the solution that declared the reference.
fn chase_indirection(
    cfg: &WorkspaceConfig,
    env: &mut Environment,
    relpath: &str,
    indirection: &Indirection,
    referencing_url: &RepoCoord,
) -> Result<DepValue, Error> {
    let target_manifest = load_deps(cfg, &indirection.module_name, env)?;
    let merged = target_manifest.merged_for_platform(PlatformKey::host());

    let value = merged
        .get(relpath)
        .cloned()
        .ok_or_else(|| Error::MissingIndirectionTarget {
            relpath: relpath.to_string(),
            module_name: indirection.module_name.clone(),
        })?;

    match value {
        DepValue::Via(_) => Err(Error::IndirectionTooDeep {
            relpath: relpath.to_string(),
        }),
        DepValue::Excluded => Ok(DepValue::Excluded),
        DepValue::DirectURL(coord) => {
            let resolved = expand_if_relative(env, cfg, referencing_url, coord)?;
            Ok(DepValue::DirectURL(resolved))
        }
    }
}

fn load_deps(
    cfg: &WorkspaceConfig,
    solution_name: &str,
    env: &mut Environment,
) -> Result<DepsManifest, Error> {
    let deps_path = cfg.root_dir.join(solution_name).join("DEPS");
    match std::fs::read_to_string(deps_path.as_std_path()) {
        Ok(text) => Ok(eval_deps(&text)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            env.log(&format!(
                "WARNING: DEPS file not found for solution: {}",
                solution_name
            ));
            Ok(DepsManifest::default())
        }
        Err(err) => Err(Error::Io(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scm::{InfoRecord, ScmDriver};
    use camino::Utf8PathBuf;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use tempfile::tempdir;

    /// A driver that answers `info` from a fixed table and never actually
    /// shells out; used so resolver tests don't depend on `svn` or the
    /// network.
    #[derive(Default)]
    struct FakeDriver {
        info_by_url: HashMap<String, InfoRecord>,
    }

    impl ScmDriver for FakeDriver {
        fn info(
            &mut self,
            target: InfoTarget<'_>,
            _root_dir: &camino::Utf8Path,
            _log: &mut dyn FnMut(&str),
        ) -> Result<Option<InfoRecord>, Error> {
            let key = match target {
                InfoTarget::Url(u) => u.to_string(),
                InfoTarget::Relpath(r) => r.to_string(),
            };
            Ok(self.info_by_url.get(&key).cloned())
        }

        fn checkout(
            &mut self,
            _url: &str,
            _relpath: &str,
            _root_dir: &camino::Utf8Path,
            _extra_args: &[String],
            _log: &mut dyn FnMut(&str),
        ) -> Result<i32, Error> {
            Ok(0)
        }

        fn update(
            &mut self,
            _relpath: &str,
            _root_dir: &camino::Utf8Path,
            _revision: Option<&str>,
            _extra_args: &[String],
            _log: &mut dyn FnMut(&str),
        ) -> Result<i32, Error> {
            Ok(0)
        }

        fn switch(
            &mut self,
            _url: &str,
            _relpath: &str,
            _root_dir: &camino::Utf8Path,
            _revision: Option<&str>,
            _extra_args: &[String],
            _log: &mut dyn FnMut(&str),
        ) -> Result<i32, Error> {
            Ok(0)
        }

        fn relocate(
            &mut self,
            _from_root: &str,
            _to_root: &str,
            _relpath: &str,
            _root_dir: &camino::Utf8Path,
            _log: &mut dyn FnMut(&str),
        ) -> Result<i32, Error> {
            Ok(0)
        }

        fn status_diff(
            &mut self,
            _verb: &str,
            _relpath: &str,
            _root_dir: &camino::Utf8Path,
            _extra_args: &[String],
            _log: &mut dyn FnMut(&str),
        ) -> Result<i32, Error> {
            Ok(0)
        }
    }

    fn env_with_driver(driver: FakeDriver) -> Environment {
        Environment::new(Box::new(|_msg: &str| {}), Box::new(driver))
    }

    fn write_workspace(root: &Utf8PathBuf, solutions: &[(&str, &str)]) -> WorkspaceConfig {
        let solutions_vec = solutions
            .iter()
            .map(|(name, url)| Solution {
                name: name.to_string(),
                url: RepoCoord::parse(url),
                custom_deps: IndexMap::new(),
            })
            .collect();
        WorkspaceConfig {
            root_dir: root.clone(),
            solutions: solutions_vec,
            raw_source: String::new(),
        }
    }

    #[test]
    fn single_solution_no_deps() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let cfg = write_workspace(&root, &[("s", "http://svn/s")]);
        let mut env = env_with_driver(FakeDriver::default());

        let plan = resolve(&cfg, &mut env).unwrap();
        assert_eq!(
            plan.0,
            vec![ResolvedEntry {
                relpath: "s".to_string(),
                target: ResolvedTarget::Direct(RepoCoord::new("http://svn/s")),
            }]
        );
    }

    #[test]
    fn conflict_across_solutions() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(root.join("a").as_std_path()).unwrap();
        std::fs::create_dir_all(root.join("b").as_std_path()).unwrap();
        std::fs::write(
            root.join("a").join("DEPS").as_std_path(),
            r#"deps = { "x": "http://a" }"#,
        )
        .unwrap();
        std::fs::write(
            root.join("b").join("DEPS").as_std_path(),
            r#"deps = { "x": "http://b" }"#,
        )
        .unwrap();
        let cfg = write_workspace(&root, &[("a", "http://svn/a"), ("b", "http://svn/b")]);
        let mut env = env_with_driver(FakeDriver::default());

        let err = resolve(&cfg, &mut env).unwrap_err();
        match err {
            Error::ConflictError(msg) => {
                assert_eq!(msg, "solutions have conflicting versions of dependency \"x\"")
            }
            other => panic!("expected ConflictError, got {:?}", other),
        }
    }

    #[test]
    fn custom_deps_exclude() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(root.join("s").as_std_path()).unwrap();
        std::fs::write(
            root.join("s").join("DEPS").as_std_path(),
            r#"deps = { "x": "http://x" }"#,
        )
        .unwrap();
        let mut cfg = write_workspace(&root, &[("s", "http://svn/s")]);
        cfg.solutions[0]
            .custom_deps
            .insert("x".to_string(), DepValue::Excluded);
        let mut env = env_with_driver(FakeDriver::default());

        let plan = resolve(&cfg, &mut env).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.0[0].relpath, "s");
    }

    #[test]
    fn relative_deps_entry_resolution() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(root.join("s").as_std_path()).unwrap();
        std::fs::write(
            root.join("s").join("DEPS").as_std_path(),
            r#"deps = { "dep": "/trunk/shared" }"#,
        )
        .unwrap();
        let cfg = write_workspace(&root, &[("s", "http://host/svn/s")]);
        let mut driver = FakeDriver::default();
        driver.info_by_url.insert(
            "http://host/svn/s".to_string(),
            InfoRecord {
                url: "http://host/svn/s".to_string(),
                repo_root: "http://host/svn".to_string(),
                repo_uuid: "uuid".to_string(),
                revision: "1".to_string(),
            },
        );
        let mut env = env_with_driver(driver);

        let plan = resolve(&cfg, &mut env).unwrap();
        let dep = plan.iter().find(|e| e.relpath == "dep").unwrap();
        assert_eq!(
            dep.target,
            ResolvedTarget::Direct(RepoCoord::new("http://host/svn/trunk/shared"))
        );
    }

    #[test]
    fn bad_relative_url_without_slash_errors() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(root.join("s").as_std_path()).unwrap();
        std::fs::write(
            root.join("s").join("DEPS").as_std_path(),
            r#"deps = { "dep": "a/bad/path" }"#,
        )
        .unwrap();
        let cfg = write_workspace(&root, &[("s", "http://host/svn/s")]);
        let mut env = env_with_driver(FakeDriver::default());

        let err = resolve(&cfg, &mut env).unwrap_err();
        assert!(matches!(err, Error::RelativeURLError(_)));
    }

    #[test]
    fn indirection_across_solutions() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(root.join("a").as_std_path()).unwrap();
        std::fs::create_dir_all(root.join("b").as_std_path()).unwrap();
        std::fs::write(
            root.join("a").join("DEPS").as_std_path(),
            r#"deps = { "shared": From("b") }"#,
        )
        .unwrap();
        std::fs::write(
            root.join("b").join("DEPS").as_std_path(),
            r#"deps = { "shared": "http://svn/shared" }"#,
        )
        .unwrap();
        let cfg = write_workspace(&root, &[("a", "http://svn/a"), ("b", "http://svn/b")]);
        let mut env = env_with_driver(FakeDriver::default());

        let plan = resolve(&cfg, &mut env).unwrap();
        let dep = plan.iter().find(|e| e.relpath == "shared").unwrap();
        assert_eq!(
            dep.target,
            ResolvedTarget::Direct(RepoCoord::new("http://svn/shared"))
        );
    }

    #[test]
    fn indirection_to_managed_module_with_relative_url_resolves_against_referencing_solution() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(root.join("a").as_std_path()).unwrap();
        std::fs::create_dir_all(root.join("other").as_std_path()).unwrap();
        std::fs::write(
            root.join("a").join("DEPS").as_std_path(),
            r#"deps = { "shared": From("other") }"#,
        )
        .unwrap();
        // "other" is a managed module, not a declared solution, so this
        // indirection is chased in the second pass. Its own DEPS binds
        // "shared" to a repo-relative URL, which must expand against "a"
        // (the solution that declared the `From`), not "other" (which has
        // no solution entry at all to expand against).
        std::fs::write(
            root.join("other").join("DEPS").as_std_path(),
            r#"deps = { "shared": "/trunk/shared" }"#,
        )
        .unwrap();
        let cfg = write_workspace(&root, &[("a", "http://host/svn/a")]);
        let mut driver = FakeDriver::default();
        driver.info_by_url.insert(
            "http://host/svn/a".to_string(),
            InfoRecord {
                url: "http://host/svn/a".to_string(),
                repo_root: "http://host/svn".to_string(),
                repo_uuid: "uuid".to_string(),
                revision: "1".to_string(),
            },
        );
        let mut env = env_with_driver(driver);

        let plan = resolve(&cfg, &mut env).unwrap();
        let dep = plan.iter().find(|e| e.relpath == "shared").unwrap();
        assert_eq!(
            dep.target,
            ResolvedTarget::Direct(RepoCoord::new("http://host/svn/trunk/shared"))
        );
    }

    #[test]
    fn indirection_to_solution_without_binding_is_error() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(root.join("a").as_std_path()).unwrap();
        std::fs::create_dir_all(root.join("b").as_std_path()).unwrap();
        std::fs::write(
            root.join("a").join("DEPS").as_std_path(),
            r#"deps = { "shared": From("b") }"#,
        )
        .unwrap();
        // "b" is a declared solution, so From("b") is skipped in the first
        // pass rather than chased, on the assumption that b's own DEPS
        // binds "shared" directly. It doesn't, so this must still surface
        // as a resolver error instead of silently dropping "shared".
        std::fs::write(
            root.join("b").join("DEPS").as_std_path(),
            r#"deps = { "unrelated": "http://svn/unrelated" }"#,
        )
        .unwrap();
        let cfg = write_workspace(&root, &[("a", "http://svn/a"), ("b", "http://svn/b")]);
        let mut env = env_with_driver(FakeDriver::default());

        let err = resolve(&cfg, &mut env).unwrap_err();
        assert!(matches!(err, Error::MissingIndirectionTarget { .. }));
    }

    #[test]
    fn indirection_to_non_solution_without_binding_is_error() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(root.join("a").as_std_path()).unwrap();
        std::fs::create_dir_all(root.join("other").as_std_path()).unwrap();
        std::fs::write(
            root.join("a").join("DEPS").as_std_path(),
            r#"deps = { "shared": From("other") }"#,
        )
        .unwrap();
        // "other" is not itself a declared solution, so From("other") is
        // chased in the second pass rather than skipped in the first; its
        // DEPS doesn't bind "shared", so this must be a resolver error.
        std::fs::write(
            root.join("other").join("DEPS").as_std_path(),
            r#"deps = { "unrelated": "http://svn/unrelated" }"#,
        )
        .unwrap();
        let cfg = write_workspace(&root, &[("a", "http://svn/a")]);
        let mut env = env_with_driver(FakeDriver::default());

        let err = resolve(&cfg, &mut env).unwrap_err();
        assert!(matches!(err, Error::MissingIndirectionTarget { .. }));
    }

    #[test]
    fn empty_workspace_resolves_to_empty_plan() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let cfg = write_workspace(&root, &[]);
        let mut env = env_with_driver(FakeDriver::default());

        let plan = resolve(&cfg, &mut env).unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn missing_deps_file_is_warning_not_failure() {
        let dir = tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(root.join("s").as_std_path()).unwrap();
        let cfg = write_workspace(&root, &[("s", "http://svn/s")]);
        let mut env = env_with_driver(FakeDriver::default());

        let plan = resolve(&cfg, &mut env).unwrap();
        assert_eq!(plan.len(), 1);
    }
}
