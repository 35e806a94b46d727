// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema-level evaluation of manifest text into typed values (component
//! C1). The evaluator exposes exactly the names each schema expects and
//! rejects anything bound to an unexpected shape; it does not sandbox for
//! safety, since manifests are trusted, developer-authored input.

use crate::errors::EvalError;
use crate::manifest::parser::parse_bindings;
use crate::manifest::value::Value;
use crate::model::{DepValue, DepsManifest, Indirection, PlatformKey, RepoCoord, Solution, WorkspaceConfig};
use camino::Utf8PathBuf;
use indexmap::IndexMap;

/// Evaluates `.gclient` text against the workspace schema: binds
/// `solutions`, an ordered sequence of mappings with keys `name`, `url`,
/// and an optional `custom_deps`. `solutions` is required.
pub fn eval_workspace(text: &str, root_dir: Utf8PathBuf) -> Result<WorkspaceConfig, EvalError> {
    let bindings = parse_bindings(text)?;

    let solutions_value = bindings
        .get("solutions")
        .ok_or(EvalError::MissingBinding { name: "solutions" })?;
    let solutions_seq = solutions_value.as_sequence().ok_or_else(|| EvalError::BadShape {
        name: "solutions".to_string(),
        expected: "a sequence",
    })?;

    let solutions = solutions_seq
        .iter()
        .map(eval_solution)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WorkspaceConfig {
        root_dir,
        solutions,
        raw_source: text.to_string(),
    })
}

fn eval_solution(value: &Value) -> Result<Solution, EvalError> {
    let map = value.as_mapping().ok_or_else(|| EvalError::BadShape {
        name: "solutions[]".to_string(),
        expected: "a mapping",
    })?;

    let name = map
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| EvalError::BadShape {
            name: "solutions[].name".to_string(),
            expected: "a string",
        })?
        .to_string();

    let url = map
        .get("url")
        .and_then(Value::as_str)
        .ok_or_else(|| EvalError::BadShape {
            name: "solutions[].url".to_string(),
            expected: "a string",
        })?;
    let url = RepoCoord::parse(url);

    let custom_deps = match map.get("custom_deps") {
        None => IndexMap::new(),
        Some(v) => eval_dep_mapping(v, "custom_deps")?,
    };

    Ok(Solution {
        name,
        url,
        custom_deps,
    })
}

/// Evaluates `DEPS` text against the deps schema: binds `deps` (a mapping)
/// and `deps_os` (a mapping of platform name -> mapping), each defaulting
/// to empty when absent, and exposes the `From(...)` constructor used
/// inside either mapping's values.
pub fn eval_deps(text: &str) -> Result<DepsManifest, EvalError> {
    let bindings = parse_bindings(text)?;

    let deps = match bindings.get("deps") {
        None => IndexMap::new(),
        Some(v) => eval_dep_mapping(v, "deps")?,
    };

    let deps_os = match bindings.get("deps_os") {
        None => IndexMap::new(),
        Some(v) => {
            let outer = v.as_mapping().ok_or_else(|| EvalError::BadShape {
                name: "deps_os".to_string(),
                expected: "a mapping",
            })?;
            let mut result = IndexMap::new();
            for (platform, inner) in outer {
                let platform_deps = eval_dep_mapping(inner, "deps_os[]")?;
                result.insert(PlatformKey::canonicalize(platform), platform_deps);
            }
            result
        }
    };

    Ok(DepsManifest { deps, deps_os })
}

/// Evaluates `.gclient_entries` text against the entries schema: binds
/// `entries`, a sequence of relpath strings.
pub fn eval_entries(text: &str) -> Result<Vec<String>, EvalError> {
    let bindings = parse_bindings(text)?;
    let entries = match bindings.get("entries") {
        None => return Ok(Vec::new()),
        Some(v) => v.as_sequence().ok_or_else(|| EvalError::BadShape {
            name: "entries".to_string(),
            expected: "a sequence",
        })?,
    };

    entries
        .iter()
        .map(|v| {
            v.as_str().map(str::to_string).ok_or_else(|| EvalError::BadShape {
                name: "entries[]".to_string(),
                expected: "a string",
            })
        })
        .collect()
}

fn eval_dep_mapping(value: &Value, name: &str) -> Result<IndexMap<String, DepValue>, EvalError> {
    let map = value.as_mapping().ok_or_else(|| EvalError::BadShape {
        name: name.to_string(),
        expected: "a mapping",
    })?;

    map.iter()
        .map(|(relpath, v)| Ok((relpath.clone(), eval_dep_value(v)?)))
        .collect()
}

fn eval_dep_value(value: &Value) -> Result<DepValue, EvalError> {
    match value {
        Value::Null => Ok(DepValue::Excluded),
        Value::Str(url) => Ok(DepValue::DirectURL(RepoCoord::parse(url))),
        Value::From(module_name) => Ok(DepValue::Via(Indirection {
            module_name: module_name.clone(),
        })),
        _ => Err(EvalError::BadShape {
            name: "dependency entry".to_string(),
            expected: "a string, None, or From(...)",
        }),
    }
}
