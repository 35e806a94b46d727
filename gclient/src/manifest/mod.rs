// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Evaluates a `.gclient`, `DEPS`, or `.gclient_entries` manifest in a
//! sandboxed scope, returning typed values (component C1).
//!
//! The manifests are small declarative documents, not a general-purpose
//! scripting language: a value is one of `None`, a quoted string, a
//! `{ ... }` mapping, a `[ ... ]` sequence, or the single function-call
//! form `From("...")`. Top-level statements bind a name to a value
//! (`solutions = [...]`, `deps = {...}`). This module only parses and
//! schema-checks; [`crate::model`] holds the resulting typed
//! representation.

mod eval;
mod lexer;
mod parser;
mod value;

pub use eval::{eval_deps, eval_entries, eval_workspace};
pub use value::Value;
