// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolve and synchronize multi-module Subversion workspaces declared by
//! `.gclient`/`DEPS` manifests.
//!
//! A workspace is a directory tree rooted at a `.gclient` file. That file
//! declares one or more *solutions* — top-level checkouts — each of which
//! may carry a `DEPS` file naming further modules to check out alongside
//! it, possibly overridden per-solution (`custom_deps`) or per-platform
//! (`deps_os`). This crate turns that declarative graph into a flat,
//! ordered [`resolver::Plan`] and then drives an [`scm::ScmDriver`] to
//! bring the working-copy tree in line with it.
//!
//! # Pipeline
//!
//! ```text
//! manifest text -> manifest::eval_* -> model types -> resolver::resolve -> sync::apply
//! ```
//!
//! [`facade`] wires these together into the five operations a command-line
//! front end needs (`config`, `sync`/`update`, `status`, `diff`, `revert`);
//! [`env::Environment`] carries the log sink and [`scm::ScmDriver`] both
//! the resolver and sync engine need, so tests can substitute fakes for
//! both without touching a real checkout.
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use gclient::env::Environment;
//! use gclient::facade;
//! use gclient::scm::SubversionDriver;
//! use gclient::sync::SyncOptions;
//!
//! let mut env = Environment::new(
//!     Box::new(|line: &str| println!("{line}")),
//!     Box::new(SubversionDriver::new()),
//! );
//! let root = facade::find_workspace_root(Utf8Path::new("."))?;
//! facade::sync(&root, &SyncOptions::default(), &mut env)?;
//! # Ok::<(), gclient::errors::Error>(())
//! ```

#![warn(missing_docs)]

pub mod env;
pub mod errors;
pub mod facade;
pub mod journal;
pub mod manifest;
pub mod model;
pub mod resolver;
pub mod scm;
pub mod sync;

pub use env::Environment;
pub use errors::Error;
