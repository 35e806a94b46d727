// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Contains types that describe errors that `gclient` operations can return.

use std::error;
use std::fmt;
use std::io;

use Error::*;

/// Error type describing the sorts of errors `gclient` can return.
///
/// `DriverError` is the one variant the sync engine recovers from locally:
/// it records the code and keeps going, returning the first nonzero code it
/// saw once the whole plan has been applied. Every other variant aborts the
/// run before any working-copy mutation happens.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A problem with how the command was invoked (missing argument, a
    /// `.gclient` that already exists, an unknown subcommand name, ...).
    UsageError(String),
    /// A manifest (`.gclient`, `DEPS`, or `.gclient_entries`) could not be
    /// read or evaluated.
    EvalError(EvalError),
    /// Two resolved targets for the same path disagree, or a solution name
    /// collides with itself or with a dependency path.
    ConflictError(String),
    /// A `DEPS` entry has no scheme and does not begin with exactly one `/`.
    RelativeURLError(String),
    /// A `From(...)` indirection points at a module whose own `DEPS` does
    /// not bind the expected relpath.
    MissingIndirectionTarget {
        /// The relpath that was being resolved.
        relpath: String,
        /// The module the indirection pointed at.
        module_name: String,
    },
    /// A `From(...)` indirection itself resolved to another `From(...)`.
    /// Only a single hop is supported (see the Open Question in the design
    /// notes); deeper chains are rejected rather than guessed at.
    IndirectionTooDeep {
        /// The relpath that was being resolved.
        relpath: String,
    },
    /// `Info` returned no URL for a working copy that exists on disk.
    MetadataError(String),
    /// An I/O error occurred while reading or writing a manifest or the
    /// entries journal.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError(msg) => write!(f, "{}", msg),
            EvalError(err) => write!(f, "{}", err),
            ConflictError(msg) => write!(f, "{}", msg),
            RelativeURLError(msg) => write!(f, "{}", msg),
            MissingIndirectionTarget {
                relpath,
                module_name,
            } => write!(
                f,
                "From(\"{}\") does not provide a value for \"{}\"",
                module_name, relpath
            ),
            IndirectionTooDeep { relpath } => write!(
                f,
                "\"{}\" resolves through more than one From(...) indirection",
                relpath
            ),
            MetadataError(msg) => write!(f, "{}", msg),
            Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            EvalError(err) => Some(err),
            Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Io(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        EvalError(err)
    }
}

/// Errors produced while lexing, parsing, or binding a manifest (`.gclient`,
/// `DEPS`, or `.gclient_entries`).
#[derive(Debug)]
#[non_exhaustive]
pub enum EvalError {
    /// The manifest text could not be tokenized or parsed.
    Syntax {
        /// Human-readable description of what went wrong.
        message: String,
        /// 1-based line number the error was detected on.
        line: usize,
    },
    /// A name was bound to a value of the wrong shape (e.g. `deps` bound to
    /// a string instead of a mapping).
    BadShape {
        /// The name that had the wrong shape.
        name: String,
        /// What shape was expected.
        expected: &'static str,
    },
    /// A schema-required name was missing entirely (e.g. `solutions` in the
    /// workspace schema).
    MissingBinding {
        /// The missing name.
        name: &'static str,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Syntax { message, line } => {
                write!(f, "syntax error on line {}: {}", line, message)
            }
            EvalError::BadShape { name, expected } => {
                write!(f, "'{}' must be {}", name, expected)
            }
            EvalError::MissingBinding { name } => {
                write!(f, "required binding '{}' is missing", name)
            }
        }
    }
}

impl error::Error for EvalError {}
