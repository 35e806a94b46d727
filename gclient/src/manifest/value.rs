// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use indexmap::IndexMap;
use std::fmt;

/// A value in the small embedded-script language used by `.gclient`, `DEPS`,
/// and `.gclient_entries`.
///
/// This is not JSON or TOML: the source files this format descends from are
/// literally evaluated as a scripting-language scope. `Value` models the
/// handful of shapes that scope ever binds a name to: `None`, a quoted
/// string, a `{ ... }` mapping, a `[ ... ]` sequence, and the single
/// `From("...")` call form.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// `None`.
    Null,
    /// A single- or double-quoted string literal.
    Str(String),
    /// A `{ key: value, ... }` mapping. Insertion order is preserved so
    /// that `custom_deps`/`deps` entries round-trip in declaration order.
    Mapping(IndexMap<String, Value>),
    /// A `[ value, ... ]` sequence.
    Sequence(Vec<Value>),
    /// `From("module_name")`.
    From(String),
}

impl Value {
    /// Returns the inner string if this is a `Str`, `None` otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner mapping if this is a `Mapping`, `None` otherwise.
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Returns the inner sequence if this is a `Sequence`, `None` otherwise.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    /// A short, human-readable name for this value's shape, used in
    /// `EvalError::BadShape` messages.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Value::Null => "None",
            Value::Str(_) => "a string",
            Value::Mapping(_) => "a mapping",
            Value::Sequence(_) => "a sequence",
            Value::From(_) => "a From(...) value",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Mapping(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Sequence(s) => {
                write!(f, "[")?;
                for (i, v) in s.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::From(name) => write!(f, "From({:?})", name),
        }
    }
}
