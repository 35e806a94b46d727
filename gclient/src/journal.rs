// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The entries journal (component C6): the set of relpaths materialized by
//! the last successful sync, used solely so the sync engine can warn about
//! directories a workspace no longer declares.

use crate::errors::Error;
use crate::manifest::eval_entries;
use camino::Utf8Path;
use std::io::Write as _;

/// The persisted contents of `.gclient_entries`: an ordered list of
/// relpaths. A missing file is equivalent to an empty journal.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EntriesJournal(pub Vec<String>);

impl EntriesJournal {
    /// True if `relpath` was recorded in the last run.
    pub fn contains(&self, relpath: &str) -> bool {
        self.0.iter().any(|e| e == relpath)
    }
}

/// Reads the journal at `path`. A missing file reads as an empty journal.
pub fn read(path: &Utf8Path) -> Result<EntriesJournal, Error> {
    match std::fs::read_to_string(path.as_std_path()) {
        Ok(text) => Ok(EntriesJournal(eval_entries(&text)?)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(EntriesJournal::default()),
        Err(err) => Err(Error::Io(err)),
    }
}

/// Rewrites the journal at `path` in one atomic whole-file replace: the new
/// contents are written to a sibling temp file, then renamed over `path`.
pub fn write(path: &Utf8Path, journal: &EntriesJournal) -> Result<(), Error> {
    let mut rendered = String::from("entries = [");
    for (i, relpath) in journal.0.iter().enumerate() {
        if i > 0 {
            rendered.push_str(", ");
        }
        rendered.push_str(&format!("{:?}", relpath));
    }
    rendered.push_str("]\n");

    let tmp_path = path.with_extension("tmp");
    {
        let mut tmp = std::fs::File::create(tmp_path.as_std_path())?;
        tmp.write_all(rendered.as_bytes())?;
    }
    std::fs::rename(tmp_path.as_std_path(), path.as_std_path())?;
    Ok(())
}
