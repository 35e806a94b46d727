// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::Error;
use crate::scm::{InfoRecord, InfoTarget, ScmDriver};
use camino::Utf8Path;
use std::process::Command;

/// The concrete `ScmDriver` binding for Subversion. Each operation is
/// composed as `svn <verb> ...` and run via [`std::process::Command`]; the
/// composed command line is always echoed through the log sink before the
/// child process runs.
#[derive(Clone, Debug, Default)]
pub struct SubversionDriver {
    /// Path to the `svn` executable; defaults to `svn` on `$PATH`.
    svn_path: String,
}

impl SubversionDriver {
    /// Creates a driver that invokes `svn` from `$PATH`.
    pub fn new() -> Self {
        Self {
            svn_path: "svn".to_string(),
        }
    }

    /// Creates a driver that invokes a specific `svn` executable.
    pub fn with_path(svn_path: impl Into<String>) -> Self {
        Self {
            svn_path: svn_path.into(),
        }
    }

    fn run(
        &self,
        args: &[&str],
        extra_args: &[String],
        dir: &Utf8Path,
        log: &mut dyn FnMut(&str),
    ) -> Result<i32, Error> {
        let mut all_args: Vec<&str> = args.to_vec();
        for a in extra_args {
            all_args.push(a.as_str());
        }
        log(&format!("svn {}", all_args.join(" ")));

        let status = Command::new(&self.svn_path)
            .args(&all_args)
            .current_dir(dir.as_std_path())
            .status()?;

        Ok(status.code().unwrap_or(1))
    }

    fn run_info(
        &self,
        target: &str,
        dir: &Utf8Path,
        log: &mut dyn FnMut(&str),
    ) -> Result<Option<InfoRecord>, Error> {
        log(&format!("svn info {}", target));

        let output = Command::new(&self.svn_path)
            .args(["info", target])
            .current_dir(dir.as_std_path())
            .output()?;

        if !output.status.success() {
            return Ok(None);
        }

        let text = String::from_utf8_lossy(&output.stdout);
        Ok(Some(parse_info(&text)))
    }
}

/// Parses `svn info`'s line-oriented `Key: value` output.
fn parse_info(text: &str) -> InfoRecord {
    let mut url = String::new();
    let mut repo_root = String::new();
    let mut repo_uuid = String::new();
    let mut revision = String::new();

    for line in text.lines() {
        if let Some(value) = line.strip_prefix("URL:") {
            url = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("Repository Root:") {
            repo_root = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("Repository UUID:") {
            repo_uuid = value.trim().to_string();
        } else if let Some(value) = line.strip_prefix("Revision:") {
            revision = value.trim().to_string();
        }
    }

    InfoRecord {
        url,
        repo_root,
        repo_uuid,
        revision,
    }
}

impl ScmDriver for SubversionDriver {
    fn info(
        &mut self,
        target: InfoTarget<'_>,
        root_dir: &Utf8Path,
        log: &mut dyn FnMut(&str),
    ) -> Result<Option<InfoRecord>, Error> {
        let target_str = match target {
            InfoTarget::Relpath(relpath) => relpath.to_string(),
            InfoTarget::Url(url) => url.to_string(),
        };
        self.run_info(&target_str, root_dir, log)
    }

    fn checkout(
        &mut self,
        url: &str,
        relpath: &str,
        root_dir: &Utf8Path,
        extra_args: &[String],
        log: &mut dyn FnMut(&str),
    ) -> Result<i32, Error> {
        self.run(&["checkout", url, relpath], extra_args, root_dir, log)
    }

    fn update(
        &mut self,
        relpath: &str,
        root_dir: &Utf8Path,
        revision: Option<&str>,
        extra_args: &[String],
        log: &mut dyn FnMut(&str),
    ) -> Result<i32, Error> {
        let dir = root_dir.join(relpath);
        let mut args = vec!["update"];
        if let Some(rev) = revision {
            args.push("-r");
            args.push(rev);
        }
        self.run(&args, extra_args, &dir, log)
    }

    fn switch(
        &mut self,
        url: &str,
        relpath: &str,
        root_dir: &Utf8Path,
        revision: Option<&str>,
        extra_args: &[String],
        log: &mut dyn FnMut(&str),
    ) -> Result<i32, Error> {
        let mut args = vec!["switch"];
        if let Some(rev) = revision {
            args.push("-r");
            args.push(rev);
        }
        args.push(url);
        args.push(relpath);
        self.run(&args, extra_args, root_dir, log)
    }

    fn relocate(
        &mut self,
        from_root: &str,
        to_root: &str,
        relpath: &str,
        root_dir: &Utf8Path,
        log: &mut dyn FnMut(&str),
    ) -> Result<i32, Error> {
        let dir = root_dir.join(relpath);
        self.run(
            &["switch", "--relocate", from_root, to_root],
            &[],
            &dir,
            log,
        )
    }

    fn status_diff(
        &mut self,
        verb: &str,
        relpath: &str,
        root_dir: &Utf8Path,
        extra_args: &[String],
        log: &mut dyn FnMut(&str),
    ) -> Result<i32, Error> {
        let dir = root_dir.join(relpath);
        self.run(&[verb], extra_args, &dir, log)
    }
}
