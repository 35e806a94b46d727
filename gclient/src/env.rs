// Copyright (c) The gclient Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Replaces the source implementation's module-level singletons (a
//! subprocess runner, stdout, `execfile`) with an explicit value passed
//! into the operations that need them, so tests can substitute fakes
//! instead of touching the real filesystem or spawning `svn`.

use crate::scm::ScmDriver;

/// Everything the resolver, sync engine, and command facade need from the
/// outside world besides the manifests themselves: where diagnostics go,
/// and which `ScmDriver` to drive.
pub struct Environment {
    log: Box<dyn FnMut(&str)>,
    driver: Box<dyn ScmDriver>,
}

impl Environment {
    /// Builds an environment from a log sink and a driver.
    pub fn new(log: Box<dyn FnMut(&str)>, driver: Box<dyn ScmDriver>) -> Self {
        Self { log, driver }
    }

    /// Writes a line of user-visible diagnostic output.
    pub fn log(&mut self, message: &str) {
        (self.log)(message);
    }

    /// Returns the driver and a log-sink closure split out, so both can be
    /// borrowed independently (the driver trait takes the log sink as a
    /// separate parameter to avoid re-borrowing `self` twice).
    pub fn driver_and_log(&mut self) -> (&mut dyn ScmDriver, &mut dyn FnMut(&str)) {
        (self.driver.as_mut(), self.log.as_mut())
    }
}
