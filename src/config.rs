// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::{
    env,
    ffi::{OsStr, OsString},
};

/// Variable holding the search path.
pub const PATH_VAR: &str = "PATH";
/// Variable holding the executable extension list (Windows only).
pub const PATHEXT_VAR: &str = "PATHEXT";

/// Snapshot of the variables a lookup depends on.
///
/// Captured once and handed to the resolver, so a scan never observes the
/// environment changing underneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchEnv {
    path: Option<OsString>,
    pathext: Option<String>,
}

impl SearchEnv {
    /// Builds a snapshot from explicit values.
    #[must_use]
    pub fn new(path: Option<OsString>, pathext: Option<String>) -> Self {
        Self { path, pathext }
    }

    /// Reads `PATH` and `PATHEXT` from the current process.
    ///
    /// `PATH` is kept as raw OS text. `PATHEXT` only ever holds ASCII
    /// extensions, so it is converted lossily.
    #[must_use]
    pub fn from_process() -> Self {
        let pathext = env::var_os(PATHEXT_VAR).map(|value| value.to_string_lossy().into_owned());
        Self::new(env::var_os(PATH_VAR), pathext)
    }

    /// The search path, or `None` when it is unset or empty.
    #[must_use]
    pub fn search_path(&self) -> Option<&OsStr> {
        self.path.as_deref().filter(|path| !path.is_empty())
    }

    /// The raw extension list, if set.
    #[must_use]
    pub fn pathext(&self) -> Option<&str> {
        self.pathext.as_deref()
    }
}
