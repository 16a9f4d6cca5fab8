// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use crate::{probe::is_executable, Platform, SearchEnv};

/// Resolves command names against a search path.
///
/// A command containing a path separator is an explicit path: it is checked
/// on its own and never searched for. Any other command is joined to each
/// search-path directory in order, first as given and then, if the name has
/// no `.` in it, with each executable extension appended. The first
/// candidate that is executable wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    platform: Platform,
    extensions: Vec<String>,
}

impl Resolver {
    /// A resolver with an explicit extension list (entries without dots).
    #[must_use]
    pub fn new(platform: Platform, extensions: Vec<String>) -> Self {
        Self {
            platform,
            extensions,
        }
    }

    /// A resolver taking its extension list from `env`.
    #[must_use]
    pub fn from_env(env: &SearchEnv, platform: Platform) -> Self {
        Self::new(platform, platform.executable_extensions(env.pathext()))
    }

    /// The extensions tried for bare command names.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether `command` is treated as a path rather than a name.
    #[must_use]
    pub fn is_explicit_path(&self, command: &str) -> bool {
        command.chars().any(|c| self.platform.is_path_separator(c))
    }

    /// Whether `candidate` satisfies the executable predicate.
    #[must_use]
    pub fn accepts(&self, candidate: &Path) -> bool {
        is_executable(candidate, self.platform)
    }

    /// Every path a lookup of `command` would probe, in probe order.
    ///
    /// Directories come from [`Platform::split_search_path`], so entries
    /// that are not valid Unicode are kept byte-exact. Paths are built
    /// lazily and exactly as they will be reported, with no
    /// canonicalization. An empty `search_path` yields nothing unless
    /// `command` is an explicit path.
    pub fn candidates(
        &self,
        command: &str,
        search_path: &OsStr,
    ) -> impl Iterator<Item = PathBuf> {
        let explicit = self
            .is_explicit_path(command)
            .then(|| PathBuf::from(command));

        let (names, directories) = if explicit.is_some() || search_path.is_empty() {
            (Vec::new(), Vec::new())
        } else {
            (
                self.file_names(command),
                self.platform.split_search_path(search_path),
            )
        };

        explicit
            .into_iter()
            .chain(directories.into_iter().flat_map(move |dir| {
                names.iter().map(|name| dir.join(name)).collect::<Vec<_>>()
            }))
    }

    /// The first executable match for `command`, if any.
    #[must_use]
    pub fn resolve(
        &self,
        command: &str,
        search_path: &(impl AsRef<OsStr> + ?Sized),
    ) -> Option<PathBuf> {
        self.candidates(command, search_path.as_ref())
            .find(|candidate| self.accepts(candidate))
    }

    /// Every executable match for `command`, in search order.
    #[must_use]
    pub fn resolve_all(
        &self,
        command: &str,
        search_path: &(impl AsRef<OsStr> + ?Sized),
    ) -> Vec<PathBuf> {
        self.candidates(command, search_path.as_ref())
            .filter(|candidate| self.accepts(candidate))
            .collect()
    }

    // Any dot counts as an existing extension, so `my.tool` is never
    // suffixed.
    fn file_names(&self, command: &str) -> Vec<String> {
        let mut names = vec![command.to_string()];
        if !command.contains('.') {
            names.extend(
                self.extensions
                    .iter()
                    .filter(|ext| !ext.is_empty())
                    .map(|ext| format!("{command}.{ext}")),
            );
        }
        names
    }
}
