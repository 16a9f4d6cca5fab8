// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Platform-sensitive lookup rules.

use std::{env, ffi::OsStr, path::PathBuf};

/// Extensions tried when `PATHEXT` is unset or empty, in order.
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["com", "exe", "bat", "cmd"];

/// The lookup rules a search runs under.
///
/// `Windows` is the extension-suffix platform: a file is executable if it
/// exists, and bare command names are also tried with each executable
/// extension. `Unix` relies on permission bits and never suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Unix-like systems: `:`-separated search path, execute bits.
    Unix,
    /// Windows: `;`-separated search path, `PATHEXT` suffixing.
    Windows,
}

impl Platform {
    /// The rules of the host this binary was built for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Delimiter between entries of the search-path variable.
    #[must_use]
    pub const fn list_separator(self) -> char {
        match self {
            Self::Unix => ':',
            Self::Windows => ';',
        }
    }

    /// Splits a search-path value into its directories, in order.
    ///
    /// Under the host's own rules this is [`env::split_paths`], which keeps
    /// entries byte-exact and honours quoted Windows entries such as
    /// `"C:\a;b"`. Under foreign rules the value is split as text.
    /// Empty entries are kept.
    #[must_use]
    pub fn split_search_path(self, value: &OsStr) -> Vec<PathBuf> {
        if self == Self::current() {
            return env::split_paths(value).collect();
        }

        let value = value.to_string_lossy();
        match self {
            Self::Unix => value.split(':').map(PathBuf::from).collect(),
            Self::Windows => split_quoted(&value, ';'),
        }
    }

    /// Whether `c` separates path components.
    #[must_use]
    pub const fn is_path_separator(self, c: char) -> bool {
        match self {
            Self::Unix => c == '/',
            Self::Windows => c == '\\' || c == '/',
        }
    }

    /// Whether command names are tried with executable extensions.
    #[must_use]
    pub const fn uses_extensions(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Executable extensions to try, in order, without leading dots.
    ///
    /// On Windows `pathext` is the raw `PATHEXT` value: entries are
    /// lower-cased and stripped of one leading `.`. An unset or empty value
    /// falls back to [`DEFAULT_EXTENSIONS`]. On Unix the list is a single
    /// empty string, meaning "the bare name only".
    #[must_use]
    pub fn executable_extensions(self, pathext: Option<&str>) -> Vec<String> {
        if !self.uses_extensions() {
            return vec![String::new()];
        }

        match pathext.filter(|value| !value.is_empty()) {
            Some(value) => value
                .split(';')
                .map(|ext| {
                    let ext = ext.to_lowercase();
                    match ext.strip_prefix('.') {
                        Some(stripped) => stripped.to_string(),
                        None => ext,
                    }
                })
                .collect(),
            None => DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect(),
        }
    }
}

// Windows PATH syntax: `"` toggles quoting and is dropped, a separator
// inside quotes is part of the entry.
fn split_quoted(value: &str, separator: char) -> Vec<PathBuf> {
    let mut entries = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in value.chars() {
        match c {
            '"' => quoted = !quoted,
            c if c == separator && !quoted => {
                entries.push(PathBuf::from(std::mem::take(&mut current)));
            }
            c => current.push(c),
        }
    }
    entries.push(PathBuf::from(current));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_never_suffixes() {
        assert_eq!(
            Platform::Unix.executable_extensions(Some(".EXE;.BAT")),
            vec![String::new()]
        );
        assert_eq!(Platform::Unix.executable_extensions(None), vec![String::new()]);
    }

    #[test]
    fn pathext_is_lowercased_and_undotted_in_order() {
        let exts = Platform::Windows.executable_extensions(Some(".EXE;.Bat;cmd;..PS1"));
        assert_eq!(exts, vec!["exe", "bat", "cmd", ".ps1"]);
    }

    #[test]
    fn missing_or_empty_pathext_uses_defaults() {
        let defaults: Vec<String> = DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect();
        assert_eq!(Platform::Windows.executable_extensions(None), defaults);
        assert_eq!(Platform::Windows.executable_extensions(Some("")), defaults);
    }

    #[test]
    fn separators_follow_platform() {
        assert_eq!(Platform::Unix.list_separator(), ':');
        assert_eq!(Platform::Windows.list_separator(), ';');
        assert!(Platform::Unix.is_path_separator('/'));
        assert!(!Platform::Unix.is_path_separator('\\'));
        assert!(Platform::Windows.is_path_separator('\\'));
        assert!(Platform::Windows.is_path_separator('/'));
    }

    #[test]
    fn windows_keeps_quoted_separators() {
        let dirs = Platform::Windows.split_search_path(OsStr::new(r#""C:\a;b";D:\c;;E:\"#));
        assert_eq!(
            dirs,
            vec![
                PathBuf::from(r"C:\a;b"),
                PathBuf::from(r"D:\c"),
                PathBuf::new(),
                PathBuf::from(r"E:\"),
            ]
        );
    }

    #[test]
    fn unix_splits_on_colons_keeping_empty_entries() {
        let dirs = Platform::Unix.split_search_path(OsStr::new("/usr/bin::/bin"));
        assert_eq!(
            dirs,
            vec![PathBuf::from("/usr/bin"), PathBuf::new(), PathBuf::from("/bin")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn host_rules_keep_non_utf8_entries() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/opt/bin\xff:/bin");
        let dirs = Platform::Unix.split_search_path(raw);
        assert_eq!(dirs[0].as_os_str().as_bytes(), b"/opt/bin\xff");
        assert_eq!(dirs[1], PathBuf::from("/bin"));
    }

    #[test]
    fn current_matches_build_target() {
        let expected = if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        };
        assert_eq!(Platform::current(), expected);
    }
}
