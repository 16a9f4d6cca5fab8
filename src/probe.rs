// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::{fs, path::Path};

use crate::Platform;

/// Whether `path` names an executable regular file under `platform` rules.
///
/// Metadata is queried through symlinks. Any failure to query it (missing
/// file, unreadable parent, ...) reads as "not executable". Directories and
/// other non-regular entries are never executable. On Windows a regular file
/// is enough; on Unix at least one execute bit must be set.
#[must_use]
pub fn is_executable(path: &Path, platform: Platform) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };

    if !metadata.is_file() {
        return false;
    }

    match platform {
        Platform::Windows => true,
        Platform::Unix => has_execute_bits(&metadata),
    }
}

#[cfg(unix)]
fn has_execute_bits(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

// No permission bits to inspect.
#[cfg(not(unix))]
fn has_execute_bits(_metadata: &fs::Metadata) -> bool {
    true
}
