// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Executable lookup over a search path.
//!
//! Resolves a command name to the first executable file found in an ordered
//! list of directories, the way `which` does. The platform rules (path-list
//! delimiter, executable extensions, permission bits) are carried by a
//! [`Platform`] value so both the Unix and the Windows behaviour can be
//! exercised on any host.
//!
//! Nothing in this crate reads the process environment except
//! [`SearchEnv::from_process`]; everything else takes its inputs explicitly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unused_must_use)]
#![deny(unused_extern_crates)]
#![deny(clippy::pedantic)]
#![warn(missing_debug_implementations, unreachable_pub, rustdoc::all)]

/// Search environment captured from the process.
pub mod config;
/// Platform capability selection and the executable extension list.
pub mod platform;
/// The executable predicate.
pub mod probe;
/// The path resolver.
pub mod resolve;

pub use config::SearchEnv;
pub use platform::{Platform, DEFAULT_EXTENSIONS};
pub use probe::is_executable;
pub use resolve::Resolver;
