use std::{
    ffi::OsStr,
    io::{self, Write},
    path::PathBuf,
};

use lookpath::{Platform, Resolver, SearchEnv};

use crate::{
    cli::Cli,
    error::{CliError, Result},
    ui,
};

pub fn run(args: Cli) -> Result<()> {
    let env = SearchEnv::from_process();
    let search_path = env.search_path().ok_or(CliError::PathNotSet)?;
    let resolver = Resolver::from_env(&env, Platform::current());

    let found = scan(&resolver, &args, search_path);
    if found.is_empty() {
        return Err(CliError::NotFound {
            command: args.command,
        });
    }

    let mut stdout = io::stdout().lock();
    // Raw bytes, so directories that are not valid Unicode print as-is.
    for path in found {
        stdout.write_all(path.as_os_str().as_encoded_bytes())?;
        stdout.write_all(b"\n")?;
    }
    Ok(())
}

fn scan(resolver: &Resolver, args: &Cli, search_path: &OsStr) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for candidate in resolver.candidates(&args.command, search_path) {
        let accepted = resolver.accepts(&candidate);
        if args.verbose {
            if accepted {
                ui::success(format!("{}", candidate.display()));
            } else {
                ui::status(format!("Skipped {}", candidate.display()));
            }
        }

        if accepted {
            found.push(candidate);
            if !args.all {
                break;
            }
        }
    }

    found
}
