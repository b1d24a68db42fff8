//! Executable resolution for the command in `ExecStart=`.
//!
//! A missing executable is only diagnostic: the unit is still written, the
//! binary may be installed later.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub trait ExecutableLookup {
    /// Resolve `command` to a path, or `None` if it cannot be found
    fn resolve(&self, command: &str) -> Option<PathBuf>;
}

/// Checks the path directly, then asks `which` to search `PATH`
#[derive(Debug, Clone, Default)]
pub struct Which;

impl ExecutableLookup for Which {
    fn resolve(&self, command: &str) -> Option<PathBuf> {
        let direct = Path::new(command);
        if direct.exists() {
            return Some(direct.to_path_buf());
        }

        let output = match Command::new("which")
            .arg(command)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(command, error = %e, "could not run which");
                return None;
            }
        };

        if !output.status.success() {
            return None;
        }
        let found = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if found.is_empty() {
            None
        } else {
            Some(PathBuf::from(found))
        }
    }
}
