//! systemd activation steps
//!
//! After a unit file is written it is activated with `daemon-reload`,
//! `enable` and `start`, in that order.

use std::ffi::OsString;
use std::fmt;
use std::process::{Command, Stdio};

use super::error::SupervisorError;

/// One supervisor sub-command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationStep {
    Reload,
    Enable,
    Start,
}

impl ActivationStep {
    /// Execution order
    pub const ALL: [ActivationStep; 3] = [
        ActivationStep::Reload,
        ActivationStep::Enable,
        ActivationStep::Start,
    ];

    pub fn args(&self, unit: &str) -> Vec<String> {
        match self {
            ActivationStep::Reload => vec!["daemon-reload".to_string()],
            ActivationStep::Enable => vec!["enable".to_string(), unit.to_string()],
            ActivationStep::Start => vec!["start".to_string(), unit.to_string()],
        }
    }
}

impl fmt::Display for ActivationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivationStep::Reload => write!(f, "daemon-reload"),
            ActivationStep::Enable => write!(f, "enable"),
            ActivationStep::Start => write!(f, "start"),
        }
    }
}

pub trait Supervisor {
    /// Run `step` for `unit`, blocking until the command exits
    fn run(&self, step: ActivationStep, unit: &str) -> Result<(), SupervisorError>;
}

/// Drives systemd through the `systemctl` binary
#[derive(Debug, Clone)]
pub struct Systemctl {
    program: OsString,
}

impl Default for Systemctl {
    fn default() -> Self {
        Self {
            program: OsString::from("systemctl"),
        }
    }
}

impl Systemctl {
    /// Use a different binary in place of `systemctl`
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Supervisor for Systemctl {
    fn run(&self, step: ActivationStep, unit: &str) -> Result<(), SupervisorError> {
        let args = step.args(unit);
        let command = format!("{} {}", self.program.to_string_lossy(), args.join(" "));
        tracing::debug!(%command, "running supervisor step");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SupervisorError::Spawn {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let output_text = if stderr.is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr
        };
        Err(SupervisorError::Failed {
            command,
            status: output.status.to_string(),
            output: output_text,
        })
    }
}
