//! Service Registrar - writes a unit file and activates it
//!
//! Registration goes through these stages:
//! validated input, unit file written, then activated or activation failed.
//! Writing the file is the success criterion; activation is best-effort and
//! its outcome is recorded in the [`RegistrationReport`].

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::report;
use crate::config::spec::ServiceSpec;
use crate::config::unit::{render_unit, unit_path, SERVICE_DIR};
use crate::config::validate::{validate_exec_path, validate_name};
use crate::error::RegistrarError;

use super::error::SupervisorError;
use super::lookup::{ExecutableLookup, Which};
use super::supervisor::{ActivationStep, Supervisor, Systemctl};

/// The step that stopped activation and why
#[derive(Debug)]
pub struct ActivationFailure {
    pub step: ActivationStep,
    pub error: SupervisorError,
}

/// Outcome of a registration whose unit file was written
#[derive(Debug)]
pub struct RegistrationReport {
    pub unit_path: PathBuf,
    pub file_written: bool,
    pub reloaded: bool,
    pub enabled: bool,
    pub started: bool,
    /// Command from `ExecStart=` that could not be resolved
    pub unresolved_command: Option<String>,
    pub activation_failure: Option<ActivationFailure>,
}

impl RegistrationReport {
    fn written(unit_path: PathBuf, unresolved_command: Option<String>) -> Self {
        Self {
            unit_path,
            file_written: true,
            reloaded: false,
            enabled: false,
            started: false,
            unresolved_command,
            activation_failure: None,
        }
    }

    /// Whether every activation step succeeded
    pub fn activated(&self) -> bool {
        self.reloaded && self.enabled && self.started
    }

    pub fn step_done(&self, step: ActivationStep) -> bool {
        match step {
            ActivationStep::Reload => self.reloaded,
            ActivationStep::Enable => self.enabled,
            ActivationStep::Start => self.started,
        }
    }

    fn mark_done(&mut self, step: ActivationStep) {
        match step {
            ActivationStep::Reload => self.reloaded = true,
            ActivationStep::Enable => self.enabled = true,
            ActivationStep::Start => self.started = true,
        }
    }
}

pub struct Registrar<S = Systemctl, L = Which> {
    service_dir: PathBuf,
    supervisor: S,
    lookup: L,
}

impl Default for Registrar {
    fn default() -> Self {
        Self::new()
    }
}

impl Registrar {
    /// Registrar for `/etc/systemd/system` driven by `systemctl`
    pub fn new() -> Self {
        Self {
            service_dir: PathBuf::from(SERVICE_DIR),
            supervisor: Systemctl::default(),
            lookup: Which,
        }
    }
}

impl<S: Supervisor, L: ExecutableLookup> Registrar<S, L> {
    pub fn with_service_dir(mut self, service_dir: impl Into<PathBuf>) -> Self {
        self.service_dir = service_dir.into();
        self
    }

    pub fn with_supervisor<S2: Supervisor>(self, supervisor: S2) -> Registrar<S2, L> {
        Registrar {
            service_dir: self.service_dir,
            supervisor,
            lookup: self.lookup,
        }
    }

    pub fn with_lookup<L2: ExecutableLookup>(self, lookup: L2) -> Registrar<S, L2> {
        Registrar {
            service_dir: self.service_dir,
            supervisor: self.supervisor,
            lookup,
        }
    }

    /// Create the service, printing each stage to stdout as it happens.
    ///
    /// Returns false when `spec` is rejected, the unit already exists or
    /// the file cannot be written. Activation failures still return true.
    pub fn create_service(&self, spec: &ServiceSpec) -> bool {
        self.create_service_to(spec, &mut io::stdout().lock())
    }

    /// [`Registrar::create_service`] with console output sent to `out`
    pub fn create_service_to<W: Write>(&self, spec: &ServiceSpec, out: &mut W) -> bool {
        let unresolved_command = match self.check(spec) {
            Ok(unresolved) => unresolved,
            Err(e) => {
                report::write_failure(out, &e);
                return false;
            }
        };
        if let Some(command) = &unresolved_command {
            report::write_unresolved(out, command);
        }

        let path = match self.write_unit(spec) {
            Ok(path) => path,
            Err(e) => {
                report::write_failure(out, &e);
                return false;
            }
        };
        report::write_created(out, &spec.name);

        let registration = self.activate(spec, path, unresolved_command);
        report::write_activation(out, spec, &registration);
        true
    }

    /// Write the unit file for `spec` and run the activation steps
    pub fn register(&self, spec: &ServiceSpec) -> Result<RegistrationReport, RegistrarError> {
        let unresolved_command = self.check(spec)?;
        let path = self.write_unit(spec)?;
        Ok(self.activate(spec, path, unresolved_command))
    }

    /// Validate `spec`, refuse duplicates and look up its command.
    /// Returns the command when it cannot be resolved.
    fn check(&self, spec: &ServiceSpec) -> Result<Option<String>, RegistrarError> {
        validate_name(&spec.name)?;
        validate_exec_path(&spec.exec_path)?;

        let path = unit_path(&self.service_dir, &spec.name);
        if path.exists() {
            return Err(RegistrarError::AlreadyExists {
                name: spec.name.clone(),
                path,
            });
        }

        Ok(spec.command().and_then(|command| {
            match self.lookup.resolve(command) {
                Some(found) => {
                    tracing::debug!(command, path = %found.display(), "resolved command");
                    None
                }
                None => {
                    tracing::warn!(command, "command not found, creating service anyway");
                    Some(command.to_string())
                }
            }
        }))
    }

    fn activate(
        &self,
        spec: &ServiceSpec,
        path: PathBuf,
        unresolved_command: Option<String>,
    ) -> RegistrationReport {
        let mut registration = RegistrationReport::written(path, unresolved_command);
        for step in ActivationStep::ALL {
            match self.supervisor.run(step, &spec.name) {
                Ok(()) => registration.mark_done(step),
                Err(error) => {
                    tracing::warn!(%step, error = %error, "activation step failed");
                    registration.activation_failure = Some(ActivationFailure { step, error });
                    break;
                }
            }
        }
        registration
    }

    /// Create the unit file exclusively so an existing unit is never replaced
    fn write_unit(&self, spec: &ServiceSpec) -> Result<PathBuf, RegistrarError> {
        let path = unit_path(&self.service_dir, &spec.name);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(RegistrarError::AlreadyExists {
                    name: spec.name.clone(),
                    path,
                });
            }
            Err(source) => return Err(RegistrarError::Write { path, source }),
        };

        let content = render_unit(spec);
        if let Err(source) = file.write_all(content.as_bytes()).and_then(|_| file.sync_all()) {
            drop(file);
            let _ = fs::remove_file(&path);
            return Err(RegistrarError::Write { path, source });
        }
        tracing::info!(path = %path.display(), "unit file written");
        Ok(path)
    }
}
