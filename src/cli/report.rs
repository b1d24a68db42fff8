//! Console rendering of registration outcomes.

use std::io::{self, Write};

use crossterm::style::Stylize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::messages;
use crate::config::error::ValidationError;
use crate::config::spec::ServiceSpec;
use crate::error::RegistrarError;
use crate::service::registrar::RegistrationReport;
use crate::service::supervisor::ActivationStep;

#[derive(Tabled)]
struct StepRow {
    #[tabled(rename = "步骤")]
    step: String,
    #[tabled(rename = "结果")]
    outcome: &'static str,
}

const DONE: &str = "✓";
const FAILED: &str = "✗";
const SKIPPED: &str = "-";

/// One row per stage: the unit file, then each activation step
pub fn summary_table(report: &RegistrationReport) -> String {
    let failed_step = report.activation_failure.as_ref().map(|f| f.step);

    let mut rows = vec![StepRow {
        step: messages::STEP_UNIT_FILE.to_string(),
        outcome: if report.file_written { DONE } else { FAILED },
    }];
    rows.extend(ActivationStep::ALL.into_iter().map(|step| StepRow {
        step: step.to_string(),
        outcome: if report.step_done(step) {
            DONE
        } else if failed_step == Some(step) {
            FAILED
        } else {
            SKIPPED
        },
    }));

    Table::new(rows).with(Style::rounded()).to_string()
}

// Console write errors are ignored, as with `println!` on a closed stdout.

pub fn write_unresolved<W: Write>(out: &mut W, command: &str) {
    let _ = writeln!(out, "{}", messages::command_not_found(command).yellow());
}

pub fn write_created<W: Write>(out: &mut W, name: &str) {
    let _ = writeln!(out, "{}", messages::created(name).green());
}

pub fn write_activation<W: Write>(out: &mut W, spec: &ServiceSpec, report: &RegistrationReport) {
    let _ = match &report.activation_failure {
        None => writeln!(out, "{}", messages::activated(&spec.name)),
        Some(failure) => writeln!(
            out,
            "{}",
            messages::activation_failed(&failure.error).yellow()
        ),
    };
    let _ = writeln!(out, "{}", summary_table(report));
}

pub fn write_failure<W: Write>(out: &mut W, error: &RegistrarError) {
    let _ = writeln!(out, "{}", failure_message(error).red());
}

/// Print a fatal error to stderr
pub fn print_failure(error: &RegistrarError) {
    write_failure(&mut io::stderr().lock(), error);
}

pub fn failure_message(error: &RegistrarError) -> String {
    match error {
        RegistrarError::NotPrivileged => messages::NEED_ROOT.to_string(),
        RegistrarError::Invalid(invalid) => match invalid {
            ValidationError::EmptyName | ValidationError::EmptyCommand => {
                messages::EMPTY_REQUIRED.to_string()
            }
            ValidationError::InvalidNameChar(_) => messages::INVALID_NAME.to_string(),
            ValidationError::InvalidRestartChoice(_) => messages::INVALID_CHOICE.to_string(),
        },
        RegistrarError::AlreadyExists { name, .. } => messages::already_exists(name),
        RegistrarError::Write { path, source } => {
            messages::create_failed(&format!("{}: {}", path.display(), source))
        }
    }
}
