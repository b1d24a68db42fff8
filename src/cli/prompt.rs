//! Interactive collection of a [`ServiceSpec`]
//!
//! Generic over the input and output streams so the loop can be driven from
//! an in-memory buffer.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;

use super::messages;
use crate::config::spec::{RestartPolicy, ServiceSpec};
use crate::config::validate::{validate, Field, FieldValue};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for every field in order, re-asking until each is valid
    pub fn collect_spec(&mut self) -> io::Result<ServiceSpec> {
        writeln!(self.output, "{}", messages::WELCOME)?;
        writeln!(self.output, "{}", "-".repeat(messages::RULE_WIDTH))?;

        let name = self.ask_text(Field::Name)?;
        let description = self.ask_text(Field::Description)?;
        let exec_path = self.ask_text(Field::ExecPath)?;
        let working_dir = self.ask_text(Field::WorkingDir)?;

        writeln!(self.output)?;
        writeln!(self.output, "{}", messages::RESTART_MENU_TITLE)?;
        let menu = [
            RestartPolicy::Always,
            RestartPolicy::OnFailure,
            RestartPolicy::No,
        ];
        for (idx, policy) in menu.into_iter().enumerate() {
            writeln!(
                self.output,
                "{}",
                messages::restart_option(idx as u8 + 1, policy)
            )?;
        }
        let restart_policy = self.ask_restart()?;

        Ok(ServiceSpec {
            name,
            description,
            exec_path,
            restart_policy,
            working_dir,
        })
    }

    /// Prompt for `field` until [`validate`] accepts the answer
    pub fn ask(&mut self, field: Field) -> io::Result<FieldValue> {
        loop {
            let line = self.read_line(prompt_for(field))?;
            match validate(field, &line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(?field, error = %e, "rejected input");
                    writeln!(self.output, "{}", rejection_for(field).red())?;
                }
            }
        }
    }

    fn ask_text(&mut self, field: Field) -> io::Result<String> {
        match self.ask(field)? {
            FieldValue::Text(text) => Ok(text),
            other => Err(mismatched(field, &other)),
        }
    }

    fn ask_restart(&mut self) -> io::Result<RestartPolicy> {
        match self.ask(Field::RestartPolicy)? {
            FieldValue::Restart(policy) => Ok(policy),
            other => Err(mismatched(Field::RestartPolicy, &other)),
        }
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before all fields were answered",
            ));
        }
        Ok(line)
    }
}

fn mismatched(field: Field, value: &FieldValue) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("{:?} produced unexpected value {:?}", field, value),
    )
}

fn prompt_for(field: Field) -> &'static str {
    match field {
        Field::Name => messages::PROMPT_NAME,
        Field::Description => messages::PROMPT_DESCRIPTION,
        Field::ExecPath => messages::PROMPT_EXEC,
        Field::WorkingDir => messages::PROMPT_WORKING_DIR,
        Field::RestartPolicy => messages::PROMPT_RESTART,
    }
}

fn rejection_for(field: Field) -> &'static str {
    match field {
        Field::Name => messages::INVALID_NAME,
        Field::ExecPath => messages::EMPTY_COMMAND,
        Field::RestartPolicy => messages::INVALID_CHOICE,
        // never rejected
        Field::Description | Field::WorkingDir => "",
    }
}
