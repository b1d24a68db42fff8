//! Crate-level error type and error trait extensions

use std::error::Error;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::error::ValidationError;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("root privileges are required")]
    NotPrivileged,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("service '{name}' already exists at {}", path.display())]
    AlreadyExists { name: String, path: PathBuf },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub trait ErrorExt: Error {
    fn print_error_stack(&self) {
        eprintln!("Error: {}", self);

        let mut source = self.source();
        while let Some(cause) = source {
            eprintln!("  Caused by: {}", cause);
            source = cause.source();
        }
    }
}

impl<T: Error> ErrorExt for T {}
