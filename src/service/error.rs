//! Supervisor Error Types

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupervisorError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("`{command}` exited with {status}: {output}")]
    Failed {
        command: String,
        status: String,
        output: String,
    },
}
