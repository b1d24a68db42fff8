use std::io;
use std::process::ExitCode;

use clap::Parser;

use svcreg::cli::prompt::Prompter;
use svcreg::cli::{report, Cli};
use svcreg::error::ErrorExt;
use svcreg::logging;
use svcreg::service::privilege::require_privilege;
use svcreg::service::registrar::Registrar;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    if let Err(e) = require_privilege() {
        report::print_failure(&e);
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    let spec = match Prompter::new(stdin.lock(), io::stdout()).collect_spec() {
        Ok(spec) => spec,
        Err(e) => {
            e.print_error_stack();
            return ExitCode::FAILURE;
        }
    };

    // rejected or partially activated services are reported, not fatal
    Registrar::new().create_service(&spec);
    ExitCode::SUCCESS
}
