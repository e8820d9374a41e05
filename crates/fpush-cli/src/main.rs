use fpush_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    let result = Cli::run_from_args();
    if let Err(err) = &result {
        eprintln!("fpush error: {:#}", err);
    }
    let code = cli::exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
}
