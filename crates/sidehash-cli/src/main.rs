use sidehash_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; a missing state dir must not stop hashing.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli::run_from_args() {
        eprintln!("sidehash error: {:#}", err);
        std::process::exit(1);
    }
}
