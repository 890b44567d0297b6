//! Headless replay of recorded gesture scripts.

mod cli;
mod error;
mod script;

fn main() {
    env_logger::init();

    if let Err(error) = cli::run_from_env() {
        log::error!("Replay failed: {}", error);
        eprintln!("{error}");
        std::process::exit(error.exit_code());
    }
}
