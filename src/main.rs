//! Pong entry point
//!
//! Sets up logging and settings, then hands control to the platform loop.

use std::process::ExitCode;

use pong::Settings;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load();
    log::info!("Pong starting with {:?}", settings);

    match pong::platform::run(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
