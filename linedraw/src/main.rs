mod chrome;

use std::process::ExitCode;

use settings::Settings;

pub fn main() -> ExitCode {
    // Register a custom panic handler
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!(
            "{} v{} has panicked. This is a bug. Please report it, including the debug information below. Thanks!\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        );
        previous_hook(info);
    }));

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::init();
    log::debug!("Starting with {settings:?}");

    match chrome::run(settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        },
    }
}
