use hostpick::{
    Result, args,
    config::{self, Settings},
    launcher::{LaunchOutcome, SessionLauncher},
    log::LOGGER,
    log_debug, log_error, ssh_config::ConfigStore, tui,
};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = args::main_args();

    let settings = match config::load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Failed to load settings, using defaults: {}", err);
            Settings::default()
        }
    };

    if args.debug || settings.settings.debug_mode {
        LOGGER.enable_debug();
        if let Err(err) = LOGGER.log_debug("Debug mode enabled") {
            eprintln!("Failed to initialize debug logging: {}", err);
            return Ok(ExitCode::FAILURE);
        }
    }

    let store = ConfigStore::default_location()?;
    let selected = match tui::run_host_picker(store) {
        Ok(selected) => selected,
        Err(err) => {
            log_error!("Host picker failed: {}", err);
            let _ = LOGGER.flush();
            return Err(err.into());
        }
    };

    let exit_code = match selected {
        None => ExitCode::SUCCESS,
        Some(alias) => {
            let launcher = SessionLauncher::from_settings(&settings.settings);
            match launcher.launch(&alias) {
                Ok(LaunchOutcome::Started) => ExitCode::SUCCESS,
                Ok(LaunchOutcome::Unsupported(message)) => {
                    eprintln!("{}", message);
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    log_error!("Failed to launch session for '{}': {}", alias, err);
                    let _ = LOGGER.flush();
                    return Err(err.into());
                }
            }
        }
    };

    log_debug!("Exiting");
    let _ = LOGGER.flush();
    Ok(exit_code)
}
