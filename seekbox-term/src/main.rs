mod app;
mod error;
mod options;
mod paths;
mod render;
mod settings;
mod terminal;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::error::AppError;
use crate::settings::Settings;
use crate::terminal::TerminalGuard;

fn init_logging(level: LevelFilter) -> Result<(), AppError> {
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("seekbox-term.log"));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    log::info!("Logging to {}", path.display());
    Ok(())
}

fn run() -> Result<(), AppError> {
    let settings = Settings::load(paths::settings_file().as_deref())?;
    init_logging(settings.level())?;
    log::debug!("Settings: {:?}", settings);

    let options_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.options_file.clone());
    let options = match options_path {
        Some(path) => options::load(&path)?,
        None => options::sample(),
    };

    let mut app = App::new(options, &settings)?;
    let mut terminal = TerminalGuard::enter()?;
    app.run(&mut terminal)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
