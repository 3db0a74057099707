mod config;
mod tasks;
#[cfg(test)]
mod test_support;
mod tui;

use std::fs::File;

use anyhow::{Context, Result};
use log::info;
use ratatui::DefaultTerminal;
use simplelog::{ConfigBuilder, WriteLogger};

use config::Config;
use tasks::JsonFile;
use tui::App;

/// The terminal belongs to the UI, so logs go to a file. If the file cannot
/// be created the app runs without logging.
fn init_logging(config: &Config) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn run(terminal: &mut DefaultTerminal, app: &mut App<JsonFile>) -> Result<()> {
    terminal.clear()?;
    app.run(terminal)
}

fn main() -> Result<()> {
    let config = config::load().context("could not load configuration")?;
    init_logging(&config);
    info!(
        "Starting with tasks file {} (log level {})",
        config.tasks_file.display(),
        config.log_level
    );

    // Load before taking over the terminal so a bad record is reported on a
    // normal screen.
    let mut app = App::new(JsonFile::new(&config.tasks_file))?;

    let mut terminal = ratatui::init();
    let app_result = run(&mut terminal, &mut app);
    ratatui::restore();
    info!("Terminal restored");
    app_result
}
