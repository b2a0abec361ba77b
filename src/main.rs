//! superdesk-settings CLI entry point.

use clap::Parser;

use superdesk_settings::cli::{handle_error, run, Cli};
use superdesk_settings::domain::ports::ProcessEnvironment;
use superdesk_settings::infrastructure::config::loader::DEFAULT_LOG_CONFIG_FILE;
use superdesk_settings::infrastructure::config::Resolver;
use superdesk_settings::infrastructure::logging::{LogConfig, LoggerImpl};

fn main() {
    let cli = Cli::parse();

    let env = ProcessEnvironment;
    let log_config_file = Resolver::new(&env).string("LOG_CONFIG_FILE", DEFAULT_LOG_CONFIG_FILE);
    let _logger = match LogConfig::load(&log_config_file).and_then(|config| LoggerImpl::init(&config)) {
        Ok(logger) => logger,
        Err(err) => handle_error(&err, cli.json),
    };

    if let Err(err) = run(&cli) {
        handle_error(&err, cli.json);
    }
}
