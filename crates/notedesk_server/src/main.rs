//! notedesk server entry point.
//!
//! Reads configuration from `NOTEDESK_*` environment variables, initializes
//! logging, then serves the notes API until interrupted.

use log::error;
use notedesk_core::init_logging;
use notedesk_server::{run, ServerConfig};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("notedesk: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&config.log_level, config.log_dir.as_deref()) {
        eprintln!("notedesk: {err}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_exit module=server status=error error={err}");
            eprintln!("notedesk: {err}");
            ExitCode::FAILURE
        }
    }
}
