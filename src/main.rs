use colored::Colorize;
use pg2cidr::{convert_file, logging, Config};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let logging_ready = match logging::init() {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Error: {e}");
            false
        }
    };

    let args: Vec<String> = std::env::args().collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(usage) => {
            eprintln!("{usage}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("#Start converting {}", config.input.display());

    match convert_file(&config) {
        Ok(summary) => {
            if summary.rejected() > 0 {
                log::info!("{} lines rejected", summary.rejected().to_string().red());
            }
            log::info!("#Done {summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if logging_ready {
                log::error!("{e}");
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
