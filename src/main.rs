use std::process::ExitCode;

use xmlpipe::config::Config;
use xmlpipe::logging::FacadeLog;
use xmlpipe::pipeline::Pipeline;

/// Exit code for failures outside the pipeline (configuration, report output).
const EXIT_SETUP_FAILURE: u8 = 1;

fn main() -> ExitCode {
    // Parse configuration from command line, config files and environment
    let config = match Config::from_args_and_env() {
        Ok(config) => config,
        Err(e) => {
            env_logger::init();
            log::error!("{:#}", e);
            return ExitCode::from(EXIT_SETUP_FAILURE);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    for path in &config.loaded_from {
        log::debug!("loaded configuration from {}", path.display());
    }

    let log = FacadeLog;
    let mut pipeline = Pipeline::new(&config.base_dir, &log).slot_policy(config.slot_policy);

    match pipeline.run(&config.files) {
        Ok(report) => {
            if config.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        log::error!("failed to serialize report: {}", e);
                        return ExitCode::from(EXIT_SETUP_FAILURE);
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => ExitCode::from(e.exit_code()),
    }
}
