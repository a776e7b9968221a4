use fileorg::cli::{Cli, run_cli};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_permissive(env::args());
    let Some(config) = cli.run_config() else {
        Cli::print_usage();
        return ExitCode::SUCCESS;
    };

    match run_cli(&config, cli.config.as_deref()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
