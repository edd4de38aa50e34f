use clap::Parser;
use colored::Colorize;
use network_config_checker::cli::{run, Args};
use network_config_checker::config::InputFields;
use network_config_checker::logging::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    if let Err(e) = init_logging(args.verbose) {
        eprintln!("{failed} {e}", failed = "logging setup failed:".on_red());
        return ExitCode::from(2);
    }
    log::info!("#Start main()");

    match run(&args, InputFields::from_env(), &mut std::io::stdout()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e}");
            eprintln!("{}", e.to_string().red());
            ExitCode::from(2)
        }
    }
}
