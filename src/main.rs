use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pack_solver::cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Callers parse stdout, so argument errors are reported as a document too
            cli::identify::print_json_report(&cli::usage_error_report(&e))?;
            return Ok(ExitCode::from(2));
        }
    };

    // Initialize logging based on verbosity flag; logs go to stderr
    let filter = if cli.verbose {
        EnvFilter::new("pack_solver=debug,info")
    } else {
        EnvFilter::new("pack_solver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Identify(args) => {
            return cli::identify::run(args, cli.format, cli.verbose);
        }
        cli::Commands::Sets => {
            cli::sets::run(cli.format)?;
        }
        cli::Commands::Serve(args) => {
            pack_solver::web::server::run(args)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
