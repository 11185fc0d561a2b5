//! prisma-extractor - TypeScript declarations from Prisma schemas.

use clap::Parser;

use extractor_cli::cli::{Cli, Command};
use extractor_cli::commands;
use extractor_cli::error::CliResult;
use extractor_cli::{logging, output};

#[tokio::main]
async fn main() {
    logging::init();

    // Usage errors exit 1 like every other failure; --help and --version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Run the CLI and handle errors
    if let Err(e) = run(cli).await {
        output::newline();
        output::error(&e.to_string());
        for cause in e.causes() {
            output::cause(&cause);
        }
        if logging::is_debug_enabled() {
            eprintln!("{:?}", miette::Report::new(e));
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    match cli.into_command() {
        Command::Init { config_path } => commands::init::run(&config_path).await,
        Command::Generate(args) => commands::generate::run(args).await,
    }
}
