use clap::Parser;
use std::process::ExitCode;

use esgen_cli::cli::commands::{chat, configure, routes};
use esgen_cli::cli::{Args, Command};
use esgen_cli::config::ResolveOptions;
use esgen_cli::output::{self, OutputConfig};
use esgen_cli::ui::Style;
use esgen_cli::{log, status};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    if let Err(e) = log::setup_logging() {
        status!("{} {e:#}", Style::warning("Warning:"));
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("{} {err:#}", Style::error("Error:"));
            let code = if err.downcast_ref::<routes::UnknownRoute>().is_some() {
                exitcode::USAGE
            } else {
                exitcode::SOFTWARE
            };
            ExitCode::from(code as u8)
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let options = ResolveOptions {
        base_url: args.base_url,
        timeout_secs: args.timeout_secs,
    };

    match args.command {
        None | Some(Command::Chat) => chat::run_chat(&options).await,
        Some(Command::Open { path }) => routes::run_open(&path, &options).await,
        Some(Command::Routes) => {
            routes::print_routes();
            Ok(())
        }
        Some(Command::Config { init: true }) => configure::init_config(),
        Some(Command::Config { init: false }) => configure::show_config(&options),
        Some(Command::Configure) => configure::run_configure(),
    }
}
