//! CLI entry point for helper.

mod cli;
mod cmd;

use clap::Parser;
use helper::ui::{self, Status};

use cli::Cli;
use cmd::dispatch::Execute;

fn main() {
    let cli = Cli::parse();

    if cli.quiet {
        std::env::set_var(ui::QUIET_ENV, "1");
    }
    init_logging(cli.debug);

    if let Err(e) = cli.command.execute() {
        log::debug!("command failed: {:?}", e);
        eprintln!(
            "{} {}",
            ui::status_icon(Status::Failure),
            ui::colors::error(&format!("{:#}", e))
        );
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins unless `--debug` was given; the default is warnings only.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
