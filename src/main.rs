mod cli;
mod input;
mod jwt;
mod render;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::JwtPeekArgs;
use colored::Colorize;
use jwt::DecodedToken;
use render::DateZone;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "{}={}",
            env!("CARGO_CRATE_NAME"),
            level
        )))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(args: JwtPeekArgs) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdin_is_terminal = stdin.is_terminal();
    let encoded_jwt =
        input::resolve_token(args.jwt_string.as_deref(), stdin.lock(), stdin_is_terminal)?;

    let jwt = encoded_jwt.parse::<DecodedToken>()?;

    let dates = args.dates.then_some(if args.utc {
        DateZone::Utc
    } else {
        DateZone::Local
    });
    let output = render::render(&jwt, args.format, dates).context("Failed to render token")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write to stdout")?;

    debug!(bytes = output.len(), "wrote decoded token");
    Ok(())
}

fn main() -> ExitCode {
    let args = JwtPeekArgs::parse();

    if args.no_color || !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    init_logging(args.verbose);
    let no_color = args.no_color;

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // stdout is finished with; color the prefix for stderr's own terminal
            colored::control::set_override(!no_color && io::stderr().is_terminal());
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            let code = err.downcast_ref::<jwt::Error>().map_or(1, jwt::Error::exit_code);
            ExitCode::from(code)
        }
    }
}
