use std::ffi::OsString;
use std::io::IsTerminal;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::parser::ValueSource;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use command::*;

mod command;
mod document;
mod environment;
mod error;
mod servers;

/// Put the OpenAPI server closest to the current environment first.
///
/// With no subcommand, rewrites the document's `servers` in place: the localhost server first when
/// NODE_ENV is `development`, the thrads.ai server first otherwise.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    update: Update,

    #[clap(short, long, global = true)]
    verbose: bool,
}

/// Update arguments given at the top level only apply when no subcommand follows.
const TOP_LEVEL_UPDATE_ARGS: &[&str] = &["file", "node_env", "dev_match", "prod_match", "keep_unmatched", "output"];

impl Cli {
    /// Like [`Parser::try_parse_from`], but rejects top-level update flags ahead of a subcommand.
    /// `--verbose` is global and allowed anywhere.
    fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        if let Some(name) = matches.subcommand_name() {
            let given = TOP_LEVEL_UPDATE_ARGS
                .iter()
                .find(|id| matches.value_source(**id) == Some(ValueSource::CommandLine));
            if let Some(id) = given {
                let flag = id.replace('_', "-");
                return Err(Self::command().error(
                    ErrorKind::ArgumentConflict,
                    format!("the subcommand '{name}' cannot be used with '--{flag}'; pass it after '{name}'"),
                ));
            }
        }
        Self::from_arg_matches(&matches)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Reorder the servers and write the document back (the default)
    Update(Update),
    /// Fail if the servers are not already ordered for the environment
    Check(Check),
}

fn main() -> Result<()> {
    let cli = Cli::parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .compact()
        .without_time()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .init();

    match cli.command {
        Some(Command::Update(u)) => u.run(),
        Some(Command::Check(c)) => c.run(),
        None => cli.update.run(),
    }
}
