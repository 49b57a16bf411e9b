use clap::{Args, Parser, Subcommand};
use colorramp::{ColorError, ColorList, ListError, ListKind};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const DEFAULT_RAMP_LIMIT: i64 = 10;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    List(#[from] ListError),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "colorramp", about = "Color ramps and hex/rgb conversions")]
struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true, env = "COLORRAMP_PRETTY")]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lightest-to-darkest ramp around a base color.
    Ramp {
        color: String,
        #[arg(long, env = "COLORRAMP_LIMIT", default_value_t = DEFAULT_RAMP_LIMIT, allow_negative_numbers = true)]
        limit: i64,
    },
    /// rgb/hsl/hex display strings for a color (black when omitted).
    Info { hex: Option<String> },
    Random,
    ToRgb { hex: String },
    ToHex { r: u8, g: u8, b: u8 },
    List(ListCommand),
}

#[derive(Args, Debug)]
struct ListCommand {
    /// `favorites` or `history`.
    kind: ListKind,

    /// Previously stored list value (JSON array).
    #[arg(long)]
    current: Option<String>,

    #[command(subcommand)]
    command: ListSubcommand,
}

#[derive(Subcommand, Debug)]
enum ListSubcommand {
    Get,
    Add { color: String },
    Remove { color: String },
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pretty = cli.pretty;
    tracing::debug!(pretty, "parsed command line");

    match cli.command {
        Command::Ramp { color, limit } => print_json(&colorramp::light_to_dark(&color, limit)?, pretty),
        Command::Info { hex } => print_json(&colorramp::color_info(hex.as_deref())?, pretty),
        Command::Random => print_json(&colorramp::random_color(), pretty),
        Command::ToRgb { hex } => print_json(&colorramp::hex_to_rgb(&hex)?, pretty),
        Command::ToHex { r, g, b } => print_json(&colorramp::rgb_to_hex((r, g, b)), pretty),
        Command::List(list) => run_list(list, pretty),
    }
}

fn run_list(cmd: ListCommand, pretty: bool) -> Result<(), CliError> {
    let mut list = ColorList::from_json(cmd.kind, cmd.current.as_deref())?;
    let colors = match cmd.command {
        ListSubcommand::Get => list.get(),
        ListSubcommand::Add { color } => list.add(&color)?,
        ListSubcommand::Remove { color } => list.remove(&color),
    };
    print_json(colors, pretty)
}

fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) }
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<(), CliError> {
    println!("{}", render_json(value, pretty)?);
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
