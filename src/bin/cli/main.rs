mod app;
mod commands;
mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use flashdeck_lib::{GenerationMode, Language};

#[derive(Parser)]
#[command(name = "flashdeck-cli", about = "Generate and review flashcards from documents", version)]
struct Cli {
    /// Config file (default: <config dir>/flashdeck/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Input files (PDF or text); "-" reads stdin
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Number of cards to generate
    #[arg(short = 'n', long = "cards", value_parser = clap::value_parser!(u64).range(1..))]
    pub cards: Option<u64>,

    /// Generation mode: heuristic or ai
    #[arg(long)]
    pub mode: Option<GenerationMode>,

    /// Document language: en or fr
    #[arg(long)]
    pub language: Option<Language>,

    /// Deck receiving the cards
    #[arg(long, default_value = app::DEFAULT_DECK)]
    pub deck: String,
}

#[derive(Subcommand)]
enum Command {
    /// Generate flashcards and print them
    Generate(GenerateArgs),

    /// Generate flashcards into a deck and review them interactively
    Review(GenerateArgs),
}

/// Read all of stdin
fn read_stdin() -> std::io::Result<String> {
    let mut buf = String::new();
    std::io::Read::read_to_string(&mut std::io::stdin(), &mut buf)?;
    Ok(buf)
}

/// Check if stdin is a terminal (not piped)
fn stdin_is_tty() -> bool {
    unsafe { libc_isatty(0) != 0 }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && atty_check();
    let mut app = app::App::new(cli.config.as_deref())?;

    match cli.command {
        Command::Generate(args) => {
            commands::generate::run(&mut app, &args, &cli.format, use_color)?;
        }
        Command::Review(args) => {
            commands::review::run(&mut app, &args, use_color)?;
        }
    }

    Ok(())
}

/// Check if stdout is a terminal (for color support)
fn atty_check() -> bool {
    unsafe { libc_isatty(1) != 0 }
}

extern "C" {
    #[link_name = "isatty"]
    fn libc_isatty(fd: i32) -> i32;
}
