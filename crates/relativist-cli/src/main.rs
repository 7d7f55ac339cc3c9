// crates/relativist-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "relativist-cli")]
#[command(about = "Relativist color-perception game CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score guesses against a target color (redmean distance)
    Score(cmd::score::ScoreArgs),

    /// Convert one HSL color (rgb, hex, brightness, ink, shape)
    Color(cmd::color::ColorArgs),

    /// Glyph shape for a hue
    Shape(cmd::shape::ShapeArgs),

    /// Deal the three context strips (near black, near white, vivid)
    Strips(cmd::strips::StripsArgs),

    /// Print the 16-slot palette for a root hue
    Palette(cmd::palette::PaletteArgs),

    /// Generate a session name for a hue and palette averages
    Name(cmd::name::NameArgs),

    /// Draw the next session from the persisted hue deck
    Next(cmd::next::NextArgs),

    /// Show the persisted hue deck
    Deck(cmd::deck::DeckArgs),

    /// Play the persisted game (show/advance/archive/reset)
    Game(cmd::game::GameArgs),

    /// Render the shareable card for a session
    Artifact(cmd::artifact::ArtifactArgs),

    /// Backup export/import of the persisted game state
    Backup(cmd::backup::BackupArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,relativist_core=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Score(args) => cmd::score::run(args),
        Commands::Color(args) => cmd::color::run(args),
        Commands::Shape(args) => cmd::shape::run(args),
        Commands::Strips(args) => cmd::strips::run(args),
        Commands::Palette(args) => cmd::palette::run(args),
        Commands::Name(args) => cmd::name::run(args),
        Commands::Next(args) => cmd::next::run(args),
        Commands::Deck(args) => cmd::deck::run(args),
        Commands::Game(args) => cmd::game::run(args),
        Commands::Artifact(args) => cmd::artifact::run(args),
        Commands::Backup(args) => cmd::backup::run(args),
    }
}
