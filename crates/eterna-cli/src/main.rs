use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "eterna", version, about = "Eterna Egypt: mind games, meditation and journal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a mini-game
    Play {
        /// Game to play
        #[arg(value_enum)]
        game: commands::play::PlayGame,
        /// Fixed shuffle seed (overrides games.seed in config)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show high scores and ranks
    Scores,
    /// Guided meditations
    Meditation {
        #[command(subcommand)]
        action: commands::meditation::MeditationAction,
    },
    /// Mind-training exercises
    Mind {
        #[command(subcommand)]
        action: commands::mind::MindAction,
    },
    /// Reflection journal
    Journal {
        #[command(subcommand)]
        action: commands::journal::JournalAction,
    },
    /// First-run onboarding flag
    Onboarding {
        #[command(subcommand)]
        action: commands::onboarding::OnboardingAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ETERNA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Play { game, seed } => commands::play::run(game, seed),
        Commands::Scores => commands::scores::run(),
        Commands::Meditation { action } => commands::meditation::run(action),
        Commands::Mind { action } => commands::mind::run(action),
        Commands::Journal { action } => commands::journal::run(action),
        Commands::Onboarding { action } => commands::onboarding::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
