use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "dinner",
    about = "Running dinner team builder",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a dinner.toml with the default team size and courses
    Init {
        /// Directory to write dinner.toml into
        #[arg(short, long, default_value = ".")]
        path: String,
        /// Overwrite an existing dinner.toml
        #[arg(long)]
        force: bool,
    },
    /// Partition participants into teams.
    ///
    /// Participants are read from a JSON array of records with a
    /// `number`, an optional `name`, and optional `seats`. Participants
    /// that do not fill a complete team are listed as not assigned.
    Teams {
        /// Participant list (JSON)
        #[arg(short, long)]
        participants: String,
        /// dinner.toml to read; defaults apply when omitted
        #[arg(short, long)]
        config: Option<String>,
        /// Seed for a reproducible shuffle
        #[arg(short, long)]
        seed: Option<u64>,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dinner=info".parse()?)
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force } => commands::init::init(&path, force),
        Commands::Teams {
            participants,
            config,
            seed,
            format,
        } => commands::teams::teams(&participants, config.as_deref(), seed, &format),
    }
}
