use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use walloffame::{Commands, Container, ContainerConfig, DomainError, Router};

#[derive(Parser)]
#[command(name = "walloffame")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(
        short,
        long,
        global = true,
        env = "WALLOFFAME_DATA_DIR",
        default_value = "~/.walloffame"
    )]
    data_dir: String,

    /// Schema the collection lives in
    #[arg(long, global = true, env = "WALLOFFAME_DATABASE", default_value = "wall_of_fame")]
    database: String,

    /// Table holding achievement records
    #[arg(long, global = true, env = "WALLOFFAME_COLLECTION", default_value = "achievers")]
    collection: String,

    /// Largest accepted attachment, in MiB
    #[arg(long, global = true, default_value = "10")]
    max_attachment_mb: u64,

    /// Keep records in memory only (nothing is persisted)
    #[arg(long, global = true)]
    memory_storage: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<DomainError>() {
            Some(DomainError::NotFound(msg)) => eprintln!("{}", msg),
            _ => eprintln!("An error occurred: {:#}", e),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let data_dir = expand_tilde(&cli.data_dir);
    if !cli.memory_storage {
        std::fs::create_dir_all(&data_dir)?;
    }

    let config = ContainerConfig {
        data_dir,
        database: cli.database,
        collection: cli.collection,
        max_attachment_bytes: cli.max_attachment_mb.saturating_mul(1024 * 1024),
        memory_storage: cli.memory_storage,
        read_only: cli.command.is_read_only(),
    };

    let container = Container::new(config)?;
    let router = Router::new(&container);
    let output = router.route(cli.command).await?;
    println!("{}", output);

    Ok(())
}

fn expand_tilde(path: &str) -> String {
    if path == "~" || path.starts_with("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            if path == "~" {
                return home.to_string_lossy().to_string();
            }
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
