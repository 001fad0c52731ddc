use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Submit a new achievement. Fields not given as flags are prompted for.
    Upload {
        #[arg(long)]
        full_name: Option<String>,

        #[arg(long)]
        registration_number: Option<String>,

        #[arg(long)]
        mobile_number: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        professor_name: Option<String>,

        #[arg(long)]
        professor_email: Option<String>,

        /// Path to the user's photo
        #[arg(long)]
        image: Option<PathBuf>,

        /// Path to the certificate (PDF or image)
        #[arg(long)]
        certificate: Option<PathBuf>,

        /// Read the record back after inserting it and print its details
        #[arg(long)]
        verify: bool,
    },

    /// Print a stored achievement's details
    Show {
        id: String,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write an achievement's image and certificate into a directory
    Export {
        id: String,

        output_dir: PathBuf,

        /// Include the record id in file names so records sharing a
        /// registration number do not overwrite each other
        #[arg(long)]
        unique_names: bool,
    },

    /// List stored achievements
    List {
        #[arg(short, long)]
        category: Option<String>,

        #[arg(long)]
        professor_email: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Commands {
    /// Whether the command only reads from the store.
    pub fn is_read_only(&self) -> bool {
        !matches!(self, Commands::Upload { .. })
    }
}
