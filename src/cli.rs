use clap::{Args, Parser, Subcommand};
use plant_catalog::service::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "plants")]
#[command(about = "A CLI for browsing and editing the plants catalog")]
pub struct Cli {
    /// Root URL of the plants service
    #[arg(long, env = "PLANTS_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds (none by default)
    #[arg(long, env = "PLANTS_API_TIMEOUT")]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List plants, optionally filtered by name
    List {
        /// Case-insensitive name filter
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a new plant
    Add(AddArgs),
    /// Remove a plant
    Remove {
        /// Id of the plant to remove
        #[arg(long)]
        id: String,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Plant name
    #[arg(short = 'n', long)]
    pub name: String,
    /// Image URL
    #[arg(short = 'i', long)]
    pub image: String,
    /// Unit price; validated by the form, so any text is accepted here
    #[arg(short = 'p', long)]
    pub price: String,
}
