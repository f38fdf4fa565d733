//! # plants
//!
//! Command-line front end for the plant catalog. Each invocation starts a
//! [`PlantSystem`] against the configured service, waits for the initial load,
//! runs one command and shuts the system down.

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{AddArgs, Cli, Commands};
use plant_catalog::collection::CollectionSnapshot;
use plant_catalog::lifecycle::{setup_tracing, PlantSystem};
use plant_catalog::model::{DraftField, PlantRecord};
use plant_catalog::service::{HttpPlantService, ServiceConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();

    let cli = Cli::parse();

    let mut config = ServiceConfig::new(&cli.base_url);
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let service = HttpPlantService::new(&config).context("Invalid service configuration")?;
    info!(url = %service.plants_url(), "Using plants service");

    let system = PlantSystem::new(Arc::new(service));
    let outcome = run(&system, cli.command).await;

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    outcome
}

async fn run(system: &PlantSystem, command: Commands) -> Result<()> {
    let loaded = system.collection.settled().await?;
    if let Some(message) = &loaded.error {
        eprintln!("{}", message);
        eprintln!("Is the service running at the configured --base-url? Run the command again to retry.");
        bail!("could not load plants");
    }

    match command {
        Commands::List { search } => {
            if let Some(term) = search {
                system.collection.set_search(term).await?;
            }
            let visible = system.collection.visible().await?;
            print_plants(&visible, &loaded);
        }
        Commands::Add(AddArgs { name, image, price }) => {
            system.form.update_field(DraftField::Name, name).await?;
            system.form.update_field(DraftField::Image, image).await?;
            system.form.update_field(DraftField::Price, price).await?;

            if !system.form.validate().await? {
                let form = system.form.snapshot().await?;
                bail!(form.error.unwrap_or_else(|| "Invalid plant".to_string()));
            }
            match system.form.submit().await {
                Ok(record) => println!("Added {}", describe(&record)),
                Err(e) => {
                    let form = system.form.snapshot().await?;
                    if let Some(message) = form.error {
                        eprintln!("{}", message);
                    }
                    return Err(e.into());
                }
            }
        }
        Commands::Remove { id } => {
            if let Err(e) = system.collection.delete(id.as_str()).await {
                let snapshot = system.collection.snapshot().await?;
                if let Some(notice) = snapshot.notice {
                    eprintln!("{}", notice);
                }
                return Err(e.into());
            }
            println!("Removed plant {}", id);
        }
    }
    Ok(())
}

fn print_plants(visible: &[PlantRecord], loaded: &CollectionSnapshot) {
    if visible.is_empty() {
        println!("No plants found.");
        return;
    }
    for record in visible {
        println!("{}", describe(record));
    }
    if visible.len() < loaded.plants.len() {
        println!("({} of {} plants)", visible.len(), loaded.plants.len());
    }
}

fn describe(record: &PlantRecord) -> String {
    format!(
        "[{}] {} - ${:.2} ({})",
        record.id, record.name, record.price, record.image
    )
}
