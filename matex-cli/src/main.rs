//! MATEX CLI
//!
//! Command-line interface for the MATEX materials API: run the server, or
//! query the Materials Project catalog directly from the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use matex_api::{start_server, ApiConfig};
use matex_core::constants::DEFAULT_SEARCH_LIMIT;
use matex_core::types::ProjectedMaterial;
use matex_mp::{CatalogConfig, MaterialsCatalog};

/// MATEX - Materials Explorer API
#[derive(Parser)]
#[command(name = "matex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Materials Project API key
    #[arg(long, env = "MP_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "5000")]
        port: u16,
    },

    /// Fetch the popular-materials list
    Popular,

    /// Search materials by formula or element list
    Search {
        /// Formula (e.g. "Fe2O3") or elements (e.g. "Ga,As")
        query: String,
        /// Maximum number of results
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },

    /// Look up one material by identifier
    Get {
        /// Material identifier, e.g. "mp-149"
        material_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "matex=debug,info"
    } else {
        "matex=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port } => cmd_serve(port).await,
        Commands::Popular => cmd_popular(catalog(cli.api_key)?).await,
        Commands::Search { query, limit } => cmd_search(catalog(cli.api_key)?, &query, limit).await,
        Commands::Get { material_id } => cmd_get(catalog(cli.api_key)?, &material_id).await,
    }
}

fn catalog(api_key: Option<String>) -> Result<MaterialsCatalog> {
    let api_key = api_key.context("No API key: pass --api-key or set MP_API_KEY")?;
    Ok(MaterialsCatalog::with_config(CatalogConfig::with_api_key(
        api_key,
    )))
}

/// Run the API server
async fn cmd_serve(port: u16) -> Result<()> {
    println!(
        "{} {}",
        "🚀 Starting Materials API server on port".cyan().bold(),
        port
    );

    let config = ApiConfig::from_env();
    if config.mp_api_key.is_none() {
        println!(
            "{}",
            "⚠️  MP_API_KEY not set; upstream requests will fail".yellow()
        );
    }

    start_server(port).await.context("Server failed")
}

/// Fetch and print the popular-materials list
async fn cmd_popular(catalog: MaterialsCatalog) -> Result<()> {
    println!("{}", "🔍 Fetching popular materials...".cyan().bold());

    let popular = catalog
        .popular()
        .await
        .context("Failed to fetch popular materials")?;

    println!(
        "\n{} {} materials",
        "✅ Fetched".green().bold(),
        popular.materials.len()
    );
    for material in &popular.materials {
        print_material(material);
    }

    Ok(())
}

/// Search and print results
async fn cmd_search(catalog: MaterialsCatalog, query: &str, limit: usize) -> Result<()> {
    println!("{} {}", "🔍 Searching:".cyan().bold(), query);

    let materials = catalog
        .search(query, limit)
        .await
        .context("Search failed")?;

    if materials.is_empty() {
        println!("{}", "No results.".yellow());
        return Ok(());
    }

    println!("\n{} {} results", "✅ Found".green().bold(), materials.len());
    for material in &materials {
        print_material(material);
    }

    Ok(())
}

/// Look up and print one material
async fn cmd_get(catalog: MaterialsCatalog, material_id: &str) -> Result<()> {
    println!("{} {}", "🔍 Looking up:".cyan().bold(), material_id);

    let material = catalog
        .get(material_id)
        .await
        .context("Failed to fetch material")?;

    println!();
    print_material(&material);
    println!(
        "\n{}",
        serde_json::to_string_pretty(&material).context("Failed to render JSON")?
    );

    Ok(())
}

fn print_material(material: &ProjectedMaterial) {
    let id = material.material_id.as_deref().unwrap_or("?");
    let formula = material.formula_pretty.as_deref().unwrap_or("?");
    let system = material.crystal_system.as_deref().unwrap_or("-");

    print!(
        "   {} {:<12} {:<10} {}",
        "•".dimmed(),
        id,
        formula.bold(),
        system.dimmed()
    );
    if let Some(gap) = material.band_gap {
        print!("  {} {:.2} eV", "gap:".dimmed(), gap);
    }
    if material.is_stable == Some(true) {
        print!("  {}", "stable".green());
    }
    println!();
}
