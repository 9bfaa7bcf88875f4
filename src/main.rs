use std::fs;
use std::path::Path;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reverse_diet_planner_rs::catalog::{import_csv, load_catalog, save_catalog, MenuCatalog};
use reverse_diet_planner_rs::cli::{Cli, Command};
use reverse_diet_planner_rs::error::Result;
use reverse_diet_planner_rs::interface::{collect_plan_request, display_menu_list, display_plan_set};
use reverse_diet_planner_rs::models::PlanRequest;
use reverse_diet_planner_rs::planner::{plan_alternatives, EngineConfig};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(if e.is_rejection() { 2 } else { 1 });
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan { request, json } => cmd_plan(&cli.catalog, request.as_deref(), json),
        Command::Menus => cmd_menus(&cli.catalog),
        Command::Import { input } => cmd_import(&input, &cli.catalog),
    }
}

/// Generate the three day-plan alternatives.
fn cmd_plan(catalog_path: &Path, request_path: Option<&Path>, as_json: bool) -> Result<()> {
    if !catalog_path.exists() {
        eprintln!("Menu catalog not found: {}", catalog_path.display());
        eprintln!("Import one with: reverse_diet_planner import <file.csv>");
        return Ok(());
    }

    let items = load_catalog(catalog_path)?;
    let catalog = MenuCatalog::new(items);
    info!(count = catalog.len(), "loaded menu catalog");

    if catalog.is_empty() {
        println!("The menu catalog is empty; nothing to recommend from.");
        return Ok(());
    }

    let config = EngineConfig::default();

    let request: PlanRequest = match request_path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
        None => collect_plan_request(&catalog.all_items(), config.scoring.serving_multiplier)?,
    };

    let set = plan_alternatives(&catalog, &request, &config)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&set.plans)?);
    } else {
        display_plan_set(&set);
    }

    Ok(())
}

/// List the menu catalog.
fn cmd_menus(catalog_path: &Path) -> Result<()> {
    if !catalog_path.exists() {
        eprintln!("Menu catalog not found: {}", catalog_path.display());
        return Ok(());
    }

    let items = load_catalog(catalog_path)?;
    let catalog = MenuCatalog::new(items);
    let config = EngineConfig::default();

    display_menu_list(
        &catalog.all_items(),
        config.scoring.serving_multiplier,
        "Menu catalog",
    );
    Ok(())
}

/// Import a CSV catalog export and write it as JSON.
fn cmd_import(input: &Path, catalog_path: &Path) -> Result<()> {
    let items = import_csv(input)?;
    println!("Imported {} menus from {}", items.len(), input.display());

    save_catalog(catalog_path, &items)?;
    println!("Catalog written to {}", catalog_path.display());
    Ok(())
}
