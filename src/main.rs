use anyhow::{Context, Result};
use log::info;
use pantry::config::PantryConfig;
use pantry::receipt_integration::{load_inventory, load_receipt_text, process_receipt_text};
use std::env;

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(receipt_path) = args.get(1) else {
        let program = args.first().map(String::as_str).unwrap_or("pantry");
        eprintln!("Usage: {} <receipt.txt> [inventory.json]", program);
        std::process::exit(2);
    };

    let config = PantryConfig::from_env().context("Failed to read pantry configuration")?;
    info!("Starting pantry receipt scan with {:?}", config);

    let text = load_receipt_text(receipt_path)
        .with_context(|| format!("Failed to read receipt {}", receipt_path))?;

    let inventory = match args.get(2) {
        Some(path) => load_inventory(path)
            .with_context(|| format!("Failed to load inventory {}", path))?,
        None => Vec::new(),
    };

    let report = process_receipt_text(&text, &inventory, &config);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
