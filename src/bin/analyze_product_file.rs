//! Utility to analyze a product from a JSON file or a barcode lookup
//!
//! Usage:
//!   analyze_product_file <path.json>
//!   analyze_product_file --barcode <code>
//!
//! The file may hold a full lookup response (`{"product": {...}}`) or a bare product.

use std::path::Path;

use foodscan::config::Config;
use foodscan::lookup::{decode_product, ProductClient};
use foodscan::models::ProductRecord;
use foodscan::tools::analysis::ProductReport;

fn read_product(path: &Path) -> Result<ProductRecord, Box<dyn std::error::Error>> {
    let body = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&body)?;

    if value.get("product").is_some() || value.get("status").is_some() {
        let code = value.get("code").and_then(|c| c.as_str()).unwrap_or("unknown");
        return Ok(decode_product(code, &body)?);
    }
    Ok(serde_json::from_value(value)?)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let record = match args.as_slice() {
        [flag, barcode] if flag == "--barcode" => {
            let client = ProductClient::new(&Config::from_env())?;
            client.fetch_product(barcode).await?
        }
        [path] => read_product(Path::new(path))?,
        _ => {
            eprintln!("Usage: analyze_product_file <path.json> | --barcode <code>");
            std::process::exit(2);
        }
    };

    let report = ProductReport::build(&record);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
