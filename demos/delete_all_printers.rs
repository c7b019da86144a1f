//! Deletes every printer on a Jamf Pro server.
//!
//! Usage: `cargo run --example delete_all_printers -- clientconfig.json`

use jamfpro::classic::resources::Printer;
use jamfpro::classic::ClassicResource;
use jamfpro::{HttpClient, JamfConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "clientconfig.json".to_string());
    let config = JamfConfig::from_file(&config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level().as_filter()))
        .init();

    let client = HttpClient::new(&config)?;

    let printers = Printer::list(&client).await?;
    println!("Printers fetched. Starting deletion process:");

    for printer in &printers.printers {
        println!("deleting printer ID: {}, Name: {}", printer.id, printer.name);

        // One failure should not stop the sweep.
        if let Err(e) = Printer::delete_by_id(&client, printer.id).await {
            tracing::error!(id = printer.id, error = %e, "failed to delete printer");
            continue;
        }

        println!("printer ID {} deleted successfully.", printer.id);
    }

    println!("Printer deletion process completed.");
    Ok(())
}
