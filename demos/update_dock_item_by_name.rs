//! Updates a dock item addressed by its current name.
//!
//! Usage: `cargo run --example update_dock_item_by_name -- clientconfig.json Safari`

use jamfpro::classic::codec::to_xml_pretty;
use jamfpro::classic::resources::DockItem;
use jamfpro::classic::ClassicResource;
use jamfpro::{HttpClient, JamfConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "clientconfig.json".to_string());
    let current_name = args.next().unwrap_or_else(|| "Safari".to_string());

    let config = JamfConfig::from_file(&config_path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level().as_filter()))
        .init();

    let client = HttpClient::new(&config)?;

    let dock_item = DockItem {
        name: Some("Updated Safari".to_string()),
        item_type: Some("App".to_string()),
        path: Some("file://localhost/Applications/Safari.app/".to_string()),
        contents: Some("Updated Contents".to_string()),
        ..Default::default()
    };

    let updated = DockItem::update_by_name(&client, &current_name, &dock_item).await?;

    println!(
        "Updated Dock Item:\n{}",
        to_xml_pretty(DockItem::ROOT, &updated)?
    );
    Ok(())
}
