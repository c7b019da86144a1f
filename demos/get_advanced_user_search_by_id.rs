//! Fetches an advanced user search and prints it as XML.
//!
//! Usage: `cargo run --example get_advanced_user_search_by_id -- clientconfig.json 1`

use jamfpro::classic::codec::to_xml_pretty;
use jamfpro::classic::resources::AdvancedUserSearch;
use jamfpro::classic::ClassicResource;
use jamfpro::{HttpClient, JamfConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "clientconfig.json".to_string());
    let search_id: i64 = args.next().unwrap_or_else(|| "1".to_string()).parse()?;

    let config = JamfConfig::from_file(&config_path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level().as_filter()))
        .init();

    let client = HttpClient::new(&config)?;

    let search = AdvancedUserSearch::get_by_id(&client, search_id).await?;

    println!(
        "Fetched Advanced User Search:\n{}",
        to_xml_pretty(AdvancedUserSearch::ROOT, &search)?
    );
    Ok(())
}
