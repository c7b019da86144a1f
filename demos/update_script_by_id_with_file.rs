//! Replaces a script's contents with the contents of a local file.
//!
//! Usage: `cargo run --example update_script_by_id_with_file -- clientconfig.json 3 scriptfile.sh`

use jamfpro::classic::codec::to_xml_pretty;
use jamfpro::classic::resources::Script;
use jamfpro::classic::ClassicResource;
use jamfpro::{HttpClient, JamfConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "clientconfig.json".to_string());
    let script_id: i64 = args.next().unwrap_or_else(|| "3".to_string()).parse()?;
    let script_file = args.next().unwrap_or_else(|| "scriptfile.sh".to_string());

    let config = JamfConfig::from_file(&config_path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level().as_filter()))
        .init();

    let client = HttpClient::new(&config)?;

    let script = Script {
        id: Some(script_id),
        name: Some("Updated Sample Script".to_string()),
        category: Some("None".to_string()),
        info: Some("Updated Script information".to_string()),
        notes: Some("Updated Sample Script".to_string()),
        priority: Some("After".to_string()),
        os_requirements: Some("string".to_string()),
        ..Default::default()
    }
    .with_contents_from_file(&script_file)?;

    let updated = Script::update_by_id(&client, script_id, &script).await?;

    println!(
        "Updated Script Details:\n{}",
        to_xml_pretty(Script::ROOT, &updated)?
    );
    Ok(())
}
