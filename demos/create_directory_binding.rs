//! Creates an Active Directory binding.
//!
//! Usage: `cargo run --example create_directory_binding -- clientconfig.json`

use jamfpro::classic::codec::to_xml_pretty;
use jamfpro::classic::resources::DirectoryBinding;
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

    let binding = DirectoryBinding {
        name: Some("New Binding".to_string()),
        priority: Some(1),
        domain: Some("example.com".to_string()),
        username: Some("user@example.com".to_string()),
        password: Some("password".to_string()),
        computer_ou: Some("CN=Computers,DC=example,DC=com".to_string()),
        binding_type: Some("Active Directory".to_string()),
        ..Default::default()
    };

    let created = DirectoryBinding::create(&client, &binding).await?;

    println!(
        "Created Directory Binding:\n{}",
        to_xml_pretty(DirectoryBinding::ROOT, &created)?
    );
    Ok(())
}
