//! Exports the payloads of every macOS configuration profile as
//! `.mobileconfig` files.
//!
//! Usage: `cargo run --example export_macos_configuration_profiles -- clientconfig.json ./profiles`

use std::path::PathBuf;

use jamfpro::classic::resources::MacOsConfigurationProfile;
use jamfpro::classic::ClassicResource;
use jamfpro::{HttpClient, JamfConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "clientconfig.json".to_string());
    let export_dir = PathBuf::from(args.next().unwrap_or_else(|| "profiles".to_string()));

    let config = JamfConfig::from_file(&config_path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level().as_filter()))
        .init();

    let client = HttpClient::new(&config)?;

    let profiles = MacOsConfigurationProfile::list(&client).await?;

    println!("Found the following macOS Configuration Profiles:");
    for summary in &profiles.profiles {
        println!("ID: {}, Name: {}", summary.id, summary.name);
    }

    std::fs::create_dir_all(&export_dir)?;

    for summary in &profiles.profiles {
        let profile = match MacOsConfigurationProfile::get_by_id(&client, summary.id).await {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(id = summary.id, error = %e, "failed to fetch profile");
                continue;
            }
        };

        let Some(payloads) = profile.payloads() else {
            tracing::warn!(id = summary.id, "profile has no payloads");
            continue;
        };

        let filename = export_dir.join(format!("{}.mobileconfig", summary.name));
        if let Err(e) = std::fs::write(&filename, payloads) {
            tracing::warn!(id = summary.id, error = %e, "failed to write profile");
            continue;
        }

        println!(
            "Exported profile with ID {} to {}",
            summary.id,
            filename.display()
        );
    }

    println!("Export completed!");
    Ok(())
}
