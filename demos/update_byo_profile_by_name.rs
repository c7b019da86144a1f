//! Updates a personal device (BYO) profile addressed by name.
//!
//! Usage: `cargo run --example update_byo_profile_by_name -- clientconfig.json "Personal Device Profile"`

use jamfpro::classic::codec::to_xml_pretty;
use jamfpro::classic::resources::{ByoProfile, ByoProfileGeneral};
use jamfpro::classic::ClassicResource;
use jamfpro::{HttpClient, JamfConfig, SiteRef};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "clientconfig.json".to_string());
    let profile_name = args
        .next()
        .unwrap_or_else(|| "Personal Device Profile".to_string());

    let config = JamfConfig::from_file(&config_path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level().as_filter()))
        .init();

    let client = HttpClient::new(&config)?;

    let profile = ByoProfile {
        general: Some(ByoProfileGeneral {
            name: Some(profile_name.clone()),
            site: Some(SiteRef::none()),
            enabled: Some(true),
            description: Some("Used for Android or iOS BYO device enrollments".to_string()),
            ..Default::default()
        }),
    };

    println!("XML Request:\n{}", to_xml_pretty(ByoProfile::ROOT, &profile)?);

    let updated = ByoProfile::update_by_name(&client, &profile_name, &profile).await?;

    println!(
        "Updated BYO Profile:\n{}",
        to_xml_pretty(ByoProfile::ROOT, &updated)?
    );
    Ok(())
}
