//! Creates a Jamf Pro account that inherits its privileges from a group.
//!
//! Usage: `cargo run --example create_account_with_group_access -- clientconfig.json 195 standard-group`

use jamfpro::classic::codec::to_xml_pretty;
use jamfpro::classic::resources::{Account, AccountGroupRef, AccountGroups};
use jamfpro::classic::ClassicResource;
use jamfpro::{HttpClient, JamfConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "clientconfig.json".to_string());
    let group_id: i64 = args.next().unwrap_or_else(|| "195".to_string()).parse()?;
    let group_name = args
        .next()
        .unwrap_or_else(|| "standard-group".to_string());

    let config = JamfConfig::from_file(&config_path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level().as_filter()))
        .init();

    let client = HttpClient::new(&config)?;

    // No site: the account is created with the "None" site.
    let account = Account {
        name: Some("Barry White".to_string()),
        directory_user: Some(false),
        full_name: Some("Barry White".to_string()),
        email: Some("Barry.White@company.com".to_string()),
        email_address: Some("Barry.White@company.com".to_string()),
        enabled: Some("Enabled".to_string()),
        force_password_change: Some(true),
        access_level: Some("Group Access".to_string()),
        privilege_set: Some("Custom".to_string()),
        password: Some("this is a really secure password 390423049823409894382092348092348".to_string()),
        groups: Some(AccountGroups::from(vec![AccountGroupRef::new(
            group_id, group_name,
        )])),
        ..Default::default()
    };

    let created = Account::create(&client, &account).await?;

    println!(
        "Created Account Details:\n{}",
        to_xml_pretty(Account::ROOT, &created)?
    );
    Ok(())
}
