//! Walks through the computer invitation lifecycle: create, look up by
//! invitation code, list, then delete.
//!
//! Usage: `cargo run --example computer_invitations -- clientconfig.json`

use jamfpro::classic::codec::to_xml_pretty;
use jamfpro::classic::resources::ComputerInvitation;
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

    let invitation = ComputerInvitation {
        invitation_type: Some("DEFAULT".to_string()),
        expiration_date: Some("2030-12-31 23:59:59".to_string()),
        ssh_username: Some("jamf-management".to_string()),
        ssh_password: Some("change-me".to_string()),
        multiple_users_allowed: Some(true),
        create_account_if_does_not_exist: Some(true),
        hide_account: Some(true),
        lock_down_ssh: Some(false),
        keep_existing_site_membership: Some(false),
        ..Default::default()
    };

    let created = ComputerInvitation::create(&client, &invitation).await?;
    let id = created.id.unwrap_or_default();
    println!("Created computer invitation with ID {id}");

    let fetched = ComputerInvitation::get_by_id(&client, id).await?;
    println!(
        "Computer Invitation:\n{}",
        to_xml_pretty(ComputerInvitation::ROOT, &fetched)?
    );

    if let Some(code) = fetched.invitation.as_deref() {
        let by_code = ComputerInvitation::get_by_invitation(&client, code).await?;
        println!("Looked up invitation {code}: ID {:?}", by_code.id);
    }

    let invitations = ComputerInvitation::list(&client).await?;
    println!("{} invitation(s) on the server:", invitations.size);
    for summary in &invitations.computer_invitations {
        println!(
            "ID: {}, Invitation: {}",
            summary.id,
            summary.invitation.as_deref().unwrap_or("-")
        );
    }

    ComputerInvitation::delete_by_id(&client, id).await?;
    println!("Deleted computer invitation with ID {id}");

    Ok(())
}
