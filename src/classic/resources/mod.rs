//! Classic API resource implementations.
//!
//! Each resource pairs a detail shape (the single record) with a list shape
//! (what the collection endpoint returns) and a path table. All of them get
//! their accessors from [`ClassicResource`](crate::classic::ClassicResource).
//!
//! # Available Resources
//!
//! | Type | Collection | Addressed by |
//! |---|---|---|
//! | [`Account`] | `accounts` | `userid`, `username` |
//! | [`AdvancedUserSearch`] | `advancedusersearches` | `id`, `name` |
//! | [`ByoProfile`] | `byoprofiles` | `id`, `name` |
//! | [`ComputerInvitation`] | `computerinvitations` | `id`, `invitation` |
//! | [`DirectoryBinding`] | `directorybindings` | `id`, `name` |
//! | [`DockItem`] | `dockitems` | `id`, `name` |
//! | [`MacOsConfigurationProfile`] | `osxconfigurationprofiles` | `id`, `name` |
//! | [`Printer`] | `printers` | `id`, `name` |
//! | [`Script`] | `scripts` | `id`, `name` |
//!
//! ```rust,ignore
//! use jamfpro::classic::ClassicResource;
//! use jamfpro::classic::resources::{Printer, Script};
//!
//! let printer = Printer::get_by_name(&client, "Lobby").await?;
//! let scripts = Script::list(&client).await?;
//! ```

mod accounts;
mod advanced_user_searches;
mod byo_profiles;
mod computer_invitations;
mod directory_bindings;
mod dock_items;
mod macos_configuration_profiles;
mod printers;
mod scripts;

pub use accounts::{
    Account, AccountGroupList, AccountGroupRef, AccountGroups, AccountPrivileges, AccountSummary,
    AccountUserList, AccountsList, LdapServerRef, PrivilegeList,
};
pub use advanced_user_searches::{
    AdvancedUserSearch, AdvancedUserSearchSummary, AdvancedUserSearchesList, DisplayField,
    DisplayFields, SearchCriteria, SearchCriterion, SearchUser, SearchUsers,
};
pub use byo_profiles::{ByoProfile, ByoProfileGeneral, ByoProfileSummary, ByoProfilesList};
pub use computer_invitations::{
    ComputerInvitation, ComputerInvitationSummary, ComputerInvitationsList,
};
pub use directory_bindings::{DirectoryBinding, DirectoryBindingSummary, DirectoryBindingsList};
pub use dock_items::{DockItem, DockItemSummary, DockItemsList};
pub use macos_configuration_profiles::{
    MacOsConfigurationProfile, MacOsConfigurationProfileSummary, MacOsConfigurationProfilesList,
    ProfileGeneral, ProfileScope,
};
pub use printers::{Printer, PrinterSummary, PrintersList};
pub use scripts::{Script, ScriptParameters, ScriptSummary, ScriptsList};
