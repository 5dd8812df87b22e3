//! Service implementations for Slack API endpoints.
//!
//! Each service module binds one endpoint group to the shared
//! [`ApiClient`](crate::client::ApiClient).

pub mod auth_service;
pub mod dialog;
pub mod messages;
pub mod usergroups;
pub mod views;

pub use auth_service::AuthService;
pub use dialog::DialogService;
pub use messages::MessagesService;
pub use usergroups::UsergroupsService;
pub use views::ViewsService;
