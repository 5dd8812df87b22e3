//! Usergroups service for Slack API.
//!
//! Manages user groups and their membership.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
