//! Messages service for Slack API.
//!
//! Posts, updates, schedules and deletes messages (`chat.*`).

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
