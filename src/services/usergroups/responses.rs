//! Response types for usergroups service.

use crate::types::{TeamId, UserId};
use serde::{Deserialize, Serialize};

/// Payload of endpoints returning a single usergroup
#[derive(Debug, Clone, Deserialize)]
pub struct UsergroupResponse {
    /// The usergroup
    pub usergroup: Usergroup,
}

/// Payload of usergroups.list
#[derive(Debug, Clone, Deserialize)]
pub struct UsergroupsResponse {
    /// List of usergroups
    #[serde(default)]
    pub usergroups: Vec<Usergroup>,
}

/// Payload of usergroups.users.list
#[derive(Debug, Clone, Deserialize)]
pub struct UsergroupUsersResponse {
    /// User IDs in the usergroup
    #[serde(default)]
    pub users: Vec<UserId>,
}

/// Usergroup (User Group / Team) representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usergroup {
    /// Usergroup ID
    pub id: String,
    /// Team ID
    pub team_id: TeamId,
    /// Whether this is a usergroup (always true)
    #[serde(default)]
    pub is_usergroup: bool,
    /// Whether this is an external usergroup
    #[serde(default)]
    pub is_external: Option<bool>,
    /// Name of the usergroup
    pub name: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Mention handle
    pub handle: String,
    /// Auto type (`admin`, `owner`) for system groups
    #[serde(default)]
    pub auto_type: Option<String>,
    /// Created by user ID
    #[serde(default)]
    pub created_by: Option<UserId>,
    /// Updated by user ID
    #[serde(default)]
    pub updated_by: Option<UserId>,
    /// Deleted by user ID
    #[serde(default)]
    pub deleted_by: Option<UserId>,
    /// Preferences
    #[serde(default)]
    pub prefs: Option<UsergroupPrefs>,
    /// User IDs in the group (only with `include_users`)
    #[serde(default)]
    pub users: Vec<UserId>,
    /// Number of users in the group (only with `include_count`)
    #[serde(default)]
    pub user_count: Option<u32>,
    /// Date created (Unix timestamp)
    #[serde(default)]
    pub date_create: i64,
    /// Date updated (Unix timestamp)
    #[serde(default)]
    pub date_update: i64,
    /// Date deleted (Unix timestamp, 0 when active)
    #[serde(default)]
    pub date_delete: i64,
}

impl Usergroup {
    /// Check if the usergroup is disabled
    pub fn is_disabled(&self) -> bool {
        self.date_delete != 0
    }
}

/// Usergroup preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsergroupPrefs {
    /// Default channel IDs
    #[serde(default)]
    pub channels: Vec<String>,
    /// Default private group IDs
    #[serde(default)]
    pub groups: Vec<String>,
}
