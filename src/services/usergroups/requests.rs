//! Request types for usergroups service.

use crate::args::{Args, ToArgs};
use crate::errors::SlackResult;
use crate::types::{ChannelId, TeamId, UserId};

/// Request to create a usergroup
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUsergroupRequest {
    /// Name of the usergroup
    pub name: String,
    /// Channel IDs the usergroup uses by default
    pub channels: Option<Vec<ChannelId>>,
    /// Description of the usergroup
    pub description: Option<String>,
    /// Mention handle (alphanumeric, dashes, underscores)
    pub handle: Option<String>,
    /// Include the number of users in the response
    pub include_count: Option<bool>,
    /// Workspace to create the usergroup in (org-wide tokens)
    pub team_id: Option<TeamId>,
}

impl CreateUsergroupRequest {
    /// Create a new usergroup request
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channels: None,
            description: None,
            handle: None,
            include_count: None,
            team_id: None,
        }
    }

    /// Set the default channels
    pub fn channels(mut self, channels: Vec<ChannelId>) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the handle
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    /// Include count in response
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }

    /// Set team ID
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

impl ToArgs for CreateUsergroupRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("name", &self.name)
            .with_opt("channels", self.channels.as_ref())
            .with_opt("description", self.description.as_ref())
            .with_opt("handle", self.handle.as_ref())
            .with_opt("include_count", self.include_count)
            .with_opt("team_id", self.team_id.as_ref().map(TeamId::as_str)))
    }
}

/// Request to disable or enable a usergroup
#[derive(Debug, Clone, PartialEq)]
pub struct UsergroupStateRequest {
    /// Usergroup ID
    pub usergroup: String,
    /// Include the number of users in the response
    pub include_count: Option<bool>,
    /// Workspace the usergroup belongs to (org-wide tokens)
    pub team_id: Option<TeamId>,
}

impl UsergroupStateRequest {
    /// Create a new request for `usergroup`
    pub fn new(usergroup: impl Into<String>) -> Self {
        Self {
            usergroup: usergroup.into(),
            include_count: None,
            team_id: None,
        }
    }

    /// Include count in response
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }

    /// Set team ID
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

impl ToArgs for UsergroupStateRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("usergroup", &self.usergroup)
            .with_opt("include_count", self.include_count)
            .with_opt("team_id", self.team_id.as_ref().map(TeamId::as_str)))
    }
}

/// Request to disable a usergroup
pub type DisableUsergroupRequest = UsergroupStateRequest;

/// Request to enable a usergroup
pub type EnableUsergroupRequest = UsergroupStateRequest;

/// Request to list usergroups
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListUsergroupsRequest {
    /// Include the number of users in each usergroup
    pub include_count: Option<bool>,
    /// Include disabled usergroups
    pub include_disabled: Option<bool>,
    /// Include the list of users of each usergroup
    pub include_users: Option<bool>,
    /// Workspace to list usergroups for (org-wide tokens)
    pub team_id: Option<TeamId>,
}

impl ListUsergroupsRequest {
    /// Create a new list request
    pub fn new() -> Self {
        Self::default()
    }

    /// Include count
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }

    /// Include disabled usergroups
    pub fn include_disabled(mut self, include: bool) -> Self {
        self.include_disabled = Some(include);
        self
    }

    /// Include users
    pub fn include_users(mut self, include: bool) -> Self {
        self.include_users = Some(include);
        self
    }

    /// Set team ID
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

impl ToArgs for ListUsergroupsRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with_opt("include_count", self.include_count)
            .with_opt("include_disabled", self.include_disabled)
            .with_opt("include_users", self.include_users)
            .with_opt("team_id", self.team_id.as_ref().map(TeamId::as_str)))
    }
}

/// Request to update a usergroup
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateUsergroupRequest {
    /// Usergroup ID
    pub usergroup: String,
    /// New default channels
    pub channels: Option<Vec<ChannelId>>,
    /// New description
    pub description: Option<String>,
    /// New handle
    pub handle: Option<String>,
    /// Include the number of users in the response
    pub include_count: Option<bool>,
    /// New name
    pub name: Option<String>,
    /// Workspace the usergroup belongs to (org-wide tokens)
    pub team_id: Option<TeamId>,
}

impl UpdateUsergroupRequest {
    /// Create a new update request
    pub fn new(usergroup: impl Into<String>) -> Self {
        Self {
            usergroup: usergroup.into(),
            channels: None,
            description: None,
            handle: None,
            include_count: None,
            name: None,
            team_id: None,
        }
    }

    /// Set the default channels
    pub fn channels(mut self, channels: Vec<ChannelId>) -> Self {
        self.channels = Some(channels);
        self
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the handle
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    /// Include count in response
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }

    /// Set the name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set team ID
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

impl ToArgs for UpdateUsergroupRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("usergroup", &self.usergroup)
            .with_opt("channels", self.channels.as_ref())
            .with_opt("description", self.description.as_ref())
            .with_opt("handle", self.handle.as_ref())
            .with_opt("include_count", self.include_count)
            .with_opt("name", self.name.as_ref())
            .with_opt("team_id", self.team_id.as_ref().map(TeamId::as_str)))
    }
}

/// Request to list users in a usergroup
#[derive(Debug, Clone, PartialEq)]
pub struct UsersListRequest {
    /// Usergroup ID
    pub usergroup: String,
    /// Allow listing users of a disabled usergroup
    pub include_disabled: Option<bool>,
    /// Workspace the usergroup belongs to (org-wide tokens)
    pub team_id: Option<TeamId>,
}

impl UsersListRequest {
    /// Create a new users list request
    pub fn new(usergroup: impl Into<String>) -> Self {
        Self {
            usergroup: usergroup.into(),
            include_disabled: None,
            team_id: None,
        }
    }

    /// Include disabled
    pub fn include_disabled(mut self, include: bool) -> Self {
        self.include_disabled = Some(include);
        self
    }

    /// Set team ID
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

impl ToArgs for UsersListRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("usergroup", &self.usergroup)
            .with_opt("include_disabled", self.include_disabled)
            .with_opt("team_id", self.team_id.as_ref().map(TeamId::as_str)))
    }
}

/// Request to replace the users in a usergroup
#[derive(Debug, Clone, PartialEq)]
pub struct UsersUpdateRequest {
    /// Usergroup ID
    pub usergroup: String,
    /// Complete new member list
    pub users: Vec<UserId>,
    /// Include the number of users in the response
    pub include_count: Option<bool>,
    /// Workspace the usergroup belongs to (org-wide tokens)
    pub team_id: Option<TeamId>,
}

impl UsersUpdateRequest {
    /// Create a new users update request
    pub fn new(usergroup: impl Into<String>, users: Vec<UserId>) -> Self {
        Self {
            usergroup: usergroup.into(),
            users,
            include_count: None,
            team_id: None,
        }
    }

    /// Include count in response
    pub fn include_count(mut self, include: bool) -> Self {
        self.include_count = Some(include);
        self
    }

    /// Set team ID
    pub fn team_id(mut self, team_id: impl Into<TeamId>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }
}

impl ToArgs for UsersUpdateRequest {
    fn to_args(&self) -> SlackResult<Args> {
        Ok(Args::new()
            .with("usergroup", &self.usergroup)
            .with("users", &self.users)
            .with_opt("include_count", self.include_count)
            .with_opt("team_id", self.team_id.as_ref().map(TeamId::as_str)))
    }
}
