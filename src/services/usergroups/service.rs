//! Usergroups service implementation.

use super::*;
use crate::args::ToArgs;
use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::UserId;
use async_trait::async_trait;
use tracing::instrument;

/// Trait for usergroups service operations
#[async_trait]
pub trait UsergroupsServiceTrait: Send + Sync {
    /// Create a usergroup
    async fn create(&self, request: CreateUsergroupRequest) -> SlackResult<Usergroup>;

    /// Disable a usergroup
    async fn disable(&self, request: DisableUsergroupRequest) -> SlackResult<Usergroup>;

    /// Enable a usergroup
    async fn enable(&self, request: EnableUsergroupRequest) -> SlackResult<Usergroup>;

    /// List all usergroups
    async fn list(&self, request: ListUsergroupsRequest) -> SlackResult<Vec<Usergroup>>;

    /// Update a usergroup
    async fn update(&self, request: UpdateUsergroupRequest) -> SlackResult<Usergroup>;

    /// List users in a usergroup
    async fn users_list(&self, request: UsersListRequest) -> SlackResult<Vec<UserId>>;

    /// Replace the users in a usergroup
    async fn users_update(&self, request: UsersUpdateRequest) -> SlackResult<Usergroup>;
}

/// Usergroups service implementation
#[derive(Debug, Clone)]
pub struct UsergroupsService {
    api: ApiClient,
}

impl UsergroupsService {
    /// Create a new usergroups service
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UsergroupsServiceTrait for UsergroupsService {
    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create(&self, request: CreateUsergroupRequest) -> SlackResult<Usergroup> {
        let response: UsergroupResponse = self
            .api
            .post("usergroups.create", &request.to_args()?)
            .await?;
        Ok(response.usergroup)
    }

    #[instrument(skip(self, request), fields(usergroup = %request.usergroup))]
    async fn disable(&self, request: DisableUsergroupRequest) -> SlackResult<Usergroup> {
        let response: UsergroupResponse = self
            .api
            .post("usergroups.disable", &request.to_args()?)
            .await?;
        Ok(response.usergroup)
    }

    #[instrument(skip(self, request), fields(usergroup = %request.usergroup))]
    async fn enable(&self, request: EnableUsergroupRequest) -> SlackResult<Usergroup> {
        let response: UsergroupResponse = self
            .api
            .post("usergroups.enable", &request.to_args()?)
            .await?;
        Ok(response.usergroup)
    }

    #[instrument(skip(self, request))]
    async fn list(&self, request: ListUsergroupsRequest) -> SlackResult<Vec<Usergroup>> {
        let response: UsergroupsResponse = self
            .api
            .get("usergroups.list", &request.to_args()?)
            .await?;
        Ok(response.usergroups)
    }

    #[instrument(skip(self, request), fields(usergroup = %request.usergroup))]
    async fn update(&self, request: UpdateUsergroupRequest) -> SlackResult<Usergroup> {
        let response: UsergroupResponse = self
            .api
            .post("usergroups.update", &request.to_args()?)
            .await?;
        Ok(response.usergroup)
    }

    #[instrument(skip(self, request), fields(usergroup = %request.usergroup))]
    async fn users_list(&self, request: UsersListRequest) -> SlackResult<Vec<UserId>> {
        let response: UsergroupUsersResponse = self
            .api
            .get("usergroups.users.list", &request.to_args()?)
            .await?;
        Ok(response.users)
    }

    #[instrument(
        skip(self, request),
        fields(usergroup = %request.usergroup, users = request.users.len())
    )]
    async fn users_update(&self, request: UsersUpdateRequest) -> SlackResult<Usergroup> {
        let response: UsergroupResponse = self
            .api
            .post("usergroups.users.update", &request.to_args()?)
            .await?;
        Ok(response.usergroup)
    }
}
