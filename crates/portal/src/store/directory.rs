use crate::{
    abstract_trait::{profile::DynProfileService, user::DynUserService},
    store::{AlertStore, Mutation, Resource, Severity},
};
use shared::{
    domain::{
        requests::{CreateUserRequest, FindAllUsers, UpdateProfileRequest},
        responses::{MessageResponse, UserList, UserProfile, UserResponse},
    },
    errors::ClientError,
    model::{RoleFilter, RoleUpdate},
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info, warn};

pub const NO_CHANGES_MESSAGE: &str = "No any changes made to save";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryState {
    pub user_list: Resource<UserList>,
    /// Filter of the last list request, reused by `refresh_users`.
    pub user_list_filter: Option<RoleFilter>,
    pub user: Resource<UserResponse>,
    pub user_create: Mutation,
    pub user_update: Mutation,
    pub user_delete: Mutation,
    pub user_details: Resource<UserProfile>,
    pub user_details_update: Mutation,
    pub user_details_by_id: Resource<UserResponse>,
}

/// Cached user administration state. Writes are applied to the cache only
/// after the backend confirms them.
pub struct UserDirectoryStore {
    users: DynUserService,
    profiles: DynProfileService,
    alerts: Arc<AlertStore>,
    list_limit: u32,
    state: watch::Sender<DirectoryState>,
}

impl UserDirectoryStore {
    pub fn new(
        users: DynUserService,
        profiles: DynProfileService,
        alerts: Arc<AlertStore>,
        list_limit: u32,
    ) -> Self {
        let (state, _) = watch::channel(DirectoryState::default());
        Self {
            users,
            profiles,
            alerts,
            list_limit,
            state,
        }
    }

    pub fn snapshot(&self) -> DirectoryState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DirectoryState> {
        self.state.subscribe()
    }

    fn update(&self, f: impl FnOnce(&mut DirectoryState)) {
        self.state.send_modify(f);
    }

    pub async fn fetch_users(&self, role: RoleFilter) -> Result<UserList, ClientError> {
        self.update(|s| {
            s.user_list.start();
            s.user_list_filter = Some(role);
        });

        match self
            .users
            .find_all(&FindAllUsers::new(role, self.list_limit))
            .await
        {
            Ok(list) => {
                self.update(|s| s.user_list.succeed(list.clone()));
                Ok(list)
            }
            Err(e) => {
                error!("Failed to fetch users: {e}");
                self.update(|s| s.user_list.fail(e.user_message()));
                Err(e)
            }
        }
    }

    /// Refetches with the last filter used, `ALL` if none.
    pub async fn refresh_users(&self) -> Result<UserList, ClientError> {
        let role = self.state.borrow().user_list_filter.unwrap_or_default();
        self.fetch_users(role).await
    }

    pub async fn fetch_user(&self, id: i64) -> Result<UserResponse, ClientError> {
        self.update(|s| s.user.start());

        match self.users.find_by_id(id).await {
            Ok(user) => {
                self.update(|s| s.user.succeed(user.clone()));
                Ok(user)
            }
            Err(e) => {
                self.update(|s| s.user.fail(e.user_message()));
                Err(e)
            }
        }
    }

    pub async fn fetch_user_details_by_id(&self, id: i64) -> Result<UserResponse, ClientError> {
        self.update(|s| s.user_details_by_id.start());

        match self.users.find_by_id(id).await {
            Ok(user) => {
                self.update(|s| s.user_details_by_id.succeed(user.clone()));
                Ok(user)
            }
            Err(e) => {
                self.update(|s| s.user_details_by_id.fail(e.user_message()));
                Err(e)
            }
        }
    }

    pub async fn create_user(
        &self,
        payload: &CreateUserRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.update(|s| s.user_create.start());

        match self.users.create_user(payload).await {
            Ok(response) => {
                self.update(|s| {
                    s.user_create.succeed();
                    s.user_list.stale = true;
                });
                self.alerts.success("User created successfully");
                Ok(response)
            }
            Err(e) => {
                self.update(|s| s.user_create.fail(e.user_message()));
                self.alerts.error("Failed to create user");
                Err(e)
            }
        }
    }

    pub async fn delete_user(&self, id: i64) -> Result<MessageResponse, ClientError> {
        self.update(|s| s.user_delete.start());

        match self.users.delete_user(id).await {
            Ok(response) => {
                self.update(|s| {
                    s.user_delete.succeed();
                    if let Some(list) = s.user_list.data.as_mut() {
                        list.remove(id);
                    }
                    s.user_list.stale = true;
                });
                info!("User {id} deleted");
                Ok(response)
            }
            Err(e) => {
                self.update(|s| s.user_delete.fail(e.user_message()));
                Err(e)
            }
        }
    }

    /// Once the backend confirms, the user leaves the cached list: the listing
    /// was filtered by the role they no longer have.
    pub async fn update_user_role(&self, id: i64, role: RoleUpdate) -> Result<(), ClientError> {
        self.update(|s| s.user_update.start());

        match self.users.update_role(id, role).await {
            Ok(_) => {
                self.update(|s| {
                    s.user_update.succeed();
                    if let Some(list) = s.user_list.data.as_mut() {
                        list.remove(id);
                    }
                    s.user_list.stale = true;
                });
                self.alerts.success("User role updated successfully");
                Ok(())
            }
            Err(e) => {
                warn!("Role change for user {id} rejected: {e}");
                self.update(|s| s.user_update.fail(e.user_message()));
                self.alerts.error("Failed to update user role");
                Err(e)
            }
        }
    }

    pub async fn fetch_user_details(&self) -> Result<UserProfile, ClientError> {
        self.update(|s| s.user_details.start());

        match self.profiles.get_profile().await {
            Ok(profile) => {
                self.update(|s| s.user_details.succeed(profile.clone()));
                Ok(profile)
            }
            Err(e) => {
                self.update(|s| s.user_details.fail(e.user_message()));
                Err(e)
            }
        }
    }

    /// Sends only the changed fields. An empty change set is reported to the
    /// user and never reaches the backend.
    pub async fn update_user_details(
        &self,
        payload: &UpdateProfileRequest,
    ) -> Result<(), ClientError> {
        if payload.is_empty() {
            self.alerts.open(NO_CHANGES_MESSAGE, Severity::Info);
            return Ok(());
        }

        self.update(|s| s.user_details_update.start());

        match self.profiles.update_profile(payload).await {
            Ok(_) => {
                self.update(|s| {
                    s.user_details_update.succeed();
                    s.user_details.stale = true;
                });
                self.alerts.success("User profile updated succesfully");
                Ok(())
            }
            Err(e) => {
                self.update(|s| s.user_details_update.fail(e.user_message()));
                self.alerts.error("Failed to update user profile");
                Err(e)
            }
        }
    }
}
