use async_trait::async_trait;
use shared::{
    domain::{
        requests::{CreateUserRequest, FindAllUsers},
        responses::{MessageResponse, UserList, UserResponse},
    },
    errors::ClientError,
    model::RoleUpdate,
};
use std::sync::Arc;

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserServiceTrait {
    async fn find_all(&self, req: &FindAllUsers) -> Result<UserList, ClientError>;
    async fn find_by_id(&self, id: i64) -> Result<UserResponse, ClientError>;
    async fn create_user(&self, req: &CreateUserRequest) -> Result<MessageResponse, ClientError>;
    async fn delete_user(&self, id: i64) -> Result<MessageResponse, ClientError>;
    async fn update_role(&self, id: i64, role: RoleUpdate)
    -> Result<MessageResponse, ClientError>;
}
