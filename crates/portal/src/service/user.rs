use crate::{
    abstract_trait::{gateway::DynHttpGateway, user::UserServiceTrait},
    gateway::ApiRequest,
    service::{decode, decode_message},
};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::{CreateUserRequest, FindAllUsers},
        responses::{MessageResponse, UserList, UserResponse},
    },
    errors::ClientError,
    model::RoleUpdate,
    utils::validate_request,
};
use tracing::info;

#[derive(Clone)]
pub struct UserService {
    gateway: DynHttpGateway,
}

impl UserService {
    pub fn new(gateway: DynHttpGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn find_all(&self, req: &FindAllUsers) -> Result<UserList, ClientError> {
        info!("Retrieving users (role: {}, limit: {})", req.role.as_str(), req.limit);

        let body = self
            .gateway
            .send(ApiRequest::get("/user/get").queries(req.query()))
            .await?;
        let list: UserList = decode(body)?;

        info!("Fetched {} of {} users", list.users.len(), list.total_count);
        Ok(list)
    }

    async fn find_by_id(&self, id: i64) -> Result<UserResponse, ClientError> {
        let body = self
            .gateway
            .send(ApiRequest::get(format!("/user/get/{id}")))
            .await?;
        decode(body)
    }

    async fn create_user(&self, req: &CreateUserRequest) -> Result<MessageResponse, ClientError> {
        validate_request(req)?;
        info!("Creating {} user {}", req.role, req.email);

        let request = ApiRequest::put("/user/post").json(req)?;
        decode_message(self.gateway.send(request).await?)
    }

    async fn delete_user(&self, id: i64) -> Result<MessageResponse, ClientError> {
        info!("Deleting user {id}");
        decode_message(
            self.gateway
                .send(ApiRequest::delete(format!("/user/delete/{id}")))
                .await?,
        )
    }

    async fn update_role(
        &self,
        id: i64,
        role: RoleUpdate,
    ) -> Result<MessageResponse, ClientError> {
        info!("Changing role of user {id} to {role}");

        let request = ApiRequest::patch(format!("/user/update/role/{id}")).query("role", role);
        decode_message(self.gateway.send(request).await?)
    }
}
