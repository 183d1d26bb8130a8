use async_trait::async_trait;
use shared::{
    domain::{
        requests::UpdateProfileRequest,
        responses::{MessageResponse, UserProfile},
    },
    errors::ClientError,
};
use std::sync::Arc;

pub type DynProfileService = Arc<dyn ProfileServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProfileServiceTrait {
    async fn get_profile(&self) -> Result<UserProfile, ClientError>;
    async fn update_profile(
        &self,
        req: &UpdateProfileRequest,
    ) -> Result<MessageResponse, ClientError>;
}
