use crate::{
    abstract_trait::{gateway::DynHttpGateway, profile::ProfileServiceTrait},
    gateway::ApiRequest,
    service::{decode, decode_message},
};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::UpdateProfileRequest,
        responses::{MessageResponse, UserProfile},
    },
    errors::ClientError,
    utils::validate_request,
};
use tracing::debug;

#[derive(Clone)]
pub struct ProfileService {
    gateway: DynHttpGateway,
}

impl ProfileService {
    pub fn new(gateway: DynHttpGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ProfileServiceTrait for ProfileService {
    async fn get_profile(&self) -> Result<UserProfile, ClientError> {
        decode(self.gateway.send(ApiRequest::get("/profile/get")).await?)
    }

    async fn update_profile(
        &self,
        req: &UpdateProfileRequest,
    ) -> Result<MessageResponse, ClientError> {
        validate_request(req)?;

        let parts = req.form_parts();
        debug!("Updating profile fields: {:?}", parts.iter().map(|(k, _)| k).collect::<Vec<_>>());

        let request = ApiRequest::put("/profile/update").multipart(parts);
        decode_message(self.gateway.send(request).await?)
    }
}
