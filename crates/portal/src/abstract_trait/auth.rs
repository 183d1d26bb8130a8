use async_trait::async_trait;
use shared::{
    domain::{
        requests::{
            ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
            ResetPasswordRequest,
        },
        responses::{LoginResponse, MessageResponse},
    },
    errors::ClientError,
};
use std::sync::Arc;

pub type DynAuthService = Arc<dyn AuthServiceTrait + Send + Sync>;

#[async_trait]
pub trait AuthServiceTrait {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ClientError>;
    async fn register(&self, req: &RegisterRequest) -> Result<MessageResponse, ClientError>;
    async fn verify_email(&self, token: &str) -> Result<MessageResponse, ClientError>;
    async fn forgot_password(
        &self,
        req: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ClientError>;
    async fn verify_otp(&self, otp: &str) -> Result<MessageResponse, ClientError>;
    async fn reset_password(
        &self,
        req: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ClientError>;
    async fn change_password(
        &self,
        req: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ClientError>;
}
