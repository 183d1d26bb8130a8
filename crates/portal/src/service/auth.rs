use crate::{
    abstract_trait::{auth::AuthServiceTrait, gateway::DynHttpGateway},
    gateway::ApiRequest,
    service::{decode, decode_message},
};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::{
            ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterPayload,
            RegisterRequest, ResetPasswordRequest,
        },
        responses::{LoginResponse, MessageResponse},
    },
    errors::ClientError,
    utils::validate_request,
};
use tracing::{error, info};

#[derive(Clone)]
pub struct AuthService {
    gateway: DynHttpGateway,
}

impl AuthService {
    pub fn new(gateway: DynHttpGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ClientError> {
        validate_request(req)?;
        info!("Logging in {}", req.email);

        let request = ApiRequest::post("/auth/login")
            .form(req.form_fields())
            .anonymous();

        let response: LoginResponse = decode(self.gateway.send(request).await.map_err(|e| {
            error!("Login failed for {}: {e}", req.email);
            e
        })?)?;

        info!("Logged in user {} as {}", response.id, response.role);
        Ok(response)
    }

    async fn register(&self, req: &RegisterRequest) -> Result<MessageResponse, ClientError> {
        validate_request(req)?;
        info!("Registering {}", req.email);

        let request = ApiRequest::post("/auth/register")
            .json(&RegisterPayload::from(req))?
            .anonymous();

        decode_message(self.gateway.send(request).await?)
    }

    async fn verify_email(&self, token: &str) -> Result<MessageResponse, ClientError> {
        if token.trim().is_empty() {
            return Err(ClientError::Validation(vec![
                "token: Verification token is missing".into(),
            ]));
        }

        let request = ApiRequest::get("/auth/verify")
            .query("token", token)
            .anonymous();

        decode_message(self.gateway.send(request).await?)
    }

    async fn forgot_password(
        &self,
        req: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        validate_request(req)?;
        info!("Requesting password reset for {}", req.email);

        let request = ApiRequest::get("/auth/password/forget")
            .query("email", &req.email)
            .anonymous();

        decode_message(self.gateway.send(request).await?)
    }

    async fn verify_otp(&self, otp: &str) -> Result<MessageResponse, ClientError> {
        if otp.trim().is_empty() {
            return Err(ClientError::Validation(vec!["otp: OTP is required".into()]));
        }

        let request = ApiRequest::post("/auth/password/verify-otp")
            .form(vec![("otp".to_string(), otp.to_string())])
            .anonymous();

        decode_message(self.gateway.send(request).await?)
    }

    async fn reset_password(
        &self,
        req: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        validate_request(req)?;

        let request = ApiRequest::post("/auth/password/reset")
            .form(req.form_fields())
            .anonymous();

        decode_message(self.gateway.send(request).await?)
    }

    async fn change_password(
        &self,
        req: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        validate_request(req)?;

        let request = ApiRequest::post("/auth/password/change").form(req.form_fields());

        decode_message(self.gateway.send(request).await?)
    }
}
