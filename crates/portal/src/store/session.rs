use crate::{
    abstract_trait::{auth::DynAuthService, navigator::DynNavigator, profile::DynProfileService},
    gateway::{SessionContext, SessionState},
    guard::{LOGIN_PATH, RouteTable},
    store::AlertStore,
};
use shared::{
    abstract_trait::DynJwtService,
    domain::{
        requests::{
            ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, RegisterRequest,
            ResetPasswordRequest,
        },
        responses::MessageResponse,
    },
    errors::ClientError,
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Sign-in, sign-out and the account flows around them.
pub struct SessionStore {
    context: Arc<SessionContext>,
    auth: DynAuthService,
    profiles: DynProfileService,
    jwt: DynJwtService,
    alerts: Arc<AlertStore>,
    navigator: DynNavigator,
    routes: RouteTable,
}

impl SessionStore {
    pub fn new(
        context: Arc<SessionContext>,
        auth: DynAuthService,
        profiles: DynProfileService,
        jwt: DynJwtService,
        alerts: Arc<AlertStore>,
        navigator: DynNavigator,
        routes: RouteTable,
    ) -> Self {
        Self {
            context,
            auth,
            profiles,
            jwt,
            alerts,
            navigator,
            routes,
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.context.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.context.subscribe()
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<SessionState, ClientError> {
        self.context.begin_request();

        let response = match self.auth.login(credentials).await {
            Ok(response) => response,
            Err(e) => {
                self.reject_login(&e).await;
                return Err(e);
            }
        };

        if let Err(e) = self
            .context
            .set_tokens(
                &response.access_token,
                &response.refresh_token,
                Some(response.role),
            )
            .await
        {
            error!("Failed to store session tokens: {e}");
            self.reject_login(&e).await;
            return Err(e);
        }

        let landing = self.routes.landing(response.role);
        info!("User {} signed in, landing on {landing}", response.id);
        self.navigator.push(landing);

        Ok(self.context.snapshot())
    }

    /// Restores the session from the stored access token. A failure is
    /// recorded in `load_user_failed`, so the caller knows not to try again.
    /// Only storage errors are returned as well.
    pub async fn load_user(&self) -> Result<SessionState, ClientError> {
        match self.restore().await {
            Ok(()) => Ok(self.context.snapshot()),
            Err(e) => {
                error!("Failed to read stored session: {e}");
                if let Err(clear) = self.context.fail_auth(Some(e.user_message())).await {
                    warn!("Failed to clear stored tokens: {clear}");
                }
                self.alerts.error(e.user_message());
                Err(e)
            }
        }
    }

    async fn restore(&self) -> Result<(), ClientError> {
        let Some(token) = self.context.begin_auth().await? else {
            debug!("No stored access token");
            return self.context.fail_auth(None).await;
        };

        if self.jwt.is_expired(&token) && self.context.refresh_token().await?.is_none() {
            warn!("Stored access token expired and no refresh token is available");
            return self
                .context
                .fail_auth(Some(ClientError::SessionExpired.user_message()))
                .await;
        }

        match self.profiles.get_profile().await {
            Ok(profile) => {
                info!("Restored session for user {}", profile.user.id);
                self.context.authenticate(profile);
                Ok(())
            }
            Err(e) => {
                error!("Failed to restore session: {e}");
                self.context.fail_auth(Some(e.user_message())).await
            }
        }
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let cleared = self.context.end_session().await;
        self.navigator.replace(LOGIN_PATH);
        cleared
    }

    pub async fn register(&self, form: &RegisterRequest) -> Result<MessageResponse, ClientError> {
        let response = self
            .run(self.auth.register(form), "Registration successful, please verify your email")
            .await?;
        self.navigator.push(LOGIN_PATH);
        Ok(response)
    }

    pub async fn verify_email(&self, token: &str) -> Result<MessageResponse, ClientError> {
        let response = self
            .run(self.auth.verify_email(token), "Email verified, you can now log in")
            .await?;
        self.navigator.push(LOGIN_PATH);
        Ok(response)
    }

    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ClientError> {
        let form = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.run(
            self.auth.forgot_password(&form),
            "A one-time code has been sent to your email",
        )
        .await
    }

    pub async fn verify_otp(&self, otp: &str) -> Result<MessageResponse, ClientError> {
        self.run(self.auth.verify_otp(otp), "Code verified").await
    }

    pub async fn reset_password(
        &self,
        form: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        let response = self
            .run(self.auth.reset_password(form), "Password reset successfully")
            .await?;
        self.navigator.push(LOGIN_PATH);
        Ok(response)
    }

    pub async fn change_password(
        &self,
        form: &ChangePasswordRequest,
    ) -> Result<MessageResponse, ClientError> {
        self.run(self.auth.change_password(form), "Password changed successfully")
            .await
    }

    /// Where `/` sends a signed-in user. Falls back to the role claim of the
    /// stored token while the profile is still loading.
    pub async fn landing_route(&self) -> Result<Option<&'static str>, ClientError> {
        if !self.context.is_authenticated() {
            return Ok(None);
        }

        let role = match self.context.role() {
            Some(role) => Some(role),
            None => match self.context.access_token().await? {
                Some(token) => self.jwt.decode_claims(&token).ok().and_then(|c| c.role),
                None => None,
            },
        };

        Ok(role.map(|role| self.routes.landing(role)))
    }

    pub async fn select_school(&self, school: &str) -> Result<(), ClientError> {
        self.context.set_selected_school(school).await?;
        info!("Selected school {school}");
        Ok(())
    }

    pub async fn selected_school(&self) -> Result<String, ClientError> {
        self.context.selected_school().await
    }

    async fn reject_login(&self, e: &ClientError) {
        let message = e.user_message();
        if let Err(clear) = self.context.reject_login(message.clone()).await {
            warn!("Failed to drop stale tokens: {clear}");
        }
        self.alerts.error(message);
    }

    async fn run(
        &self,
        call: impl Future<Output = Result<MessageResponse, ClientError>>,
        fallback: &str,
    ) -> Result<MessageResponse, ClientError> {
        self.context.begin_request();

        match call.await {
            Ok(response) => {
                self.context.finish_request();
                if response.message.is_empty() {
                    self.alerts.success(fallback);
                } else {
                    self.alerts.success(response.message.clone());
                }
                Ok(response)
            }
            Err(e) => {
                self.context.fail(e.user_message());
                self.alerts.error(e.user_message());
                Err(e)
            }
        }
    }
}
