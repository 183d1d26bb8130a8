use shared::{
    abstract_trait::DynTokenStorage,
    cache::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SELECTED_SCHOOL_KEY},
    domain::responses::UserProfile,
    errors::ClientError,
    model::Role,
};
use tokio::sync::watch;
use tracing::{debug, info};

/// Snapshot of the signed-in session as observers see it.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub is_authenticated: bool,
    pub current_user: Option<UserProfile>,
    pub role: Option<Role>,
    pub loading: bool,
    pub auth_loading: bool,
    pub load_user_failed: bool,
    pub error: Option<String>,
}

impl Default for SessionState {
    /// Nothing is known until the persisted session has been checked.
    fn default() -> Self {
        Self {
            access_token: None,
            refresh_token: None,
            is_authenticated: false,
            current_user: None,
            role: None,
            loading: false,
            auth_loading: true,
            load_user_failed: false,
            error: None,
        }
    }
}

impl SessionState {
    fn anonymous() -> Self {
        Self {
            auth_loading: false,
            ..Default::default()
        }
    }
}

/// Sole owner of the persisted client state and the published session.
///
/// `is_authenticated` is derived from `access_token` on every write, so no
/// observer can ever see one without the other.
#[derive(Debug)]
pub struct SessionContext {
    storage: DynTokenStorage,
    state: watch::Sender<SessionState>,
    default_school: String,
}

impl SessionContext {
    pub fn new(storage: DynTokenStorage, default_school: impl Into<String>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            storage,
            state,
            default_school: default_school.into(),
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn role(&self) -> Option<Role> {
        self.state.borrow().role
    }

    fn update(&self, f: impl FnOnce(&mut SessionState)) {
        self.state.send_modify(|state| {
            f(state);
            state.is_authenticated = state.access_token.is_some();
        });
    }

    pub async fn access_token(&self) -> Result<Option<String>, ClientError> {
        Ok(self.storage.get(ACCESS_TOKEN_KEY).await?)
    }

    pub async fn refresh_token(&self) -> Result<Option<String>, ClientError> {
        Ok(self.storage.get(REFRESH_TOKEN_KEY).await?)
    }

    pub async fn set_tokens(
        &self,
        access_token: &str,
        refresh_token: &str,
        role: Option<Role>,
    ) -> Result<(), ClientError> {
        self.storage.set(ACCESS_TOKEN_KEY, access_token).await?;
        self.storage.set(REFRESH_TOKEN_KEY, refresh_token).await?;

        self.update(|state| {
            state.access_token = Some(access_token.to_string());
            state.refresh_token = Some(refresh_token.to_string());
            state.role = role.or(state.role);
            state.loading = false;
            state.auth_loading = false;
            state.error = None;
            state.load_user_failed = false;
        });

        info!("Session tokens stored");
        Ok(())
    }

    /// Swaps in a refreshed access token, keeping the refresh token.
    pub async fn rotate_access_token(&self, access_token: &str) -> Result<(), ClientError> {
        self.storage.set(ACCESS_TOKEN_KEY, access_token).await?;
        self.update(|state| state.access_token = Some(access_token.to_string()));
        debug!("Access token rotated");
        Ok(())
    }

    pub fn begin_request(&self) {
        self.update(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    /// Marks the start of restoring a persisted session.
    pub async fn begin_auth(&self) -> Result<Option<String>, ClientError> {
        let access_token = self.access_token().await?;
        let refresh_token = self.refresh_token().await?;

        self.update(|state| {
            state.auth_loading = true;
            state.access_token = access_token.clone();
            state.refresh_token = refresh_token;
        });

        Ok(access_token)
    }

    pub fn authenticate(&self, user: UserProfile) {
        self.update(|state| {
            state.role = Some(user.role());
            state.current_user = Some(user);
            state.loading = false;
            state.auth_loading = false;
            state.load_user_failed = false;
            state.error = None;
        });
    }

    pub fn finish_request(&self) {
        self.update(|state| state.loading = false);
    }

    /// Records a failed session operation without touching the tokens.
    pub fn fail(&self, message: impl Into<String>) {
        let message = message.into();
        self.update(|state| {
            state.loading = false;
            state.error = Some(message);
        });
    }

    /// A sign-in attempt was refused. Earlier tokens are dropped so the
    /// state never reports a session the backend has just declined.
    pub async fn reject_login(&self, message: impl Into<String>) -> Result<(), ClientError> {
        let message = message.into();
        self.update(|state| {
            state.access_token = None;
            state.refresh_token = None;
            state.current_user = None;
            state.role = None;
            state.loading = false;
            state.error = Some(message);
        });

        self.storage.remove(ACCESS_TOKEN_KEY).await?;
        self.storage.remove(REFRESH_TOKEN_KEY).await?;
        Ok(())
    }

    /// Restoring the session failed: the caller should not retry. The
    /// terminal state is published even when storage cannot be cleared.
    pub async fn fail_auth(&self, message: Option<String>) -> Result<(), ClientError> {
        self.update(|state| {
            *state = SessionState {
                load_user_failed: true,
                error: message,
                ..SessionState::anonymous()
            };
        });

        self.storage.remove(ACCESS_TOKEN_KEY).await?;
        self.storage.remove(REFRESH_TOKEN_KEY).await?;
        Ok(())
    }

    /// Wipes every persisted key and resets to anonymous.
    pub async fn end_session(&self) -> Result<(), ClientError> {
        let cleared = self.storage.clear().await;

        self.update(|state| *state = SessionState::anonymous());

        cleared?;
        info!("Session ended");
        Ok(())
    }

    pub async fn selected_school(&self) -> Result<String, ClientError> {
        Ok(self
            .storage
            .get(SELECTED_SCHOOL_KEY)
            .await?
            .unwrap_or_else(|| self.default_school.clone()))
    }

    pub async fn set_selected_school(&self, school: &str) -> Result<(), ClientError> {
        self.storage.set(SELECTED_SCHOOL_KEY, school).await?;
        Ok(())
    }
}
