use crate::{
    abstract_trait::{gateway::HttpGatewayTrait, navigator::DynNavigator},
    gateway::{ApiRequest, RequestBody, SessionContext},
    guard::LOGIN_PATH,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, multipart};
use serde_json::Value;
use shared::{
    config::Config,
    domain::responses::RefreshResponse,
    errors::ClientError,
    utils::{Method, Metrics, Status},
};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

pub const REFRESH_PATH: &str = "/auth/token/refresh-token";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// reqwest-backed gateway. Attaches the bearer token, refreshes it once on a
/// 401 and ends the session when the backend keeps refusing.
#[derive(Debug)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
    session: Arc<SessionContext>,
    navigator: DynNavigator,
    metrics: Arc<Mutex<Metrics>>,
    refresh_lock: Mutex<()>,
}

impl HttpGateway {
    pub fn new(
        config: &Config,
        session: Arc<SessionContext>,
        navigator: DynNavigator,
        metrics: Arc<Mutex<Metrics>>,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            session,
            navigator,
            metrics,
            refresh_lock: Mutex::new(()),
        })
    }

    fn builder(&self, request: &ApiRequest, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Patch => self.client.patch(&url),
            Method::Delete => self.client.delete(&url),
        }
        .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(body) => builder.json(body),
            RequestBody::Form(fields) => builder.form(fields),
            RequestBody::Multipart(parts) => {
                let form = parts
                    .iter()
                    .fold(multipart::Form::new(), |form, (name, value)| {
                        form.text(name.clone(), value.clone())
                    });
                builder.multipart(form)
            }
        }
    }

    /// A single round-trip, no retry logic.
    async fn dispatch(&self, request: &ApiRequest, token: Option<&str>) -> Result<Value, ClientError> {
        let start = Instant::now();
        let result = self.builder(request, token).send().await;

        let outcome = match result {
            Ok(response) => {
                let status = response.status();
                match response.bytes().await {
                    Ok(body) if status.is_success() => {
                        if body.is_empty() {
                            Ok(Value::Null)
                        } else {
                            serde_json::from_slice(&body).map_err(ClientError::from)
                        }
                    }
                    Ok(body) => Err(ClientError::from_status(status.as_u16(), &body)),
                    Err(e) => Err(ClientError::Network(e.to_string())),
                }
            }
            Err(e) if e.is_timeout() => Err(ClientError::Network("Request timed out".into())),
            Err(e) => Err(ClientError::Network(e.to_string())),
        };

        let elapsed = start.elapsed().as_secs_f64();
        let status = if outcome.is_ok() {
            Status::Success
        } else {
            Status::Error
        };
        self.metrics.lock().await.record(request.method, status, elapsed);

        match &outcome {
            Ok(_) => debug!("{:?} {} ok in {elapsed:.3}s", request.method, request.path),
            Err(e) => debug!("{:?} {} failed: {e}", request.method, request.path),
        }

        outcome
    }

    /// Exchanges the refresh token for a new access token. Callers that were
    /// waiting while another request refreshed reuse its result.
    async fn refresh(&self, stale: Option<&str>) -> Result<String, ClientError> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(current) = self.session.access_token().await?
            && Some(current.as_str()) != stale
        {
            debug!("Access token already refreshed, reusing it");
            return Ok(current);
        }

        let Some(refresh_token) = self.session.refresh_token().await? else {
            return Err(ClientError::SessionExpired);
        };

        info!("Refreshing access token");
        self.metrics.lock().await.refresh_counter.inc();

        let request = ApiRequest::post(REFRESH_PATH)
            .query("refresh_token", refresh_token)
            .anonymous();
        let body = self.dispatch(&request, None).await?;
        let refreshed: RefreshResponse = serde_json::from_value(body)?;

        self.session
            .rotate_access_token(&refreshed.access_token)
            .await?;

        Ok(refreshed.access_token)
    }

    async fn force_logout(&self, reason: &str) {
        warn!("Ending session: {reason}");
        self.metrics.lock().await.forced_logout_counter.inc();

        if let Err(e) = self.session.end_session().await {
            error!("Failed to clear stored session: {e}");
        }

        self.navigator.replace(LOGIN_PATH);
    }
}

#[async_trait]
impl HttpGatewayTrait for HttpGateway {
    async fn send(&self, request: ApiRequest) -> Result<Value, ClientError> {
        if request.anonymous {
            return self.dispatch(&request, None).await;
        }

        let token = self.session.access_token().await?;

        match self.dispatch(&request, token.as_deref()).await {
            Err(ClientError::Unauthorized(message)) => {
                debug!("401 on {}: {message}", request.path);

                let fresh = match self.refresh(token.as_deref()).await {
                    Ok(fresh) => fresh,
                    Err(e) => {
                        self.force_logout(&format!("token refresh failed: {e}"))
                            .await;
                        return Err(ClientError::SessionExpired);
                    }
                };

                let retried = self.dispatch(&request, Some(&fresh)).await;
                if let Err(e) = &retried
                    && matches!(e, ClientError::Unauthorized(_) | ClientError::Forbidden(_))
                {
                    self.force_logout(&format!("{} rejected after refresh", request.path))
                        .await;
                }
                retried
            }
            Err(e @ ClientError::Forbidden(_)) => {
                self.force_logout(&format!("{} forbidden", request.path)).await;
                Err(e)
            }
            other => other,
        }
    }
}
