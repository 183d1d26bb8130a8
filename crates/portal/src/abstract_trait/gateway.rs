use crate::gateway::ApiRequest;
use async_trait::async_trait;
use serde_json::Value;
use shared::errors::ClientError;
use std::sync::Arc;

pub type DynHttpGateway = Arc<dyn HttpGatewayTrait + Send + Sync>;

#[async_trait]
pub trait HttpGatewayTrait {
    /// Sends the request with the session's credentials and returns the
    /// decoded JSON body (`Value::Null` for an empty one).
    async fn send(&self, request: ApiRequest) -> Result<Value, ClientError>;
}
