use crate::{
    abstract_trait::{
        account::{AccountServiceTrait, SchoolServiceTrait},
        gateway::DynHttpGateway,
    },
    gateway::ApiRequest,
    service::decode,
};
use async_trait::async_trait;
use shared::{
    domain::{
        requests::{FindAllSchools, FindAllTransactions},
        responses::{SchoolList, TransactionList},
    },
    errors::ClientError,
};
use tracing::info;

#[derive(Clone)]
pub struct AccountService {
    gateway: DynHttpGateway,
}

impl AccountService {
    pub fn new(gateway: DynHttpGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl AccountServiceTrait for AccountService {
    async fn find_transactions(
        &self,
        req: &FindAllTransactions,
    ) -> Result<TransactionList, ClientError> {
        let body = self
            .gateway
            .send(ApiRequest::get("/account/get").queries(req.query()))
            .await?;
        let list: TransactionList = decode(body)?;

        info!("Fetched {} of {} transactions", list.transactions.len(), list.total);
        Ok(list)
    }
}

#[derive(Clone)]
pub struct SchoolService {
    gateway: DynHttpGateway,
}

impl SchoolService {
    pub fn new(gateway: DynHttpGateway) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl SchoolServiceTrait for SchoolService {
    async fn find_schools(&self, req: &FindAllSchools) -> Result<SchoolList, ClientError> {
        decode(
            self.gateway
                .send(ApiRequest::get("/school/get").queries(req.query()))
                .await?,
        )
    }
}
