use async_trait::async_trait;
use shared::{
    domain::{
        requests::{FindAllSchools, FindAllTransactions},
        responses::{SchoolList, TransactionList},
    },
    errors::ClientError,
};
use std::sync::Arc;

pub type DynAccountService = Arc<dyn AccountServiceTrait + Send + Sync>;
pub type DynSchoolService = Arc<dyn SchoolServiceTrait + Send + Sync>;

#[async_trait]
pub trait AccountServiceTrait {
    async fn find_transactions(
        &self,
        req: &FindAllTransactions,
    ) -> Result<TransactionList, ClientError>;
}

#[async_trait]
pub trait SchoolServiceTrait {
    async fn find_schools(&self, req: &FindAllSchools) -> Result<SchoolList, ClientError>;
}
