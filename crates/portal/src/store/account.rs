use crate::{
    abstract_trait::account::{DynAccountService, DynSchoolService},
    store::Resource,
};
use shared::{
    domain::{
        requests::{FindAllSchools, FindAllTransactions},
        responses::{SchoolList, TransactionList},
    },
    errors::ClientError,
};
use tokio::sync::watch;
use tracing::error;

/// Accounting tab: transactions of one student or of the whole school.
pub struct AccountStore {
    accounts: DynAccountService,
    state: watch::Sender<Resource<TransactionList>>,
}

impl AccountStore {
    pub fn new(accounts: DynAccountService) -> Self {
        let (state, _) = watch::channel(Resource::default());
        Self { accounts, state }
    }

    pub fn snapshot(&self) -> Resource<TransactionList> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Resource<TransactionList>> {
        self.state.subscribe()
    }

    pub async fn fetch_transactions(
        &self,
        filter: &FindAllTransactions,
    ) -> Result<TransactionList, ClientError> {
        self.state.send_modify(Resource::start);

        match self.accounts.find_transactions(filter).await {
            Ok(list) => {
                self.state.send_modify(|s| s.succeed(list.clone()));
                Ok(list)
            }
            Err(e) => {
                error!("Failed to fetch transactions: {e}");
                self.state.send_modify(|s| s.fail(e.user_message()));
                Err(e)
            }
        }
    }
}

/// Schools offered by the school switcher.
pub struct SchoolStore {
    schools: DynSchoolService,
    state: watch::Sender<Resource<SchoolList>>,
}

impl SchoolStore {
    pub fn new(schools: DynSchoolService) -> Self {
        let (state, _) = watch::channel(Resource::default());
        Self { schools, state }
    }

    pub fn snapshot(&self) -> Resource<SchoolList> {
        self.state.borrow().clone()
    }

    pub async fn fetch_schools(&self) -> Result<SchoolList, ClientError> {
        self.state.send_modify(Resource::start);

        match self.schools.find_schools(&FindAllSchools::default()).await {
            Ok(list) => {
                self.state.send_modify(|s| s.succeed(list.clone()));
                Ok(list)
            }
            Err(e) => {
                self.state.send_modify(|s| s.fail(e.user_message()));
                Err(e)
            }
        }
    }
}
