use crate::model::TransactionMethod;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionResponse {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub method: TransactionMethod,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date_charged: Option<String>,
    #[serde(default)]
    pub refund: Option<bool>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub user: Option<TransactionUser>,
}

impl TransactionResponse {
    /// Amount actually charged; refunded transactions count as zero.
    pub fn net_amount(&self) -> f64 {
        if self.refund == Some(true) {
            return 0.0;
        }
        self.amount.unwrap_or_default() - self.discount.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionList {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub transactions: Vec<TransactionResponse>,
}

impl TransactionList {
    pub fn net_total(&self) -> f64 {
        self.transactions.iter().map(TransactionResponse::net_amount).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchoolResponse {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub zipcode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SchoolList {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub school: Vec<SchoolResponse>,
}
