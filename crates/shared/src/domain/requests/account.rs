use crate::model::SortOrder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FindAllTransactions {
    pub offset: u32,
    pub limit: u32,
    pub user_id: Option<i64>,
    pub order: SortOrder,
}

impl Default for FindAllTransactions {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
            user_id: None,
            order: SortOrder::Desc,
        }
    }
}

impl FindAllTransactions {
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Default::default()
        }
    }

    pub fn query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("offset".to_string(), self.offset.to_string()),
            ("limit".to_string(), self.limit.to_string()),
            ("order".to_string(), self.order.as_str().to_string()),
        ];
        if let Some(user_id) = self.user_id {
            query.push(("user_id".to_string(), user_id.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FindAllSchools {
    pub offset: u32,
    pub limit: u32,
}

impl Default for FindAllSchools {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 50,
        }
    }
}

impl FindAllSchools {
    pub fn query(&self) -> Vec<(String, String)> {
        vec![
            ("offset".to_string(), self.offset.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ]
    }
}
