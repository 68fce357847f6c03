use serde::{Deserialize, Serialize};

/// A marketing status as clients see it.
///
/// `marketingStatusId` is 0 until the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingStatus {
    #[serde(default)]
    pub marketing_status_id: i32,
    pub marketing_status_name: String,
}

impl MarketingStatus {
    /// Unsaved status with a placeholder id.
    pub fn new(name: impl Into<String>) -> Self {
        Self { marketing_status_id: 0, marketing_status_name: name.into() }
    }

    pub fn is_persisted(&self) -> bool {
        self.marketing_status_id > 0
    }
}

impl From<models::marketing_status::Model> for MarketingStatus {
    fn from(m: models::marketing_status::Model) -> Self {
        Self { marketing_status_id: m.marketing_status_id, marketing_status_name: m.marketing_status_name }
    }
}
