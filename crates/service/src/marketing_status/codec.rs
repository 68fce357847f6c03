//! JSON boundary for marketing statuses.

use std::collections::BTreeMap;

use super::domain::MarketingStatus;
use crate::errors::ServiceError;

/// Decode a request body. Malformed JSON, wrong types and a missing
/// `marketingStatusName` all come back as `Validation`.
pub fn decode(body: &[u8]) -> Result<MarketingStatus, ServiceError> {
    if body.is_empty() {
        return Err(ServiceError::Validation("request body is empty".into()));
    }
    serde_json::from_slice(body).map_err(|e| ServiceError::Validation(format!("invalid marketing status body: {e}")))
}

/// Key statuses by id. Serialized through serde_json the keys become the
/// decimal id strings, ascending.
pub fn mapped(statuses: Vec<MarketingStatus>) -> BTreeMap<i32, MarketingStatus> {
    statuses.into_iter().map(|s| (s.marketing_status_id, s)).collect()
}
