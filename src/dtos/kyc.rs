// src/dtos/kyc.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A KYC document as stored in the search index. Field names match the
/// indexed attribute names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycRecord {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub university: String,
    pub email: String,
    pub company_name: String,
    pub address_city: String,
}

/// One ranked match: the relevance score paired with the stored document.
#[derive(Debug, Serialize)]
pub struct KycHit {
    pub score: f64,
    pub record: Value,
}

#[derive(Debug, Serialize)]
pub struct KycSearchResponse {
    pub total: i64,
    pub hits: Vec<KycHit>,
}

#[derive(Debug, Deserialize)]
pub struct CreateIndexRequest {
    pub index: String,
}
