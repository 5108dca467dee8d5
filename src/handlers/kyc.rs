// src/handlers/kyc.rs
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use elasticsearch::{
    indices::IndicesCreateParts, BulkOperation, BulkParts, IndexParts, SearchParts,
};
use serde_json::{json, Value};

use crate::dtos::kyc::{CreateIndexRequest, KycHit, KycRecord, KycSearchResponse};
use crate::error::AppError;
use crate::seed;
use crate::state::AppState;
use tracing::{info, instrument};

/// Attributes queried by the lookup endpoint. The record id is deliberately
/// not searchable.
const SEARCH_FIELDS: [&str; 6] = [
    "firstName",
    "lastName",
    "university",
    "email",
    "companyName",
    "addressCity",
];

/// Multi-field match with OR semantics: a document is scored by its single
/// best-matching field, with typo tolerance left to the engine.
fn search_body(term: &str) -> Value {
    json!({
        "query": {
            "multi_match": {
                "query": term,
                "type": "best_fields",
                "operator": "or",
                "fields": SEARCH_FIELDS,
                "fuzziness": "AUTO"
            }
        }
    })
}

/// Maps the raw engine response into the ranked hit list, preserving the
/// engine's ordering and scores.
fn parse_search_response(body: &Value) -> KycSearchResponse {
    let total = body["hits"]["total"]["value"].as_i64().unwrap_or(0);

    let hits = body["hits"]["hits"]
        .as_array()
        .map(|hits| {
            hits.iter()
                .map(|hit| KycHit {
                    score: hit["_score"].as_f64().unwrap_or(0.0),
                    record: hit["_source"].clone(),
                })
                .collect()
        })
        .unwrap_or_default();

    KycSearchResponse { total, hits }
}

// GET /kyc/:q - Fuzzy lookup across the indexed KYC attributes
#[instrument(skip(state))]
pub async fn search_kyc(
    Path(term): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<KycSearchResponse>, AppError> {
    let response = state
        .search_client
        .search(SearchParts::Index(&[state.kyc_index.as_str()]))
        .body(search_body(&term))
        .send()
        .await?
        .error_for_status_code()?;

    let body = response.json::<Value>().await?;

    Ok(Json(parse_search_response(&body)))
}

/// One index action per record, keyed by the record id.
fn bulk_ops(records: &[KycRecord]) -> Vec<BulkOperation<Value>> {
    records
        .iter()
        .map(|record| {
            BulkOperation::index(json!(record))
                .id(record.id.to_string())
                .into()
        })
        .collect()
}

// GET /kyc/init - Bulk-load the seed dataset into the index
#[instrument(skip(state))]
pub async fn init_kyc(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let records = seed::kyc_records();
    let ops = bulk_ops(&records);

    let response = state
        .search_client
        .bulk(BulkParts::Index(&state.kyc_index))
        .body(ops)
        .send()
        .await?
        .error_for_status_code()?;

    // The engine reports success/failure per document; hand that summary
    // back to the caller as-is.
    let summary = response.json::<Value>().await?;
    info!(records = records.len(), "Bulk-indexed KYC seed dataset");

    Ok(Json(summary))
}

// POST /kyc - Index a single KYC record
#[instrument(skip(state, payload))]
pub async fn create_kyc(
    State(state): State<AppState>,
    Json(payload): Json<KycRecord>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id = payload.id.to_string();

    let response = state
        .search_client
        .index(IndexParts::IndexId(&state.kyc_index, &id))
        .body(&payload)
        .send()
        .await?
        .error_for_status_code()?;

    let body = response.json::<Value>().await?;

    Ok((StatusCode::CREATED, Json(body)))
}

// POST /kyc/index - Create a named index with default settings
#[instrument(skip(state))]
pub async fn create_kyc_index(
    State(state): State<AppState>,
    Json(payload): Json<CreateIndexRequest>,
) -> Result<Json<Value>, AppError> {
    let response = state
        .search_client
        .indices()
        .create(IndicesCreateParts::Index(&payload.index))
        .send()
        .await?
        .error_for_status_code()?;

    let body = response.json::<Value>().await?;

    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_body_targets_all_kyc_fields() {
        let body = search_body("John Doe");
        let multi_match = &body["query"]["multi_match"];

        assert_eq!(multi_match["query"], "John Doe");
        assert_eq!(multi_match["type"], "best_fields");
        assert_eq!(multi_match["operator"], "or");
        assert_eq!(multi_match["fuzziness"], "AUTO");

        let fields = multi_match["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 6);
        for field in SEARCH_FIELDS {
            assert!(fields.iter().any(|f| f.as_str() == Some(field)));
        }
    }

    #[test]
    fn parses_ranked_hits_in_engine_order() {
        let raw = json!({
            "hits": {
                "total": { "value": 2, "relation": "eq" },
                "hits": [
                    { "_score": 3.2, "_source": { "firstName": "John", "lastName": "Doe" } },
                    { "_score": 1.1, "_source": { "firstName": "Jane", "lastName": "Doe" } }
                ]
            }
        });

        let parsed = parse_search_response(&raw);
        assert_eq!(parsed.total, 2);
        assert_eq!(parsed.hits.len(), 2);
        assert!(parsed.hits[0].score > parsed.hits[1].score);
        assert_eq!(parsed.hits[0].record["firstName"], "John");
    }

    #[test]
    fn bulk_load_produces_one_action_per_seed_record() {
        let records = crate::seed::kyc_records();
        assert_eq!(bulk_ops(&records).len(), records.len());
    }

    #[test]
    fn parses_empty_response() {
        let parsed = parse_search_response(&json!({}));
        assert_eq!(parsed.total, 0);
        assert!(parsed.hits.is_empty());
    }
}
