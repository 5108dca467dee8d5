// src/handlers/product.rs
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::dtos::product::{
    CreateProductRequest, ProductListResponse, ProductQuery, ProductResponse,
    UpdateProductRequest,
};
use crate::error::AppError;
use crate::models::product::Product;
use crate::state::AppState;
use tracing::{error, instrument};

const PRODUCT_COLUMNS: &str = "id, name, price, description, created_at";

/// Name filter shared by the count and fetch queries. Both queries must bind
/// the same search parameter at $1 so the total can never diverge from the
/// page contents.
const NAME_FILTER: &str = "($1::TEXT IS NULL OR name ILIKE '%' || $1 || '%')";

fn count_sql() -> String {
    format!("SELECT COUNT(*) FROM products WHERE {NAME_FILTER}")
}

fn fetch_sql() -> String {
    format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE {NAME_FILTER} \
         ORDER BY created_at DESC LIMIT $2 OFFSET $3"
    )
}

fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::invalid_id(id))
}

// GET /products - List products with optional name filter and pagination
#[instrument(skip(state))]
pub async fn get_products(
    Query(query): Query<ProductQuery>,
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, AppError> {
    let total = sqlx::query_scalar::<_, i64>(&count_sql())
        .bind(query.search.as_deref())
        .fetch_one(&state.db_pool)
        .await?;

    let products = sqlx::query_as::<_, Product>(&fetch_sql())
        .bind(query.search.as_deref())
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&state.db_pool)
        .await
        .map_err(|e| {
            error!(?e, "Failed to fetch products");
            e
        })?;

    Ok(Json(ProductListResponse {
        products: products.into_iter().map(ProductResponse::from).collect(),
        total,
    }))
}

// GET /products/:id - Get single product
#[instrument(skip(state), fields(id))]
pub async fn get_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = parse_id(&id)?;

    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("Product with ID {id} not found")))?;

    Ok(Json(ProductResponse::from(product)))
}

// POST /products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    payload.validate()?;

    let product = sqlx::query_as::<_, Product>(&format!(
        "INSERT INTO products (name, price, description) \
         VALUES ($1, $2, $3) RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(&payload.name)
    .bind(payload.price)
    .bind(&payload.description)
    .fetch_one(&state.db_pool)
    .await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

// PATCH /products/:id - Partially update product
#[instrument(skip(state, payload), fields(id))]
pub async fn update_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, AppError> {
    let id = parse_id(&id)?;
    payload.validate()?;

    let product = sqlx::query_as::<_, Product>(&format!(
        "UPDATE products SET \
         name = COALESCE($1, name), \
         price = COALESCE($2, price), \
         description = COALESCE($3, description) \
         WHERE id = $4 RETURNING {PRODUCT_COLUMNS}"
    ))
    .bind(payload.name)
    .bind(payload.price)
    .bind(payload.description)
    .bind(id)
    .fetch_optional(&state.db_pool)
    .await?
    .ok_or_else(|| AppError::not_found(format!("Product with ID {id} not found")))?;

    Ok(Json(ProductResponse::from(product)))
}

// DELETE /products/:id - Delete product
#[instrument(skip(state), fields(id))]
pub async fn delete_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;

    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found(format!("Product with ID {id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_and_fetch_share_the_same_filter() {
        assert!(count_sql().contains(NAME_FILTER));
        assert!(fetch_sql().contains(NAME_FILTER));
    }

    #[test]
    fn fetch_is_bounded_and_count_is_not() {
        assert!(fetch_sql().contains("LIMIT $2 OFFSET $3"));
        assert!(!count_sql().contains("LIMIT"));
    }

    #[test]
    fn rejects_malformed_identifier() {
        assert!(parse_id("abc").is_err());
        assert!(parse_id("123").is_err());
    }

    #[test]
    fn accepts_well_formed_identifier() {
        assert!(parse_id("7f8d3f54-3c3f-4a08-9e1b-1fd4f03b2e8a").is_ok());
    }
}
