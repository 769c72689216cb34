// src/handlers/product.rs
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::dtos::product::{CreateProductRequest, ProductResponse, UpdateProductRequest, MISSING_FIELDS};
use crate::dtos::response::{ApiResponse, MessageResponse};
use crate::error::AppError;
use crate::state::AppState;

pub const NOT_FOUND: &str = "Product not found";
pub const DELETED: &str = "Product deleted successfully";

/// Identifiers that are not UUIDs cannot name a stored product.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(NOT_FOUND))
}

// GET /api/products - List all products
#[instrument(skip(state))]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ProductResponse>>>, AppError> {
    match state.store.find_all().await {
        Ok(products) => {
            let response = products.into_iter().map(ProductResponse::from).collect();
            Ok(Json(ApiResponse::ok(response)))
        }
        Err(e) => {
            error!(error = %e, "Failed to fetch products");
            Err(e.into())
        }
    }
}

// GET /api/products/:id - Get single product
#[instrument(skip(state))]
pub async fn get_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ProductResponse>>, AppError> {
    let id = parse_id(&id)?;
    let product = state
        .store
        .find_by_id(id)
        .await
        .map_err(|e| {
            error!(error = %e, %id, "Error fetching product");
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    Ok(Json(ApiResponse::ok(ProductResponse::from(product))))
}

// POST /api/products - Create new product
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponse>>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        info!(%rejection, "Rejected create payload");
        AppError::validation(MISSING_FIELDS)
    })?;
    let new_product = payload.validate()?;

    let product = state.store.insert(new_product).await.map_err(|e| {
        error!(error = %e, "Error creating product");
        AppError::from(e)
    })?;
    info!(id = %product.id, "Product created");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(ProductResponse::from(product)))))
}

// PUT /api/products/:id - Update product
#[instrument(skip(state, payload))]
pub async fn update_product(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ProductResponse>>, AppError> {
    let id = parse_id(&id)?;
    let Json(payload) = payload.map_err(|rejection| AppError::validation(rejection.body_text()))?;
    let changes = payload.validate()?;

    let product = state
        .store
        .update(id, changes)
        .await
        .map_err(|e| {
            error!(error = %e, %id, "Error updating product");
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))?;

    Ok(Json(ApiResponse::ok(ProductResponse::from(product))))
}

// DELETE /api/products/:id - Delete product
//
// Idempotent: a well-formed id answers 200 whether or not it matched. Every
// failure, a malformed id included, is a 500 "Product not found".
#[instrument(skip(state))]
pub async fn delete_product(
    Path(raw_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = Uuid::parse_str(&raw_id).map_err(|e| {
        error!(error = %e, id = %raw_id, "Error deleting product");
        AppError::internal(NOT_FOUND)
    })?;
    let removed = state.store.delete(id).await.map_err(|e| {
        error!(error = %e, %id, "Error deleting product");
        AppError::from(e).with_message(NOT_FOUND)
    })?;

    if removed {
        info!(%id, "Product deleted");
    }

    Ok(Json(MessageResponse::ok(DELETED)))
}
