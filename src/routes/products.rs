use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{CreateProductRequest, Product},
    queries::product_queries,
    utils::extractors::AppJson,
};

pub async fn get_all_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_queries::get_all(&state.db).await?;

    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    // Route only accepts positive ids
    if id < 1 {
        return Err(AppError::NotFound(format!(
            "Produto com id {} não encontrado",
            id
        )));
    }

    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Produto com id {} não encontrado", id)))?;

    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProductRequest>,
) -> Result<impl IntoResponse> {
    let product = product_queries::create(&state.db, payload).await?;

    let location = format!("/Produtos/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<Product>,
) -> Result<Json<Product>> {
    if payload.id != id {
        return Err(AppError::BadRequest(
            "O id do corpo não corresponde ao id da rota".to_string(),
        ));
    }

    let product = product_queries::update(&state.db, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Produto com id {} não encontrado", id)))?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let product = product_queries::delete(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Produto com id {} não encontrado", id)))?;

    Ok(Json(product))
}
