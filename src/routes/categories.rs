use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{Category, CategoryWithProducts, CreateCategoryRequest},
    queries::category_queries,
    utils::extractors::AppJson,
};

const PRODUCTS_PER_CATEGORY: i64 = 5;

pub async fn get_all_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = category_queries::get_all(&state.db).await?;

    Ok(Json(categories))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Category>> {
    // Route only accepts positive ids
    if id < 1 {
        return Err(AppError::NotFound(format!(
            "Categoria com id {} não encontrada",
            id
        )));
    }

    let category = category_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Categoria com id {} não encontrada", id)))?;

    Ok(Json(category))
}

pub async fn get_categories_with_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryWithProducts>>> {
    let categories =
        category_queries::get_all_with_products(&state.db, PRODUCTS_PER_CATEGORY).await?;

    Ok(Json(categories))
}

pub async fn create_category(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCategoryRequest>,
) -> Result<impl IntoResponse> {
    let category = category_queries::create(&state.db, payload).await?;

    let location = format!("/Categorias/{}", category.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(category),
    ))
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<Category>,
) -> Result<Json<Category>> {
    if payload.id != id {
        return Err(AppError::BadRequest(
            "O id do corpo não corresponde ao id da rota".to_string(),
        ));
    }

    let category = category_queries::update(&state.db, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Categoria com id {} não encontrada", id)))?;

    Ok(Json(category))
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Category>> {
    let category = category_queries::delete(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Categoria com id {} não encontrada", id)))?;

    Ok(Json(category))
}
