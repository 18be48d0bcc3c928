use aide::{
    axum::{
        routing::{get_with, put_with},
        ApiRouter, IntoApiResponse,
    },
    transform::TransformOperation,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder_core::{FilterOptions, NewRecipe};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::{
    errors::{ErrorBody, RestError, RestResult},
    model::recipe::{CreateRecipeDto, FavoriteDto, FilterOptionsDto, RecipeDto},
    state::AppState,
};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RecipeIdParam {
    /// Recipe ID
    pub id: i64,
}

pub fn recipe_routes() -> ApiRouter<AppState> {
    ApiRouter::new()
        .api_route(
            "/recipes",
            get_with(list_recipes, list_recipes_docs).post_with(create_recipe, create_recipe_docs),
        )
        .api_route(
            "/recipes/:id",
            get_with(get_recipe, get_recipe_docs).delete_with(delete_recipe, delete_recipe_docs),
        )
        .api_route(
            "/recipes/:id/favorite",
            put_with(set_favorite, set_favorite_docs),
        )
        .api_route(
            "/filters/options",
            get_with(filter_options, filter_options_docs),
        )
}

async fn list_recipes(State(state): State<AppState>) -> impl IntoApiResponse {
    let result = state
        .conn()
        .and_then(|conn| larder_core::list_recipes(&conn).map_err(RestError::from));

    match result {
        Ok(recipes) => {
            let dtos: Vec<RecipeDto> = recipes.into_iter().map(RecipeDto::from).collect();
            (StatusCode::OK, Json(dtos)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

fn list_recipes_docs(op: TransformOperation) -> TransformOperation {
    op.description("List all recipe cards")
        .tag("Recipes")
        .response::<200, Json<Vec<RecipeDto>>>()
}

async fn create_recipe(
    State(state): State<AppState>,
    Json(request): Json<CreateRecipeDto>,
) -> impl IntoApiResponse {
    match insert_recipe(&state, request.into()) {
        Ok(recipe) => (StatusCode::CREATED, Json(recipe)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn insert_recipe(state: &AppState, recipe: NewRecipe) -> RestResult<RecipeDto> {
    if recipe.name.trim().is_empty() {
        return Err(RestError::BadRequest("Recipe name cannot be empty".to_string()));
    }

    let conn = state.conn()?;
    let created = larder_core::create_recipe(&conn, &recipe)?;
    info!(id = created.id, "Created recipe");

    Ok(created.into())
}

fn create_recipe_docs(op: TransformOperation) -> TransformOperation {
    op.description("Create a recipe")
        .tag("Recipes")
        .response::<201, Json<RecipeDto>>()
        .response_with::<400, Json<ErrorBody>, _>(|res| res.description("Empty name"))
}

async fn get_recipe(
    State(state): State<AppState>,
    Path(RecipeIdParam { id }): Path<RecipeIdParam>,
) -> impl IntoApiResponse {
    match find_recipe(&state, id) {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn find_recipe(state: &AppState, id: i64) -> RestResult<RecipeDto> {
    let conn = state.conn()?;
    larder_core::get_recipe_by_id(&conn, id)?
        .map(RecipeDto::from)
        .ok_or_else(|| larder_core::Error::RecipeNotFound(id).into())
}

fn get_recipe_docs(op: TransformOperation) -> TransformOperation {
    op.description("Get a recipe card by id")
        .tag("Recipes")
        .response::<200, Json<RecipeDto>>()
        .response_with::<404, Json<ErrorBody>, _>(|res| res.description("Recipe not found"))
}

async fn set_favorite(
    State(state): State<AppState>,
    Path(RecipeIdParam { id }): Path<RecipeIdParam>,
    Json(request): Json<FavoriteDto>,
) -> impl IntoApiResponse {
    let result = update_favorite(&state, id, request.favorite);

    match result {
        Ok(recipe) => (StatusCode::OK, Json(recipe)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn update_favorite(state: &AppState, id: i64, favorite: bool) -> RestResult<RecipeDto> {
    let conn = state.conn()?;
    if !larder_core::set_favorite(&conn, id, favorite)? {
        return Err(larder_core::Error::RecipeNotFound(id).into());
    }

    larder_core::get_recipe_by_id(&conn, id)?
        .map(RecipeDto::from)
        .ok_or_else(|| larder_core::Error::RecipeNotFound(id).into())
}

fn set_favorite_docs(op: TransformOperation) -> TransformOperation {
    op.description("Mark or unmark a recipe as favorite")
        .tag("Recipes")
        .response::<200, Json<RecipeDto>>()
        .response_with::<404, Json<ErrorBody>, _>(|res| res.description("Recipe not found"))
}

async fn delete_recipe(
    State(state): State<AppState>,
    Path(RecipeIdParam { id }): Path<RecipeIdParam>,
) -> impl IntoApiResponse {
    let result = state.conn().and_then(|conn| {
        if larder_core::delete_recipe(&conn, id)? {
            Ok(())
        } else {
            Err(larder_core::Error::RecipeNotFound(id).into())
        }
    });

    match result {
        Ok(()) => {
            info!(id, "Deleted recipe");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => e.into_response(),
    }
}

fn delete_recipe_docs(op: TransformOperation) -> TransformOperation {
    op.description("Delete a recipe")
        .tag("Recipes")
        .response::<204, ()>()
        .response_with::<404, Json<ErrorBody>, _>(|res| res.description("Recipe not found"))
}

async fn filter_options(State(state): State<AppState>) -> impl IntoApiResponse {
    let result = state
        .conn()
        .and_then(|conn| larder_core::list_groups(&conn).map_err(RestError::from));

    match result {
        Ok(groups) => {
            let options: FilterOptionsDto = FilterOptions::new(&groups).into();
            (StatusCode::OK, Json(options)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

fn filter_options_docs(op: TransformOperation) -> TransformOperation {
    op.description("Option tables for the filter panel, including groups")
        .tag("Filters")
        .response::<200, Json<FilterOptionsDto>>()
}
