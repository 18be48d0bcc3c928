use aide::{
    axum::{routing::get_with, ApiRouter, IntoApiResponse},
    transform::TransformOperation,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tracing::info;

use crate::{
    errors::{ErrorBody, RestError, RestResult},
    model::recipe::{CreateGroupDto, GroupDto},
    state::AppState,
};

pub fn group_routes() -> ApiRouter<AppState> {
    ApiRouter::new().api_route(
        "/groups",
        get_with(list_groups, list_groups_docs).post_with(create_group, create_group_docs),
    )
}

async fn list_groups(State(state): State<AppState>) -> impl IntoApiResponse {
    let result = state
        .conn()
        .and_then(|conn| larder_core::list_groups(&conn).map_err(RestError::from));

    match result {
        Ok(groups) => {
            let dtos: Vec<GroupDto> = groups.into_iter().map(GroupDto::from).collect();
            (StatusCode::OK, Json(dtos)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

fn list_groups_docs(op: TransformOperation) -> TransformOperation {
    op.description("List recipe groups, ordered by name")
        .tag("Groups")
        .response::<200, Json<Vec<GroupDto>>>()
}

async fn create_group(
    State(state): State<AppState>,
    Json(request): Json<CreateGroupDto>,
) -> impl IntoApiResponse {
    match insert_group(&state, request.name.trim()) {
        Ok(group) => (StatusCode::CREATED, Json(group)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn insert_group(state: &AppState, name: &str) -> RestResult<GroupDto> {
    if name.is_empty() {
        return Err(RestError::BadRequest("Group name cannot be empty".to_string()));
    }

    let conn = state.conn()?;
    let group = larder_core::create_group(&conn, name)?;
    info!(id = group.id, "Created group");

    Ok(group.into())
}

fn create_group_docs(op: TransformOperation) -> TransformOperation {
    op.description("Create a recipe group")
        .tag("Groups")
        .response::<201, Json<GroupDto>>()
        .response_with::<400, Json<ErrorBody>, _>(|res| res.description("Empty name"))
}
