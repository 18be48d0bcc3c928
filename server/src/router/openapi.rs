use std::sync::Arc;

use aide::{
    axum::{
        routing::{get, get_with},
        ApiRouter, IntoApiResponse,
    },
    openapi::OpenApi,
    redoc::Redoc,
    transform::TransformOpenApi,
};
use axum::{response::IntoResponse, Extension, Json};

use crate::state::AppState;

pub fn docs_routes() -> ApiRouter<AppState> {
    aide::gen::infer_responses(true);

    let router = ApiRouter::new()
        .api_route(
            "/docs",
            get_with(
                Redoc::new("/api.json").with_title("Larder").axum_handler(),
                |op| op.description("This documentation page.").tag("Documentation"),
            ),
        )
        .route("/api.json", get(serve_docs));

    aide::gen::infer_responses(false);

    router
}

async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
    Json(api.as_ref()).into_response()
}

pub fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("Larder")
        .summary("Recipe browsing and filtering")
        .description("Recipes, groups, filter options and the saved browse state.")
}
