// src/presentation/http/controllers/listings.rs
use crate::application::{
    commands::listings::{CreateListingCommand, UpdateListingCommand},
    dto::ListingDto,
    queries::listings::{GetListingByIdQuery, GetListingBySlugQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CreateListingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub attributes: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateListingRequest {
    pub name: Option<String>,
    /// `""` clears the slug and triggers re-allocation.
    pub slug: Option<String>,
    pub attributes: Option<Value>,
}

pub async fn create_listing(
    Extension(state): Extension<HttpState>,
    Path(collection): Path<String>,
    Json(payload): Json<CreateListingRequest>,
) -> HttpResult<(StatusCode, Json<ListingDto>)> {
    let command = CreateListingCommand {
        collection,
        name: payload.name,
        slug: payload.slug,
        attributes: payload.attributes,
    };

    state
        .services
        .listing_commands
        .create_listing(command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

pub async fn update_listing(
    Extension(state): Extension<HttpState>,
    Path((collection, id)): Path<(String, i64)>,
    Json(payload): Json<UpdateListingRequest>,
) -> HttpResult<Json<ListingDto>> {
    let command = UpdateListingCommand {
        collection,
        id,
        name: payload.name,
        slug: payload.slug,
        attributes: payload.attributes,
    };

    state
        .services
        .listing_commands
        .update_listing(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_listing_by_slug(
    Extension(state): Extension<HttpState>,
    Path((collection, slug)): Path<(String, String)>,
) -> HttpResult<Json<ListingDto>> {
    state
        .services
        .listing_queries
        .get_listing_by_slug(GetListingBySlugQuery { collection, slug })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_listing_by_id(
    Extension(state): Extension<HttpState>,
    Path((collection, id)): Path<(String, i64)>,
) -> HttpResult<Json<ListingDto>> {
    state
        .services
        .listing_queries
        .get_listing_by_id(GetListingByIdQuery { collection, id })
        .await
        .into_http()
        .map(Json)
}
