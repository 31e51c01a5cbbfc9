// src/application/queries/listings/get_by_slug.rs
use super::ListingQueryService;
use crate::{
    application::{
        commands::listings::scope_for,
        dto::ListingDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::listing::ListingSlug,
};

pub struct GetListingBySlugQuery {
    pub collection: String,
    pub slug: String,
}

impl ListingQueryService {
    pub async fn get_listing_by_slug(
        &self,
        query: GetListingBySlugQuery,
    ) -> ApplicationResult<ListingDto> {
        let scope = scope_for(&query.collection)?;
        // Non-canonical input can never match a stored slug.
        let slug = ListingSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("listing not found"))?;
        self.read_repo
            .find_by_slug(&scope, &slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("listing not found"))
    }
}
