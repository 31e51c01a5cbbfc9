use super::ListingQueryService;
use crate::{
    application::{
        commands::listings::scope_for,
        dto::ListingDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::listing::ListingId,
};

pub struct GetListingByIdQuery {
    pub collection: String,
    pub id: i64,
}

impl ListingQueryService {
    pub async fn get_listing_by_id(
        &self,
        query: GetListingByIdQuery,
    ) -> ApplicationResult<ListingDto> {
        let scope = scope_for(&query.collection)?;
        let id = ListingId::new(query.id)?;
        self.read_repo
            .find_by_id(&scope, id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("listing not found"))
    }
}
