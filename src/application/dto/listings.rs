use crate::domain::listing::Listing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingDto {
    pub id: i64,
    pub collection: String,
    pub name: String,
    pub slug: String,
    pub attributes: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Listing> for ListingDto {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id.into(),
            collection: listing.scope.name().to_string(),
            name: listing.display_name,
            slug: listing.slug.into_inner(),
            attributes: listing.attributes,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}
