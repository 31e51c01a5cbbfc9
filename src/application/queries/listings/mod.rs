// src/application/queries/listings/mod.rs
mod get_by_id;
mod get_by_slug;
mod service;

pub use get_by_id::GetListingByIdQuery;
pub use get_by_slug::GetListingBySlugQuery;
pub use service::ListingQueryService;
