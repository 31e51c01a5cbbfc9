pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Listing, ListingDraft};
pub use repository::{ListingReadRepository, ListingWriteRepository};
pub use value_objects::{ListingId, ListingSlug, SlugScope};
