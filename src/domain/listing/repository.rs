use crate::domain::errors::DomainResult;
use crate::domain::listing::entity::{Listing, ListingDraft};
use crate::domain::listing::value_objects::{ListingId, ListingSlug, SlugScope};
use async_trait::async_trait;

#[async_trait]
pub trait ListingWriteRepository: Send + Sync {
    /// Insert (no id) or update (id set) the draft in a single atomic write.
    ///
    /// Implementations must enforce `(scope, slug)` uniqueness and report a
    /// violation as `DomainError::SlugTaken`, distinct from other failures.
    async fn commit(&self, draft: &ListingDraft) -> DomainResult<Listing>;
}

#[async_trait]
pub trait ListingReadRepository: Send + Sync {
    /// Whether any listing in `scope` other than `exclude` holds `slug`.
    async fn exists(
        &self,
        scope: &SlugScope,
        slug: &str,
        exclude: Option<ListingId>,
    ) -> DomainResult<bool>;
    async fn find_by_id(&self, scope: &SlugScope, id: ListingId) -> DomainResult<Option<Listing>>;
    async fn find_by_slug(
        &self,
        scope: &SlugScope,
        slug: &ListingSlug,
    ) -> DomainResult<Option<Listing>>;
}
