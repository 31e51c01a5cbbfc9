// src/domain/listing/services/allocator.rs
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::errors::DomainError;
use crate::domain::listing::entity::{Listing, ListingDraft};
use crate::domain::listing::repository::ListingWriteRepository;
use crate::domain::listing::services::error::{AllocationError, AllocationResult};
use crate::domain::listing::services::normalizer::SlugNormalizer;
use crate::domain::listing::services::resolver::{CandidateSearch, SlugResolver};

/// Assigns a scoped unique slug to listings at the pre-persist boundary.
///
/// Existence checks only narrow the search. Uniqueness itself comes from the
/// store's `(scope, slug)` constraint: a commit rejected with
/// `DomainError::SlugTaken` resumes the candidate search past the lost slug
/// and commits again, within the resolver's attempt bound.
pub struct SlugAllocator {
    normalizer: SlugNormalizer,
    resolver: SlugResolver,
    write_repo: Arc<dyn ListingWriteRepository>,
}

impl SlugAllocator {
    pub fn new(
        normalizer: SlugNormalizer,
        resolver: SlugResolver,
        write_repo: Arc<dyn ListingWriteRepository>,
    ) -> Self {
        Self {
            normalizer,
            resolver,
            write_repo,
        }
    }

    pub fn normalizer(&self) -> &SlugNormalizer {
        &self.normalizer
    }

    /// Fill in the draft's slug if it is blank. A non-blank slug is never touched.
    pub async fn allocate(&self, mut draft: ListingDraft) -> AllocationResult<ListingDraft> {
        if draft.has_slug() {
            return Ok(draft);
        }

        let base = self.normalizer.normalize(&draft.display_name, &draft.scope)?;
        let slug = self.resolver.resolve(&base, &draft.scope, draft.id).await?;
        debug!(scope = %draft.scope, slug = %slug, "allocated slug");
        draft.set_slug(slug);
        Ok(draft)
    }

    /// Allocate (when needed) and commit the draft, retrying on slug conflicts.
    ///
    /// A slug the caller supplied is committed as-is; if the store reports it
    /// taken the error is surfaced rather than renamed.
    pub async fn save(&self, draft: ListingDraft) -> AllocationResult<Listing> {
        if draft.has_slug() {
            return self.commit_supplied(&draft).await;
        }

        let base = self.normalizer.normalize(&draft.display_name, &draft.scope)?;
        let search = self.resolver.search(base);
        self.commit_with_retry(draft, search).await
    }

    async fn commit_supplied(&self, draft: &ListingDraft) -> AllocationResult<Listing> {
        match self.write_repo.commit(draft).await {
            Ok(listing) => Ok(listing),
            Err(DomainError::SlugTaken(_)) => Err(AllocationError::UniquenessConflict {
                scope: draft.scope.name().to_string(),
                slug: draft.slug.clone().unwrap_or_default(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    async fn commit_with_retry(
        &self,
        mut draft: ListingDraft,
        mut search: CandidateSearch,
    ) -> AllocationResult<Listing> {
        loop {
            let slug = self
                .resolver
                .next_free(&mut search, &draft.scope, draft.id)
                .await?;
            draft.set_slug(slug);

            match self.write_repo.commit(&draft).await {
                Ok(listing) => {
                    debug!(
                        scope = %listing.scope,
                        id = %listing.id,
                        slug = %listing.slug,
                        attempts = search.attempts(),
                        "committed listing with allocated slug"
                    );
                    return Ok(listing);
                }
                Err(DomainError::SlugTaken(_)) => {
                    warn!(
                        scope = %draft.scope,
                        slug = draft.slug.as_deref().unwrap_or_default(),
                        attempts = search.attempts(),
                        "slug taken at commit, resuming search"
                    );
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
