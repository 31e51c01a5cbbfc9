// src/domain/listing/services/resolver.rs
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::listing::repository::ListingReadRepository;
use crate::domain::listing::services::error::{AllocationError, AllocationResult};
use crate::domain::listing::value_objects::{ListingId, ListingSlug, SlugScope};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Deterministic candidate sequence for one base: `base`, `base-2`, `base-3`, ...
///
/// Every candidate handed out counts against `max_attempts`, whether it is
/// rejected by an existence check or by the store at commit time.
#[derive(Debug, Clone)]
pub struct CandidateSearch {
    base: String,
    attempts: u32,
    max_attempts: u32,
}

impl CandidateSearch {
    pub fn new(base: impl Into<String>, max_attempts: u32) -> Self {
        Self {
            base: base.into(),
            attempts: 0,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn next_candidate(&mut self) -> Option<String> {
        if self.attempts >= self.max_attempts {
            return None;
        }
        let candidate = if self.attempts == 0 {
            self.base.clone()
        } else {
            format!("{}-{}", self.base, self.attempts + 1)
        };
        self.attempts += 1;
        Some(candidate)
    }

    pub fn exhausted(&self, scope: &SlugScope) -> AllocationError {
        AllocationError::AttemptsExceeded {
            scope: scope.name().to_string(),
            base: self.base.clone(),
            attempts: self.attempts,
        }
    }
}

/// Finds the first candidate that no other listing in the scope holds.
///
/// Each check is a point-in-time read; a returned slug was free when it was
/// checked, nothing more.
pub struct SlugResolver {
    read_repo: Arc<dyn ListingReadRepository>,
    max_attempts: u32,
}

impl SlugResolver {
    pub fn new(read_repo: Arc<dyn ListingReadRepository>, max_attempts: u32) -> Self {
        Self {
            read_repo,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn search(&self, base: impl Into<String>) -> CandidateSearch {
        CandidateSearch::new(base, self.max_attempts)
    }

    pub async fn resolve(
        &self,
        base: &str,
        scope: &SlugScope,
        exclude: Option<ListingId>,
    ) -> AllocationResult<ListingSlug> {
        let mut search = self.search(base);
        self.next_free(&mut search, scope, exclude).await
    }

    /// Continue `search` from where it left off and return the next free slug.
    pub async fn next_free(
        &self,
        search: &mut CandidateSearch,
        scope: &SlugScope,
        exclude: Option<ListingId>,
    ) -> AllocationResult<ListingSlug> {
        while let Some(candidate) = search.next_candidate() {
            if !self.read_repo.exists(scope, &candidate, exclude).await? {
                return Ok(ListingSlug::new(candidate)?);
            }
            debug!(scope = %scope, candidate = %candidate, "slug candidate taken");
        }
        warn!(
            scope = %scope,
            base = search.base(),
            attempts = search.attempts(),
            "slug attempt bound exhausted"
        );
        Err(search.exhausted(scope))
    }
}
