// src/application/commands/listings/service.rs
use std::sync::Arc;

use serde_json::Value;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::listing::{ListingReadRepository, services::SlugAllocator},
};

pub struct ListingCommandService {
    pub(super) read_repo: Arc<dyn ListingReadRepository>,
    pub(super) allocator: Arc<SlugAllocator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ListingCommandService {
    pub fn new(
        read_repo: Arc<dyn ListingReadRepository>,
        allocator: Arc<SlugAllocator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            allocator,
            clock,
        }
    }

    /// Canonical form of a slug typed by the user. `None` means "allocate one".
    pub(super) fn user_slug(&self, raw: Option<String>) -> ApplicationResult<Option<String>> {
        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };
        let slug = self.allocator.normalizer().canonicalize(&raw);
        if slug.is_empty() {
            return Err(ApplicationError::validation(format!(
                "slug `{raw}` must contain at least one letter or digit"
            )));
        }
        Ok(Some(slug))
    }
}

pub(super) fn ensure_object(attributes: Value) -> ApplicationResult<Value> {
    if attributes.is_object() {
        Ok(attributes)
    } else {
        Err(ApplicationError::validation(
            "attributes must be a JSON object",
        ))
    }
}
